use chrono::NaiveDate;
use weather_archive::{FetchState, FormInputs, PageSize, WeatherDashboard};

#[tokio::main]
async fn main() {
    let dashboard = WeatherDashboard::new();
    let inputs = FormInputs {
        latitude: "40.7128".to_string(),
        longitude: "-74.0060".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
    };

    match dashboard.prepare(&inputs) {
        Ok(query) => println!("GET {}", query.url()),
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    }

    dashboard.submit(&inputs).await;
    match dashboard.fetch_state().await {
        FetchState::Success(series) => {
            if let Some((first, last)) = series.span() {
                println!("Historical weather data from {first} to {last}");
            }
            let page = dashboard.set_page_size(PageSize::Twenty).await;
            for row in &page.visible_rows {
                let cells: Vec<String> = row.cells.iter().map(|(_, cell)| cell.to_string()).collect();
                println!("{:<14} {}", row.formatted_date(), cells.join("  "));
            }
            println!("{}  pages: {:?}", page.summary(), page.navigable_pages);
        }
        FetchState::Error(e) => eprintln!("{e}"),
        other => eprintln!("Unexpected state {other:?}"),
    }
}
