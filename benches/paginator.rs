use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weather_archive::{window, DailyMetric, DailyRecord, DailySeries, PageSize};

fn ten_years() -> DailySeries {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    let records = (0..3653u64)
        .map(|i| {
            let mut record = DailyRecord::empty(start + Days::new(i));
            for metric in DailyMetric::ALL {
                record.set_value(metric, Some(i as f64 / 100.0));
            }
            record
        })
        .collect();
    DailySeries::try_from_records(records).unwrap()
}

fn bench_window(c: &mut Criterion) {
    let series = ten_years();
    c.bench_function("window_first_page", |b| {
        b.iter(|| window(black_box(&series), PageSize::Ten, black_box(1)))
    });
    c.bench_function("window_middle_page_50", |b| {
        b.iter(|| window(black_box(&series), PageSize::Fifty, black_box(37)))
    });
}

criterion_group!(benches, bench_window);
criterion_main!(benches);
