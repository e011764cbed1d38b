//! The entry point for one interactive weather dashboard session.
//!
//! A [`WeatherDashboard`] ties the pieces together: form input is validated,
//! turned into an archive request, fetched through a [`Transport`], and the
//! resulting series is exposed for a chart and a paginated table.

use crate::fetch::orchestrator::{FetchOrchestrator, RequestOutcome};
use crate::fetch::state::FetchState;
use crate::fetch::transport::{ReqwestTransport, Transport};
use crate::input::error::ValidationError;
use crate::input::validator::FormInputs;
use crate::pagination::page_size::PageSize;
use crate::pagination::table_view::TableView;
use crate::pagination::window::PageWindow;
use crate::query::builder::{QueryBuilder, QueryRequest, ARCHIVE_BASE_URL};
use crate::types::series::{ChartPoint, DailySeries, SharedSeries};
use bon::Builder;
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Settings for a [`WeatherDashboard`].
///
/// # Examples
///
/// ```
/// use weather_archive::{DashboardConfig, PageSize};
///
/// let config = DashboardConfig::builder()
///     .base_url("http://localhost:8080/v1/archive")
///     .default_page_size(PageSize::Twenty)
///     .build();
/// assert_eq!(config.base_url(), "http://localhost:8080/v1/archive");
///
/// let defaults = DashboardConfig::default();
/// assert_eq!(defaults.base_url(), "https://archive-api.open-meteo.com/v1/archive");
/// assert_eq!(defaults.default_page_size(), PageSize::Ten);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct DashboardConfig {
    /// Archive endpoint, without query string.
    #[builder(into, default = ARCHIVE_BASE_URL.to_string())]
    base_url: String,
    /// Rows per table page before the user picks another size.
    #[builder(default)]
    default_page_size: PageSize,
}

impl DashboardConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_page_size(&self) -> PageSize {
        self.default_page_size
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// One dashboard session: fetch state, the last good series and the table position.
///
/// Methods take `&self`, so a view layer can keep reading state and paging the
/// table while a [`WeatherDashboard::submit`] is awaiting the archive.
///
/// # Examples
///
/// ```no_run
/// use weather_archive::{FetchState, FormInputs, WeatherDashboard};
///
/// # #[tokio::main]
/// # async fn main() {
/// let dashboard = WeatherDashboard::new();
/// dashboard.submit(&FormInputs::default()).await;
///
/// match dashboard.fetch_state().await {
///     FetchState::Success(series) => {
///         let page = dashboard.table().await;
///         println!("{} ({} days)", page.summary(), series.len());
///     }
///     FetchState::Error(e) => println!("{e}"),
///     _ => {}
/// }
/// # }
/// ```
pub struct WeatherDashboard {
    config: DashboardConfig,
    query_builder: QueryBuilder,
    orchestrator: FetchOrchestrator,
    table: Mutex<TableView>,
}

impl WeatherDashboard {
    /// A dashboard against the public archive using default settings.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: DashboardConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            query_builder: QueryBuilder::new(config.base_url()),
            orchestrator: FetchOrchestrator::new(transport),
            table: Mutex::new(TableView::new(config.default_page_size())),
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Validates `inputs` and builds the request without fetching anything.
    pub fn prepare(&self, inputs: &FormInputs) -> Result<QueryRequest, ValidationError> {
        let validated = inputs.validate()?;
        Ok(self.query_builder.build_from(&validated))
    }

    /// Validates the form and, if it is valid, fetches the requested range.
    ///
    /// Invalid input settles the session in an error state without any network
    /// traffic. While a request is in flight every submit is ignored, valid or
    /// not. A successful fetch sends the table back to its first page.
    pub async fn submit(&self, inputs: &FormInputs) -> RequestOutcome {
        let query = match self.prepare(inputs) {
            Ok(query) => query,
            Err(e) => return self.orchestrator.reject(e).await,
        };

        info!(
            "Fetching daily weather at {} for {}",
            query.coordinate(),
            query.range()
        );
        let outcome = self.orchestrator.request(&query).await;
        if let RequestOutcome::Completed(FetchState::Success(_)) = &outcome {
            let mut table = self.table.lock().await;
            *table = table.first_page();
        }
        outcome
    }

    pub async fn fetch_state(&self) -> FetchState {
        self.orchestrator.state().await
    }

    pub async fn is_loading(&self) -> bool {
        self.fetch_state().await.is_loading()
    }

    /// Text for the error banner. `None` unless the session is in the error state.
    pub async fn error_message(&self) -> Option<String> {
        self.fetch_state().await.error().map(ToString::to_string)
    }

    /// The last successfully fetched series, kept while a newer request loads or fails.
    pub async fn series(&self) -> Option<SharedSeries> {
        self.orchestrator.current_series().await
    }

    pub async fn chart_points(&self) -> Vec<ChartPoint> {
        self.series()
            .await
            .map(|series| series.chart_points())
            .unwrap_or_default()
    }

    /// The current table page. Empty until a series has been fetched.
    pub async fn table(&self) -> PageWindow {
        let view = *self.table.lock().await;
        self.window_for(view).await
    }

    pub async fn set_page_size(&self, page_size: PageSize) -> PageWindow {
        self.update_table(|view, _| view.with_page_size(page_size)).await
    }

    pub async fn go_to_page(&self, page_index: usize) -> PageWindow {
        self.update_table(|view, total| view.go_to(page_index, total)).await
    }

    pub async fn next_page(&self) -> PageWindow {
        self.update_table(TableView::next).await
    }

    pub async fn previous_page(&self) -> PageWindow {
        self.update_table(TableView::previous).await
    }

    async fn update_table(
        &self,
        action: impl FnOnce(TableView, usize) -> TableView,
    ) -> PageWindow {
        let total_items = self.series().await.map_or(0, |series| series.len());
        let view = {
            let mut table = self.table.lock().await;
            *table = action(*table, total_items);
            *table
        };
        self.window_for(view).await
    }

    async fn window_for(&self, view: TableView) -> PageWindow {
        match self.series().await {
            Some(series) => view.window(&series),
            None => view.window(&DailySeries::default()),
        }
    }
}

impl Default for WeatherDashboard {
    fn default() -> Self {
        Self::new()
    }
}
