//! Fetch daily historical weather for a location and date range, and shape it
//! for display as a chart and as a paginated table.
//!
//! The pipeline runs in one direction: raw form input is validated
//! ([`validate`]), turned into an archive request ([`QueryBuilder`]), fetched
//! one request at a time ([`FetchOrchestrator`]), kept as the session's
//! current series ([`SeriesStore`]) and finally sliced into table pages
//! ([`window`]). [`WeatherDashboard`] wires all of it into a single session.

mod dashboard;
mod error;
mod fetch;
mod input;
mod pagination;
mod query;
mod store;
mod types;

pub use dashboard::*;
pub use error::DashboardError;

pub use types::coordinate::Coordinate;
pub use types::date_range::DateRange;
pub use types::metric::DailyMetric;
pub use types::series::{ChartPoint, DailyRecord, DailySeries, SeriesOrderError, SharedSeries};

pub use input::error::{Field, ValidationError};
pub use input::validator::{validate, FormInputs, ValidatedInput};

pub use query::builder::{QueryBuilder, QueryRequest, ARCHIVE_BASE_URL};

pub use fetch::error::FetchError;
pub use fetch::orchestrator::{FetchOrchestrator, RequestOutcome};
pub use fetch::payload::classify_response;
pub use fetch::state::{FetchEvent, FetchState};
pub use fetch::transport::{ReqwestTransport, Transport, TransportFailure, TransportResponse};

pub use store::SeriesStore;

pub use pagination::page_size::{PageSize, UnsupportedPageSize};
pub use pagination::table_view::TableView;
pub use pagination::window::{
    clamp_page, format_table_date, total_pages, window, MetricCell, PageWindow, RowView,
};
