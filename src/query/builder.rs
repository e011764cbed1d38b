//! Builds the archive request for a validated location and date range.

use crate::input::validator::ValidatedInput;
use crate::types::coordinate::Coordinate;
use crate::types::date_range::{DateRange, ISO_DATE_FORMAT};
use crate::types::metric::DailyMetric;

/// Historical weather archive endpoint used when no other base URL is configured.
pub const ARCHIVE_BASE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Daily values are aggregated in the local timezone of the coordinate.
const TIMEZONE: &str = "auto";

/// A fully determined archive request.
///
/// Two requests built from equal inputs are equal and render the same URL.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    base_url: String,
    coordinate: Coordinate,
    range: DateRange,
    metrics: Vec<DailyMetric>,
}

impl QueryRequest {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn metrics(&self) -> &[DailyMetric] {
        &self.metrics
    }

    /// Query parameters in the order they appear in the URL.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let daily = self
            .metrics
            .iter()
            .map(DailyMetric::api_name)
            .collect::<Vec<_>>()
            .join(",");
        vec![
            ("latitude", self.coordinate.latitude().to_string()),
            ("longitude", self.coordinate.longitude().to_string()),
            (
                "start_date",
                self.range.start().format(ISO_DATE_FORMAT).to_string(),
            ),
            (
                "end_date",
                self.range.end().format(ISO_DATE_FORMAT).to_string(),
            ),
            ("daily", daily),
            ("timezone", TIMEZONE.to_string()),
        ]
    }

    /// The GET URL for this request.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use weather_archive::{validate, QueryBuilder};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 1);
    /// let input = validate("52.52", "13.405", day, day).unwrap();
    /// let request = QueryBuilder::default().build(input.coordinate, input.range);
    /// assert!(request.url().starts_with(
    ///     "https://archive-api.open-meteo.com/v1/archive?latitude=52.52&longitude=13.405&start_date=2024-01-01"
    /// ));
    /// ```
    pub fn url(&self) -> String {
        let query = self
            .params()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.base_url, query)
    }
}

/// Builds [`QueryRequest`]s against a fixed endpoint with the fixed metric set.
///
/// Building never fails and never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    base_url: String,
}

impl QueryBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build(&self, coordinate: Coordinate, range: DateRange) -> QueryRequest {
        QueryRequest {
            base_url: self.base_url.clone(),
            coordinate,
            range,
            metrics: DailyMetric::ALL.to_vec(),
        }
    }

    pub fn build_from(&self, input: &ValidatedInput) -> QueryRequest {
        self.build(input.coordinate, input.range)
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(ARCHIVE_BASE_URL)
    }
}
