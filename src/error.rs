use crate::fetch::error::FetchError;
use crate::input::error::ValidationError;
use thiserror::Error;

/// Every way a request for weather data can end without a series.
///
/// None of these is fatal: each leaves the dashboard in a settled error state
/// from which the user can simply submit again.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
