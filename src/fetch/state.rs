//! The fetch lifecycle as an explicit state machine.
//!
//! ```text
//!  Idle ─┐
//! Error ─┼─ Requested ──▶ Loading ── Succeeded ──▶ Success
//! Success┘                   │
//!                            └────── Failed ─────▶ Error
//! ```
//!
//! `Rejected` (invalid form input) moves any settled state straight to `Error`
//! without passing through `Loading`.

use crate::error::DashboardError;
use crate::fetch::error::FetchError;
use crate::input::error::ValidationError;
use crate::types::series::SharedSeries;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(SharedSeries),
    Error(DashboardError),
}

/// Something that happened to the fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// The user asked for data with valid input.
    Requested,
    /// The user asked for data but the input did not validate.
    Rejected(ValidationError),
    /// The in-flight request produced a series.
    Succeeded(SharedSeries),
    /// The in-flight request failed.
    Failed(FetchError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The error to show in a banner, if any. Cleared as soon as a new request starts.
    pub fn error(&self) -> Option<&DashboardError> {
        match self {
            FetchState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Applies `event` and returns the next state, or `None` if the event has
    /// no meaning in the current state. A `Requested` or `Rejected` while
    /// `Loading` is dropped, as is a result arriving when nothing is in flight.
    pub fn transition(&self, event: FetchEvent) -> Option<FetchState> {
        match (self, event) {
            (FetchState::Loading, FetchEvent::Requested | FetchEvent::Rejected(_)) => None,
            (_, FetchEvent::Requested) => Some(FetchState::Loading),
            (_, FetchEvent::Rejected(e)) => Some(FetchState::Error(e.into())),
            (FetchState::Loading, FetchEvent::Succeeded(series)) => {
                Some(FetchState::Success(series))
            }
            (FetchState::Loading, FetchEvent::Failed(e)) => Some(FetchState::Error(e.into())),
            (_, FetchEvent::Succeeded(_) | FetchEvent::Failed(_)) => None,
        }
    }
}
