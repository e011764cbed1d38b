//! Drives one request at a time through the [`FetchState`] machine.

use crate::fetch::error::FetchError;
use crate::fetch::payload::classify_response;
use crate::fetch::state::{FetchEvent, FetchState};
use crate::fetch::transport::Transport;
use crate::input::error::ValidationError;
use crate::query::builder::QueryRequest;
use crate::store::SeriesStore;
use crate::types::series::SharedSeries;
use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const CANCELLED_MESSAGE: &str = "request cancelled";

/// What happened to a call to [`FetchOrchestrator::request`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// The request ran; this is the settled state it produced.
    Completed(FetchState),
    /// Another request was already in flight, so this one did nothing.
    Ignored,
}

#[derive(Debug, Default)]
struct Session {
    state: FetchState,
    store: SeriesStore,
}

impl Session {
    /// Applies `event`, keeping the store in step with `Success`.
    fn apply(&mut self, event: FetchEvent) -> Option<FetchState> {
        let next = self.state.transition(event)?;
        if let FetchState::Success(series) = &next {
            self.store.replace(series.clone());
        }
        self.state = next.clone();
        Some(next)
    }
}

/// Owns the fetch state and the series store of one dashboard session.
///
/// At most one request is in flight. The state lock is taken only to apply a
/// transition and is released while the transport is awaited, so a second
/// `request` issued meanwhile sees `Loading` and returns
/// [`RequestOutcome::Ignored`] without touching the transport.
///
/// There is no timeout and no retry: if the transport never answers, the
/// state stays `Loading`. A caller that gives up by dropping the `request`
/// future (a timeout, `select!`, an aborted task) settles the session in an
/// `Error` state instead, so the next request goes through.
pub struct FetchOrchestrator {
    transport: Arc<dyn Transport>,
    session: Mutex<Session>,
}

impl FetchOrchestrator {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            session: Mutex::new(Session::default()),
        }
    }

    pub async fn request(&self, query: &QueryRequest) -> RequestOutcome {
        if self.apply(FetchEvent::Requested).await.is_none() {
            warn!(
                "Ignoring request for {} {}: a request is already in flight",
                query.coordinate(),
                query.range()
            );
            return RequestOutcome::Ignored;
        }

        let url = query.url();
        let in_flight = InFlight::new(&self.session, &url);
        let response = self.transport.get(&url).await;
        let event = match response {
            Ok(response) => match classify_response(&url, &response) {
                Ok(series) => {
                    info!("Fetched {} daily rows from {}", series.len(), url);
                    FetchEvent::Succeeded(Arc::new(series))
                }
                Err(e) => {
                    warn!("Request to {} failed: {}", url, e);
                    FetchEvent::Failed(e)
                }
            },
            Err(failure) => {
                warn!("Request to {} failed: {}", url, failure.message);
                FetchEvent::Failed(FetchError::Transport {
                    url,
                    status_code: None,
                    message: failure.message,
                })
            }
        };

        match in_flight.settle(event) {
            Some(state) => RequestOutcome::Completed(state),
            // Loading can only be left by the request that entered it.
            None => RequestOutcome::Completed(self.state().await),
        }
    }

    /// Records invalid form input. Dropped while a request is in flight.
    pub async fn reject(&self, error: ValidationError) -> RequestOutcome {
        warn!("Rejected form input: {}", error);
        match self.apply(FetchEvent::Rejected(error)).await {
            Some(state) => RequestOutcome::Completed(state),
            None => RequestOutcome::Ignored,
        }
    }

    pub async fn state(&self) -> FetchState {
        lock(&self.session).state.clone()
    }

    /// The last good series, still available while a newer request is loading or has failed.
    pub async fn current_series(&self) -> Option<SharedSeries> {
        lock(&self.session).store.current().cloned()
    }

    async fn apply(&self, event: FetchEvent) -> Option<FetchState> {
        lock(&self.session).apply(event)
    }
}

/// The lock is never held across an await. Poisoning is ignored since transitions apply whole.
fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks the session as `Loading` for the lifetime of one request.
///
/// Settling consumes the guard. If it is dropped unsettled, the request was
/// cancelled and the session moves to `Error`.
struct InFlight<'a> {
    session: &'a Mutex<Session>,
    url: String,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(session: &'a Mutex<Session>, url: &str) -> Self {
        Self {
            session,
            url: url.to_string(),
            settled: false,
        }
    }

    fn settle(mut self, event: FetchEvent) -> Option<FetchState> {
        self.settled = true;
        lock(self.session).apply(event)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!("Request to {} was cancelled before it completed", self.url);
        lock(self.session).apply(FetchEvent::Failed(FetchError::Transport {
            url: std::mem::take(&mut self.url),
            status_code: None,
            message: CANCELLED_MESSAGE.to_string(),
        }));
    }
}
