//! In-memory [`Transport`] for network-free tests.

use crate::fetch::transport::{Transport, TransportFailure, TransportResponse};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Replays canned results in order, optionally waiting for `gate` before answering.
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportFailure>>>,
    urls: Mutex<Vec<String>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: Vec<Result<TransportResponse, TransportFailure>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            urls: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

/// A well-formed archive body covering consecutive days from 2024-01-01.
/// Every fourth day has no apparent-mean value.
pub(crate) fn archive_body(days: u64) -> Value {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let time: Vec<String> = (0..days)
        .map(|i| (start + chrono::Days::new(i)).to_string())
        .collect();
    let column = |offset: f64| -> Vec<Value> {
        (0..days).map(|i| json!(offset + i as f64 / 10.0)).collect()
    };
    let apparent_mean: Vec<Value> = (0..days)
        .map(|i| if i % 4 == 3 { Value::Null } else { json!(i as f64) })
        .collect();
    json!({
        "latitude": 40.710335,
        "longitude": -73.99307,
        "timezone": "America/New_York",
        "daily": {
            "time": time,
            "temperature_2m_max": column(5.0),
            "temperature_2m_min": column(-2.0),
            "temperature_2m_mean": column(1.5),
            "apparent_temperature_max": column(2.0),
            "apparent_temperature_min": column(-6.0),
            "apparent_temperature_mean": apparent_mean
        }
    })
}

pub(crate) fn archive_response(days: u64) -> TransportResponse {
    TransportResponse::new(200, archive_body(days).to_string())
}
