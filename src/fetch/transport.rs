//! The request/response primitive the orchestrator drives.

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;

/// Status and body of an HTTP response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, connect, TLS, read error...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub message: String,
}

/// A single-shot GET. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportFailure>;
}

/// [`Transport`] backed by a `reqwest::Client`.
///
/// No timeout is configured here; pass a client built with one to
/// [`ReqwestTransport::with_client`] if the request must be bounded.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportFailure> {
        info!("Requesting {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Network error for {}: {:?}", url, e);
            TransportFailure {
                message: e.to_string(),
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!("Failed reading response body from {}: {:?}", url, e);
            TransportFailure {
                message: e.to_string(),
            }
        })?;
        Ok(TransportResponse { status, body })
    }
}
