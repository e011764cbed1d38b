use thiserror::Error;

/// Why a fetch did not produce a series.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    /// No response, or a response with a non-2xx status.
    #[error("{}", transport_message(.status_code, .message))]
    Transport {
        url: String,
        status_code: Option<u16>,
        message: String,
    },

    /// The archive answered but flagged the request as failed.
    #[error("{message}")]
    Upstream { message: String },

    /// The body could not be turned into a daily series.
    #[error("Unexpected response from the weather archive: {detail}")]
    MalformedResponse { detail: String },
}

fn transport_message(status_code: &Option<u16>, message: &str) -> String {
    match status_code {
        Some(status) => format!("API request failed with status {status}"),
        None => format!("Network request failed: {message}"),
    }
}

impl FetchError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
