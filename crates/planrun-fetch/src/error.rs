//! Error types for planrun-fetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP {status} {reason} from {url}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("no response from {url}: {message}")]
    Network { url: String, message: String },

    #[error(
        "download URL expired: {url}{}",
        instructions.as_deref().map(|i| format!(" ({i})")).unwrap_or_default()
    )]
    Expired {
        url: String,
        instructions: Option<String>,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Whether this failure left a record in the ledger.
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Expired { .. })
    }
}

/// Failure below the HTTP layer: nothing came back.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Connect(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
