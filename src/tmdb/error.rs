//! Error types for metadata API requests.

use thiserror::Error;

/// Errors that can occur while fetching movies.
///
/// A well-formed body that signals failure through its `Response` field is
/// not an error here; see [`DiscoverOutcome::Rejected`](super::DiscoverOutcome).
#[derive(Debug, Error)]
pub enum FetchError {
    /// No API key could be resolved from config or environment
    #[error("API key not configured: {reason}")]
    MissingApiKey { reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request never produced a response (DNS, connect, timeout)
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("Failed to fetch movies: HTTP {status}")]
    Status { status: u16 },

    /// Body was not the expected JSON shape
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    /// Short machine-readable kind for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::MissingApiKey { .. } => "missing_api_key",
            FetchError::ClientBuild(_) => "client_build",
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}
