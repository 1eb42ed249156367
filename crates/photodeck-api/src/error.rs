//! Internal error types for photo service requests.
//!
//! These are mapped to `PhotoApiError` at the port boundary.

use thiserror::Error;

/// Result type alias for photo service requests.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while talking to the photo service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("Photo service request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a failed request, if the service answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
