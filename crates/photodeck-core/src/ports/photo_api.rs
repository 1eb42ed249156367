//! Remote photo service port definition.
//!
//! The actual HTTP implementation lives in `photodeck-api`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{PhotoPage, PhotoRecord};

/// Errors from remote photo service operations.
///
/// These are domain-level errors. Transport and decoding details from the
/// HTTP client are mapped to these at the adapter boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoApiError {
    /// The service could not be reached (no connectivity, DNS, timeout).
    #[error("Unable to reach the photo service ({message}). Check your connection.")]
    Transport {
        /// Underlying transport failure
        message: String,
    },

    /// The requested photo does not exist.
    #[error("Photo {id} not found")]
    NotFound {
        /// The photo identifier that wasn't found
        id: i64,
    },

    /// The credential was rejected.
    #[error("The photo service rejected the API key")]
    Unauthorized,

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Any other non-success HTTP status.
    #[error("Photo service request failed with status {status}")]
    Remote {
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be understood.
    #[error("Invalid response from the photo service: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

impl PhotoApiError {
    /// Whether this failure happened before any response was received.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Result type alias for photo service port operations.
pub type PhotoApiResult<T> = Result<T, PhotoApiError>;

/// Port trait for the remote photo service.
///
/// # Design
///
/// - Uses core-owned DTOs, not wire types
/// - Returns `PhotoApiError` for all failures
/// - Pages are 1-based and returned exactly as ranked by the service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoApiPort: Send + Sync {
    /// Search photos by keyword.
    async fn search(&self, query: &str, page: u32, per_page: u32) -> PhotoApiResult<PhotoPage>;

    /// Fetch a single photo by identifier.
    async fn get_photo(&self, id: i64) -> PhotoApiResult<PhotoRecord>;

    /// Fetch the curated photo listing.
    async fn curated(&self, page: u32, per_page: u32) -> PhotoApiResult<PhotoPage>;
}
