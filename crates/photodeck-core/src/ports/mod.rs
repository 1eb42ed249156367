//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Store traits are minimal and CRUD-focused
//! - Change observation uses `tokio::sync::watch` snapshots

pub mod favorites_repository;
pub mod photo_api;
pub mod profile_repository;
pub mod search_history_repository;

use std::sync::Arc;
use thiserror::Error;

pub use favorites_repository::FavoritesRepository;
pub use photo_api::{PhotoApiError, PhotoApiPort, PhotoApiResult};
pub use profile_repository::ProfileRepository;
pub use search_history_repository::SearchHistoryRepository;

#[cfg(test)]
pub use photo_api::MockPhotoApiPort;

/// Container for all store trait objects.
///
/// Lets adapters hand a single value to the services without coupling them
/// to the concrete store. Build one with `photodeck_db::CoreFactory`.
#[derive(Clone)]
pub struct Repos {
    /// Favorite photos table.
    pub favorites: Arc<dyn FavoritesRepository>,
    /// Search history table.
    pub history: Arc<dyn SearchHistoryRepository>,
    /// Singleton user profile row.
    pub profile: Arc<dyn ProfileRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        favorites: Arc<dyn FavoritesRepository>,
        history: Arc<dyn SearchHistoryRepository>,
        profile: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            favorites,
            history,
            profile,
        }
    }
}

/// Domain-specific errors for store operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}
