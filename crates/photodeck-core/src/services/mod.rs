//! Core services - the application's business logic layer.
//!
//! [`PhotoService`] unifies the remote photo API and the local stores.
//! The coordinators hold per-session UI state on top of it and publish
//! snapshots through `tokio::sync::watch`.

mod photo_service;
mod profile_coordinator;
mod query_debouncer;
mod search_coordinator;

pub use photo_service::{PhotoService, PhotoServiceError};
pub use profile_coordinator::{ProfileCoordinator, ProfileState};
pub use query_debouncer::QueryDebouncer;
pub use search_coordinator::{SearchCoordinator, SearchPhase, SearchState};
