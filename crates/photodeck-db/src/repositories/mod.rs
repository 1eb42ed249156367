//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_favorites_repository;
mod sqlite_profile_repository;
mod sqlite_search_history_repository;

pub use sqlite_favorites_repository::SqliteFavoritesRepository;
pub use sqlite_profile_repository::SqliteProfileRepository;
pub use sqlite_search_history_repository::SqliteSearchHistoryRepository;
