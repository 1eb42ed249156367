#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE, SearchConfig};
pub use domain::{
    FavoritePhoto, HISTORY_LIMIT, PROFILE_UID, PhotoPage, PhotoRecord, PhotoSources,
    SUGGESTION_LIMIT, SearchHistoryEntry, UserProfile, normalize_query,
};
pub use paths::{DATA_DIR_ENV, PathError, data_root, database_path, database_path_in};
pub use ports::{
    FavoritesRepository, PhotoApiError, PhotoApiPort, PhotoApiResult, ProfileRepository, Repos,
    RepositoryError, SearchHistoryRepository,
};
pub use services::{
    PhotoService, PhotoServiceError, ProfileCoordinator, ProfileState, QueryDebouncer,
    SearchCoordinator, SearchPhase, SearchState,
};
