//! Favorites repository port definition.

use async_trait::async_trait;
use tokio::sync::watch;

use super::RepositoryError;
use crate::domain::FavoritePhoto;

/// Port for the persisted favorites table.
///
/// Implementations must publish a fresh snapshot to every subscriber after
/// each successful write.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Insert a favorite, replacing any existing row with the same id.
    async fn upsert(&self, favorite: &FavoritePhoto) -> Result<(), RepositoryError>;

    /// Get a favorite by photo id.
    async fn get(&self, id: i64) -> Result<Option<FavoritePhoto>, RepositoryError>;

    /// Whether a favorite with this photo id exists.
    async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Delete a favorite by photo id. Deleting a missing id is not an error.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Delete every favorite.
    async fn delete_all(&self) -> Result<(), RepositoryError>;

    /// Number of favorites.
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// All favorites, most recently saved first.
    async fn list(&self) -> Result<Vec<FavoritePhoto>, RepositoryError>;

    /// Observe the favorites table.
    ///
    /// The returned receiver already holds the current snapshot.
    async fn subscribe(&self) -> Result<watch::Receiver<Vec<FavoritePhoto>>, RepositoryError>;
}
