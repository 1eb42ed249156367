//! `SQLite` implementation of the `FavoritesRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tokio::sync::watch;
use tracing::{debug, warn};

use photodeck_core::{FavoritePhoto, FavoritesRepository, RepositoryError};

use super::row_mappers::{FAVORITE_SELECT_COLUMNS, row_to_favorite, storage_error};

/// `SQLite` implementation of the `FavoritesRepository` trait.
///
/// Publishes the full favorites list to subscribers after every write.
pub struct SqliteFavoritesRepository {
    pool: SqlitePool,
    changes: watch::Sender<Vec<FavoritePhoto>>,
}

impl SqliteFavoritesRepository {
    /// Create a new `SQLite` favorites repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            changes: watch::channel(Vec::new()).0,
        }
    }

    async fn publish(&self) {
        match self.list().await {
            Ok(favorites) => {
                self.changes.send_replace(favorites);
            }
            Err(e) => warn!(error = %e, "Failed to refresh favorites snapshot"),
        }
    }
}

#[async_trait]
impl FavoritesRepository for SqliteFavoritesRepository {
    async fn upsert(&self, favorite: &FavoritePhoto) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO favorite_photos (
                id, photographer, photographer_url, width, height,
                url_original, url_large, url_medium, url_small, saved_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(favorite.id)
        .bind(&favorite.photographer)
        .bind(&favorite.photographer_url)
        .bind(i64::from(favorite.width))
        .bind(i64::from(favorite.height))
        .bind(&favorite.url_original)
        .bind(&favorite.url_large)
        .bind(&favorite.url_medium)
        .bind(&favorite.url_small)
        .bind(favorite.saved_at)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        debug!(id = favorite.id, "Favorite stored");
        self.publish().await;
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Option<FavoritePhoto>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {FAVORITE_SELECT_COLUMNS} FROM favorite_photos WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(row_to_favorite).transpose()
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM favorite_photos WHERE id = ?) AS found")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(row.get::<i64, _>("found") != 0)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM favorite_photos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        debug!(id, "Favorite removed");
        self.publish().await;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM favorite_photos")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        self.publish().await;
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM favorite_photos")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(row.get("total"))
    }

    async fn list(&self) -> Result<Vec<FavoritePhoto>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {FAVORITE_SELECT_COLUMNS} FROM favorite_photos ORDER BY saved_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter().map(row_to_favorite).collect()
    }

    async fn subscribe(&self) -> Result<watch::Receiver<Vec<FavoritePhoto>>, RepositoryError> {
        self.changes.send_replace(self.list().await?);
        Ok(self.changes.subscribe())
    }
}
