//! `SQLite` implementation of the `ProfileRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::watch;
use tracing::{debug, warn};

use photodeck_core::{PROFILE_UID, ProfileRepository, RepositoryError, UserProfile};

use super::row_mappers::{row_to_profile, storage_error};

/// `SQLite` implementation of the `ProfileRepository` trait.
///
/// The profile lives in a single row keyed by `PROFILE_UID`. Partial updates
/// create the row when it does not exist yet.
pub struct SqliteProfileRepository {
    pool: SqlitePool,
    changes: watch::Sender<Option<UserProfile>>,
}

impl SqliteProfileRepository {
    /// Create a new `SQLite` profile repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            changes: watch::channel(None).0,
        }
    }

    async fn publish(&self) {
        match self.load().await {
            Ok(profile) => {
                self.changes.send_replace(profile);
            }
            Err(e) => warn!(error = %e, "Failed to refresh profile snapshot"),
        }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError> {
        sqlx::query("INSERT OR REPLACE INTO user_profile (uid, name, photo_uri) VALUES (?, ?, ?)")
            .bind(PROFILE_UID)
            .bind(&profile.name)
            .bind(&profile.avatar)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        debug!("Profile saved");
        self.publish().await;
        Ok(())
    }

    async fn load(&self) -> Result<Option<UserProfile>, RepositoryError> {
        let row = sqlx::query("SELECT name, photo_uri FROM user_profile WHERE uid = ?")
            .bind(PROFILE_UID)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.as_ref().map(row_to_profile).transpose()
    }

    async fn update_name(&self, name: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO user_profile (uid, name) VALUES (?, ?)
            ON CONFLICT(uid) DO UPDATE SET name = excluded.name
            ",
        )
        .bind(PROFILE_UID)
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        self.publish().await;
        Ok(())
    }

    async fn update_avatar(&self, avatar: Option<&str>) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO user_profile (uid, photo_uri) VALUES (?, ?)
            ON CONFLICT(uid) DO UPDATE SET photo_uri = excluded.photo_uri
            ",
        )
        .bind(PROFILE_UID)
        .bind(avatar)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        self.publish().await;
        Ok(())
    }

    async fn delete(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM user_profile")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        self.publish().await;
        Ok(())
    }

    async fn subscribe(&self) -> Result<watch::Receiver<Option<UserProfile>>, RepositoryError> {
        self.changes.send_replace(self.load().await?);
        Ok(self.changes.subscribe())
    }
}
