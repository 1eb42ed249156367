//! Composition utilities for wiring `Repos` with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

use photodeck_core::Repos;

use crate::repositories::{
    SqliteFavoritesRepository, SqliteProfileRepository, SqliteSearchHistoryRepository,
};
use crate::setup::setup_database;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Open the database at `db_path`, creating file and schema as needed.
    pub async fn create_pool(db_path: &Path) -> anyhow::Result<SqlitePool> {
        setup_database(db_path).await
    }

    /// Build all `SQLite` repositories from a pool.
    ///
    /// Adapters should obtain their repositories here rather than
    /// constructing them one by one.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteFavoritesRepository::new(pool.clone())),
            Arc::new(SqliteSearchHistoryRepository::new(pool.clone())),
            Arc::new(SqliteProfileRepository::new(pool)),
        )
    }

    /// Open the database and build all repositories in one step.
    ///
    /// ```ignore
    /// let repos = CoreFactory::open_repos(&photodeck_core::database_path()?).await?;
    /// let service = PhotoService::new(api, repos);
    /// ```
    pub async fn open_repos(db_path: &Path) -> anyhow::Result<Repos> {
        Ok(Self::build_repos(Self::create_pool(db_path).await?))
    }

    /// Create a favorites repository from a pool.
    pub fn favorites_repository(pool: SqlitePool) -> Arc<SqliteFavoritesRepository> {
        Arc::new(SqliteFavoritesRepository::new(pool))
    }

    /// Create a search history repository from a pool.
    pub fn history_repository(pool: SqlitePool) -> Arc<SqliteSearchHistoryRepository> {
        Arc::new(SqliteSearchHistoryRepository::new(pool))
    }

    /// Create a profile repository from a pool.
    pub fn profile_repository(pool: SqlitePool) -> Arc<SqliteProfileRepository> {
        Arc::new(SqliteProfileRepository::new(pool))
    }
}

/// In-memory database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database.
    pub async fn new() -> anyhow::Result<Self> {
        Ok(Self {
            pool: crate::setup::setup_test_database().await?,
        })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// All repositories over this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    pub fn favorites_repository(&self) -> SqliteFavoritesRepository {
        SqliteFavoritesRepository::new(self.pool.clone())
    }

    pub fn history_repository(&self) -> SqliteSearchHistoryRepository {
        SqliteSearchHistoryRepository::new(self.pool.clone())
    }

    pub fn profile_repository(&self) -> SqliteProfileRepository {
        SqliteProfileRepository::new(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photodeck_core::{
        FavoritesRepository, HISTORY_LIMIT, ProfileRepository, SearchHistoryRepository, UserProfile,
    };

    #[tokio::test]
    async fn test_repos_share_one_database() {
        let db = TestDb::new().await.unwrap();
        let repos = db.repos();

        repos.history.record("nature", 1, HISTORY_LIMIT).await.unwrap();
        repos
            .profile
            .save(&UserProfile::new("Ada", None))
            .await
            .unwrap();

        assert_eq!(db.history_repository().recent(10).await.unwrap().len(), 1);
        assert!(db.profile_repository().load().await.unwrap().is_some());
        assert_eq!(repos.favorites.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_open_repos_creates_database_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("data").join("photodeck.db");

        let repos = CoreFactory::open_repos(&path).await.unwrap();

        assert!(path.exists());
        assert!(repos.favorites.list().await.unwrap().is_empty());
    }
}
