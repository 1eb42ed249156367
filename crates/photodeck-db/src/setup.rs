//! Database setup and initialization.
//!
//! Entry points call `setup_database()` with the resolved database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

/// Opens (creating if missing) the `SQLite` database and ensures the schema
/// exists.
///
/// # Errors
///
/// Returns an error if the parent directory or database file cannot be
/// created, or if schema creation fails.
///
/// # Example
///
/// ```rust,no_run
/// use photodeck_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/path/to/photodeck.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool is limited to one connection, since every connection to
/// `sqlite::memory:` opens a separate database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates all tables and indexes. Safe to call repeatedly.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS favorite_photos (
            id INTEGER PRIMARY KEY NOT NULL,
            photographer TEXT NOT NULL,
            photographer_url TEXT NOT NULL,
            width INTEGER NOT NULL,
            height INTEGER NOT NULL,
            url_original TEXT NOT NULL,
            url_large TEXT NOT NULL,
            url_medium TEXT NOT NULL,
            url_small TEXT NOT NULL,
            saved_at INTEGER NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_favorite_photos_saved_at ON favorite_photos(saved_at)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS search_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            search_query TEXT NOT NULL,
            searched_at INTEGER NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    // One row per query text
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_search_history_query ON search_history(search_query)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_search_history_searched_at ON search_history(searched_at)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS user_profile (
            uid INTEGER PRIMARY KEY NOT NULL CHECK (uid = 1),
            name TEXT,
            photo_uri TEXT
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(pool)
            .await
            .unwrap()
            .iter()
            .map(|row| row.get::<String, _>("name"))
            .collect()
    }

    #[tokio::test]
    async fn test_schema_creates_all_tables() {
        let pool = setup_test_database().await.unwrap();

        let tables = table_names(&pool).await;

        for table in ["favorite_photos", "search_history", "user_profile"] {
            assert!(tables.iter().any(|t| t == table), "missing table {table}");
        }
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let pool = setup_test_database().await.unwrap();
        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_profile_uid_is_constrained() {
        let pool = setup_test_database().await.unwrap();

        let result = sqlx::query("INSERT INTO user_profile (uid, name) VALUES (2, 'x')")
            .execute(&pool)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_setup_database_creates_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("photodeck.db");

        let pool = setup_database(&path).await.unwrap();
        pool.close().await;

        assert!(path.exists());
    }
}
