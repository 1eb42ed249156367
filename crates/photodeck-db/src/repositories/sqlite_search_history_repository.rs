//! `SQLite` implementation of the `SearchHistoryRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::watch;
use tracing::{debug, warn};

use photodeck_core::{HISTORY_LIMIT, RepositoryError, SearchHistoryEntry, SearchHistoryRepository};

use super::row_mappers::{row_to_history_entry, storage_error};

/// `SQLite` implementation of the `SearchHistoryRepository` trait.
///
/// Subscribers receive the `HISTORY_LIMIT` most recent entries after every
/// write.
pub struct SqliteSearchHistoryRepository {
    pool: SqlitePool,
    changes: watch::Sender<Vec<SearchHistoryEntry>>,
}

impl SqliteSearchHistoryRepository {
    /// Create a new `SQLite` search history repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            changes: watch::channel(Vec::new()).0,
        }
    }

    async fn publish(&self) {
        match self.recent(HISTORY_LIMIT).await {
            Ok(entries) => {
                self.changes.send_replace(entries);
            }
            Err(e) => warn!(error = %e, "Failed to refresh search history snapshot"),
        }
    }
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// Escape `LIKE` wildcards so the prefix matches literally.
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl SearchHistoryRepository for SqliteSearchHistoryRepository {
    async fn record(
        &self,
        query: &str,
        searched_at: i64,
        keep: usize,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        sqlx::query("DELETE FROM search_history WHERE search_query = ?")
            .bind(query)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        sqlx::query("INSERT INTO search_history (search_query, searched_at) VALUES (?, ?)")
            .bind(query)
            .bind(searched_at)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        let trimmed = sqlx::query(
            r"
            DELETE FROM search_history WHERE id NOT IN (
                SELECT id FROM search_history ORDER BY searched_at DESC, id DESC LIMIT ?
            )
            ",
        )
        .bind(sql_limit(keep))
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?
        .rows_affected();

        tx.commit().await.map_err(storage_error)?;

        debug!(query, trimmed, "Search recorded");
        self.publish().await;
        Ok(())
    }

    async fn search_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<SearchHistoryEntry>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, search_query, searched_at FROM search_history
            WHERE search_query LIKE ? || '%' ESCAPE '\'
            ORDER BY searched_at DESC, id DESC
            LIMIT ?
            ",
        )
        .bind(escape_like(prefix))
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter().map(row_to_history_entry).collect()
    }

    async fn recent(&self, limit: usize) -> Result<Vec<SearchHistoryEntry>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, search_query, searched_at FROM search_history
            ORDER BY searched_at DESC, id DESC
            LIMIT ?
            ",
        )
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.iter().map(row_to_history_entry).collect()
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM search_history")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        self.publish().await;
        Ok(())
    }

    async fn subscribe(
        &self,
    ) -> Result<watch::Receiver<Vec<SearchHistoryEntry>>, RepositoryError> {
        self.changes.send_replace(self.recent(HISTORY_LIMIT).await?);
        Ok(self.changes.subscribe())
    }
}
