//! Search history repository port definition.

use async_trait::async_trait;
use tokio::sync::watch;

use super::RepositoryError;
use crate::domain::SearchHistoryEntry;

/// Port for the persisted search history table.
#[async_trait]
pub trait SearchHistoryRepository: Send + Sync {
    /// Record an already-normalized query.
    ///
    /// Removes any row with the same text, inserts a new row stamped with
    /// `searched_at`, then keeps only the `keep` most recent rows. The three
    /// steps form one logical unit.
    async fn record(
        &self,
        query: &str,
        searched_at: i64,
        keep: usize,
    ) -> Result<(), RepositoryError>;

    /// Entries whose query starts with `prefix`, most recent first.
    async fn search_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<SearchHistoryEntry>, RepositoryError>;

    /// The most recent entries, most recent first.
    async fn recent(&self, limit: usize) -> Result<Vec<SearchHistoryEntry>, RepositoryError>;

    /// Delete every entry.
    async fn clear(&self) -> Result<(), RepositoryError>;

    /// Observe the most recent entries (bounded by the history limit).
    async fn subscribe(
        &self,
    ) -> Result<watch::Receiver<Vec<SearchHistoryEntry>>, RepositoryError>;
}
