//! Search history domain types.

use serde::{Deserialize, Serialize};

/// Maximum number of rows kept in the search history table.
pub const HISTORY_LIMIT: usize = 10;

/// Maximum number of prefix suggestions returned from history.
pub const SUGGESTION_LIMIT: usize = 5;

/// A persisted search history row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    /// Surrogate key assigned by the store.
    pub id: i64,
    /// Normalized query text (see [`normalize_query`]).
    pub query: String,
    /// Milliseconds since the Unix epoch.
    pub searched_at: i64,
}

/// Normalize raw query text for history bookkeeping: trim surrounding
/// whitespace and lower-case.
///
/// Returns `None` for blank input, which is never recorded.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
