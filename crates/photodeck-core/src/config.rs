//! Session configuration for the search coordinator and debouncer.

use std::time::Duration;

use crate::domain::{HISTORY_LIMIT, SUGGESTION_LIMIT};

/// Default number of photos requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default quiet window before a typed query is submitted.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Tunables for a search session.
///
/// # Example
///
/// ```
/// use photodeck_core::SearchConfig;
/// use std::time::Duration;
///
/// let config = SearchConfig::new()
///     .with_page_size(40)
///     .with_debounce(Duration::from_millis(250));
/// assert_eq!(config.page_size, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Photos requested per page (the service caps this at 80).
    pub page_size: u32,
    /// Quiet window applied to raw text-changed intents.
    pub debounce: Duration,
    /// Rows kept in the search history table.
    pub history_limit: usize,
    /// Suggestions returned for a history prefix lookup.
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            history_limit: HISTORY_LIMIT,
            suggestion_limit: SUGGESTION_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size. Values are clamped to `1..=80`.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, 80);
        self
    }

    /// Set the debounce window.
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::new();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce, Duration::from_millis(500));
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.suggestion_limit, 5);
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(SearchConfig::new().with_page_size(0).page_size, 1);
        assert_eq!(SearchConfig::new().with_page_size(500).page_size, 80);
    }
}
