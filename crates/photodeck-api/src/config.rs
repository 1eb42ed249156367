//! Public configuration for the photo service client.

use std::fmt;
use std::time::Duration;

/// Default base URL of the remote photo service.
pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/";

/// Configuration for the photo service client.
///
/// # Example
///
/// ```
/// use photodeck_api::PhotoApiConfig;
/// use std::time::Duration;
///
/// let config = PhotoApiConfig::new()
///     .with_api_key("my-key")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Clone)]
pub struct PhotoApiConfig {
    /// Base URL; endpoint paths are resolved against it
    pub(crate) base_url: String,
    /// Sent verbatim in the `Authorization` header
    pub(crate) api_key: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    /// Retries for 5xx responses; network errors are never retried
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for PhotoApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: concat!("photodeck/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 0,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

// Keeps the key out of logs.
impl fmt::Debug for PhotoApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_base_delay", &self.retry_base_delay)
            .finish()
    }
}

impl PhotoApiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the photo service.
    ///
    /// Defaults to `https://api.pexels.com/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for 5xx responses.
    ///
    /// Defaults to 0.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PhotoApiConfig::new();
        assert_eq!(config.base_url, "https://api.pexels.com/");
        assert!(config.user_agent.starts_with("photodeck/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PhotoApiConfig::new()
            .with_base_url("http://localhost:8080/")
            .with_api_key("secret")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(3)
            .with_retry_delay(Duration::from_millis(10));

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_base_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = PhotoApiConfig::new().with_api_key("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_optional_api_key() {
        let config = PhotoApiConfig::new().with_optional_api_key(None);
        assert!(config.api_key.is_none());
    }
}
