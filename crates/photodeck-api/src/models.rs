//! Wire types for the photo service and internal client settings.
//!
//! These are not exposed outside the crate; `port.rs` converts them into
//! core domain types.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::PhotoApiConfig;
use crate::error::ApiResult;

// ============================================================================
// Client settings (see config.rs for the public builder)
// ============================================================================

/// Validated settings derived from `PhotoApiConfig`.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Always ends with `/` so endpoint paths join beneath it
    pub base_url: Url,
    pub api_key: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_retries: u8,
    pub retry_base_delay_ms: u64,
}

impl ClientSettings {
    pub fn from_config(config: &PhotoApiConfig) -> ApiResult<Self> {
        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        Ok(Self {
            base_url: Url::parse(&raw)?,
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // backoff delays are far below u64::MAX ms
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        })
    }
}

// ============================================================================
// Response bodies
// ============================================================================

/// Image URLs at the four sizes the client uses.
///
/// The service returns more sizes; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSrc {
    pub original: String,
    pub large: String,
    pub medium: String,
    pub small: String,
}

/// One photo as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPhoto {
    pub id: i64,
    pub width: u32,
    pub height: u32,
    pub photographer: String,
    pub photographer_url: String,
    pub src: ApiSrc,
}

/// A page of search or curated results.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPhotoPage {
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub photos: Vec<ApiPhoto>,
}
