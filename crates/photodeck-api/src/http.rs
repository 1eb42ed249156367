//! HTTP backend abstraction for the photo service.
//!
//! The production backend uses reqwest with optional retry of server errors.
//! Tests swap in a canned-response backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::models::ClientSettings;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Fetches JSON from a URL and deserializes it.
///
/// This is an implementation detail - external code uses `PhotoApiPort`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// 5xx responses are retried with exponential backoff when retries are
/// configured. Network errors and 4xx responses fail immediately; the user
/// re-triggers the request.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
    api_key: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given settings.
    pub fn new(settings: &ClientSettings) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: settings.max_retries,
            retry_base_delay_ms: settings.retry_base_delay_ms,
            api_key: settings.api_key.clone(),
        })
    }

    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url.as_str());
        if let Some(ref key) = self.api_key {
            request = request.header(reqwest::header::AUTHORIZATION, key);
        }
        request
    }

    fn backoff(&self, attempt: u8) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms * 2u64.pow(u32::from(attempt) - 1))
    }

    /// Fetch a URL, retrying server errors.
    async fn fetch_with_retry(&self, url: &Url) -> ApiResult<reqwest::Response> {
        let mut attempt = 0;
        loop {
            if attempt > 0 {
                tokio::time::sleep(self.backoff(attempt)).await;
            }

            match self.build_request(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    if status.is_server_error() && attempt < self.max_retries {
                        warn!(status = status.as_u16(), attempt, "Server error, retrying");
                        attempt += 1;
                        continue;
                    }

                    return Err(ApiError::RequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        debug!(path = url.path(), "GET");
        let response = self.fetch_with_retry(url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
