//! Photo service client.

mod photos;
mod search;

use crate::config::PhotoApiConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ClientSettings;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultPhotoClient = PhotoClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the remote photo service.
///
/// Generic over the HTTP backend so tests can inject canned responses.
/// Production code uses `DefaultPhotoClient::new()` through `PhotoApiPort`.
pub struct PhotoClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) settings: ClientSettings,
}

impl DefaultPhotoClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the TLS backend cannot be
    /// initialized.
    pub fn new(config: &PhotoApiConfig) -> ApiResult<Self> {
        let settings = ClientSettings::from_config(config)?;
        let backend = ReqwestBackend::new(&settings)?;
        Ok(Self { backend, settings })
    }
}

impl<B: HttpBackend> PhotoClient<B> {
    /// Create a client around a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(settings: ClientSettings, backend: B) -> Self {
        Self { backend, settings }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub fn test_settings() -> ClientSettings {
        ClientSettings::from_config(&PhotoApiConfig::new()).unwrap()
    }

    pub fn fake_photo_json(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "width": 4000,
            "height": 3000,
            "photographer": format!("Photographer {id}"),
            "photographer_url": format!("https://www.pexels.com/@p{id}"),
            "src": {
                "original": format!("https://images.pexels.com/photos/{id}/original.jpeg"),
                "large": format!("https://images.pexels.com/photos/{id}/large.jpeg"),
                "medium": format!("https://images.pexels.com/photos/{id}/medium.jpeg"),
                "small": format!("https://images.pexels.com/photos/{id}/small.jpeg")
            }
        })
    }

    pub fn fake_page_json(page: u32, ids: &[i64]) -> serde_json::Value {
        json!({
            "page": page,
            "per_page": 20,
            "photos": ids.iter().map(|&id| fake_photo_json(id)).collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultPhotoClient::new(&PhotoApiConfig::new().with_api_key("k"));
        tokio_test::assert_ok!(client);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let client = DefaultPhotoClient::new(&PhotoApiConfig::new().with_base_url("::"));
        assert!(client.is_err());
    }
}
