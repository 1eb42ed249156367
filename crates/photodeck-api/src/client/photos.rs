//! Single photo lookup.

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::ApiPhoto;
use crate::url::build_photo_url;

use super::PhotoClient;

impl<B: HttpBackend> PhotoClient<B> {
    /// Fetch one photo by id.
    pub(crate) async fn photo(&self, id: i64) -> ApiResult<ApiPhoto> {
        let url = build_photo_url(&self.settings.base_url, id)?;
        self.backend.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{fake_photo_json, test_settings};
    use crate::error::ApiError;
    use crate::http::testing::{CannedResponse, FakeBackend};

    #[tokio::test]
    async fn test_photo_by_id() {
        let backend = FakeBackend::new()
            .with_response("v1/photos/42", CannedResponse::Json(fake_photo_json(42)));
        let client = PhotoClient::with_backend(test_settings(), backend);

        let photo = client.photo(42).await.unwrap();

        assert_eq!(photo.id, 42);
        assert_eq!(photo.photographer, "Photographer 42");
    }

    #[tokio::test]
    async fn test_missing_photo_is_404() {
        let client = PhotoClient::with_backend(test_settings(), FakeBackend::new());

        let err = client.photo(404_404).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(matches!(err, ApiError::RequestFailed { .. }));
    }
}
