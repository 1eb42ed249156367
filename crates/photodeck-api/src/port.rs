//! `PhotoApiPort` implementation for `PhotoClient`.
//!
//! Converts wire types into core domain types and internal errors into
//! `PhotoApiError`.

use async_trait::async_trait;
use photodeck_core::ports::{PhotoApiError, PhotoApiPort, PhotoApiResult};
use photodeck_core::{PhotoPage, PhotoRecord, PhotoSources};

use crate::client::PhotoClient;
use crate::error::ApiError;
use crate::http::HttpBackend;
use crate::models::{ApiPhoto, ApiPhotoPage};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert an internal `ApiError` to the core `PhotoApiError`.
///
/// `photo_id` is set for single-photo lookups so a 404 can name the photo.
fn map_error(err: ApiError, photo_id: Option<i64>) -> PhotoApiError {
    match err {
        ApiError::RequestFailed { status, .. } => match (status, photo_id) {
            (404, Some(id)) => PhotoApiError::NotFound { id },
            (401 | 403, _) => PhotoApiError::Unauthorized,
            (429, _) => PhotoApiError::RateLimited,
            _ => PhotoApiError::Remote { status },
        },
        ApiError::Network(e) if e.is_decode() => PhotoApiError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::Network(e) => PhotoApiError::Transport {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => PhotoApiError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => PhotoApiError::InvalidResponse {
            message: format!("could not build request URL: {e}"),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_record(photo: ApiPhoto) -> PhotoRecord {
    PhotoRecord {
        id: photo.id,
        width: photo.width,
        height: photo.height,
        photographer: photo.photographer,
        photographer_url: photo.photographer_url,
        src: PhotoSources {
            original: photo.src.original,
            large: photo.src.large,
            medium: photo.src.medium,
            small: photo.src.small,
        },
    }
}

fn to_page(page: ApiPhotoPage) -> PhotoPage {
    PhotoPage {
        page: page.page,
        per_page: page.per_page,
        photos: page.photos.into_iter().map(to_record).collect(),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> PhotoApiPort for PhotoClient<B> {
    async fn search(&self, query: &str, page: u32, per_page: u32) -> PhotoApiResult<PhotoPage> {
        self.search_page(query, page, per_page)
            .await
            .map(to_page)
            .map_err(|e| map_error(e, None))
    }

    async fn get_photo(&self, id: i64) -> PhotoApiResult<PhotoRecord> {
        self.photo(id)
            .await
            .map(to_record)
            .map_err(|e| map_error(e, Some(id)))
    }

    async fn curated(&self, page: u32, per_page: u32) -> PhotoApiResult<PhotoPage> {
        self.curated_page(page, per_page)
            .await
            .map(to_page)
            .map_err(|e| map_error(e, None))
    }
}
