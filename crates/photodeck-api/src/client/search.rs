//! Search and curated listings.

use tracing::debug;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::ApiPhotoPage;
use crate::url::{build_curated_url, build_search_url};

use super::PhotoClient;

impl<B: HttpBackend> PhotoClient<B> {
    /// Fetch one page of search results, in the service's ranking order.
    pub(crate) async fn search_page(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> ApiResult<ApiPhotoPage> {
        let url = build_search_url(&self.settings.base_url, query, page, per_page)?;
        let response: ApiPhotoPage = self.backend.get_json(&url).await?;
        debug!(
            query,
            page = response.page,
            count = response.photos.len(),
            "Search page received"
        );
        Ok(response)
    }

    /// Fetch one page of curated photos.
    pub(crate) async fn curated_page(&self, page: u32, per_page: u32) -> ApiResult<ApiPhotoPage> {
        let url = build_curated_url(&self.settings.base_url, page, per_page)?;
        self.backend.get_json(&url).await
    }
}
