//! URL construction helpers for the photo service.
//!
//! Pure functions; paths are resolved relative to the configured base URL.

use url::Url;

use crate::error::ApiResult;

/// Largest page size the service accepts.
const MAX_PER_PAGE: u32 = 80;

fn endpoint(base: &Url, path: &str) -> ApiResult<Url> {
    Ok(base.join(path)?)
}

fn paging(page: u32, per_page: u32) -> String {
    format!(
        "page={}&per_page={}",
        page.max(1),
        per_page.clamp(1, MAX_PER_PAGE)
    )
}

/// `v1/search?query=…&page=…&per_page=…`
pub fn build_search_url(base: &Url, query: &str, page: u32, per_page: u32) -> ApiResult<Url> {
    let mut url = endpoint(base, "v1/search")?;
    url.set_query(Some(&format!(
        "query={}&{}",
        urlencoding::encode(query.trim()),
        paging(page, per_page)
    )));
    Ok(url)
}

/// `v1/photos/{id}`
pub fn build_photo_url(base: &Url, id: i64) -> ApiResult<Url> {
    endpoint(base, &format!("v1/photos/{id}"))
}

/// `v1/curated?page=…&per_page=…`
pub fn build_curated_url(base: &Url, page: u32, per_page: u32) -> ApiResult<Url> {
    let mut url = endpoint(base, "v1/curated")?;
    url.set_query(Some(&paging(page, per_page)));
    Ok(url)
}
