//! Command handlers that delegate to the photo service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that validate CLI input, call the service or a
//!   coordinator, and format output for the terminal.
//!
//! Handlers never touch repositories or the database directly.

pub mod curated;
pub mod favorites;
pub mod history;
pub mod photo;
pub mod profile;
pub mod search;

use tokio::task::JoinHandle;

use crate::error::CliError;

/// Wait for a coordinator task.
async fn join<T>(handle: JoinHandle<T>) -> Result<T, CliError> {
    handle
        .await
        .map_err(|e| CliError::Service(format!("Background task failed: {e}")))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use async_trait::async_trait;
    use photodeck_core::{
        PhotoApiError, PhotoApiPort, PhotoApiResult, PhotoPage, PhotoRecord, PhotoSources,
        SearchConfig,
    };
    use photodeck_db::TestDb;

    use crate::bootstrap::{CliContext, bootstrap_with};

    pub fn photo(id: i64) -> PhotoRecord {
        PhotoRecord {
            id,
            width: 1200,
            height: 800,
            photographer: format!("Photographer {id}"),
            photographer_url: format!("https://www.pexels.com/@p{id}"),
            src: PhotoSources {
                original: format!("https://images.example/{id}/o.jpeg"),
                large: format!("https://images.example/{id}/l.jpeg"),
                medium: format!("https://images.example/{id}/m.jpeg"),
                small: format!("https://images.example/{id}/s.jpeg"),
            },
        }
    }

    /// Serves `full_pages` pages, then empty ones. Unknown ids are missing;
    /// `offline` turns every call into a transport failure.
    pub struct StubApi {
        pub full_pages: u32,
        pub offline: bool,
    }

    impl StubApi {
        fn check_online(&self) -> PhotoApiResult<()> {
            if self.offline {
                return Err(PhotoApiError::Transport {
                    message: "connection refused".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PhotoApiPort for StubApi {
        async fn search(&self, _query: &str, page: u32, per_page: u32) -> PhotoApiResult<PhotoPage> {
            self.check_online()?;
            let photos = if page <= self.full_pages {
                let start = i64::from((page - 1) * per_page);
                (start..start + i64::from(per_page)).map(photo).collect()
            } else {
                Vec::new()
            };
            Ok(PhotoPage {
                page,
                per_page,
                photos,
            })
        }

        async fn get_photo(&self, id: i64) -> PhotoApiResult<PhotoRecord> {
            self.check_online()?;
            if (0..100).contains(&id) {
                Ok(photo(id))
            } else {
                Err(PhotoApiError::NotFound { id })
            }
        }

        async fn curated(&self, page: u32, per_page: u32) -> PhotoApiResult<PhotoPage> {
            self.search("", page, per_page).await
        }
    }

    /// Context over an in-memory database. The `TestDb` must outlive it.
    pub async fn context(api: StubApi) -> (CliContext, TestDb) {
        let db = TestDb::new().await.unwrap();
        let ctx = bootstrap_with(Arc::new(api), db.repos(), SearchConfig::new());
        (ctx, db)
    }

    pub async fn online(full_pages: u32) -> (CliContext, TestDb) {
        context(StubApi {
            full_pages,
            offline: false,
        })
        .await
    }
}
