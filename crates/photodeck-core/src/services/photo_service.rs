//! Photo service - the single mediator between the remote photo service and
//! the local store.
//!
//! Only this service calls the remote API or writes to the favorites,
//! history and profile tables. Every operation returns a `Result`; nothing
//! here panics or lets a transport error escape as anything else.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::domain::{
    FavoritePhoto, HISTORY_LIMIT, PROFILE_UID, PhotoPage, PhotoRecord, SUGGESTION_LIMIT,
    SearchHistoryEntry, UserProfile, normalize_query,
};
use crate::ports::{PhotoApiError, PhotoApiPort, Repos, RepositoryError};

/// Uniform failure type of the photo service.
#[derive(Debug, Error)]
pub enum PhotoServiceError {
    /// The remote photo service failed (transport or application level).
    #[error(transparent)]
    Api(#[from] PhotoApiError),

    /// The local store failed.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl PhotoServiceError {
    /// Whether the failure is a connectivity problem.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_transport())
    }
}

/// Mediates between the remote photo service and the persisted tables.
pub struct PhotoService {
    api: Arc<dyn PhotoApiPort>,
    repos: Repos,
    history_limit: usize,
    suggestion_limit: usize,
}

impl PhotoService {
    /// Create a new photo service.
    pub fn new(api: Arc<dyn PhotoApiPort>, repos: Repos) -> Self {
        Self {
            api,
            repos,
            history_limit: HISTORY_LIMIT,
            suggestion_limit: SUGGESTION_LIMIT,
        }
    }

    /// Override the history bound and suggestion count.
    #[must_use]
    pub const fn with_limits(mut self, history_limit: usize, suggestion_limit: usize) -> Self {
        self.history_limit = history_limit;
        self.suggestion_limit = suggestion_limit;
        self
    }

    // ==================== PHOTOS ====================

    /// Search the remote service.
    ///
    /// On success the query is recorded in search history and the photos are
    /// returned exactly as ranked by the service. Failures are returned as-is;
    /// there is no fallback to locally stored photos.
    pub async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<PhotoRecord>, PhotoServiceError> {
        debug!(query, page, per_page, "Searching photos");

        match self.api.search(query, page, per_page).await {
            Ok(result) => {
                self.remember_query(query).await;
                debug!(query, page, count = result.photos.len(), "Photos received");
                Ok(result.photos)
            }
            Err(e) if e.is_transport() => {
                warn!(query, page, error = %e, "Photo search failed: service unreachable");
                Err(e.into())
            }
            Err(e) => {
                error!(query, page, error = %e, "Photo search failed");
                Err(e.into())
            }
        }
    }

    /// Resolve a photo, preferring the stored favorite over the network.
    ///
    /// A favorited photo is served from the store even if its metadata has
    /// since changed remotely.
    pub async fn get_photo_by_id(&self, id: i64) -> Result<PhotoRecord, PhotoServiceError> {
        match self.repos.favorites.get(id).await {
            Ok(Some(favorite)) => {
                debug!(id, "Photo served from favorites");
                return Ok(favorite.into());
            }
            Ok(None) => {}
            Err(e) => warn!(id, error = %e, "Favorites lookup failed, trying network"),
        }

        debug!(id, "Fetching photo from network");
        self.api.get_photo(id).await.map_err(|e| {
            error!(id, error = %e, "Failed to fetch photo");
            e.into()
        })
    }

    /// Fetch a page of curated photos. Does not touch search history.
    pub async fn curated_photos(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<PhotoPage, PhotoServiceError> {
        debug!(page, per_page, "Fetching curated photos");
        self.api.curated(page, per_page).await.map_err(|e| {
            error!(page, error = %e, "Failed to fetch curated photos");
            e.into()
        })
    }

    // ==================== FAVORITES ====================

    /// Add the photo to favorites, or remove it if already present.
    ///
    /// Returns the new membership. The check and the write are separate store
    /// calls; the store has a single writer so they cannot interleave with
    /// another toggle in practice.
    pub async fn toggle_favorite(&self, photo: &PhotoRecord) -> Result<bool, PhotoServiceError> {
        if self.repos.favorites.exists(photo.id).await? {
            debug!(id = photo.id, "Removing favorite");
            self.repos.favorites.delete(photo.id).await?;
            Ok(false)
        } else {
            debug!(id = photo.id, "Adding favorite");
            self.repos.favorites.upsert(&photo.to_favorite()).await?;
            Ok(true)
        }
    }

    /// Whether the photo is currently a favorite.
    pub async fn is_favorite(&self, id: i64) -> Result<bool, PhotoServiceError> {
        Ok(self.repos.favorites.exists(id).await?)
    }

    /// All favorites as API-shaped photos, most recently saved first.
    pub async fn list_favorites(&self) -> Result<Vec<PhotoRecord>, PhotoServiceError> {
        let favorites = self.repos.favorites.list().await?;
        Ok(favorites.into_iter().map(PhotoRecord::from).collect())
    }

    /// Number of stored favorites.
    pub async fn favorites_count(&self) -> Result<i64, PhotoServiceError> {
        Ok(self.repos.favorites.count().await?)
    }

    /// Remove every favorite.
    pub async fn clear_favorites(&self) -> Result<(), PhotoServiceError> {
        self.repos.favorites.delete_all().await?;
        debug!("Favorites cleared");
        Ok(())
    }

    // ==================== HISTORY ====================

    /// Record a successful search. Storage failures are logged, not returned,
    /// so they never fail the search that triggered them.
    async fn remember_query(&self, query: &str) {
        let Some(normalized) = normalize_query(query) else {
            return;
        };

        let now = Utc::now().timestamp_millis();
        match self
            .repos
            .history
            .record(&normalized, now, self.history_limit)
            .await
        {
            Ok(()) => debug!(query = %normalized, "Search saved to history"),
            Err(e) => warn!(query = %normalized, error = %e, "Failed to save search history"),
        }
    }

    /// Up to five most recent history entries starting with `prefix`
    /// (compared lower-cased), most recent first.
    pub async fn search_in_history(
        &self,
        prefix: &str,
    ) -> Result<Vec<SearchHistoryEntry>, PhotoServiceError> {
        let prefix = prefix.to_lowercase();
        Ok(self
            .repos
            .history
            .search_prefix(&prefix, self.suggestion_limit)
            .await?)
    }

    /// The most recent history entries.
    pub async fn recent_searches(&self) -> Result<Vec<SearchHistoryEntry>, PhotoServiceError> {
        Ok(self.repos.history.recent(self.history_limit).await?)
    }

    /// Delete all history.
    pub async fn clear_search_history(&self) -> Result<(), PhotoServiceError> {
        self.repos.history.clear().await?;
        debug!("Search history cleared");
        Ok(())
    }

    // ==================== PROFILE ====================

    /// Overwrite the singleton profile row.
    pub async fn save_user_profile(
        &self,
        name: &str,
        avatar: Option<&str>,
    ) -> Result<(), PhotoServiceError> {
        let profile = UserProfile::new(name, avatar.map(str::to_string));
        self.repos.profile.save(&profile).await?;
        debug!(uid = PROFILE_UID, name, "Profile saved");
        Ok(())
    }

    /// Point read of the profile row.
    pub async fn get_user_profile(&self) -> Result<Option<UserProfile>, PhotoServiceError> {
        Ok(self.repos.profile.load().await?)
    }

    // ==================== OBSERVATION ====================

    /// Observe the favorites table.
    pub async fn watch_favorites(
        &self,
    ) -> Result<watch::Receiver<Vec<FavoritePhoto>>, PhotoServiceError> {
        Ok(self.repos.favorites.subscribe().await?)
    }

    /// Observe the ten most recent searches.
    pub async fn watch_recent_searches(
        &self,
    ) -> Result<watch::Receiver<Vec<SearchHistoryEntry>>, PhotoServiceError> {
        Ok(self.repos.history.subscribe().await?)
    }

    /// Observe the profile row.
    pub async fn watch_profile(
        &self,
    ) -> Result<watch::Receiver<Option<UserProfile>>, PhotoServiceError> {
        Ok(self.repos.profile.subscribe().await?)
    }
}
