//! Search session coordinator.
//!
//! Owns the mutable state of one search session (query, page counter,
//! accumulated results, loading and error flags) and drives the
//! [`PhotoService`]. State is published through `watch` channels so the
//! presentation layer can render the latest snapshot at any time.
//!
//! # Concurrency Model
//!
//! - At most one fetch is in flight. A new query aborts the previous fetch;
//!   a next-page request arriving while a fetch is running is dropped.
//! - Every query bumps a generation counter. Results tagged with an older
//!   generation are discarded, so a superseded response can never land.
//! - Dropping the coordinator cancels its token; in-flight fetches and the
//!   store observers stop without touching state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::photo_service::{PhotoService, PhotoServiceError};
use crate::config::SearchConfig;
use crate::domain::{PhotoRecord, SearchHistoryEntry};

/// Lifecycle phase of a search session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// No query submitted.
    #[default]
    Idle,
    /// First page in flight, no results shown.
    Loading,
    /// Results present (possibly empty), nothing in flight.
    Loaded,
    /// Results present, next page in flight.
    LoadingMore,
    /// First page failed, no results present.
    Failed,
}

/// Snapshot of a search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub phase: SearchPhase,
    /// Last submitted query text, as typed.
    pub query: Option<String>,
    /// 1-based number of the last page appended to `photos`.
    pub page: u32,
    /// Accumulated results in page order.
    pub photos: Vec<PhotoRecord>,
    /// Last failure, kept alongside results when a next-page fetch fails.
    pub error: Option<String>,
    /// Informational message, e.g. a query that matched nothing.
    pub notice: Option<String>,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            phase: SearchPhase::Idle,
            query: None,
            page: 1,
            photos: Vec::new(),
            error: None,
            notice: None,
            generation: 0,
        }
    }
}

impl SearchState {
    /// Whether a fetch is in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading | SearchPhase::LoadingMore)
    }

    /// A next-page failure that kept the earlier results.
    pub const fn has_error_with_results(&self) -> bool {
        self.error.is_some() && !self.photos.is_empty()
    }

    /// Reset to idle, keeping only the generation counter.
    fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}

/// Drives searches and pagination for one UI session.
pub struct SearchCoordinator {
    service: Arc<PhotoService>,
    page_size: u32,
    state: Arc<watch::Sender<SearchState>>,
    favorite_ids: Arc<watch::Sender<HashSet<i64>>>,
    recent: Arc<watch::Sender<Vec<SearchHistoryEntry>>>,
    in_flight: Mutex<Option<AbortHandle>>,
    cancel: CancellationToken,
}

impl SearchCoordinator {
    /// Create a coordinator and start observing favorites and history.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(service: Arc<PhotoService>, config: &SearchConfig) -> Self {
        let coordinator = Self {
            service,
            page_size: config.page_size,
            state: Arc::new(watch::channel(SearchState::default()).0),
            favorite_ids: Arc::new(watch::channel(HashSet::new()).0),
            recent: Arc::new(watch::channel(Vec::new()).0),
            in_flight: Mutex::new(None),
            cancel: CancellationToken::new(),
        };
        coordinator.spawn_observers();
        coordinator
    }

    /// Observe the search state.
    pub fn state(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Current search state.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Observe the set of favorited photo ids.
    pub fn favorite_ids(&self) -> watch::Receiver<HashSet<i64>> {
        self.favorite_ids.subscribe()
    }

    /// Observe the most recent searches.
    pub fn recent_searches(&self) -> watch::Receiver<Vec<SearchHistoryEntry>> {
        self.recent.subscribe()
    }

    /// O(1) membership check against the favorites mirror.
    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorite_ids.borrow().contains(&id)
    }

    /// Start a new search from page 1, replacing any previous results.
    ///
    /// Blank text resets the session to idle without a network call and
    /// returns `None`.
    pub fn submit_query(&self, text: &str) -> Option<JoinHandle<()>> {
        if text.trim().is_empty() {
            debug!("Blank query, clearing results");
            self.clear();
            return None;
        }

        self.abort_in_flight();

        let query = text.to_string();
        let mut generation = 0;
        self.state.send_modify(|s| {
            s.reset();
            s.phase = SearchPhase::Loading;
            s.query = Some(query.clone());
            generation = s.generation;
        });
        debug!(query = %query, generation, "Submitting query");

        let service = self.service.clone();
        let state = self.state.clone();
        let cancel = self.cancel.clone();
        let page_size = self.page_size;

        let handle = tokio::spawn(async move {
            let result = tokio::select! {
                () = cancel.cancelled() => return,
                result = service.search_photos(&query, 1, page_size) => result,
            };

            state.send_if_modified(|s| {
                if s.generation != generation {
                    debug!(query = %query, "Discarding superseded results");
                    return false;
                }
                match result {
                    Ok(photos) => {
                        if photos.is_empty() {
                            s.notice = Some(format!("No results for \"{query}\""));
                        }
                        s.photos = photos;
                        s.phase = SearchPhase::Loaded;
                    }
                    Err(e) => {
                        s.photos.clear();
                        s.error = Some(failure_message(&e));
                        s.phase = SearchPhase::Failed;
                    }
                }
                true
            });
        });

        self.track(&handle);
        Some(handle)
    }

    /// Fetch and append the next page of the current query.
    ///
    /// Returns `None` when dropped: a fetch is already in flight or no query
    /// has been submitted. An empty page is treated as the end of results and
    /// leaves the page counter where it was, as does a failure.
    pub fn load_next_page(&self) -> Option<JoinHandle<()>> {
        let mut dispatch = None;
        self.state.send_if_modified(|s| {
            if s.is_loading() {
                return false;
            }
            let Some(query) = s.query.clone() else {
                return false;
            };
            s.page += 1;
            s.phase = SearchPhase::LoadingMore;
            s.error = None;
            dispatch = Some((query, s.page, s.generation));
            true
        });

        let Some((query, page, generation)) = dispatch else {
            debug!("Next page request dropped");
            return None;
        };
        debug!(query = %query, page, "Loading next page");

        let service = self.service.clone();
        let state = self.state.clone();
        let cancel = self.cancel.clone();
        let page_size = self.page_size;

        let handle = tokio::spawn(async move {
            let result = tokio::select! {
                () = cancel.cancelled() => return,
                result = service.search_photos(&query, page, page_size) => result,
            };

            state.send_if_modified(|s| {
                if s.generation != generation {
                    return false;
                }
                s.phase = SearchPhase::Loaded;
                match result {
                    Ok(more) if more.is_empty() => {
                        debug!(query = %query, page, "Empty page, end of results");
                        s.page = s.page.saturating_sub(1);
                    }
                    Ok(more) => s.photos.extend(more),
                    Err(e) => {
                        s.page = s.page.saturating_sub(1);
                        s.error = Some(failure_message(&e));
                    }
                }
                true
            });
        });

        self.track(&handle);
        Some(handle)
    }

    /// Toggle a photo's favorite membership.
    ///
    /// The favorites mirror is refreshed by the store observer, not by this
    /// call, so it converges shortly after the returned task completes.
    pub fn toggle_favorite(
        &self,
        photo: PhotoRecord,
    ) -> JoinHandle<Result<bool, PhotoServiceError>> {
        let service = self.service.clone();
        tokio::spawn(async move {
            let result = service.toggle_favorite(&photo).await;
            if let Err(e) = &result {
                warn!(id = photo.id, error = %e, "Failed to toggle favorite");
            }
            result
        })
    }

    /// History entries matching a typed prefix, for suggestions.
    pub async fn history_suggestions(
        &self,
        prefix: &str,
    ) -> Result<Vec<SearchHistoryEntry>, PhotoServiceError> {
        self.service.search_in_history(prefix).await
    }

    /// Reset to idle, discarding query, page counter, results and error.
    pub fn clear(&self) {
        self.abort_in_flight();
        self.state.send_modify(SearchState::reset);
    }

    fn track(&self, handle: &JoinHandle<()>) {
        let mut slot = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(handle.abort_handle());
    }

    fn abort_in_flight(&self) {
        let previous = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = previous {
            handle.abort();
        }
    }

    fn spawn_observers(&self) {
        let service = self.service.clone();
        let favorite_ids = self.favorite_ids.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            match service.watch_favorites().await {
                Ok(rx) => {
                    mirror(rx, &*favorite_ids, &cancel, |favorites| {
                        favorites.iter().map(|f| f.id).collect()
                    })
                    .await;
                }
                Err(e) => warn!(error = %e, "Failed to observe favorites"),
            }
        });

        let service = self.service.clone();
        let recent = self.recent.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            match service.watch_recent_searches().await {
                Ok(rx) => mirror(rx, &*recent, &cancel, Clone::clone).await,
                Err(e) => warn!(error = %e, "Failed to observe search history"),
            }
        });
    }
}

impl Drop for SearchCoordinator {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.abort_in_flight();
    }
}

/// Copy every snapshot from `source` into `target` through `map` until the
/// source closes or the session is cancelled.
async fn mirror<T, U>(
    mut source: watch::Receiver<T>,
    target: &watch::Sender<U>,
    cancel: &CancellationToken,
    map: impl Fn(&T) -> U,
) {
    loop {
        let value = map(&*source.borrow_and_update());
        target.send_replace(value);

        tokio::select! {
            () = cancel.cancelled() => break,
            changed = source.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
}

fn failure_message(err: &PhotoServiceError) -> String {
    err.to_string()
}
