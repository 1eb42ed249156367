//! In-memory store fakes shared by the service tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::{FavoritePhoto, HISTORY_LIMIT, SearchHistoryEntry, UserProfile};
use crate::ports::{
    FavoritesRepository, ProfileRepository, Repos, RepositoryError, SearchHistoryRepository,
};

pub struct MemoryFavorites {
    rows: Mutex<Vec<FavoritePhoto>>,
    tx: watch::Sender<Vec<FavoritePhoto>>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            tx: watch::channel(Vec::new()).0,
        }
    }

    fn snapshot(&self) -> Vec<FavoritePhoto> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        rows
    }

    fn publish(&self) {
        self.tx.send_replace(self.snapshot());
    }
}

#[async_trait]
impl FavoritesRepository for MemoryFavorites {
    async fn upsert(&self, favorite: &FavoritePhoto) -> Result<(), RepositoryError> {
        {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|f| f.id != favorite.id);
            rows.push(favorite.clone());
        }
        self.publish();
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Option<FavoritePhoto>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|f| f.id == id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|f| f.id == id))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().retain(|f| f.id != id);
        self.publish();
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().clear();
        self.publish();
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn list(&self) -> Result<Vec<FavoritePhoto>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn subscribe(&self) -> Result<watch::Receiver<Vec<FavoritePhoto>>, RepositoryError> {
        self.publish();
        Ok(self.tx.subscribe())
    }
}

pub struct MemoryHistory {
    rows: Mutex<Vec<SearchHistoryEntry>>,
    next_id: Mutex<i64>,
    tx: watch::Sender<Vec<SearchHistoryEntry>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            tx: watch::channel(Vec::new()).0,
        }
    }

    fn sorted(&self) -> Vec<SearchHistoryEntry> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.searched_at.cmp(&a.searched_at).then(b.id.cmp(&a.id)));
        rows
    }

    fn publish(&self) {
        let mut rows = self.sorted();
        rows.truncate(HISTORY_LIMIT);
        self.tx.send_replace(rows);
    }
}

#[async_trait]
impl SearchHistoryRepository for MemoryHistory {
    async fn record(
        &self,
        query: &str,
        searched_at: i64,
        keep: usize,
    ) -> Result<(), RepositoryError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = *next;
            *next += 1;
            id
        };
        {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|e| e.query != query);
            rows.push(SearchHistoryEntry {
                id,
                query: query.to_string(),
                searched_at,
            });
        }
        let mut kept = self.sorted();
        kept.truncate(keep);
        *self.rows.lock().unwrap() = kept;
        self.publish();
        Ok(())
    }

    async fn search_prefix(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<SearchHistoryEntry>, RepositoryError> {
        Ok(self
            .sorted()
            .into_iter()
            .filter(|e| e.query.starts_with(prefix))
            .take(limit)
            .collect())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<SearchHistoryEntry>, RepositoryError> {
        Ok(self.sorted().into_iter().take(limit).collect())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().clear();
        self.publish();
        Ok(())
    }

    async fn subscribe(
        &self,
    ) -> Result<watch::Receiver<Vec<SearchHistoryEntry>>, RepositoryError> {
        self.publish();
        Ok(self.tx.subscribe())
    }
}

pub struct MemoryProfile {
    row: Mutex<Option<UserProfile>>,
    tx: watch::Sender<Option<UserProfile>>,
    fail_saves: AtomicBool,
    save_delay: Mutex<Option<std::time::Duration>>,
}

impl MemoryProfile {
    pub fn new() -> Self {
        Self {
            row: Mutex::new(None),
            tx: watch::channel(None).0,
            fail_saves: AtomicBool::new(false),
            save_delay: Mutex::new(None),
        }
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn delay_saves(&self, delay: std::time::Duration) {
        *self.save_delay.lock().unwrap() = Some(delay);
    }

    /// Simulate a write from outside the coordinator.
    pub fn external_write(&self, profile: UserProfile) {
        *self.row.lock().unwrap() = Some(profile);
        self.publish();
    }

    fn publish(&self) {
        let row = self.row.lock().unwrap().clone();
        self.tx.send_replace(row);
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfile {
    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError> {
        let delay = *self.save_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("disk full".to_string()));
        }
        *self.row.lock().unwrap() = Some(profile.clone());
        self.publish();
        Ok(())
    }

    async fn load(&self) -> Result<Option<UserProfile>, RepositoryError> {
        Ok(self.row.lock().unwrap().clone())
    }

    async fn update_name(&self, name: &str) -> Result<(), RepositoryError> {
        if let Some(row) = self.row.lock().unwrap().as_mut() {
            row.name = Some(name.to_string());
        }
        self.publish();
        Ok(())
    }

    async fn update_avatar(&self, avatar: Option<&str>) -> Result<(), RepositoryError> {
        if let Some(row) = self.row.lock().unwrap().as_mut() {
            row.avatar = avatar.map(str::to_string);
        }
        self.publish();
        Ok(())
    }

    async fn delete(&self) -> Result<(), RepositoryError> {
        *self.row.lock().unwrap() = None;
        self.publish();
        Ok(())
    }

    async fn subscribe(&self) -> Result<watch::Receiver<Option<UserProfile>>, RepositoryError> {
        self.publish();
        Ok(self.tx.subscribe())
    }
}

/// In-memory stores plus the `Repos` wrapping them.
pub struct MemoryStores {
    pub favorites: Arc<MemoryFavorites>,
    pub history: Arc<MemoryHistory>,
    pub profile: Arc<MemoryProfile>,
}

impl MemoryStores {
    pub fn new() -> Self {
        Self {
            favorites: Arc::new(MemoryFavorites::new()),
            history: Arc::new(MemoryHistory::new()),
            profile: Arc::new(MemoryProfile::new()),
        }
    }

    pub fn repos(&self) -> Repos {
        Repos::new(
            self.favorites.clone(),
            self.history.clone(),
            self.profile.clone(),
        )
    }
}
