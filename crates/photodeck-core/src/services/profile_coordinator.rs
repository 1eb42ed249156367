//! Profile editing coordinator.
//!
//! Edits are applied to the local state immediately and persisted in the
//! background. Every edit gets a version number; emissions from the profile
//! store are ignored while any edit is unsettled, so a stale snapshot can
//! never overwrite a newer local edit. Saves are serialized, and a save that
//! has been superseded by a later edit is skipped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::photo_service::PhotoService;
use crate::domain::UserProfile;

/// Profile as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub name: String,
    pub avatar: Option<String>,
    /// Set when the latest edit could not be persisted. The edited values
    /// stay displayed.
    pub save_error: Option<String>,
}

impl ProfileState {
    fn apply(&mut self, profile: &UserProfile) {
        self.name = profile.name.clone().unwrap_or_default();
        self.avatar.clone_from(&profile.avatar);
    }
}

#[derive(Debug, Default)]
struct EditVersions {
    issued: AtomicU64,
    settled: AtomicU64,
}

impl EditVersions {
    fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn settle(&self, version: u64) {
        self.settled.fetch_max(version, Ordering::SeqCst);
    }

    fn is_superseded(&self, version: u64) -> bool {
        self.issued.load(Ordering::SeqCst) > version
    }

    fn all_settled(&self) -> bool {
        self.settled.load(Ordering::SeqCst) >= self.issued.load(Ordering::SeqCst)
    }
}

/// Loads, displays and saves the user profile.
pub struct ProfileCoordinator {
    service: Arc<PhotoService>,
    state: Arc<watch::Sender<ProfileState>>,
    versions: Arc<EditVersions>,
    write_lock: Arc<Mutex<()>>,
    cancel: CancellationToken,
}

impl ProfileCoordinator {
    /// Create a coordinator and start observing the stored profile.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(service: Arc<PhotoService>) -> Self {
        let coordinator = Self {
            service,
            state: Arc::new(watch::channel(ProfileState::default()).0),
            versions: Arc::new(EditVersions::default()),
            write_lock: Arc::new(Mutex::new(())),
            cancel: CancellationToken::new(),
        };
        coordinator.spawn_observer();
        coordinator
    }

    /// Current profile, readable synchronously.
    pub fn profile(&self) -> ProfileState {
        self.state.borrow().clone()
    }

    /// Observe the displayed profile.
    pub fn watch(&self) -> watch::Receiver<ProfileState> {
        self.state.subscribe()
    }

    /// Apply an edit locally and persist it in the background.
    pub fn update_profile(&self, name: &str, avatar: Option<&str>) -> JoinHandle<()> {
        let version = self.versions.issue();
        let name = name.to_string();
        let avatar = avatar.map(str::to_string);

        self.state.send_modify(|s| {
            s.name.clone_from(&name);
            s.avatar.clone_from(&avatar);
            s.save_error = None;
        });
        debug!(version, "Profile edited");

        let service = self.service.clone();
        let state = self.state.clone();
        let versions = self.versions.clone();
        let write_lock = self.write_lock.clone();

        tokio::spawn(async move {
            let _guard = write_lock.lock().await;
            if versions.is_superseded(version) {
                debug!(version, "Skipping superseded profile save");
                versions.settle(version);
                return;
            }

            if let Err(e) = service.save_user_profile(&name, avatar.as_deref()).await {
                warn!(version, error = %e, "Failed to save profile");
                state.send_modify(|s| s.save_error = Some(e.to_string()));
            }
            versions.settle(version);
        })
    }

    fn spawn_observer(&self) {
        let service = self.service.clone();
        let state = self.state.clone();
        let versions = self.versions.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let mut rx = match service.watch_profile().await {
                Ok(rx) => rx,
                Err(e) => {
                    warn!(error = %e, "Failed to observe profile");
                    return;
                }
            };

            loop {
                let stored = rx.borrow_and_update().clone();
                match stored {
                    Some(profile) if versions.all_settled() => {
                        state.send_if_modified(|s| {
                            let before = s.clone();
                            s.apply(&profile);
                            *s != before
                        });
                    }
                    Some(_) => debug!("Ignoring profile emission during pending edit"),
                    None => {}
                }

                tokio::select! {
                    () = cancel.cancelled() => break,
                    changed = rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }
}

impl Drop for ProfileCoordinator {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
