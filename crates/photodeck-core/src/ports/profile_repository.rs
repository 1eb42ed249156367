//! User profile repository port definition.

use async_trait::async_trait;
use tokio::sync::watch;

use super::RepositoryError;
use crate::domain::UserProfile;

/// Port for the singleton user profile row.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Create or overwrite the profile row.
    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError>;

    /// Point read of the profile row.
    async fn load(&self) -> Result<Option<UserProfile>, RepositoryError>;

    /// Change only the display name of an existing row.
    async fn update_name(&self, name: &str) -> Result<(), RepositoryError>;

    /// Change only the avatar of an existing row.
    async fn update_avatar(&self, avatar: Option<&str>) -> Result<(), RepositoryError>;

    /// Remove the profile row.
    async fn delete(&self) -> Result<(), RepositoryError>;

    /// Observe the profile row (`None` until first saved).
    async fn subscribe(&self) -> Result<watch::Receiver<Option<UserProfile>>, RepositoryError>;
}
