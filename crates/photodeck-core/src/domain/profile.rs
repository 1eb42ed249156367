//! User profile domain types.

use serde::{Deserialize, Serialize};

/// Key of the single profile row. There is exactly one profile per install.
pub const PROFILE_UID: i64 = 1;

/// The persisted user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    /// Opaque locator for the avatar image (local path or remote URL).
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, avatar: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            avatar,
        }
    }

    /// Display name, empty when unset.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
