//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `photo` - API photos, favorites and the conversions between them
//! - `history` - Search history rows and query normalization
//! - `profile` - The singleton user profile

mod history;
mod photo;
mod profile;

pub use history::{HISTORY_LIMIT, SUGGESTION_LIMIT, SearchHistoryEntry, normalize_query};
pub use photo::{FavoritePhoto, PhotoPage, PhotoRecord, PhotoSources};
pub use profile::{PROFILE_UID, UserProfile};

#[cfg(test)]
pub(crate) use photo::sample_photo;
