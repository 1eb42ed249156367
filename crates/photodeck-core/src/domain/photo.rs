//! Photo domain types.
//!
//! `PhotoRecord` is the transient, API-shaped photo. `FavoritePhoto` is the
//! persisted form kept in the favorites table. The two convert into each other
//! without losing any field that both sides carry.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Image variant URLs for a single photo, from largest to smallest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSources {
    pub original: String,
    pub large: String,
    pub medium: String,
    pub small: String,
}

/// A photo as returned by the remote photo service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: i64,
    pub width: u32,
    pub height: u32,
    pub photographer: String,
    pub photographer_url: String,
    pub src: PhotoSources,
}

impl PhotoRecord {
    /// Convert into a favorite record stamped with the current time.
    #[must_use]
    pub fn to_favorite(&self) -> FavoritePhoto {
        self.to_favorite_at(Utc::now().timestamp_millis())
    }

    /// Convert into a favorite record with an explicit saved-at timestamp
    /// (milliseconds since the Unix epoch).
    #[must_use]
    pub fn to_favorite_at(&self, saved_at: i64) -> FavoritePhoto {
        FavoritePhoto {
            id: self.id,
            photographer: self.photographer.clone(),
            photographer_url: self.photographer_url.clone(),
            width: self.width,
            height: self.height,
            url_original: self.src.original.clone(),
            url_large: self.src.large.clone(),
            url_medium: self.src.medium.clone(),
            url_small: self.src.small.clone(),
            saved_at,
        }
    }
}

/// One page of photo results, in the order the service ranked them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPage {
    /// 1-based page number echoed by the service.
    pub page: u32,
    pub per_page: u32,
    pub photos: Vec<PhotoRecord>,
}

impl PhotoPage {
    /// Whether the page carries no photos (end of results).
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// A photo persisted in the favorites table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePhoto {
    pub id: i64,
    pub photographer: String,
    pub photographer_url: String,
    pub width: u32,
    pub height: u32,
    pub url_original: String,
    pub url_large: String,
    pub url_medium: String,
    pub url_small: String,
    /// Milliseconds since the Unix epoch. Reset on every (re-)insert.
    pub saved_at: i64,
}

impl From<&FavoritePhoto> for PhotoRecord {
    fn from(fav: &FavoritePhoto) -> Self {
        Self {
            id: fav.id,
            width: fav.width,
            height: fav.height,
            photographer: fav.photographer.clone(),
            photographer_url: fav.photographer_url.clone(),
            src: PhotoSources {
                original: fav.url_original.clone(),
                large: fav.url_large.clone(),
                medium: fav.url_medium.clone(),
                small: fav.url_small.clone(),
            },
        }
    }
}

impl From<FavoritePhoto> for PhotoRecord {
    fn from(fav: FavoritePhoto) -> Self {
        Self {
            id: fav.id,
            width: fav.width,
            height: fav.height,
            photographer: fav.photographer,
            photographer_url: fav.photographer_url,
            src: PhotoSources {
                original: fav.url_original,
                large: fav.url_large,
                medium: fav.url_medium,
                small: fav.url_small,
            },
        }
    }
}

impl From<&PhotoRecord> for FavoritePhoto {
    fn from(photo: &PhotoRecord) -> Self {
        photo.to_favorite()
    }
}

#[cfg(test)]
pub(crate) fn sample_photo(id: i64) -> PhotoRecord {
    PhotoRecord {
        id,
        width: 4000 + u32::try_from(id % 100).unwrap_or(0),
        height: 3000,
        photographer: format!("Photographer {id}"),
        photographer_url: format!("https://photos.example/@p{id}"),
        src: PhotoSources {
            original: format!("https://img.example/{id}/original.jpg"),
            large: format!("https://img.example/{id}/large.jpg"),
            medium: format!("https://img.example/{id}/medium.jpg"),
            small: format!("https://img.example/{id}/small.jpg"),
        },
    }
}
