//! Row mapping helpers for `SQLite` queries.

use photodeck_core::{FavoritePhoto, RepositoryError, SearchHistoryEntry, UserProfile};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for favorite queries.
pub const FAVORITE_SELECT_COLUMNS: &str = "id, photographer, photographer_url, width, height, url_original, url_large, url_medium, url_small, saved_at";

pub fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column).map_err(storage_error)
}

fn dimension(row: &SqliteRow, column: &str) -> Result<u32, RepositoryError> {
    let raw: i64 = get(row, column)?;
    u32::try_from(raw).map_err(|_| {
        RepositoryError::Serialization(format!("{column} out of range: {raw}"))
    })
}

/// Parse a `favorite_photos` row.
pub fn row_to_favorite(row: &SqliteRow) -> Result<FavoritePhoto, RepositoryError> {
    Ok(FavoritePhoto {
        id: get(row, "id")?,
        photographer: get(row, "photographer")?,
        photographer_url: get(row, "photographer_url")?,
        width: dimension(row, "width")?,
        height: dimension(row, "height")?,
        url_original: get(row, "url_original")?,
        url_large: get(row, "url_large")?,
        url_medium: get(row, "url_medium")?,
        url_small: get(row, "url_small")?,
        saved_at: get(row, "saved_at")?,
    })
}

/// Parse a `search_history` row.
pub fn row_to_history_entry(row: &SqliteRow) -> Result<SearchHistoryEntry, RepositoryError> {
    Ok(SearchHistoryEntry {
        id: get(row, "id")?,
        query: get(row, "search_query")?,
        searched_at: get(row, "searched_at")?,
    })
}

/// Parse the `user_profile` row.
pub fn row_to_profile(row: &SqliteRow) -> Result<UserProfile, RepositoryError> {
    Ok(UserProfile {
        name: get(row, "name")?,
        avatar: get(row, "photo_uri")?,
    })
}
