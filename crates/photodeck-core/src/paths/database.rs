//! Database path resolution.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// File name of the `SQLite` database.
pub const DATABASE_FILE: &str = "photodeck.db";

/// Get the path to the photodeck database file.
///
/// Returns `<data root>/data/photodeck.db`. The `data/` subdirectory is
/// created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database path under an explicit root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_path_in_creates_data_dir() {
        let temp = tempdir().unwrap();

        let path = database_path_in(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("data").join("photodeck.db"));
        assert!(temp.path().join("data").is_dir());
        assert!(!path.exists());
    }
}
