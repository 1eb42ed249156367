//! Data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "PHOTODECK_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `PHOTODECK_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/photodeck`)
///
/// The directory is created if it does not exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var_os(DATA_DIR_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("photodeck"),
    };

    ensure_dir(&root)?;
    Ok(root)
}

pub(super) fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
