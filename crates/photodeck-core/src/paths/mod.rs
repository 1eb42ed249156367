//! Path utilities for photodeck data directories.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No terminal I/O; adapters decide how to report failures

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
