//! Persistence: data directory resolution and the blob database.

pub mod database;

pub use database::Database;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/daygrid[-dev]/` based on DAYGRID_ENV.
///
/// Set DAYGRID_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYGRID_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("daygrid-dev")
    } else {
        base_dir.join("daygrid")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
