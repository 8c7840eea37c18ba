mod template_store;

pub use template_store::{
    FileTemplateStore, TemplateStore, DEFAULT_TEMPLATE, LEGACY_DEFAULT_TEMPLATE,
};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/timetally[-dev]/` based on TIMETALLY_ENV.
///
/// Set TIMETALLY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TIMETALLY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("timetally-dev")
    } else {
        base_dir.join("timetally")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
