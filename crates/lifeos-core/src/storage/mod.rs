mod config;
pub mod kv;
pub mod migrations;

pub use config::{Config, RitualConfig, THEMES, FONTS};
pub use kv::{KvStore, StoreKey};

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns `~/.config/lifeos[-dev]/` based on LIFEOS_ENV.
///
/// Set LIFEOS_ENV=dev to use the development data directory, or
/// LIFEOS_DATA_DIR to point somewhere else entirely (tests do this).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    if let Ok(dir) = std::env::var("LIFEOS_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFEOS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lifeos-dev")
    } else {
        base_dir.join("lifeos")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
