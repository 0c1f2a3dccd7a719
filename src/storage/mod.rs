//! Storage Layer
//!
//! Handles persistence of the appearance settings and presets as JSON files
//! in the per-user configuration directory.

pub mod settings_store;

pub use settings_store::{SettingsStore, PRESETS_FILE, SETTINGS_FILE};

use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or writing the JSON files
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "crosshair-overlay", "CrosshairOverlay")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}
