//! JSON files for the current settings and the preset list

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::StorageError;
use crate::settings::{AppearanceSettings, Preset};
use crate::state::{normalize_presets, PresetStore};

pub const SETTINGS_FILE: &str = "settings.json";
pub const PRESETS_FILE: &str = "presets.json";

/// Reads and writes `settings.json` and `presets.json` in one directory.
///
/// The plain `load_*`/`save_*` methods never fail: problems are logged and
/// loading falls back to defaults. The `try_*` forms return the error.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn presets_path(&self) -> PathBuf {
        self.dir.join(PRESETS_FILE)
    }

    pub fn try_load_settings(&self) -> Result<AppearanceSettings, StorageError> {
        let settings: AppearanceSettings = read_json(&self.settings_path())?;
        Ok(settings.clamped())
    }

    pub fn try_save_settings(&self, settings: &AppearanceSettings) -> Result<(), StorageError> {
        write_json(&self.settings_path(), "settings", settings)
    }

    pub fn try_load_presets(&self) -> Result<Vec<Preset>, StorageError> {
        let presets: Vec<Preset> = read_json(&self.presets_path())?;
        Ok(normalize_presets(presets))
    }

    pub fn try_save_presets(&self, presets: &[Preset]) -> Result<(), StorageError> {
        write_json(&self.presets_path(), "presets", presets)
    }

    /// Load the saved settings, or defaults if there are none
    pub fn load_settings(&self) -> AppearanceSettings {
        match self.try_load_settings() {
            Ok(settings) => {
                debug!(path = %self.settings_path().display(), "Loaded settings");
                settings
            }
            Err(e) => {
                log_load_failure(&e, "settings");
                AppearanceSettings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &AppearanceSettings) {
        match self.try_save_settings(settings) {
            Ok(()) => debug!(path = %self.settings_path().display(), "Saved settings"),
            Err(e) => warn!("Failed to save settings: {}", e),
        }
    }

    /// Load the saved presets, or an empty list if there are none
    pub fn load_presets(&self) -> Vec<Preset> {
        match self.try_load_presets() {
            Ok(presets) => {
                debug!(count = presets.len(), "Loaded presets");
                presets
            }
            Err(e) => {
                log_load_failure(&e, "presets");
                Vec::new()
            }
        }
    }
}

impl PresetStore for SettingsStore {
    fn save_presets(&self, presets: &[Preset]) {
        match self.try_save_presets(presets) {
            Ok(()) => debug!(count = presets.len(), "Saved presets"),
            Err(e) => warn!("Failed to save presets: {}", e),
        }
    }
}

fn log_load_failure(error: &StorageError, what: &str) {
    match error {
        StorageError::NotFound { .. } => info!("No saved {}, using defaults", what),
        _ => warn!("Failed to load {}, using defaults: {}", what, error),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StorageError::NotFound { path: path.to_path_buf() }
        } else {
            StorageError::Io { path: path.to_path_buf(), source }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write to a sibling temp file, then rename it over `path`
fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    what: &'static str,
    value: &T,
) -> Result<(), StorageError> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|source| StorageError::Serialize { what, source })?;

    let io_err = |source| StorageError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}
