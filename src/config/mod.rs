//! Startup preferences from `config.toml`
//!
//! Log level, toggle hotkey and control panel size. The crosshair
//! appearance itself lives in the JSON files managed by [`crate::storage`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name inside the configuration directory
pub const CONFIG_FILE: &str = "config.toml";

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Overlay window settings
    pub overlay: OverlayConfig,
    /// Control panel window settings
    pub panel: PanelConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log filter used when neither RUST_LOG nor --log-level is given
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Overlay-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Global hotkey that shows or hides the crosshair, e.g. "Ctrl+Shift+H".
    /// Empty disables it.
    pub toggle_hotkey: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            toggle_hotkey: "Ctrl+Shift+H".to_string(),
        }
    }
}

impl OverlayConfig {
    /// The configured hotkey, or `None` when it is turned off
    pub fn toggle_hotkey(&self) -> Option<&str> {
        Some(self.toggle_hotkey.trim()).filter(|hotkey| !hotkey.is_empty())
    }
}

/// Control panel window size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}

/// Read and parse `config.toml`
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
}

/// Write `config` as TOML, creating the parent directory if needed
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.overlay.toggle_hotkey(), Some("Ctrl+Shift+H"));
        assert_eq!((config.panel.width, config.panel.height), (420.0, 560.0));
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let parsed: AppConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.general.log_level, "info");
        assert!(parsed.overlay.toggle_hotkey().is_some());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str("[panel]\nwidth = 300.0\n").unwrap();

        assert_eq!(parsed.panel.width, 300.0);
        assert_eq!(parsed.panel.height, 560.0);
        assert_eq!(parsed.general.log_level, "info");
    }

    #[test]
    fn test_hotkey_can_be_disabled() {
        let mut config = AppConfig::default();
        config.overlay.toggle_hotkey = String::new();
        config.general.log_level = "crosshair_overlay=debug".to_string();

        let parsed: AppConfig = toml::from_str(&toml::to_string_pretty(&config).unwrap()).unwrap();

        assert!(parsed.overlay.toggle_hotkey().is_none());
        assert_eq!(parsed.general.log_level, "crosshair_overlay=debug");
    }

    #[test]
    fn test_disabled_hotkey_survives_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = AppConfig::default();
        config.overlay.toggle_hotkey = String::new();

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded.overlay.toggle_hotkey, "");
        assert!(loaded.overlay.toggle_hotkey().is_none());
    }

    #[test]
    fn test_blank_hotkey_is_off() {
        let parsed: AppConfig = toml::from_str("[overlay]\ntoggle_hotkey = \"  \"\n").unwrap();
        assert!(parsed.overlay.toggle_hotkey().is_none());
    }

    #[test]
    fn test_save_creates_directory_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let mut config = AppConfig::default();
        config.overlay.toggle_hotkey = "F9".to_string();

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded.overlay.toggle_hotkey(), Some("F9"));
    }

    #[test]
    fn test_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join(CONFIG_FILE);
        let err = load_config(&missing).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));

        std::fs::write(&missing, "[panel\nwidth = ").unwrap();
        let err = load_config(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
