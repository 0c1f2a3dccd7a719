//! Crosshair Overlay - a customizable screen-center crosshair
//!
//! Draws a crosshair in a transparent, always-on-top window that never takes
//! mouse input, and offers a control panel to shape, color and save it.

mod color;
mod config;
mod dashboard;
mod hotkey;
mod overlay;
mod platform;
mod settings;
mod state;
mod storage;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{AppConfig, CONFIG_FILE};
use crate::settings::AppearanceSettings;
use crate::state::AppearanceState;
use crate::storage::SettingsStore;

/// Crosshair Overlay - screen-center crosshair with a control panel
#[derive(Parser, Debug)]
#[command(name = "crosshair-overlay")]
#[command(about = "A click-through crosshair overlay with a settings panel")]
struct Args {
    /// Directory for config.toml, settings.json and presets.json
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Start from the default appearance, ignoring saved settings
    #[arg(long)]
    reset: bool,

    /// Log filter, e.g. "debug" or "crosshair_overlay=trace"
    #[arg(long)]
    log_level: Option<String>,
}

/// What happened while looking for config.toml
enum ConfigSource {
    Loaded(PathBuf),
    Created(PathBuf),
    Defaults(String),
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = match &args.config_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create config directory {}", dir.display()))?;
            dir.clone()
        }
        None => storage::get_config_dir()?,
    };

    let (config, source) = load_or_create_config(&config_dir);
    init_logging(args.log_level.as_deref(), &config.general.log_level)?;

    info!("Crosshair overlay starting...");
    match source {
        ConfigSource::Loaded(path) => info!("Loaded configuration from {:?}", path),
        ConfigSource::Created(path) => info!("Wrote default configuration to {:?}", path),
        ConfigSource::Defaults(reason) => warn!("Using default configuration: {}", reason),
    }

    let store = SettingsStore::new(&config_dir);
    let settings = if args.reset {
        info!("Starting from the default appearance");
        AppearanceSettings::default()
    } else {
        store.load_settings()
    };
    let state = AppearanceState::new(settings, store.load_presets());
    info!(presets = state.presets().len(), "Appearance state ready");

    if let Err(e) = dashboard::run_control_panel(state, store, config) {
        error!("Control panel error: {}", e);
    }

    info!("Crosshair overlay shutdown complete");
    Ok(())
}

/// Install the global subscriber.
/// RUST_LOG wins over --log-level, which wins over config.toml.
fn init_logging(cli_level: Option<&str>, config_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(cli_level.unwrap_or(config_level)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Load configuration from file, writing the defaults on first run
fn load_or_create_config(config_dir: &Path) -> (AppConfig, ConfigSource) {
    let config_path = config_dir.join(CONFIG_FILE);

    if config_path.exists() {
        return match config::load_config(&config_path) {
            Ok(config) => (config, ConfigSource::Loaded(config_path)),
            Err(e) => (AppConfig::default(), ConfigSource::Defaults(e.to_string())),
        };
    }

    let config = AppConfig::default();
    match config::save_config(&config, &config_path) {
        Ok(()) => (config, ConfigSource::Created(config_path)),
        Err(e) => (config, ConfigSource::Defaults(e.to_string())),
    }
}
