//! Configuration persistence utilities
//!
//! Settings live in a TOML file per app under the platform config directory.
//! The item list itself is not a setting; it goes through [`crate::storage`].

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::geometry::LayoutConfig;
use crate::physics::PhysicsConfig;
use crate::storage::DEFAULT_STORAGE_KEY;

/// Base URL used for exported links
pub const DEFAULT_SHARE_URL: &str = "https://picker-wheel.app/";

/// Error type for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for one wheel app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Page the exported links point at
    pub share_base_url: String,
    /// Name of the item list record
    pub storage_key: String,
    pub physics: PhysicsConfig,
    pub layout: LayoutConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            share_base_url: DEFAULT_SHARE_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            physics: PhysicsConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl WheelConfig {
    /// Load settings, writing defaults on first run
    ///
    /// Never fails: unreadable settings fall back to defaults.
    pub fn load_or_default(app_name: &str) -> Self {
        match load_config::<WheelConfig>(app_name) {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = WheelConfig::default();
                match save_config(app_name, &config) {
                    Ok(()) => info!(app = app_name, "wrote default settings"),
                    Err(e) => warn!(error = %e, "failed to write default settings"),
                }
                config
            }
            Err(e) => {
                warn!(error = %e, "failed to load settings, using defaults");
                WheelConfig::default()
            }
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "picker-wheel", "wheels")
}

/// Get the base configuration directory for all wheels
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the directory holding durable app data
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the configuration file path for a specific app
pub fn config_path(app_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", app_name)))
}

/// Load configuration for a specific app
///
/// Returns `None` if the config file doesn't exist yet.
/// Returns an error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>(app_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Save configuration for a specific app
pub fn save_config<T: Serialize>(app_name: &str, config: &T) -> Result<(), ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(&path, contents)?;
    Ok(())
}

/// Delete configuration for a specific app
pub fn delete_config(app_name: &str) -> Result<(), ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;

    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}
