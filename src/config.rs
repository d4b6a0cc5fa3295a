//! Configuration management for Swote
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_BOOKS_URL, DEFAULT_CELL_HEIGHT_UNITS, DEFAULT_CELL_WIDTH_UNITS,
    DEFAULT_FETCH_TIMEOUT_SECS, MAX_CELL_UNITS, MAX_FETCH_TIMEOUT_SECS, MIN_CELL_UNITS,
};
use crate::gesture::CellScale;
use crate::local_storage::LocalStorage;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub remote: RemoteConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Remote book catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// URL answering `GET` with `{ books: [...] }`
    pub books_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (required for swipe gestures)
    pub mouse_enabled: bool,
    /// Width of one terminal cell in gesture distance units
    pub cell_width_units: u16,
    /// Height of one terminal cell in gesture distance units
    pub cell_height_units: u16,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for saved quotes and preferences (defaults to the XDG data dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            books_url: DEFAULT_BOOKS_URL.to_string(),
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            cell_width_units: DEFAULT_CELL_WIDTH_UNITS,
            cell_height_units: DEFAULT_CELL_HEIGHT_UNITS,
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl UiConfig {
    pub fn cell_scale(&self) -> CellScale {
        CellScale::new(self.cell_width_units, self.cell_height_units)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("swote.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("swote").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.remote.books_url.trim().is_empty() {
            anyhow::bail!("books_url cannot be empty");
        }

        if self.remote.timeout_secs == 0 || self.remote.timeout_secs > MAX_FETCH_TIMEOUT_SECS {
            anyhow::bail!(
                "timeout_secs must be between 1 and {}, got {}",
                MAX_FETCH_TIMEOUT_SECS,
                self.remote.timeout_secs
            );
        }

        for (name, value) in [
            ("cell_width_units", self.ui.cell_width_units),
            ("cell_height_units", self.ui.cell_height_units),
        ] {
            if !(MIN_CELL_UNITS..=MAX_CELL_UNITS).contains(&value) {
                anyhow::bail!(
                    "{} must be between {} and {}, got {}",
                    name,
                    MIN_CELL_UNITS,
                    MAX_CELL_UNITS,
                    value
                );
            }
        }

        Ok(())
    }

    /// Directory holding local storage and the log file
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => LocalStorage::default_dir().ok_or_else(|| anyhow::anyhow!("Could not determine data directory")),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Swote Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("swote"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
