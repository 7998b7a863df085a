//! Configuration loading, validation, and management for Launchboard.
//!
//! Loads configuration from `~/.launchboard/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.launchboard/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Launch dataset location
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Payload range control settings
    #[serde(default)]
    pub slider: SliderConfig,

    /// Page settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub allow_public_bind: bool,
}

fn default_port() -> u16 {
    8050
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allow_public_bind: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Granularity of the payload range control, in kg
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_step() -> f64 {
    1000.0
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".into()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.launchboard/config.toml).
    ///
    /// Environment overrides, applied after the file:
    /// - `LAUNCHBOARD_DATASET`
    /// - `LAUNCHBOARD_HOST`
    /// - `LAUNCHBOARD_PORT`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `LAUNCHBOARD_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("LAUNCHBOARD_DATASET") {
            self.dataset.path = PathBuf::from(path);
        }

        if let Some(host) = lookup("LAUNCHBOARD_HOST") {
            self.gateway.host = host;
        }

        if let Some(port) = lookup("LAUNCHBOARD_PORT") {
            self.gateway.port = port.parse().map_err(|_| {
                ConfigError::ValidationError(format!("LAUNCHBOARD_PORT is not a valid port: {port}"))
            })?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".launchboard")
    }

    /// Path of the default config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.slider.step.is_finite() && self.slider.step > 0.0) {
            return Err(ConfigError::ValidationError(
                "slider.step must be a positive number".into(),
            ));
        }

        if self.gateway.host == "0.0.0.0" && !self.gateway.allow_public_bind {
            return Err(ConfigError::ValidationError(
                "gateway.host is 0.0.0.0 but allow_public_bind is false".into(),
            ));
        }

        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset.path must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// `host:port` the gateway binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.gateway.host, self.gateway.port)
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
