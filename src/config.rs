//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. File and
//! environment loading need the `native` feature; the frontend only uses
//! the defaults.

use serde::Deserialize;
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use crate::panel::ResponseOrdering;
use crate::source::{DEFAULT_API_BASE, WEEKLY_VISITS_PATH};
use crate::theme::DEFAULT_MARKER_CLASS;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub panel: PanelConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weekly visits endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Unset means the HTTP client's own default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_endpoint_path() -> String {
    WEEKLY_VISITS_PATH.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint_path: default_endpoint_path(),
            request_timeout_secs: None,
        }
    }
}

/// Theme marker configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_marker_class")]
    pub marker_class: String,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_marker_class() -> String {
    DEFAULT_MARKER_CLASS.to_string()
}

fn default_poll_interval() -> u64 {
    500
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            marker_class: default_marker_class(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// Panel behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub response_ordering: ResponseOrdering,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(feature = "native")]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        if config.theme.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                error: "theme.poll_interval_ms must be at least 1".to_string(),
            });
        }

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("weekly-visits").join("config.toml")),
            Some(PathBuf::from("/etc/weekly-visits/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("WEEKLY_VISITS_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(marker) = std::env::var("WEEKLY_VISITS_MARKER_CLASS") {
            self.theme.marker_class = marker;
        }

        if let Ok(level) = std::env::var("WEEKLY_VISITS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("WEEKLY_VISITS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[cfg(feature = "native")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid setting in config file {path:?}: {error}")]
    Invalid { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Weekly Visits Configuration
#
# Environment variables override these settings:
# - WEEKLY_VISITS_API_URL
# - WEEKLY_VISITS_MARKER_CLASS
# - WEEKLY_VISITS_LOG_LEVEL
# - WEEKLY_VISITS_LOG_FORMAT

[api]
# Base URL of the service exposing /api/weekly-visits
base_url = "http://localhost:5000"

# Path of the weekly visits endpoint
endpoint_path = "/api/weekly-visits"

# Request timeout in seconds (omit to use the HTTP client default)
# request_timeout_secs = 30

[theme]
# Class on the root element that marks dark mode
marker_class = "dark-mode"

# How often the polling watcher re-reads the marker (ms)
poll_interval_ms = 500

[panel]
# How overlapping fetches are applied:
# "last-resolved" (whichever response arrives last wins) or
# "latest-issued" (only the most recently issued request may apply)
response_ordering = "last-resolved"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
