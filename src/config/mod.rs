// SPDX-License-Identifier: MPL-2.0
//! Provider configuration: endpoint components, API key, and the default
//! page size, loaded from and saved to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use geolens::config::{self, ProviderConfig};
//!
//! // Load existing configuration, falling back to defaults
//! let mut config = config::load().unwrap_or_default();
//!
//! // Set the API key
//! config.api_key = "0123456789abcdef".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::domain::search::page_bounds;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "geolens";

// =============================================================================
// ConfigError
// =============================================================================

/// Failure while reading or writing the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError(err.to_string())
    }
}

// =============================================================================
// ProviderConfig
// =============================================================================

/// Connection settings for the photo-search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// URL scheme of the provider endpoint.
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Provider host name.
    #[serde(default = "default_host")]
    pub host: String,
    /// REST API path on the host.
    #[serde(default = "default_rest_path")]
    pub rest_path: String,
    /// Static API key sent with every search request.
    #[serde(default)]
    pub api_key: String,
    /// Page size used when the caller does not specify one.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_scheme() -> String {
    defaults::DEFAULT_SCHEME.to_string()
}

fn default_host() -> String {
    defaults::DEFAULT_HOST.to_string()
}

fn default_rest_path() -> String {
    defaults::DEFAULT_REST_PATH.to_string()
}

fn default_page_size() -> u32 {
    page_bounds::DEFAULT
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
            rest_path: default_rest_path(),
            api_key: String::new(),
            page_size: default_page_size(),
        }
    }
}

impl ProviderConfig {
    /// Returns the default configuration carrying the given API key.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory, falling
/// back to defaults when no file exists.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file exists but cannot be read.
pub fn load() -> Result<ProviderConfig, ConfigError> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ProviderConfig::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be written.
pub fn save(config: &ProviderConfig) -> Result<(), ConfigError> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from a specific path. Unparseable content
/// falls back to the defaults rather than failing.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<ProviderConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves the configuration to a specific path, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns a [`ConfigError`] if serialization or the write fails.
pub fn save_to_path(config: &ProviderConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
