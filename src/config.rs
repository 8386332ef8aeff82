//! Configuration management for the validator bridge.
//!
//! Handles:
//! - Default validation format and error limit
//! - Log level
//! - Loading from a TOML file, located via `AMP_VALIDATOR_CONFIG` or the user
//!   config directory

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::UNLIMITED_ERRORS;
use crate::validation::DEFAULT_FORMAT;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "AMP_VALIDATOR_CONFIG";

/// Combined configuration for the validator bridge
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Format used when a caller gives no hint
    pub default_format: String,
    /// Maximum findings requested from the engine, -1 for all
    pub max_errors: i32,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: DEFAULT_FORMAT.to_string(),
            max_errors: UNLIMITED_ERRORS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the first source that exists:
    /// `$AMP_VALIDATOR_CONFIG`, then `<config dir>/amp-validator/config.toml`,
    /// then built-in defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Standard location of the user config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("amp-validator").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.default_format.trim().is_empty() {
            anyhow::bail!("default_format must not be empty");
        }
        Ok(config)
    }
}
