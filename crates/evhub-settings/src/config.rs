//! Configuration and settings management for evhub
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, optionally stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Hub behaviour (failure policy, listener limit)
//! - Logging (level filter, output format)

pub use evhub_core::{FailurePolicy, HubConfig};

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the application directory under the platform config dir.
const APP_DIR: &str = "evhub";

/// Default config file name.
const CONFIG_FILE: &str = "config.toml";

const LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-line output
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter, overridden by `RUST_LOG`
    ///
    /// A bare level (`info`, `off`) or comma-separated directives such as
    /// `evhub=debug,warn`.
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event hub settings
    pub hub: HubConfig,
    /// Logging settings
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::LoadError {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No settings file at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|source| SettingsError::SaveError {
            path: path.display().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_filter(&self.logging.level).map_err(|reason| ConfigError::InvalidSetting {
            key: "logging.level".to_string(),
            reason,
        })
    }
}

fn is_level(value: &str) -> bool {
    LEVELS.iter().any(|level| level.eq_ignore_ascii_case(value))
}

/// Check a filter string of `level` or `target=level` directives
fn validate_filter(filter: &str) -> Result<(), String> {
    let directives: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .collect();
    if directives.is_empty() {
        return Err("empty level filter".to_string());
    }

    for directive in directives {
        match directive.rsplit_once('=') {
            None if is_level(directive) => {}
            None => return Err(format!("unknown level '{directive}'")),
            Some((target, _)) if target.trim().is_empty() => {
                return Err(format!("missing target in '{directive}'"));
            }
            Some((_, level)) if !is_level(level.trim()) => {
                return Err(format!("unknown level in '{directive}'"));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Platform config file location, e.g. `~/.config/evhub/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no config or home directory".to_string())
        })?;
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    Ok(path)
}
