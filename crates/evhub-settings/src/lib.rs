//! evhub Settings Crate
//!
//! Handles configuration files for the event hub and logging.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, LogFormat, LoggingSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
