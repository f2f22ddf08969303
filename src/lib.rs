//! # evhub
//!
//! An in-process publish/subscribe event hub.
//!
//! ## Architecture
//!
//! evhub is organized as a workspace with multiple crates:
//!
//! 1. **evhub-core** - Event hub, listeners, subscription handles, errors
//! 2. **evhub-settings** - Configuration files for the hub and logging
//! 3. **evhub** - Facade re-exports, logging setup and the demo binary
//!
//! ## Features
//!
//! - **Named events**: listeners registered per event name, invoked in order
//! - **Snapshot dispatch**: listeners may subscribe/unsubscribe mid-dispatch
//! - **Once listeners**: removed before their single invocation
//! - **Identity removal**: `off` matches the exact listener handle
//! - **Typed or dynamic payloads**: `EventHub<A>` or `DynHub` with `args!`

pub mod demo;

pub use evhub_core::{
    args, Args, DynHub, EventHub, FailurePolicy, HubConfig, HubError, Listener, ListenerError,
    ListenerResult, Result, SubscriptionId,
};

pub use evhub_settings::{
    default_config_path, Config, ConfigError, LogFormat, LoggingSettings, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - `RUST_LOG` taking precedence over the configured level
/// - Pretty or JSON console output
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    match settings.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
