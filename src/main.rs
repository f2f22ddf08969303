use evhub::{default_config_path, init_logging, Config, BUILD_DATE, VERSION};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let path = match std::env::var_os("EVHUB_CONFIG") {
        Some(path) => PathBuf::from(path),
        None => default_config_path()?,
    };
    let config = Config::load_or_default(&path)?;

    // Initialize logging
    init_logging(&config.logging)?;
    tracing::info!("evhub {} (built {})", VERSION, BUILD_DATE);

    let report = evhub::demo::run(config.hub)?;
    tracing::info!(
        "Served {} request(s), first from {:?}, {} listener(s) left",
        report.served.len(),
        report.first_source,
        report.remaining_listeners
    );

    Ok(())
}
