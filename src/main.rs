//! Contact Book - Main entry point
//!
//! Runs the reference walkthrough of the address book and prints each step
//! to stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let loaded = Config::from_env();

    // RUST_LOG wins over the configured level
    let fallback = match &loaded {
        Ok(cfg) => cfg.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(log_level = %config.log_level, "Running contact book walkthrough");
    let stdout = std::io::stdout();
    contact_book::demo::run(&mut stdout.lock())?;

    info!("Contact book walkthrough complete");
    Ok(())
}
