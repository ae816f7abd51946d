//! Kupu - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs the requested command
//! against a trie seeded from the configured dataset.

use std::io;
use std::process;

use clap::Parser;
use kupu_lib::cli::{self, Args};
use kupu_lib::config::{ConfigLoader, LogConfig, ENV_PREFIX};
use kupu_lib::error::KupuResult;
use kupu_lib::logging;
use tracing::info;

/// Main entry point for the application.
fn main() -> KupuResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            logging::init(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    if let Some(format) = args.format {
        config.output.format = format;
    }

    logging::init(&config.log)?;
    info!(version = kupu_lib::VERSION, "Starting kupu");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::run(args.command.unwrap_or_default(), &config, &mut out) {
        tracing::error!("Command failed: {}", e);
        process::exit(1);
    }
    Ok(())
}
