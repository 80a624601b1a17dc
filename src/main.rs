//! DriveView command-line client.
//!
//! Loads configuration, initializes logging, and dispatches to the
//! requested command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use driveview_cli::Cli;
use driveview_core::config::ClientConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::debug!(snapshot = %config.drive.snapshot_path, "Configuration loaded");

    if let Err(e) = cli.execute(&config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &ClientConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
