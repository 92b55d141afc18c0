use anyhow::Result;
use colored::Colorize;
use multicloud_pricing::{config, server};
use std::path::PathBuf;
use tracing::info;

/// Execute the start command
///
/// Loads configuration, then runs the server in the foreground until a
/// shutdown signal arrives.
pub async fn execute(config_path: PathBuf) -> Result<()> {
    println!("{}", "Starting pricing service in foreground mode...".green());

    // Load configuration
    let cfg = config::load_config(&config_path)?;
    info!("Configuration loaded from {}", config_path.display());

    // Start the server (blocks until shutdown)
    server::start_server(cfg, config_path).await?;

    Ok(())
}
