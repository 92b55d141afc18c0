use anyhow::Result;
use colored::Colorize;
use multicloud_pricing::config;
use multicloud_pricing::pricing::{ProviderId, ServiceKind};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration. The rate table carries no secrets,
/// so nothing needs masking.
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Providers: {}", ProviderId::ALL.len());
    println!("  Services: {}", ServiceKind::ALL.len());
    println!("  Listen address: {}:{}", cfg.server.host, cfg.server.port);

    info!("Configuration validation successful");
    Ok(())
}
