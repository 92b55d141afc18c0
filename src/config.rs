use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pricing::RateTable;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub pricing: RateTable,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("PRICING").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    // Every (provider, service) cell must hold a usable rate. Missing cells
    // are already rejected during deserialization.
    cfg.pricing.validate()?;

    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("Invalid server host: {}", cfg.server.host);
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!(
            "Metrics endpoint must be an absolute path: {}",
            cfg.metrics.endpoint
        );
    }

    Ok(())
}
