//! Service config loader (strict parsing).

pub mod schema;

use std::fs;

use wpgauge_core::error::{GaugeError, Result};

pub use schema::{GaugesSection, LogSection, ServerSection, ServiceConfig, StoreSection};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "WPGAUGE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "wpgauge.yaml";

/// Config path from `WPGAUGE_CONFIG`, falling back to `wpgauge.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GaugeError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| GaugeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
