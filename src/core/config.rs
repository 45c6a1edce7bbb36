use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::model::Preference;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub timeout_secs: u64,
    /// Use the built-in catalog instead of the backend.
    pub offline: bool,
    pub default_preference: Preference,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 30,
            offline: false,
            default_preference: Preference::Default,
        }
    }
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("pricelens").join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let defaults = AppConfig::default();

    let s = Config::builder()
        .set_default("backend_url", defaults.backend_url)?
        .set_default("timeout_secs", defaults.timeout_secs)?
        .set_default("offline", defaults.offline)?
        .set_default("default_preference", "default")?
        .add_source(File::from(config_path()).required(false))
        .add_source(Environment::with_prefix("PRICELENS")) // e.g. PRICELENS_BACKEND_URL
        .build()
        .context("Failed to build configuration")?;

    s.try_deserialize().context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let d = AppConfig::default();
        let s = Config::builder()
            .set_default("backend_url", d.backend_url.clone())
            .unwrap()
            .set_default("timeout_secs", d.timeout_secs)
            .unwrap()
            .set_default("offline", d.offline)
            .unwrap()
            .set_default("default_preference", "best_value")
            .unwrap()
            .build()
            .unwrap();

        let c: AppConfig = s.try_deserialize().unwrap();
        assert_eq!(c.backend_url, "http://127.0.0.1:8000");
        assert_eq!(c.timeout(), Duration::from_secs(30));
        assert_eq!(c.default_preference, Preference::BestValue);
    }
}
