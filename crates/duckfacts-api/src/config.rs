//! Service configuration loaded from a TOML file with environment
//! variable overrides.

use std::fs;

use serde::Deserialize;
use tracing::{info, warn};

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000 }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct DataConfig {
    /// Path to the facts JSON document, read on every request.
    pub facts_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { facts_path: "data/facts.json".to_string() }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        let config_path =
            std::env::var("DUCKFACTS_CONFIG_PATH").unwrap_or_else(|_| "duckfacts.toml".to_string());

        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|_| {
            warn!(
                "Configuration file '{}' not found. Using default configuration.",
                config_path
            );
            String::new()
        });

        toml::from_str(&config_str).expect("Failed to parse configuration file.")
    }

    /// Apply environment variable overrides on top of the file values.
    pub fn apply_profile(mut self) -> Self {
        if let Ok(host) = std::env::var("DUCKFACTS_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("DUCKFACTS_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                self.server.port = port_num;
            }
        }
        if let Ok(facts_path) = std::env::var("DUCKFACTS_FACTS_PATH") {
            self.data.facts_path = facts_path;
        }

        info!(
            host = %self.server.host,
            port = self.server.port,
            facts_path = %self.data.facts_path,
            "configuration resolved"
        );
        self
    }
}
