//! # Runtime Configuration
//!
//! Values start from built-in defaults, are replaced by an optional YAML file
//! named in `MEDICAL_JOURNEY_CONFIG`, and finally by individual environment
//! variables.
//!
//! ```yaml
//! database_url: sqlite:/var/lib/medical-journey/journey.db
//! bind_address: 0.0.0.0:3000
//! cors_origin: http://localhost:8080
//! max_connections: 5
//! log_filter: info,sqlx=warn
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_VAR: &str = "MEDICAL_JOURNEY_CONFIG";
pub const DATABASE_URL_VAR: &str = "MEDICAL_JOURNEY_DATABASE_URL";
pub const BIND_ADDRESS_VAR: &str = "MEDICAL_JOURNEY_BIND_ADDRESS";
pub const CORS_ORIGIN_VAR: &str = "MEDICAL_JOURNEY_CORS_ORIGIN";
pub const MAX_CONNECTIONS_VAR: &str = "MEDICAL_JOURNEY_MAX_CONNECTIONS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    /// Origin allowed to call the API from a browser
    pub cors_origin: String,
    pub max_connections: u32,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:medical_journey.db".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
            max_connections: 5,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the config file if one is named, then the environment.
    /// Also returns the file that was read, if any.
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as `load`, with variables resolved through `lookup`
    pub fn load_with<F>(lookup: F) -> Result<(Self, Option<PathBuf>)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = lookup(CONFIG_PATH_VAR).map(PathBuf::from);
        let mut config = match &source {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok((config, source))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Replace values with those found by `lookup`, keyed by variable name
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_VAR) {
            self.database_url = url;
        }
        if let Some(address) = lookup(BIND_ADDRESS_VAR) {
            self.bind_address = address;
        }
        if let Some(origin) = lookup(CORS_ORIGIN_VAR) {
            self.cors_origin = origin;
        }
        if let Some(max) = lookup(MAX_CONNECTIONS_VAR) {
            self.max_connections = max
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer, got '{}'", MAX_CONNECTIONS_VAR, max))?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_address))
    }
}
