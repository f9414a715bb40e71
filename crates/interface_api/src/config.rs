//! API configuration
//!
//! Loaded from `API_`-prefixed environment variables (after `.env` is read by
//! the binary), falling back to the defaults below.

use serde::Deserialize;
use std::time::Duration;

use core_kernel::Currency;
use domain_policy::{ExpirationWindow, ExpirationWorkerConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Pool size for the PostgreSQL connection pool
    pub max_connections: u32,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    pub expiration_interval_secs: u64,
    pub expiration_window: ExpirationWindow,
    /// Currency assumed for claims that do not name one
    pub default_currency: Currency,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: infra_db::DEFAULT_DATABASE_URL.to_string(),
            max_connections: 10,
            log_level: "info".to_string(),
            log_json: false,
            expiration_interval_secs: 10,
            expiration_window: ExpirationWindow::CatchUp,
            default_currency: Currency::USD,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the environment on top of the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .set_default("expiration_interval_secs", defaults.expiration_interval_secs)?
            .set_default("expiration_window", defaults.expiration_window.to_string())?
            .set_default("default_currency", defaults.default_currency.code())?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn expiration_worker(&self) -> ExpirationWorkerConfig {
        ExpirationWorkerConfig {
            interval: Duration::from_secs(self.expiration_interval_secs),
            window: self.expiration_window,
        }
    }
}
