//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            "test" => Ok(AppEnv::Test),
            other => bail!("Unknown APP_ENV '{}'", other),
        }
    }
}

/// Which document store backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("Unknown STORE_BACKEND '{}'", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app_name: String,
    pub app_env: AppEnv,

    /// Bind address
    pub host: String,
    pub port: u16,

    /// Document store
    pub store_backend: StoreBackend,
    /// PostgreSQL connection URL, required for the postgres backend
    pub database_url: Option<String>,

    /// Token signing
    pub jwt_secret: String,
    pub token_ttl_secs: u64,

    /// Tracing filter directive
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build configuration from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| vars.get(key).map(|v| v.trim().to_string());

        let store_backend = match get("STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => StoreBackend::Postgres,
        };

        let database_url = get("DATABASE_URL").filter(|v| !v.is_empty());
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL is required when STORE_BACKEND is postgres");
        }

        let jwt_secret = get("JWT_SECRET")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?;

        let app_env = match get("APP_ENV") {
            Some(value) => value.parse()?,
            None => AppEnv::default(),
        };

        let port = match get("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got '{}'", value))?,
            None => 4000,
        };

        let token_ttl_secs = match get("TOKEN_TTL_SECS") {
            Some(value) => value.parse().map_err(|_| {
                anyhow::anyhow!("TOKEN_TTL_SECS must be a positive integer, got '{}'", value)
            })?,
            None => 3600,
        };
        if token_ttl_secs == 0 {
            bail!("TOKEN_TTL_SECS must be greater than zero");
        }

        Ok(Self {
            app_name: get("APP_NAME").unwrap_or_else(|| "sports-manager-api".to_string()),
            app_env,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            store_backend,
            database_url,
            jwt_secret,
            token_ttl_secs,
            rust_log: get("RUST_LOG")
                .unwrap_or_else(|| "sports_manager=debug,tower_http=info".to_string()),
        })
    }

    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.app_env == AppEnv::Production
    }
}
