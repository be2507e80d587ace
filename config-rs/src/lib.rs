//! config-rs/lib.rs
//! Service settings for the AI services process
//! Loads defaults, an optional `.env` file and prefixed environment variables

use std::fmt;
use std::net::SocketAddr;

use config::{Config, Environment};
use error_handling_rs::{Result, ServiceError};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `AI_SERVICES_PORT=9000`
pub const ENV_PREFIX: &str = "AI_SERVICES";

pub const DEFAULT_APP_NAME: &str = "GoLive AI Services";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;

/// Application settings
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub version: String,
    pub debug: bool,

    pub host: String,
    pub port: u16,

    /// Comma-separated list of allowed origins, `*` allows any origin
    pub cors_origins: String,

    pub log_level: String,
    pub log_json: bool,

    // Placeholders for backends that are not wired up yet
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
    pub openai_api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            debug: true,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: "*".to_string(),
            log_level: "info".to_string(),
            log_json: false,
            database_url: None,
            redis_url: None,
            openai_api_key: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("version", &self.version)
            .field("debug", &self.debug)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("redis_url", &self.redis_url.as_ref().map(|_| "<set>"))
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Settings {
    /// Load settings from `.env` (if present) and `AI_SERVICES_*` variables
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::load_with_prefix(ENV_PREFIX)
    }

    /// Load settings from defaults overridden by `<prefix>_*` environment variables
    ///
    /// Keys are matched case-insensitively, so `AI_SERVICES_LOG_LEVEL` fills `log_level`.
    pub fn load_with_prefix(prefix: &str) -> Result<Self> {
        let defaults = Settings::default();

        let config = Config::builder()
            .set_default("app_name", defaults.app_name.as_str())
            .and_then(|b| b.set_default("version", defaults.version.as_str()))
            .and_then(|b| b.set_default("debug", defaults.debug))
            .and_then(|b| b.set_default("host", defaults.host.as_str()))
            .and_then(|b| b.set_default("port", i64::from(defaults.port)))
            .and_then(|b| b.set_default("cors_origins", defaults.cors_origins.as_str()))
            .and_then(|b| b.set_default("log_level", defaults.log_level.as_str()))
            .and_then(|b| b.set_default("log_json", defaults.log_json))
            .map_err(|e| ServiceError::configuration("Invalid default settings", e))?
            .add_source(Environment::with_prefix(prefix))
            .build()
            .map_err(|e| ServiceError::configuration("Failed to read settings", e))?;

        config
            .try_deserialize()
            .map_err(|e| ServiceError::configuration("Failed to parse settings", e))
    }

    /// Socket address the HTTP server binds to
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse::<SocketAddr>()
            .map_err(|e| ServiceError::configuration(format!("Invalid bind address {}", raw), e))
    }

    /// Explicit CORS origins; empty means any origin is allowed
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty() && *origin != "*")
            .map(str::to_string)
            .collect()
    }
}
