use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::Validate;

const CONFIG_DIR: &str = "config";
const DEFAULT_ENV: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Application configuration, layered from `config/default.toml`, the
/// `config/{RUN_ENV}.toml` profile, and `APP__*` environment overrides.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub database_url: String,

    #[validate(length(min = 1))]
    pub host: String,
    pub port: u16,

    pub environment: String,
    pub log_level: String,
    pub log_json: bool,

    /// Run embedded migrations on startup.
    pub auto_migrate: bool,

    #[validate(range(min = 1))]
    pub db_max_connections: u32,
    #[validate(range(min = 1))]
    pub db_min_connections: u32,
    pub db_connect_timeout_secs: u64,
    pub db_idle_timeout_secs: u64,

    /// Per-request timeout applied by tower-http.
    pub request_timeout_secs: u64,

    /// Comma-separated list of allowed CORS origins; permissive in
    /// development when unset.
    pub cors_allowed_origins: Option<String>,

    /// Capacity of the in-process event channel.
    pub event_channel_capacity: usize,
}

impl AppConfig {
    pub fn new(database_url: String, host: String, port: u16, environment: String) -> Self {
        Self {
            database_url,
            host,
            port,
            environment,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            auto_migrate: true,
            db_max_connections: 10,
            db_min_connections: 1,
            db_connect_timeout_secs: 10,
            db_idle_timeout_secs: 300,
            request_timeout_secs: 30,
            cors_allowed_origins: None,
            event_channel_capacity: 256,
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn is_development(&self) -> bool {
        matches!(self.environment.as_str(), "development" | "dev" | "test")
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

/// Initializes the global tracing subscriber. `RUST_LOG` overrides the
/// configured level when set.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::fmt;

    let default_directive = format!("loomledger_api={},tower_http=info", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt().with_env_filter(filter_directive).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter_directive).try_init();
    }
}

/// Loads application configuration.
///
/// Layers configuration sources in this order:
/// 1. Default config (config/default.toml)
/// 2. Environment-specific config (config/{env}.toml)
/// 3. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let config = Config::builder()
        .set_default("database_url", "sqlite://loomledger.db?mode=rwc")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)?
        .set_default("environment", DEFAULT_ENV)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .set_default("auto_migrate", true)?
        .set_default("db_max_connections", 10)?
        .set_default("db_min_connections", 1)?
        .set_default("db_connect_timeout_secs", 10)?
        .set_default("db_idle_timeout_secs", 300)?
        .set_default("request_timeout_secs", 30)?
        .set_default("event_channel_capacity", 256)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constructor_is_valid() {
        let cfg = AppConfig::new(
            "sqlite://loomledger.db?mode=memory".into(),
            "127.0.0.1".into(),
            8080,
            "test".into(),
        );
        assert!(cfg.validate().is_ok());
        assert!(cfg.is_development());
        assert!(!cfg.is_production());
    }
}
