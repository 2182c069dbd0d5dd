use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

impl Config {
    /// Layers `configuration.*`, `APP__*` variables and the bare `PORT`,
    /// `LOG_LEVEL` and `OTLP_ENDPOINT` variables, in that order of precedence.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", non_empty_env("PORT"))?
            .set_override_option("log_level", non_empty_env("LOG_LEVEL"))?
            .set_override_option("otlp_endpoint", non_empty_env("OTLP_ENDPOINT"))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Reads an environment variable, treating an empty value as unset.
/// Whitespace is a value.
pub fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
