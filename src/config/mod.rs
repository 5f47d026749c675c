mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from an optional YAML file, then applies
/// environment overrides. Variables from a `.env` file are picked up too.
pub async fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = match env::var("CONFIG_PATH") {
        Ok(path) => from_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            from_file(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env_overrides(config, |key| env::var(key).ok())?;
    validate(&config)?;

    Ok(config)
}

pub async fn from_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overlays environment values on top of `config`. `lookup` abstracts the
/// environment so callers can supply their own source.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("OPENAI_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(base_url) = lookup("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(model) = lookup("OPENAI_MODEL") {
        config.llm.model = model;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }
    if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
        config.server.cors.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(level) = lookup("LOG_LEVEL") {
        config.server.logs.level = level;
    }

    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(
            "OpenAI API key is missing; set OPENAI_API_KEY",
        ));
    }
    Ok(())
}
