//! Connection settings for the remote budgeting service.

use std::env;
use thiserror::Error;

/// Environment variable naming the service's base URL.
pub const API_URL_VAR: &str = "BUDGET_API_URL";
/// Environment variable holding the static bearer key.
pub const API_KEY_VAR: &str = "BUDGET_API_KEY";

/// Where the service lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL without a trailing slash, e.g. `https://budget.example.net`.
    pub api_url: String,
    /// Bearer key sent on every request.
    pub api_key: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

impl Config {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads the connection settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var(API_URL_VAR).map_err(|_| ConfigError::Missing(API_URL_VAR))?;
        let api_key = env::var(API_KEY_VAR).map_err(|_| ConfigError::Missing(API_KEY_VAR))?;
        Ok(Self { api_url, api_key })
    }
}
