//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Backend endpoints and HTTP client settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Initial application state
    #[serde(default)]
    pub state: StateConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        validate_http_url("api.base_url", &self.api.base_url)?;
        validate_http_url("api.functions_url", &self.api.functions_url)?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.state.default_city.trim().is_empty() {
            return Err(AppError::validation("state.default_city is empty"));
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| AppError::validation(format!("{field} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::validation(format!(
            "{field} must use http or https, got '{other}'"
        ))),
    }
}

/// REST backend and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the events/stores REST API
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Base URL of the serverless utility functions
    #[serde(default = "defaults::functions_url")]
    pub functions_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            functions_url: defaults::functions_url(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Initial values for the application store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateConfig {
    /// City selected before the user picks one
    #[serde(default = "defaults::default_city")]
    pub default_city: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            default_city: defaults::default_city(),
        }
    }
}

pub(crate) mod defaults {
    pub fn base_url() -> String {
        "http://localhost:3000/api".into()
    }
    pub fn functions_url() -> String {
        "http://localhost:54321/functions/v1".into()
    }
    pub fn user_agent() -> String {
        "thrift-finder/0.1".into()
    }
    pub fn default_city() -> String {
        "Dallas".into()
    }
}
