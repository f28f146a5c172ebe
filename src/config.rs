// src/config.rs

//! Configuration loading utilities.
//!
//! Combines the TOML file, environment overrides and validation into one
//! call for application start-up.

use std::path::Path;

use crate::error::Result;
use crate::models::Config;

/// Environment variable overriding `api.base_url`.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Environment variable overriding `api.functions_url`.
pub const FUNCTIONS_BASE_URL_VAR: &str = "FUNCTIONS_BASE_URL";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Empty values are ignored so an unset-but-exported variable keeps the file value.
pub fn apply_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(API_BASE_URL_VAR) {
        log::debug!("Overriding api.base_url from {}", API_BASE_URL_VAR);
        config.api.base_url = url;
    }

    if let Some(url) = non_empty(FUNCTIONS_BASE_URL_VAR) {
        log::debug!("Overriding api.functions_url from {}", FUNCTIONS_BASE_URL_VAR);
        config.api.functions_url = url;
    }
}

/// Load configuration from a TOML file, apply environment overrides and validate.
///
/// A missing or unreadable file falls back to defaults.
pub fn load(path: &Path) -> Result<Config> {
    let mut config = Config::load_or_default(path);
    apply_env_overrides(&mut config);
    config.validate()?;
    Ok(config)
}
