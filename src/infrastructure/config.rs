// src/infrastructure/config.rs
//
// Centralized configuration (environment variables + defaults).
// A `.env` file, when present, is loaded by the binary before this runs.

use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const ENV_API_URL: &str = "SKYGARDEN_API_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "SKYGARDEN_HTTP_TIMEOUT_SECS";
pub const ENV_FLASH_SECS: &str = "SKYGARDEN_FLASH_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,

    /// Per-request timeout for backend calls
    pub http_timeout: Duration,

    /// How long a transient status message stays visible
    pub flash_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            flash_duration: Duration::from_secs(DEFAULT_FLASH_SECS),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup(ENV_API_URL) {
            Some(url) => normalize_base_url(&url)?,
            None => defaults.api_base_url,
        };

        let http_timeout = match lookup(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) => Duration::from_secs(parse_secs(ENV_HTTP_TIMEOUT_SECS, &raw)?),
            None => defaults.http_timeout,
        };

        let flash_duration = match lookup(ENV_FLASH_SECS) {
            Some(raw) => Duration::from_secs(parse_secs(ENV_FLASH_SECS, &raw)?),
            None => defaults.flash_duration,
        };

        Ok(Self {
            api_base_url,
            http_timeout,
            flash_duration,
        })
    }

    /// Replace the backend URL (e.g. from a command-line flag)
    pub fn with_api_url(mut self, url: &str) -> AppResult<Self> {
        self.api_base_url = normalize_base_url(url)?;
        Ok(self)
    }
}

fn normalize_base_url(raw: &str) -> AppResult<String> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "API URL must start with http:// or https://, got '{}'",
            raw
        )));
    }
    Ok(url.to_string())
}

fn parse_secs(key: &str, raw: &str) -> AppResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            key, raw
        ))),
    }
}
