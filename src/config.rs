//! Configuration management for the Follow Up Boss MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Follow Up Boss API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.followupboss.com/v1";

/// Configuration for the Follow Up Boss MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Follow Up Boss API base URL
    pub fub_base_url: String,

    /// Follow Up Boss API key (sent as the Basic auth username)
    pub fub_api_key: String,

    /// Hide and reject every tool that issues a DELETE (default: false)
    pub safe_mode: bool,

    /// Check schema-required arguments before calling the API (default: false)
    pub validate_arguments: bool,

    /// HTTP request timeout in seconds; `None` keeps the HTTP client default
    pub request_timeout: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `FUB_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `FUB_BASE_URL`: Base URL for the API (default: `https://api.followupboss.com/v1`)
    /// - `FUB_SAFE_MODE`: Disable delete tools (default: false)
    /// - `FUB_VALIDATE_ARGS`: Validate required arguments locally (default: false)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: client default)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let fub_api_key = env::var("FUB_API_KEY")
            .map_err(|_| ConfigError::MissingVar("FUB_API_KEY".to_string()))?;

        if fub_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "FUB_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let fub_base_url =
            env::var("FUB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if !fub_base_url.starts_with("http://") && !fub_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "FUB_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let safe_mode = Self::parse_env_bool("FUB_SAFE_MODE", false)?;
        let validate_arguments = Self::parse_env_bool("FUB_VALIDATE_ARGS", false)?;
        let request_timeout = Self::parse_env_optional_u64("REQUEST_TIMEOUT")?;

        Ok(Config {
            fub_base_url,
            fub_api_key: fub_api_key.trim().to_string(),
            safe_mode,
            validate_arguments,
            request_timeout,
        })
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional environment variable as u64.
    fn parse_env_optional_u64(var_name: &str) -> ConfigResult<Option<u64>> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fub_base_url: DEFAULT_BASE_URL.to_string(),
            fub_api_key: String::new(),
            safe_mode: false,
            validate_arguments: false,
            request_timeout: None,
        }
    }
}
