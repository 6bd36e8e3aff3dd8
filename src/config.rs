//! Configuration Module
//!
//! Handles loading and validating server configuration from environment
//! variables.

use std::env;

use crate::error::ConfigError;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (required, nonzero)
    pub server_port: u16,
    /// Origin base URL that cache misses are forwarded to (required)
    pub origin: String,
    /// Whether to clear the in-memory cache before serving
    pub clear_cache: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (required, nonzero)
    /// - `ORIGIN_URL` - Origin base URL, e.g. `http://example.com` (required)
    /// - `CLEAR_CACHE` - Clear the cache on startup, `true`/`1` (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .filter(|port| *port != 0)
            .ok_or(ConfigError::MissingPort)?;

        let origin = env::var("ORIGIN_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingOrigin)?;

        let clear_cache = env::var("CLEAR_CACHE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            server_port,
            origin,
            clear_cache,
        })
    }
}
