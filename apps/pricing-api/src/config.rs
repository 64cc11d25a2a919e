//! Pricing API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! A `.env` file in the working directory is read first (see `main`).

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;

use timberline_core::validation::validate_gst_rate;

/// Pricing API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// GST rate applied when a quote request omits one
    pub default_gst_rate: f64,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8083,
            default_gst_rate: 18.0,
            log_filter: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("PRICING_API_HOST").unwrap_or(defaults.host),

            port: match lookup("PRICING_API_PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PRICING_API_PORT".to_string()))?,
                None => defaults.port,
            },

            default_gst_rate: match lookup("DEFAULT_GST_RATE") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("DEFAULT_GST_RATE".to_string()))?,
                None => defaults.default_gst_rate,
            },

            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        };

        validate_gst_rate(config.default_gst_rate)
            .map_err(|_| ConfigError::InvalidValue("DEFAULT_GST_RATE".to_string()))?;

        Ok(config)
    }

    /// Socket address to bind.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PRICING_API_HOST".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
