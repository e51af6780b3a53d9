//! Store configuration.
//!
//! # Environment Variables
//!
//! All optional:
//! - `BASKET_STORE_CATALOG_URL` - Catalog endpoint (default: https://dummyjson.com/products)
//! - `BASKET_STORE_REQUEST_TIMEOUT_SECS` - Whole-request timeout for the catalog fetch (default: none)
//! - `BASKET_STORE_BUFFER_SIZE` - Store actor mailbox capacity (default: 32)
//!
//! The library never reads the environment on its own; call
//! [`StoreConfig::from_env`] explicitly.

use std::time::Duration;

use thiserror::Error;

use crate::catalog::DEFAULT_CATALOG_URL;

/// Default mailbox capacity for the store actor.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

const CATALOG_URL_VAR: &str = "BASKET_STORE_CATALOG_URL";
const REQUEST_TIMEOUT_VAR: &str = "BASKET_STORE_REQUEST_TIMEOUT_SECS";
const BUFFER_SIZE_VAR: &str = "BASKET_STORE_BUFFER_SIZE";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Catalog endpoint fetched by [`HttpCatalog`](crate::catalog::HttpCatalog)
    pub catalog_url: String,
    /// Timeout for the whole catalog request; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// Capacity of the store actor's mailbox
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            request_timeout: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl StoreConfig {
    /// Load configuration from the process environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_url = match lookup(CATALOG_URL_VAR) {
            Some(url) => {
                let url = url.trim().to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidEnvVar(
                        CATALOG_URL_VAR.to_string(),
                        "must be an http(s) URL".to_string(),
                    ));
                }
                url
            }
            None => defaults.catalog_url,
        };

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidEnvVar(REQUEST_TIMEOUT_VAR.to_string(), e.to_string())
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidEnvVar(
                        REQUEST_TIMEOUT_VAR.to_string(),
                        "must be greater than zero".to_string(),
                    ));
                }
                Some(Duration::from_secs(secs))
            }
            None => defaults.request_timeout,
        };

        let buffer_size = match lookup(BUFFER_SIZE_VAR) {
            Some(raw) => {
                let size: usize = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidEnvVar(BUFFER_SIZE_VAR.to_string(), e.to_string())
                })?;
                // tokio::sync::mpsc::channel panics on zero capacity
                if size == 0 {
                    return Err(ConfigError::InvalidEnvVar(
                        BUFFER_SIZE_VAR.to_string(),
                        "must be greater than zero".to_string(),
                    ));
                }
                size
            }
            None => defaults.buffer_size,
        };

        Ok(Self {
            catalog_url,
            request_timeout,
            buffer_size,
        })
    }
}
