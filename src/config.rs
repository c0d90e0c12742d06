//! Configuration management for the Pokedex.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default PokeAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Configuration for the Pokedex.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI base URL
    pub base_url: String,

    /// Response cache TTL in seconds (default: 10)
    /// Also the sweep period of every response cache
    pub cache_ttl_secs: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Number of locations shown per `map`/`mapb` page (default: 20)
    pub location_page_size: usize,

    /// Pause before a catch attempt resolves, in milliseconds (default: 1200)
    pub catch_delay_ms: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `POKEAPI_BASE_URL`: Base URL for PokeAPI (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL_SECS`: Cache TTL in seconds (default: 10)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOCATION_PAGE_SIZE`: Locations per page (default: 20)
    /// - `CATCH_DELAY_MS`: Catch suspense delay in milliseconds (default: 1200)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let base_url = env::var("POKEAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "POKEAPI_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let cache_ttl_secs = Self::parse_env_u64("POKEDEX_CACHE_TTL_SECS", 10)?;
        if cache_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "POKEDEX_CACHE_TTL_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let location_page_size = Self::parse_env_usize("LOCATION_PAGE_SIZE", 20)?;
        if location_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "LOCATION_PAGE_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let catch_delay_ms = Self::parse_env_u64("CATCH_DELAY_MS", 1200)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            base_url,
            cache_ttl_secs,
            request_timeout,
            location_page_size,
            catch_delay_ms,
            log_level,
        })
    }

    /// Response cache TTL.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// HTTP request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Delay before a catch attempt resolves.
    pub fn catch_delay(&self) -> Duration {
        Duration::from_millis(self.catch_delay_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl_secs: 10,
            request_timeout: 10,
            location_page_size: 20,
            catch_delay_ms: 1200,
            log_level: "error".to_string(),
        }
    }
}
