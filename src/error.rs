//! Error types for the Pokedex.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The cache itself is infallible; everything here belongs to the layers around it.

use thiserror::Error;

/// Errors that can occur when fetching from PokeAPI.
#[derive(Error, Debug)]
pub enum PokeApiError {
    /// HTTP request failed or the body could not be read
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generic error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors reported back to the user by a Pokedex command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` to see available commands")]
    UnknownCommand(String),

    #[error("usage: `{usage}`, for example, `{example}`")]
    MissingArgument {
        usage: &'static str,
        example: &'static str,
    },

    #[error("{0} not caught yet, cannot inspect it")]
    NotCaught(String),

    /// A fetch failed; `action` says what the command was doing
    #[error("failed to {action}: {source}")]
    Fetch {
        action: String,
        #[source]
        source: PokeApiError,
    },

    /// Writing command output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Wrap a fetch error with the action that triggered it.
    pub fn fetch(action: impl Into<String>, source: PokeApiError) -> Self {
        CommandError::Fetch {
            action: action.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with PokeApiError
pub type PokeApiResult<T> = Result<T, PokeApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
