//! Configuration error types

use thiserror::Error;

/// Errors that stop the notifier from becoming operational
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("{0} is required but was not found in the environment or any .env file")]
    MissingRequired(&'static str),

    #[error("HTTP client could not be built: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request timeout must be between 1 and {max} seconds, got {actual}")]
    InvalidTimeout { max: u64, actual: u64 },

    #[error("Invalid authentication header name: {0:?}")]
    InvalidAuthHeader(String),
}
