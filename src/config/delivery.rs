//! Delivery tuning configuration

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::HeaderName;
use serde::Deserialize;

use super::error::{ConfigError, ValidationError};

/// Environment prefix for delivery settings
/// (`REGISTRATION_NOTIFIER__TIMEOUT_SECS`, `REGISTRATION_NOTIFIER__AUTH_HEADER`).
pub const SETTINGS_ENV_PREFIX: &str = "REGISTRATION_NOTIFIER";

/// Upper bound for the request timeout.
pub const MAX_TIMEOUT_SECS: u64 = 60;

/// How the HTTP notifier talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeliverySettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Header carrying the raw API key
    #[serde(default = "default_auth_header")]
    pub auth_header: String,
}

impl DeliverySettings {
    /// Load settings from `REGISTRATION_NOTIFIER__*` environment variables.
    ///
    /// Unset values keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if a value cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load settings from an explicit variable map instead of the process
    /// environment. `None` reads the process environment.
    pub fn load_from(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .separator("__")
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate delivery settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout {
                max: MAX_TIMEOUT_SECS,
                actual: self.timeout_secs,
            });
        }

        HeaderName::from_bytes(self.auth_header.as_bytes())
            .map_err(|_| ValidationError::InvalidAuthHeader(self.auth_header.clone()))?;

        Ok(())
    }
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            auth_header: default_auth_header(),
        }
    }
}

fn default_timeout() -> u64 {
    5
}

fn default_auth_header() -> String {
    "X-Secret-Token".to_string()
}
