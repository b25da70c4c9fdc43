//! Notifier configuration module
//!
//! Two kinds of settings live here:
//!
//! - **Secrets** (`USER_REGISTER_URL`, `BACKEND_API_KEY`), resolved by
//!   [`ConfigResolver`] from the process environment, then from the first
//!   dotenv file that defines them (`.env`, `/opt/keycloak/.env`,
//!   `/config/.env`, `<working-dir>/.env`), then from a built-in default
//!   (URL only).
//! - **Delivery tuning** ([`DeliverySettings`]), loaded with the `config`
//!   crate from `REGISTRATION_NOTIFIER__`-prefixed environment variables.
//!
//! # Example
//!
//! ```no_run
//! use registration_notifier::config::{ConfigResolver, DeliverySettings, NotifierConfig};
//!
//! let config = NotifierConfig::resolve(&ConfigResolver::new()).expect("BACKEND_API_KEY must be set");
//! let settings = DeliverySettings::load().expect("Failed to load delivery settings");
//! settings.validate().expect("Invalid delivery settings");
//!
//! println!("Notifying {} with a {}s timeout", config.target_url(), settings.timeout_secs);
//! ```

mod delivery;
mod error;
mod notifier;
mod resolver;

pub use delivery::{DeliverySettings, MAX_TIMEOUT_SECS, SETTINGS_ENV_PREFIX};
pub use error::{ConfigError, ValidationError};
pub use notifier::{NotifierConfig, BACKEND_API_KEY, DEFAULT_USER_REGISTER_URL, USER_REGISTER_URL};
pub use resolver::{default_candidate_paths, ConfigResolver, FIXED_ENV_FILE_PATHS};
