//! Registration Notifier - Forwards newly registered identity-platform users
//! to a backend service.
//!
//! The crate plugs into an identity platform's event stream as a listener.
//! When a `REGISTER` event arrives it looks the user up in the realm's
//! directory, projects the account into a five-field [`UserRecord`], and
//! POSTs it as JSON to a configured endpoint with a shared-secret header.
//! Failures are logged and never propagated back to the host.
//!
//! ```ignore
//! let factory = RegistrationListenerFactory::from_env()?;
//! source.register(Arc::new(factory.create(directory)));
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::{RegistrationListener, RegistrationListenerFactory};
pub use config::{ConfigError, ConfigResolver, DeliverySettings, NotifierConfig};
pub use domain::lifecycle::{LifecycleEvent, LifecycleEventType};
pub use domain::notification::DeliveryOutcome;
pub use domain::user::UserRecord;
