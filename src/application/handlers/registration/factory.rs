//! RegistrationListenerFactory - Host-facing entry point.
//!
//! The host instantiates the factory once, initializes it (which resolves
//! configuration), and asks it for a listener per session. Listeners share
//! the factory's configuration and notifier.

use std::sync::Arc;
use tracing::info;

use super::listener::RegistrationListener;
use crate::adapters::HttpRegistrationNotifier;
use crate::config::{ConfigError, ConfigResolver, DeliverySettings, NotifierConfig};
use crate::ports::{RecordNotifier, UserDirectory};

/// Builds [`RegistrationListener`]s that share one configuration.
pub struct RegistrationListenerFactory {
    config: Arc<NotifierConfig>,
    notifier: Arc<dyn RecordNotifier>,
}

impl RegistrationListenerFactory {
    /// Identifier the host registers the provider under.
    pub const ID: &'static str = "registration-notifier";

    /// Resolve configuration and build the HTTP notifier.
    ///
    /// # Errors
    ///
    /// `MissingRequired("BACKEND_API_KEY")` when no source defines the key,
    /// `ValidationFailed` for bad delivery settings.
    pub fn init(resolver: &ConfigResolver, settings: &DeliverySettings) -> Result<Self, ConfigError> {
        let config = NotifierConfig::resolve(resolver)?;
        let notifier = HttpRegistrationNotifier::new(settings)?;

        info!(
            provider = Self::ID,
            url = config.target_url(),
            timeout_secs = settings.timeout_secs,
            auth_header = %notifier.auth_header(),
            "Registration listener factory initialized"
        );

        Ok(Self::with_notifier(Arc::new(config), Arc::new(notifier)))
    }

    /// Initialize from the process environment and the default `.env` locations.
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = DeliverySettings::load()?;
        Self::init(&ConfigResolver::new(), &settings)
    }

    /// Assemble a factory from already-built parts.
    pub fn with_notifier(config: Arc<NotifierConfig>, notifier: Arc<dyn RecordNotifier>) -> Self {
        Self { config, notifier }
    }

    /// Create a listener bound to the session's user directory.
    pub fn create(&self, directory: Arc<dyn UserDirectory>) -> RegistrationListener {
        RegistrationListener::new(self.config.clone(), directory, self.notifier.clone())
    }

    pub fn id(&self) -> &'static str {
        Self::ID
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }
}
