//! Backend target configuration

use secrecy::SecretString;
use tracing::info;

use super::error::ConfigError;
use super::resolver::ConfigResolver;

/// Setting holding the registration endpoint URL.
pub const USER_REGISTER_URL: &str = "USER_REGISTER_URL";

/// Setting holding the shared secret sent with every request.
pub const BACKEND_API_KEY: &str = "BACKEND_API_KEY";

/// Endpoint used when no source defines [`USER_REGISTER_URL`].
pub const DEFAULT_USER_REGISTER_URL: &str = "http://host.docker.internal:8000/api/users/register";

/// Where registrations are sent and how they authenticate.
///
/// Built once when the listener factory initializes and shared read-only
/// afterwards. Both values are guaranteed non-empty. The API key is kept in
/// a [`SecretString`] so `Debug` output never reveals it.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    target_url: String,
    api_key: SecretString,
}

impl NotifierConfig {
    /// Create a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// `MissingRequired` if either value is empty or whitespace.
    pub fn new(target_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let target_url = target_url.into().trim().to_string();
        let api_key = api_key.into().trim().to_string();

        if target_url.is_empty() {
            return Err(ConfigError::MissingRequired(USER_REGISTER_URL));
        }
        if api_key.is_empty() {
            return Err(ConfigError::MissingRequired(BACKEND_API_KEY));
        }

        Ok(Self {
            target_url,
            api_key: SecretString::new(api_key),
        })
    }

    /// Resolve both settings through the resolver's fallback chain.
    ///
    /// The URL falls back to [`DEFAULT_USER_REGISTER_URL`]; the API key has
    /// no default.
    ///
    /// # Errors
    ///
    /// `MissingRequired("BACKEND_API_KEY")` if no source defines the key.
    pub fn resolve(resolver: &ConfigResolver) -> Result<Self, ConfigError> {
        let target_url = resolver.resolve_or_default(USER_REGISTER_URL, DEFAULT_USER_REGISTER_URL);
        let api_key = resolver.resolve_required(BACKEND_API_KEY)?;
        info!("Backend API key loaded successfully");

        let config = Self::new(target_url, api_key)?;
        info!(url = %config.target_url, "Registration notifier configured");
        Ok(config)
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Check whether the endpoint is the built-in fallback
    pub fn uses_default_url(&self) -> bool {
        self.target_url == DEFAULT_USER_REGISTER_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::path::PathBuf;

    fn resolver_with_env(vars: &[(&str, &str)]) -> ConfigResolver {
        ConfigResolver::new()
            .with_env(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .with_candidate_paths(Vec::<PathBuf>::new())
    }

    #[test]
    fn test_resolves_both_values() {
        let resolver = resolver_with_env(&[
            (USER_REGISTER_URL, "https://api.example.com/register"),
            (BACKEND_API_KEY, "secret123"),
        ]);

        let config = NotifierConfig::resolve(&resolver).unwrap();
        assert_eq!(config.target_url(), "https://api.example.com/register");
        assert_eq!(config.api_key().expose_secret(), "secret123");
        assert!(!config.uses_default_url());
    }

    #[test]
    fn test_url_falls_back_to_default() {
        let resolver = resolver_with_env(&[(BACKEND_API_KEY, "secret123")]);

        let config = NotifierConfig::resolve(&resolver).unwrap();
        assert_eq!(config.target_url(), DEFAULT_USER_REGISTER_URL);
        assert!(config.uses_default_url());
    }

    #[test]
    fn test_missing_api_key_fails() {
        let resolver = resolver_with_env(&[(USER_REGISTER_URL, "https://api.example.com")]);

        let result = NotifierConfig::resolve(&resolver);
        assert!(matches!(result, Err(ConfigError::MissingRequired(BACKEND_API_KEY))));
    }

    #[test]
    fn test_new_rejects_blank_values() {
        assert!(matches!(
            NotifierConfig::new("  ", "key"),
            Err(ConfigError::MissingRequired(USER_REGISTER_URL))
        ));
        assert!(matches!(
            NotifierConfig::new("https://x", ""),
            Err(ConfigError::MissingRequired(BACKEND_API_KEY))
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = NotifierConfig::new("https://x", "super-secret-value").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-value"));
    }
}
