//! HTTP registration notifier.
//!
//! Implements the `RecordNotifier` port by POSTing the record as JSON to
//! the configured backend, authenticated by a shared secret header.
//!
//! # Wire format
//!
//! ```text
//! POST <USER_REGISTER_URL>
//! Accept: application/json
//! Content-Type: application/json; charset=UTF-8
//! X-Secret-Token: <BACKEND_API_KEY>
//!
//! {"id":"u-42","first_name":"Ana","last_name":"Lee","username":"ana","email":"ana@x.com"}
//! ```
//!
//! Exactly one attempt is made per record. The outcome is logged and
//! returned, never retried.

use async_trait::async_trait;
use reqwest::header::{HeaderName, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, warn};

use crate::config::{ConfigError, DeliverySettings, ValidationError};
use crate::domain::notification::DeliveryOutcome;
use crate::domain::user::UserRecord;
use crate::ports::RecordNotifier;

const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// Body reported for a rejected response that carried none.
const NO_CONTENT: &str = "No content";

/// Registration notifier backed by a pooled `reqwest::Client`.
///
/// Cheap to share behind an `Arc`; the client pools connections across
/// concurrent deliveries.
#[derive(Debug, Clone)]
pub struct HttpRegistrationNotifier {
    client: Client,
    auth_header: HeaderName,
}

impl HttpRegistrationNotifier {
    /// Create a notifier from validated delivery settings.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for invalid settings, `HttpClient` if the TLS
    /// backend cannot be initialized.
    pub fn new(settings: &DeliverySettings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let auth_header = HeaderName::from_bytes(settings.auth_header.as_bytes())
            .map_err(|_| ValidationError::InvalidAuthHeader(settings.auth_header.clone()))?;
        let client = Client::builder().timeout(settings.timeout()).build()?;

        Ok(Self {
            client,
            auth_header,
        })
    }

    /// Create a notifier around an existing client.
    pub fn with_client(client: Client, auth_header: HeaderName) -> Self {
        Self {
            client,
            auth_header,
        }
    }

    pub fn auth_header(&self) -> &HeaderName {
        &self.auth_header
    }

    async fn post(
        &self,
        url: &str,
        api_key: &SecretString,
        record: &UserRecord,
    ) -> Result<DeliveryOutcome, reqwest::Error> {
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, JSON_UTF8)
            .header(self.auth_header.clone(), api_key.expose_secret().as_str())
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(DeliveryOutcome::Success {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        let body = if body.is_empty() {
            NO_CONTENT.to_string()
        } else {
            body
        };

        Ok(DeliveryOutcome::from_response(status.as_u16(), body))
    }
}

#[async_trait]
impl RecordNotifier for HttpRegistrationNotifier {
    async fn deliver(
        &self,
        url: &str,
        api_key: &SecretString,
        record: &UserRecord,
    ) -> Option<DeliveryOutcome> {
        if url.trim().is_empty() {
            error!("Cannot send POST request: URL is empty");
            return None;
        }
        if api_key.expose_secret().trim().is_empty() {
            error!("Cannot send POST request: BACKEND_API_KEY is not configured");
            return None;
        }

        debug!(
            url,
            user_id = %record.id,
            auth_header = %self.auth_header,
            "Sending registration POST request"
        );

        let outcome = match self.post(url, api_key, record).await {
            Ok(outcome) => outcome,
            Err(e) => DeliveryOutcome::transport_failure(e),
        };

        match &outcome {
            DeliveryOutcome::Success { status } => {
                info!(url, status, user_id = %record.id, "POST request completed successfully");
            }
            DeliveryOutcome::Rejected { status, body } => {
                warn!(
                    url,
                    status,
                    response = %body,
                    user_id = %record.id,
                    "POST request completed with non-success status"
                );
            }
            DeliveryOutcome::TransportFailure { cause } => {
                error!(url, error = %cause, user_id = %record.id, "Error sending POST request");
            }
        }

        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::time::Duration;

    fn record() -> UserRecord {
        UserRecord {
            id: UserId::new("u-42").unwrap(),
            first_name: Some("Ana".to_string()),
            last_name: Some("Lee".to_string()),
            username: Some("ana".to_string()),
            email: Some("ana@x.com".to_string()),
        }
    }

    fn key(value: &str) -> SecretString {
        SecretString::new(value.to_string())
    }

    #[test]
    fn test_new_uses_configured_header() {
        let settings = DeliverySettings {
            auth_header: "X-Api-Key".to_string(),
            ..Default::default()
        };
        let notifier = HttpRegistrationNotifier::new(&settings).unwrap();
        assert_eq!(notifier.auth_header().as_str(), "x-api-key");
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = DeliverySettings {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            HttpRegistrationNotifier::new(&settings),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_url_sends_nothing() {
        let notifier = HttpRegistrationNotifier::new(&DeliverySettings::default()).unwrap();
        assert!(notifier.deliver("  ", &key("secret"), &record()).await.is_none());
    }

    #[tokio::test]
    async fn test_blank_api_key_sends_nothing() {
        let notifier = HttpRegistrationNotifier::new(&DeliverySettings::default()).unwrap();
        let outcome = notifier
            .deliver("http://127.0.0.1:9/register", &key(""), &record())
            .await;
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_failure() {
        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let notifier =
            HttpRegistrationNotifier::with_client(client, HeaderName::from_static("x-secret-token"));

        // Port 9 (discard) on loopback is closed on CI machines.
        let outcome = notifier
            .deliver("http://127.0.0.1:9/register", &key("secret"), &record())
            .await;

        assert!(matches!(outcome, Some(DeliveryOutcome::TransportFailure { .. })));
    }

    #[tokio::test]
    async fn test_malformed_url_is_transport_failure() {
        let notifier = HttpRegistrationNotifier::new(&DeliverySettings::default()).unwrap();
        let outcome = notifier.deliver("not a url", &key("secret"), &record()).await;
        assert!(matches!(outcome, Some(DeliveryOutcome::TransportFailure { .. })));
    }
}
