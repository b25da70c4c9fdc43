//! RegistrationListener - Forwards newly registered users to the backend.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::projector::UserRecordProjector;
use crate::config::NotifierConfig;
use crate::domain::lifecycle::{AdminEvent, LifecycleEvent};
use crate::ports::{EventListener, RecordNotifier, UserDirectory};

/// Event listener reacting to `REGISTER` events.
///
/// For every registration it projects the new user from the directory and
/// hands the record to the notifier. Everything else is ignored without
/// logging. No failure escapes: unknown users, directory errors, and
/// delivery problems are logged and the event is dropped.
pub struct RegistrationListener {
    config: Arc<NotifierConfig>,
    projector: UserRecordProjector,
    notifier: Arc<dyn RecordNotifier>,
}

impl RegistrationListener {
    pub fn new(
        config: Arc<NotifierConfig>,
        directory: Arc<dyn UserDirectory>,
        notifier: Arc<dyn RecordNotifier>,
    ) -> Self {
        Self {
            config,
            projector: UserRecordProjector::new(directory),
            notifier,
        }
    }

    async fn notify_registration(&self, event: &LifecycleEvent) {
        let Some(user_id) = event.user_id.as_ref() else {
            warn!(
                event_id = %event.id,
                realm_id = %event.realm_id,
                "Registration event carries no userId, dropping"
            );
            return;
        };

        let record = match self.projector.project(user_id, &event.realm_id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                warn!(
                    event_id = %event.id,
                    realm_id = %event.realm_id,
                    user_id = %user_id,
                    "User not found for event with userId: {}",
                    user_id
                );
                return;
            }
            Err(e) => {
                error!(
                    event_id = %event.id,
                    realm_id = %event.realm_id,
                    user_id = %user_id,
                    error = %e,
                    "User directory lookup failed, dropping registration event"
                );
                return;
            }
        };

        info!(
            user_id = %record.id,
            username = record.username.as_deref().unwrap_or_default(),
            "Registering user"
        );

        let outcome = self
            .notifier
            .deliver(self.config.target_url(), self.config.api_key(), &record)
            .await;

        if let Some(outcome) = outcome {
            debug!(event_id = %event.id, outcome = %outcome, "Registration event handled");
        }
    }
}

#[async_trait]
impl EventListener for RegistrationListener {
    async fn on_event(&self, event: &LifecycleEvent) {
        if !event.event_type.is_registration() {
            return;
        }
        self.notify_registration(event).await;
    }

    async fn on_admin_event(&self, _event: &AdminEvent, _include_representation: bool) {}

    fn name(&self) -> &'static str {
        "RegistrationListener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryUserDirectory;
    use crate::domain::foundation::{RealmId, UserId};
    use crate::domain::lifecycle::{AdminOperation, LifecycleEventType};
    use crate::domain::notification::DeliveryOutcome;
    use crate::domain::user::{DirectoryUser, UserRecord};
    use secrecy::{ExposeSecret, SecretString};
    use std::sync::Mutex;

    /// Test notifier that records every delivery
    #[derive(Default)]
    struct RecordingNotifier {
        deliveries: Mutex<Vec<(String, String, UserRecord)>>,
    }

    impl RecordingNotifier {
        fn deliveries(&self) -> Vec<(String, String, UserRecord)> {
            self.deliveries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecordNotifier for RecordingNotifier {
        async fn deliver(
            &self,
            url: &str,
            api_key: &SecretString,
            record: &UserRecord,
        ) -> Option<DeliveryOutcome> {
            self.deliveries.lock().unwrap().push((
                url.to_string(),
                api_key.expose_secret().clone(),
                record.clone(),
            ));
            Some(DeliveryOutcome::Success { status: 201 })
        }
    }

    fn realm() -> RealmId {
        RealmId::new("acme").unwrap()
    }

    fn ana_id() -> UserId {
        UserId::new("u-42").unwrap()
    }

    fn setup() -> (RegistrationListener, Arc<InMemoryUserDirectory>, Arc<RecordingNotifier>) {
        let directory = Arc::new(InMemoryUserDirectory::new().with_user(
            realm(),
            DirectoryUser::new(ana_id(), "ana")
                .with_names("Ana", "Lee")
                .with_email("ana@x.com"),
        ));
        let notifier = Arc::new(RecordingNotifier::default());
        let config = Arc::new(NotifierConfig::new("https://api.example.com/register", "secret123").unwrap());
        let listener = RegistrationListener::new(config, directory.clone(), notifier.clone());
        (listener, directory, notifier)
    }

    #[tokio::test]
    async fn test_registration_is_delivered() {
        let (listener, _directory, notifier) = setup();

        listener
            .on_event(&LifecycleEvent::registration(realm(), ana_id()))
            .await;

        let deliveries = notifier.deliveries();
        assert_eq!(deliveries.len(), 1);
        let (url, api_key, record) = &deliveries[0];
        assert_eq!(url, "https://api.example.com/register");
        assert_eq!(api_key, "secret123");
        assert_eq!(record.username.as_deref(), Some("ana"));
        assert_eq!(record.email.as_deref(), Some("ana@x.com"));
    }

    #[tokio::test]
    async fn test_other_event_types_are_ignored() {
        let (listener, directory, notifier) = setup();

        for event_type in [
            LifecycleEventType::Login,
            LifecycleEventType::RegisterError,
            LifecycleEventType::UpdateProfile,
            LifecycleEventType::Other("CUSTOM_REGISTER".into()),
        ] {
            let event = LifecycleEvent::new(event_type, realm()).with_user(ana_id());
            listener.on_event(&event).await;
        }

        assert!(notifier.deliveries().is_empty());
        assert_eq!(directory.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_user_is_dropped() {
        let (listener, directory, notifier) = setup();

        listener
            .on_event(&LifecycleEvent::registration(realm(), UserId::new("ghost").unwrap()))
            .await;

        assert_eq!(directory.lookup_count(), 1);
        assert!(notifier.deliveries().is_empty());
    }

    #[tokio::test]
    async fn test_registration_without_user_id_is_dropped() {
        let (listener, directory, notifier) = setup();

        listener
            .on_event(&LifecycleEvent::new(LifecycleEventType::Register, realm()))
            .await;

        assert_eq!(directory.lookup_count(), 0);
        assert!(notifier.deliveries().is_empty());
    }

    #[tokio::test]
    async fn test_directory_failure_is_swallowed() {
        let (listener, directory, notifier) = setup();
        directory.set_unavailable(true);

        listener
            .on_event(&LifecycleEvent::registration(realm(), ana_id()))
            .await;

        assert!(notifier.deliveries().is_empty());
    }

    #[tokio::test]
    async fn test_same_event_twice_is_delivered_twice() {
        let (listener, _directory, notifier) = setup();
        let event = LifecycleEvent::registration(realm(), ana_id());

        listener.on_event(&event).await;
        listener.on_event(&event).await;

        assert_eq!(notifier.deliveries().len(), 2);
    }

    #[tokio::test]
    async fn test_admin_events_are_ignored() {
        let (listener, directory, notifier) = setup();

        listener
            .on_admin_event(&AdminEvent::new(realm(), AdminOperation::Create, "users/u-42"), true)
            .await;

        assert_eq!(directory.lookup_count(), 0);
        assert!(notifier.deliveries().is_empty());
    }
}
