//! RecordNotifier port - Outbound delivery of a user record.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::notification::DeliveryOutcome;
use crate::domain::user::UserRecord;

/// Sends one [`UserRecord`] to the registration backend.
///
/// Implementations must:
/// - Make at most one attempt per call (no retries, no queueing)
/// - Return `None` without any I/O when `url` or `api_key` is blank
/// - Classify every attempt that was made into a [`DeliveryOutcome`]
///   instead of returning an error
#[async_trait]
pub trait RecordNotifier: Send + Sync {
    async fn deliver(
        &self,
        url: &str,
        api_key: &SecretString,
        record: &UserRecord,
    ) -> Option<DeliveryOutcome>;
}
