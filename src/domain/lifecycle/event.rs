//! Read-only views of the events a host platform emits.

use serde::{Deserialize, Serialize};

use super::LifecycleEventType;
use crate::domain::foundation::{EventId, RealmId, Timestamp, UserId};

/// A user-facing lifecycle event (login, registration, logout, ...).
///
/// The host owns these; the listener only reads them.
///
/// # Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "type": "REGISTER",
///   "realmId": "acme",
///   "userId": "u-42",
///   "time": "2025-01-15T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleEvent {
    #[serde(default)]
    pub id: EventId,

    #[serde(rename = "type")]
    pub event_type: LifecycleEventType,

    /// Realm the event happened in.
    pub realm_id: RealmId,

    /// Subject of the event. Failed logins and some error events have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    #[serde(default)]
    pub time: Timestamp,
}

impl LifecycleEvent {
    /// Creates an event with a fresh id, stamped now, without a subject.
    pub fn new(event_type: impl Into<LifecycleEventType>, realm_id: RealmId) -> Self {
        Self {
            id: EventId::new(),
            event_type: event_type.into(),
            realm_id,
            user_id: None,
            time: Timestamp::now(),
        }
    }

    /// Shorthand for a `REGISTER` event about `user_id`.
    pub fn registration(realm_id: RealmId, user_id: UserId) -> Self {
        Self::new(LifecycleEventType::Register, realm_id).with_user(user_id)
    }

    /// Sets the subject of the event.
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// Operation recorded by an administrative event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminOperation {
    Create,
    Update,
    Delete,
    Action,
}

/// An administrative event (realm or user changes made through the admin API).
///
/// Part of the listener interface only; registration notifications never
/// originate from admin events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEvent {
    #[serde(default)]
    pub id: EventId,

    pub realm_id: RealmId,

    pub operation: AdminOperation,

    /// Path of the affected resource, e.g. `users/u-42`.
    pub resource_path: String,

    #[serde(default)]
    pub time: Timestamp,
}

impl AdminEvent {
    pub fn new(realm_id: RealmId, operation: AdminOperation, resource_path: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            realm_id,
            operation,
            resource_path: resource_path.into(),
            time: Timestamp::now(),
        }
    }
}
