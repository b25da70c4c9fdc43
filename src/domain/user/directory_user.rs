//! DirectoryUser - the host directory's view of a user account.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// A user account as stored in the host's directory.
///
/// Carries more than the notification needs; the projector picks the
/// fields that go on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub id: UserId,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl DirectoryUser {
    /// Creates an enabled account with only an id and username.
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: Some(username.into()),
            first_name: None,
            last_name: None,
            email: None,
            email_verified: false,
            enabled: true,
        }
    }

    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
