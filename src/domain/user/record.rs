//! UserRecord - the flat payload sent to the registration backend.

use serde::{Deserialize, Serialize};

use super::DirectoryUser;
use crate::domain::foundation::UserId;

/// Normalized record of a newly registered user.
///
/// Serializes to exactly five keys. Missing values are written as JSON
/// `null`, never omitted, so the backend sees a fixed shape:
///
/// ```json
/// {"id":"u-42","first_name":"Ana","last_name":"Lee","username":"ana","email":"ana@x.com"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl From<&DirectoryUser> for UserRecord {
    /// Copies the five wire fields verbatim. No trimming, case folding or
    /// email validation happens here.
    fn from(user: &DirectoryUser) -> Self {
        Self {
            id: user.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
