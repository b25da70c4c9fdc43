//! UserRecordProjector - Resolves a user identity into a `UserRecord`.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RealmId, UserId};
use crate::domain::user::UserRecord;
use crate::ports::UserDirectory;

/// Projects directory accounts into the fixed-shape notification record.
pub struct UserRecordProjector {
    directory: Arc<dyn UserDirectory>,
}

impl UserRecordProjector {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Looks `user_id` up in `realm_id` and copies the five record fields.
    ///
    /// Returns `Ok(None)` when the user does not exist, which happens when
    /// an account is deleted between event emission and handling.
    pub async fn project(
        &self,
        user_id: &UserId,
        realm_id: &RealmId,
    ) -> Result<Option<UserRecord>, DomainError> {
        let user = self.directory.find_user(realm_id, user_id).await?;
        Ok(user.as_ref().map(UserRecord::from))
    }
}
