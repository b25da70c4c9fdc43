//! UserDirectory port - Read access to the host's user storage.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RealmId, UserId};
use crate::domain::user::DirectoryUser;

/// Lookup capability over the host's user directory, scoped by realm.
///
/// Implementations must return `Ok(None)` for an unknown user. `Err` is
/// reserved for the directory itself being unavailable.
///
/// # Example
///
/// ```ignore
/// match directory.find_user(&realm_id, &user_id).await? {
///     Some(user) => println!("found {:?}", user.username),
///     None => println!("user was deleted"),
/// }
/// ```
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns the current state of `user_id` in `realm_id`.
    async fn find_user(
        &self,
        realm_id: &RealmId,
        user_id: &UserId,
    ) -> Result<Option<DirectoryUser>, DomainError>;
}
