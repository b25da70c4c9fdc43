//! In-memory user directory for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RealmId, UserId};
use crate::domain::user::DirectoryUser;
use crate::ports::UserDirectory;

/// Realm-scoped user directory held in memory.
///
/// Counts lookups so tests can assert that ignored events never touch the
/// directory, and can simulate an outage with [`set_unavailable`](Self::set_unavailable).
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<(RealmId, UserId), DirectoryUser>>,
    lookups: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `user` to `realm_id`, returning self for chaining.
    pub fn with_user(self, realm_id: RealmId, user: DirectoryUser) -> Self {
        self.insert(realm_id, user);
        self
    }

    /// Adds or replaces `user` in `realm_id`.
    pub fn insert(&self, realm_id: RealmId, user: DirectoryUser) {
        self.users
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert((realm_id, user.id.clone()), user);
    }

    /// Removes a user, returning the stored account if there was one.
    pub fn remove(&self, realm_id: &RealmId, user_id: &UserId) -> Option<DirectoryUser> {
        self.users
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&(realm_id.clone(), user_id.clone()))
    }

    /// Makes subsequent lookups fail with `DirectoryUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `find_user` calls so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user(
        &self,
        realm_id: &RealmId,
        user_id: &UserId,
    ) -> Result<Option<DirectoryUser>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DirectoryUnavailable,
                "User directory is unavailable",
            )
            .with_detail("realm_id", realm_id.as_str()));
        }

        Ok(self
            .users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&(realm_id.clone(), user_id.clone()))
            .cloned())
    }
}
