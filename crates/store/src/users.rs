//! Staff account directory (the `users` collection).

use std::collections::HashMap;
use std::sync::{Mutex, RwLock, mpsc};

use tracing::{debug, info};

use vettrack_auth::{AppUser, Role};
use vettrack_core::UserId;

use crate::error::StoreError;
use crate::subscription::WatchHandle;

/// Directory of staff accounts.
///
/// Accounts are keyed by the auth collaborator's user id, not by tenant —
/// the user *is* the tenant boundary. Lifecycle: created on first sign-in
/// with the default role, role updated in place by an admin, never deleted.
pub trait UserDirectory: Send + Sync {
    /// Look up the signed-in user's account, creating it with the default
    /// `worker` role on first sign-in.
    fn sign_in(&self, id: UserId, email: &str) -> Result<AppUser, StoreError>;

    fn get(&self, id: UserId) -> Result<AppUser, StoreError>;

    /// Update a user's role in place.
    fn set_role(&self, id: UserId, role: Role) -> Result<AppUser, StoreError>;

    fn list(&self) -> Result<Vec<AppUser>, StoreError>;

    /// Subscribe to the full user list; the current snapshot arrives
    /// immediately, a fresh one after every change.
    fn watch(&self) -> WatchHandle<Vec<AppUser>>;
}

/// In-memory user directory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, AppUser>>,
    watchers: Mutex<Vec<mpsc::Sender<Vec<AppUser>>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> Result<Vec<AppUser>, StoreError> {
        let map = self
            .users
            .read()
            .map_err(|_| StoreError::unavailable("user directory lock poisoned"))?;
        let mut users: Vec<AppUser> = map.values().cloned().collect();
        users.sort_by_key(|u| *u.id.as_uuid());
        Ok(users)
    }

    fn publish(&self) {
        let Ok(snapshot) = self.snapshot() else {
            return;
        };
        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.retain(|tx| tx.send(snapshot.clone()).is_ok());
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn sign_in(&self, id: UserId, email: &str) -> Result<AppUser, StoreError> {
        {
            let map = self
                .users
                .read()
                .map_err(|_| StoreError::unavailable("user directory lock poisoned"))?;
            if let Some(user) = map.get(&id) {
                return Ok(user.clone());
            }
        }

        let user = AppUser::first_sign_in(id, email)?;
        {
            let mut map = self
                .users
                .write()
                .map_err(|_| StoreError::unavailable("user directory lock poisoned"))?;
            // A concurrent first sign-in may have won the race; keep theirs.
            map.entry(id).or_insert_with(|| user.clone());
        }
        info!(%id, "new staff account created with default role");
        self.publish();
        self.get(id)
    }

    fn get(&self, id: UserId) -> Result<AppUser, StoreError> {
        let map = self
            .users
            .read()
            .map_err(|_| StoreError::unavailable("user directory lock poisoned"))?;
        map.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn set_role(&self, id: UserId, role: Role) -> Result<AppUser, StoreError> {
        let updated = {
            let mut map = self
                .users
                .write()
                .map_err(|_| StoreError::unavailable("user directory lock poisoned"))?;
            let user = map.get_mut(&id).ok_or(StoreError::NotFound)?;
            user.role = role;
            user.clone()
        };
        debug!(%id, %role, "user role updated");
        self.publish();
        Ok(updated)
    }

    fn list(&self) -> Result<Vec<AppUser>, StoreError> {
        self.snapshot()
    }

    fn watch(&self) -> WatchHandle<Vec<AppUser>> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(self.snapshot().unwrap_or_default());
        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.push(tx);
        }
        WatchHandle::new(rx)
    }
}
