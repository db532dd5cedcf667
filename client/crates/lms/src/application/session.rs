//! Session Store
//!
//! Holds the bearer token and user record in persisted key-value storage,
//! under `auth_token` and `user`.
//!
//! The two entries are independent storage keys, so a reader can observe
//! one without the other. Every access goes through one mutex, and
//! [`SessionStore::snapshot`] reads both entries under a single acquisition.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use platform::storage::{KeyValueStorage, MemoryStorage};

use crate::domain::entity::user::User;
use crate::domain::value_object::UserRole;
use crate::error::SessionError;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key of the JSON user record
pub const USER_KEY: &str = "user";

/// Immutable view of the session at one instant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionSnapshot {
    /// Anonymous visitor
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Logged in means a token is present, whatever the user entry says
    #[inline]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<&UserRole> {
        self.user.as_ref().map(|user| &user.role)
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(UserRole::is_admin)
    }
}

/// Session store over persisted storage
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    lock: Mutex<()>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open the store at startup, restoring whatever session is persisted
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let store = Self {
            storage,
            lock: Mutex::new(()),
        };

        let snapshot = store.snapshot();
        match (&snapshot.token, &snapshot.user) {
            (Some(_), Some(user)) => {
                tracing::info!(role = %user.role, "Restored persisted session");
            }
            (Some(_), None) => {
                tracing::warn!("Persisted token has no readable user record");
            }
            (None, Some(_)) => {
                tracing::warn!("Persisted user record has no token");
            }
            (None, None) => {
                tracing::debug!("No persisted session");
            }
        }

        store
    }

    /// Store backed by process memory (nothing survives a restart)
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStorage::new()))
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_token(&self) -> Option<String> {
        match self.storage.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read token, treating as logged out");
                None
            }
        }
    }

    fn read_user(&self) -> Option<User> {
        let raw = match self.storage.get_item(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read user record");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user record is malformed, ignoring it");
                None
            }
        }
    }

    /// True iff a token is stored
    pub fn is_logged_in(&self) -> bool {
        let _guard = self.guard();
        self.read_token().is_some()
    }

    /// Stored bearer token, if any
    pub fn token(&self) -> Option<String> {
        let _guard = self.guard();
        self.read_token()
    }

    /// Stored user record; `None` if absent or malformed
    pub fn get_user(&self) -> Option<User> {
        let _guard = self.guard();
        self.read_user()
    }

    /// Token and user read together
    pub fn snapshot(&self) -> SessionSnapshot {
        let _guard = self.guard();
        SessionSnapshot {
            token: self.read_token(),
            user: self.read_user(),
        }
    }

    /// Persist a new session
    pub fn set_session(&self, token: &str, user: &User) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(user).map_err(SessionError::Encode)?;

        let _guard = self.guard();
        self.storage.set_item(USER_KEY, &user_json)?;
        self.storage.set_item(TOKEN_KEY, token)?;

        tracing::info!(role = %user.role, "Session started");
        Ok(())
    }

    /// Remove both entries
    ///
    /// Both removals are attempted even if the first fails; the first
    /// error is returned.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        let _guard = self.guard();
        let token_result = self.storage.remove_item(TOKEN_KEY);
        let user_result = self.storage.remove_item(USER_KEY);

        token_result?;
        user_result?;

        tracing::info!("Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::UserId;

    fn admin() -> User {
        User::new(UserId::new(1), "admin", UserRole::Admin)
    }

    #[test]
    fn test_empty_store() {
        let store = SessionStore::in_memory();
        assert!(!store.is_logged_in());
        assert_eq!(store.get_user(), None);
        assert_eq!(store.snapshot(), SessionSnapshot::anonymous());
    }

    #[test]
    fn test_set_session() {
        let store = SessionStore::in_memory();
        store.set_session("T", &admin()).unwrap();

        assert!(store.is_logged_in());
        assert_eq!(store.token().as_deref(), Some("T"));
        assert_eq!(store.get_user().map(|u| u.role), Some(UserRole::Admin));

        let snapshot = store.snapshot();
        assert!(snapshot.is_logged_in());
        assert!(snapshot.is_admin());
    }

    #[test]
    fn test_clear_session() {
        let store = SessionStore::in_memory();
        store.set_session("T", &admin()).unwrap();
        store.clear_session().unwrap();

        assert!(!store.is_logged_in());
        assert_eq!(store.get_user(), None);

        // Clearing twice is fine
        store.clear_session().unwrap();
    }

    #[test]
    fn test_malformed_user_is_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "T").unwrap();
        storage.set_item(USER_KEY, "{not json").unwrap();

        let store = SessionStore::open(storage);
        assert!(store.is_logged_in());
        assert_eq!(store.get_user(), None);
        assert!(!store.snapshot().is_admin());
    }

    #[test]
    fn test_half_present_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item(USER_KEY, r#"{"id":1,"role":"admin"}"#)
            .unwrap();

        let store = SessionStore::open(storage);
        let snapshot = store.snapshot();
        assert!(!snapshot.is_logged_in());
        assert!(snapshot.is_admin());
    }

    #[test]
    fn test_empty_token_is_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "").unwrap();

        let store = SessionStore::open(storage);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_file_backed_session_restored() {
        use platform::storage::FileStorage;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::open(Arc::new(FileStorage::open(&path).unwrap()));
        store.set_session("T", &admin()).unwrap();
        drop(store);

        let restored = SessionStore::open(Arc::new(FileStorage::open(&path).unwrap()));
        assert_eq!(restored.token().as_deref(), Some("T"));
        assert!(restored.snapshot().is_admin());
    }
}
