use std::sync::Arc;

use rosary_core::model::PublicUser;
use storage::local_store::{LocalStore, LocalStoreError, USER_KEY, read_json, write_json};

use crate::error::SessionError;

/// Remembers the signed-in user across restarts.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn LocalStore>,
}

impl SessionService {
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// The remembered user, if any. A blob that no longer decodes is removed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the store cannot be read.
    pub fn restore(&self) -> Result<Option<PublicUser>, SessionError> {
        match read_json::<PublicUser>(self.store.as_ref(), USER_KEY) {
            Ok(user) => Ok(user),
            Err(LocalStoreError::Serialization(err)) => {
                tracing::warn!(error = %err, "removing unreadable remembered user");
                self.store.remove_item(USER_KEY)?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::Store` if the user cannot be written.
    pub fn remember(&self, user: &PublicUser) -> Result<(), SessionError> {
        write_json(self.store.as_ref(), USER_KEY, user)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::Store` if the entry cannot be removed.
    pub fn forget(&self) -> Result<(), SessionError> {
        self.store.remove_item(USER_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rosary_core::model::UserId;
    use storage::local_store::InMemoryLocalStore;

    #[test]
    fn remember_restore_forget() {
        let store = Arc::new(InMemoryLocalStore::new());
        let sessions = SessionService::new(store);
        assert_eq!(sessions.restore().unwrap(), None);

        let user = PublicUser {
            id: UserId::new(4),
            username: "clara".into(),
        };
        sessions.remember(&user).unwrap();
        assert_eq!(sessions.restore().unwrap(), Some(user));

        sessions.forget().unwrap();
        assert_eq!(sessions.restore().unwrap(), None);
    }

    #[test]
    fn corrupt_user_blob_is_dropped() {
        let store = Arc::new(InMemoryLocalStore::new());
        store.set_item(USER_KEY, "[1,2").unwrap();
        let sessions = SessionService::new(store.clone());
        assert_eq!(sessions.restore().unwrap(), None);
        assert_eq!(store.get_item(USER_KEY).unwrap(), None);
    }
}
