use std::sync::Arc;

use rosary_core::model::{Credentials, PublicUser};
use storage::repository::{NewUserRecord, StorageError, UserRepository};

use crate::Clock;
use crate::error::AuthError;

/// Account registration and login.
///
/// Passwords are stored and compared verbatim.
#[derive(Clone)]
pub struct AuthService {
    clock: Clock,
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    #[must_use]
    pub fn new(clock: Clock, users: Arc<dyn UserRepository>) -> Self {
        Self { clock, users }
    }

    /// Create an account and return its public projection.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::User` for blank fields, `AuthError::UsernameTaken`
    /// when the name is in use, and `AuthError::Storage` on backend failures.
    /// No row is written in any failure case.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<PublicUser, AuthError> {
        let credentials = Credentials::new(username, password)?;
        if self
            .users
            .find_by_username(credentials.username())
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken);
        }

        let user = self
            .users
            .insert_user(NewUserRecord {
                username: credentials.username().to_owned(),
                password: credentials.password().to_owned(),
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                StorageError::Conflict => AuthError::UsernameTaken,
                other => AuthError::Storage(other),
            })?;

        tracing::info!(user_id = %user.id(), "user registered");
        Ok(user.public())
    }

    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the user is unknown, the
    /// password differs, or either field is blank.
    pub async fn login(&self, username: &str, password: &str) -> Result<PublicUser, AuthError> {
        let Ok(credentials) = Credentials::new(username, password) else {
            return Err(AuthError::InvalidCredentials);
        };
        match self.users.find_by_username(credentials.username()).await? {
            Some(user) if user.password_matches(credentials.password()) => {
                tracing::debug!(user_id = %user.id(), "login succeeded");
                Ok(user.public())
            }
            _ => {
                tracing::debug!(username = credentials.username(), "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
