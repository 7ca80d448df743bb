use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::UserId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("username cannot be empty")]
    EmptyUsername,

    #[error("password cannot be empty")]
    EmptyPassword,
}

/// Validated username/password pair submitted for registration or login.
///
/// The username is trimmed; the password is kept verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns `UserError` if either field is empty after trimming.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, UserError> {
        let username = username.into().trim().to_string();
        let password = password.into();
        if username.is_empty() {
            return Err(UserError::EmptyUsername);
        }
        if password.trim().is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(Self { username, password })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A stored account row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn from_persisted(
        id: UserId,
        username: String,
        password: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Plain equality check against the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Projection handed to clients; never carries the password.
    #[must_use]
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
}
