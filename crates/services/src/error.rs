//! Shared error types for the services crate.

use thiserror::Error;

use rosary_core::model::{IntentionTextError, UserError};
use storage::local_store::LocalStoreError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PrayerService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrayerError {
    #[error("Prayer not found")]
    NotFound,
    #[error("unknown user")]
    UnknownUser,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `IntentionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntentionError {
    #[error("Intention not found")]
    NotFound,
    #[error("unknown user")]
    UnknownUser,
    #[error(transparent)]
    Text(#[from] IntentionTextError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Store(#[from] LocalStoreError),
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] LocalStoreError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    LocalStore(#[from] LocalStoreError),
}
