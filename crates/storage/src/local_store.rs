//! Durable client-side key/value storage of JSON blobs.
//!
//! Values are opaque strings; callers decide how to encode them. The
//! `read_json`/`write_json` helpers cover the common serde case.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key holding the serialized progress map.
pub const PROGRESS_KEY: &str = "rosary_progress";
/// Key holding the remembered signed-in user.
pub const USER_KEY: &str = "rosary_user";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocalStoreError {
    #[error("local store io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    #[error("local store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("local store lock poisoned")]
    Poisoned,
}

/// Synchronous key/value store.
pub trait LocalStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `LocalStoreError` when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, LocalStoreError>;

    /// # Errors
    ///
    /// Returns `LocalStoreError` when the value cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStoreError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `LocalStoreError` when the backend cannot be modified.
    fn remove_item(&self, key: &str) -> Result<(), LocalStoreError>;
}

/// Read and decode a JSON value. `Ok(None)` when the key is absent.
///
/// # Errors
///
/// Returns `LocalStoreError::Serialization` when the stored blob does not
/// decode as `T`.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn LocalStore,
    key: &str,
) -> Result<Option<T>, LocalStoreError> {
    match store.get_item(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// # Errors
///
/// Returns `LocalStoreError` when encoding or writing fails.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn LocalStore,
    key: &str,
    value: &T,
) -> Result<(), LocalStoreError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

#[derive(Debug, Default)]
pub struct InMemoryLocalStore {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryLocalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for InMemoryLocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, LocalStoreError> {
        let items = self.items.lock().map_err(|_| LocalStoreError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStoreError> {
        let mut items = self.items.lock().map_err(|_| LocalStoreError::Poisoned)?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), LocalStoreError> {
        let mut items = self.items.lock().map_err(|_| LocalStoreError::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}

/// One file per key under a state directory: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileLocalStore {
    dir: PathBuf,
}

impl FileLocalStore {
    /// Open (and create if needed) the state directory.
    ///
    /// # Errors
    ///
    /// Returns `LocalStoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, LocalStoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "local store opened");
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, LocalStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LocalStoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl LocalStore for FileLocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, LocalStoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), LocalStoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        n: u8,
    }

    #[test]
    fn in_memory_store_sets_and_removes() {
        let store = InMemoryLocalStore::new();
        assert_eq!(store.get_item(PROGRESS_KEY).unwrap(), None);
        store.set_item(PROGRESS_KEY, "{}").unwrap();
        assert_eq!(store.get_item(PROGRESS_KEY).unwrap().as_deref(), Some("{}"));
        store.remove_item(PROGRESS_KEY).unwrap();
        store.remove_item(PROGRESS_KEY).unwrap();
        assert_eq!(store.get_item(PROGRESS_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLocalStore::open(dir.path().join("state")).unwrap();
        write_json(&store, USER_KEY, &Blob { n: 3 }).unwrap();

        let reopened = FileLocalStore::open(dir.path().join("state")).unwrap();
        let blob: Option<Blob> = read_json(&reopened, USER_KEY).unwrap();
        assert_eq!(blob, Some(Blob { n: 3 }));
        assert!(reopened.dir().join("rosary_user.json").exists());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLocalStore::open(dir.path()).unwrap();
        let err = store.set_item("../escape", "x").unwrap_err();
        assert!(matches!(err, LocalStoreError::InvalidKey(_)));
        assert!(matches!(
            store.get_item("").unwrap_err(),
            LocalStoreError::InvalidKey(_)
        ));
    }

    #[test]
    fn corrupt_blob_reports_serialization_error() {
        let store = InMemoryLocalStore::new();
        store.set_item(USER_KEY, "not json").unwrap();
        let err = read_json::<Blob>(&store, USER_KEY).unwrap_err();
        assert!(matches!(err, LocalStoreError::Serialization(_)));
    }
}
