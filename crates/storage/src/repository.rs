use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rosary_core::model::{
    Intention, IntentionId, IntentionText, PrayerId, PrayerRecord, Section, User, UserId,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("conflict")]
    Conflict,

    #[error("referenced row does not exist")]
    MissingReference,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Insert shape for a user; the id is assigned by the backend.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPrayerRecord {
    pub user_id: UserId,
    pub section: Section,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl NewPrayerRecord {
    fn into_record(self, id: PrayerId) -> PrayerRecord {
        PrayerRecord {
            id,
            user_id: self.user_id,
            section: self.section,
            completed: self.completed,
            completed_at: self.completed.then_some(self.created_at),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewIntentionRecord {
    pub user_id: UserId,
    pub text: IntentionText,
    pub created_at: DateTime<Utc>,
}

impl NewIntentionRecord {
    fn into_intention(self, id: IntentionId) -> Intention {
        Intention {
            id,
            user_id: self.user_id,
            text: self.text.into_inner(),
            is_active: true,
            created_at: self.created_at,
        }
    }
}

/// Repository contract for accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the username is already taken.
    async fn insert_user(&self, user: NewUserRecord) -> Result<User, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn count_users(&self) -> Result<u64, StorageError>;
}

/// Repository contract for prayer-completion rows.
#[async_trait]
pub trait PrayerRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::MissingReference` if the owning user does not exist.
    async fn insert_prayer(&self, prayer: NewPrayerRecord) -> Result<PrayerRecord, StorageError>;

    /// Rows for a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_prayers(&self, user_id: UserId) -> Result<Vec<PrayerRecord>, StorageError>;

    /// Update the completion flag; `Ok(None)` when the row does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn update_prayer_completed(
        &self,
        id: PrayerId,
        completed: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<PrayerRecord>, StorageError>;
}

/// Repository contract for prayer intentions.
#[async_trait]
pub trait IntentionRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::MissingReference` if the owning user does not exist.
    async fn insert_intention(
        &self,
        intention: NewIntentionRecord,
    ) -> Result<Intention, StorageError>;

    /// Intentions for a user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_intentions(&self, user_id: UserId) -> Result<Vec<Intention>, StorageError>;

    /// Delete an intention owned by `user_id`. Returns `false` when no row
    /// matched both the id and the owner.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn delete_intention(
        &self,
        id: IntentionId,
        user_id: UserId,
    ) -> Result<bool, StorageError>;
}

/// Rows keyed by an auto-incrementing id, starting at 1.
#[derive(Debug)]
struct Table<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<Mutex<Table<User>>>,
    prayers: Arc<Mutex<Table<PrayerRecord>>>,
    intentions: Arc<Mutex<Table<Intention>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn user_exists(&self, id: UserId) -> Result<bool, StorageError> {
        Ok(lock(&self.users)?.rows.contains_key(&id.value()))
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn insert_user(&self, user: NewUserRecord) -> Result<User, StorageError> {
        let mut guard = lock(&self.users)?;
        if guard.rows.values().any(|u| u.username() == user.username) {
            return Err(StorageError::Conflict);
        }
        let id = UserId::new(guard.allocate());
        let row = User::from_persisted(id, user.username, user.password, user.created_at);
        guard.rows.insert(id.value(), row.clone());
        Ok(row)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StorageError> {
        Ok(lock(&self.users)?.rows.get(&id.value()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(lock(&self.users)?
            .rows
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn count_users(&self) -> Result<u64, StorageError> {
        Ok(lock(&self.users)?.rows.len() as u64)
    }
}

#[async_trait]
impl PrayerRepository for InMemoryRepository {
    async fn insert_prayer(&self, prayer: NewPrayerRecord) -> Result<PrayerRecord, StorageError> {
        if !self.user_exists(prayer.user_id)? {
            return Err(StorageError::MissingReference);
        }
        let mut guard = lock(&self.prayers)?;
        let id = PrayerId::new(guard.allocate());
        let row = prayer.into_record(id);
        guard.rows.insert(id.value(), row.clone());
        Ok(row)
    }

    async fn list_prayers(&self, user_id: UserId) -> Result<Vec<PrayerRecord>, StorageError> {
        Ok(lock(&self.prayers)?
            .rows
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_prayer_completed(
        &self,
        id: PrayerId,
        completed: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<PrayerRecord>, StorageError> {
        let mut guard = lock(&self.prayers)?;
        Ok(guard.rows.get_mut(&id.value()).map(|row| {
            row.set_completed(completed, now);
            row.clone()
        }))
    }
}

#[async_trait]
impl IntentionRepository for InMemoryRepository {
    async fn insert_intention(
        &self,
        intention: NewIntentionRecord,
    ) -> Result<Intention, StorageError> {
        if !self.user_exists(intention.user_id)? {
            return Err(StorageError::MissingReference);
        }
        let mut guard = lock(&self.intentions)?;
        let id = IntentionId::new(guard.allocate());
        let row = intention.into_intention(id);
        guard.rows.insert(id.value(), row.clone());
        Ok(row)
    }

    async fn list_intentions(&self, user_id: UserId) -> Result<Vec<Intention>, StorageError> {
        Ok(lock(&self.intentions)?
            .rows
            .values()
            .filter(|i| i.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn delete_intention(
        &self,
        id: IntentionId,
        user_id: UserId,
    ) -> Result<bool, StorageError> {
        let mut guard = lock(&self.intentions)?;
        let owned = guard
            .rows
            .get(&id.value())
            .is_some_and(|row| row.is_owned_by(user_id));
        if owned {
            guard.rows.remove(&id.value());
        }
        Ok(owned)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub users: Arc<dyn UserRepository>,
    pub prayers: Arc<dyn PrayerRepository>,
    pub intentions: Arc<dyn IntentionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let users: Arc<dyn UserRepository> = Arc::new(repo.clone());
        let prayers: Arc<dyn PrayerRepository> = Arc::new(repo.clone());
        let intentions: Arc<dyn IntentionRepository> = Arc::new(repo);
        Self {
            users,
            prayers,
            intentions,
        }
    }
}
