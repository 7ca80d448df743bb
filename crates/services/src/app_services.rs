use std::path::Path;
use std::sync::Arc;

use storage::local_store::{FileLocalStore, InMemoryLocalStore, LocalStore};
use storage::repository::Storage;

use crate::Clock;
use crate::auth_service::AuthService;
use crate::error::AppServicesError;
use crate::intention_service::IntentionService;
use crate::prayer_service::PrayerService;
use crate::progress::ProgressService;
use crate::session_service::SessionService;

/// Assembles the app-facing services over one storage backend and one local
/// store.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    prayers: Arc<PrayerService>,
    intentions: Arc<IntentionService>,
    progress: Arc<ProgressService>,
    session: Arc<SessionService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and a file-based local store
    /// under `state_dir`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database or the state directory
    /// cannot be opened.
    pub async fn new_sqlite(
        db_url: &str,
        state_dir: &Path,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let local: Arc<dyn LocalStore> = Arc::new(FileLocalStore::open(state_dir)?);
        Ok(Self::from_parts(&storage, local, clock))
    }

    /// Fully in-memory services, for tests and previews.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_parts(
            &Storage::in_memory(),
            Arc::new(InMemoryLocalStore::new()),
            clock,
        )
    }

    #[must_use]
    pub fn from_parts(storage: &Storage, local: Arc<dyn LocalStore>, clock: Clock) -> Self {
        Self {
            auth: Arc::new(AuthService::new(clock, Arc::clone(&storage.users))),
            prayers: Arc::new(PrayerService::new(clock, Arc::clone(&storage.prayers))),
            intentions: Arc::new(IntentionService::new(
                clock,
                Arc::clone(&storage.intentions),
            )),
            progress: Arc::new(ProgressService::load(Arc::clone(&local))),
            session: Arc::new(SessionService::new(local)),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn prayers(&self) -> Arc<PrayerService> {
        Arc::clone(&self.prayers)
    }

    #[must_use]
    pub fn intentions(&self) -> Arc<IntentionService> {
        Arc::clone(&self.intentions)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }
}
