use std::sync::Arc;

use rosary_core::model::{PrayerId, PrayerRecord, Section, UserId};
use storage::repository::{NewPrayerRecord, PrayerRepository, StorageError};

use crate::Clock;
use crate::error::PrayerError;

/// Records which sections a user has finished praying.
#[derive(Clone)]
pub struct PrayerService {
    clock: Clock,
    prayers: Arc<dyn PrayerRepository>,
}

impl PrayerService {
    #[must_use]
    pub fn new(clock: Clock, prayers: Arc<dyn PrayerRepository>) -> Self {
        Self { clock, prayers }
    }

    /// # Errors
    ///
    /// Returns `PrayerError::Storage` if repository access fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<PrayerRecord>, PrayerError> {
        Ok(self.prayers.list_prayers(user_id).await?)
    }

    /// # Errors
    ///
    /// Returns `PrayerError::UnknownUser` when `user_id` has no account.
    pub async fn create(
        &self,
        user_id: UserId,
        section: Section,
        completed: bool,
    ) -> Result<PrayerRecord, PrayerError> {
        let record = self
            .prayers
            .insert_prayer(NewPrayerRecord {
                user_id,
                section,
                completed,
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                StorageError::MissingReference => PrayerError::UnknownUser,
                other => PrayerError::Storage(other),
            })?;
        tracing::debug!(prayer_id = %record.id, %section, completed, "prayer recorded");
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns `PrayerError::NotFound` when no row has this id.
    pub async fn set_completed(
        &self,
        id: PrayerId,
        completed: bool,
    ) -> Result<PrayerRecord, PrayerError> {
        self.prayers
            .update_prayer_completed(id, completed, self.clock.now())
            .await?
            .ok_or(PrayerError::NotFound)
    }
}
