use std::sync::Arc;

use rosary_core::model::{Intention, IntentionId, IntentionText, UserId};
use storage::repository::{IntentionRepository, NewIntentionRecord, StorageError};

use crate::Clock;
use crate::error::IntentionError;

/// User-owned prayer intentions.
#[derive(Clone)]
pub struct IntentionService {
    clock: Clock,
    intentions: Arc<dyn IntentionRepository>,
}

impl IntentionService {
    #[must_use]
    pub fn new(clock: Clock, intentions: Arc<dyn IntentionRepository>) -> Self {
        Self { clock, intentions }
    }

    /// Intentions in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `IntentionError::Storage` if repository access fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Intention>, IntentionError> {
        Ok(self.intentions.list_intentions(user_id).await?)
    }

    /// Trim and store a new intention.
    ///
    /// # Errors
    ///
    /// Returns `IntentionError::Text` when the text is blank and
    /// `IntentionError::UnknownUser` when the owner does not exist.
    pub async fn add(&self, user_id: UserId, text: &str) -> Result<Intention, IntentionError> {
        let text = IntentionText::new(text)?;
        let intention = self
            .intentions
            .insert_intention(NewIntentionRecord {
                user_id,
                text,
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                StorageError::MissingReference => IntentionError::UnknownUser,
                other => IntentionError::Storage(other),
            })?;
        tracing::debug!(intention_id = %intention.id, %user_id, "intention added");
        Ok(intention)
    }

    /// Remove an intention owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `IntentionError::NotFound` when the id is unknown or belongs to
    /// someone else; the row is left untouched in that case.
    pub async fn remove(&self, id: IntentionId, user_id: UserId) -> Result<(), IntentionError> {
        if self.intentions.delete_intention(id, user_id).await? {
            tracing::debug!(intention_id = %id, %user_id, "intention removed");
            Ok(())
        } else {
            Err(IntentionError::NotFound)
        }
    }
}
