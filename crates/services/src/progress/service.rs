use std::sync::{Arc, Mutex, MutexGuard};

use rosary_core::model::Section;
use rosary_core::progress::{ProgressMap, SectionProgressTracker, Step};
use storage::local_store::{LocalStore, PROGRESS_KEY, read_json, write_json};

use super::snapshot::ProgressSnapshot;
use crate::error::ProgressError;

/// Owns the navigation tracker and writes the progress map back to the
/// local store after every counter change.
pub struct ProgressService {
    store: Arc<dyn LocalStore>,
    tracker: Mutex<SectionProgressTracker>,
}

impl ProgressService {
    /// Restore progress from the local store.
    ///
    /// An absent or unreadable blob starts from zero counts.
    #[must_use]
    pub fn load(store: Arc<dyn LocalStore>) -> Self {
        let progress = match read_json::<ProgressMap>(store.as_ref(), PROGRESS_KEY) {
            Ok(Some(progress)) => progress,
            Ok(None) => ProgressMap::default(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable progress; starting fresh");
                ProgressMap::default()
            }
        };
        Self {
            store,
            tracker: Mutex::new(SectionProgressTracker::new(progress)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::from_tracker(&self.tracker())
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Store` if the new counts cannot be persisted.
    pub fn advance(&self, section: Section) -> Result<Step, ProgressError> {
        self.apply(|tracker| tracker.advance(section))
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Store` if the new counts cannot be persisted.
    pub fn retreat(&self, section: Section) -> Result<Step, ProgressError> {
        self.apply(|tracker| tracker.retreat(section))
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Store` if the new counts cannot be persisted.
    pub fn jump_to(&self, section: Section, index: usize) -> Result<Step, ProgressError> {
        self.apply(|tracker| tracker.jump_to(section, index))
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Store` if the new counts cannot be persisted.
    pub fn next(&self) -> Result<Step, ProgressError> {
        self.apply(SectionProgressTracker::next)
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Store` if the new counts cannot be persisted.
    pub fn previous(&self) -> Result<Step, ProgressError> {
        self.apply(SectionProgressTracker::previous)
    }

    /// Switch sections. Counters are untouched so nothing is written.
    pub fn select(&self, section: Section) -> Step {
        self.tracker().select(section)
    }

    fn apply(
        &self,
        transition: impl FnOnce(&mut SectionProgressTracker) -> Step,
    ) -> Result<Step, ProgressError> {
        let mut tracker = self.tracker();
        let step = transition(&mut tracker);
        if step.changes_progress() {
            write_json(self.store.as_ref(), PROGRESS_KEY, tracker.progress())?;
        }
        tracing::trace!(?step, current = %tracker.current(), "progress transition");
        Ok(step)
    }

    fn tracker(&self) -> MutexGuard<'_, SectionProgressTracker> {
        // A panic mid-transition leaves the tracker in a valid state.
        self.tracker
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
