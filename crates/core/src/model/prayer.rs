use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{PrayerId, UserId};
use crate::model::section::Section;

/// Server-side record of a prayed section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRecord {
    pub id: PrayerId,
    pub user_id: UserId,
    pub section: Section,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PrayerRecord {
    /// Flip the completion flag. `completed_at` tracks the latest transition to
    /// completed and is cleared when the row is reopened.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        match (self.completed, completed) {
            (false, true) => self.completed_at = Some(now),
            (_, false) => self.completed_at = None,
            (true, true) => {}
        }
        self.completed = completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn record(completed: bool) -> PrayerRecord {
        PrayerRecord {
            id: PrayerId::new(1),
            user_id: UserId::new(1),
            section: Section::Gaudiosa,
            completed,
            completed_at: completed.then(fixed_now),
            created_at: fixed_now(),
        }
    }

    #[test]
    fn completing_stamps_time() {
        let mut row = record(false);
        let later = fixed_now() + Duration::minutes(20);
        row.set_completed(true, later);
        assert!(row.completed);
        assert_eq!(row.completed_at, Some(later));
    }

    #[test]
    fn completing_twice_keeps_first_stamp() {
        let mut row = record(true);
        row.set_completed(true, fixed_now() + Duration::hours(1));
        assert_eq!(row.completed_at, Some(fixed_now()));
    }

    #[test]
    fn reopening_clears_stamp() {
        let mut row = record(true);
        row.set_completed(false, fixed_now());
        assert!(!row.completed);
        assert_eq!(row.completed_at, None);
    }
}
