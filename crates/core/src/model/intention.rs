use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{IntentionId, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntentionTextError {
    #[error("intention text cannot be empty")]
    Empty,
}

/// Trimmed, non-empty intention text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentionText(String);

impl IntentionText {
    /// # Errors
    ///
    /// Returns `IntentionTextError::Empty` if nothing is left after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, IntentionTextError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IntentionTextError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A user-authored prayer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intention {
    pub id: IntentionId,
    pub user_id: UserId,
    pub text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Intention {
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn text_is_trimmed() {
        let text = IntentionText::new("  for my mother  ").unwrap();
        assert_eq!(text.as_str(), "for my mother");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(IntentionText::new(" \n\t").unwrap_err(), IntentionTextError::Empty);
    }

    #[test]
    fn serializes_camel_case() {
        let intention = Intention {
            id: IntentionId::new(3),
            user_id: UserId::new(1),
            text: "peace".into(),
            is_active: true,
            created_at: fixed_now(),
        };
        let json = serde_json::to_value(&intention).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["isActive"], true);
        assert!(json.get("createdAt").is_some());
        assert!(intention.is_owned_by(UserId::new(1)));
        assert!(!intention.is_owned_by(UserId::new(2)));
    }
}
