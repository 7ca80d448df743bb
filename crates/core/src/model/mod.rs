mod ids;
mod intention;
mod prayer;
mod section;
mod user;

pub use ids::{IntentionId, ParseIdError, PrayerId, UserId};
pub use intention::{Intention, IntentionText, IntentionTextError};
pub use prayer::PrayerRecord;
pub use section::{MYSTERY_SUB_SECTIONS, ParseSectionError, Section};
pub use user::{Credentials, PublicUser, User, UserError};
