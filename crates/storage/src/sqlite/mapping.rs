use rosary_core::model::{
    Intention, IntentionId, PrayerId, PrayerRecord, Section, User, UserId,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Classify a write failure: uniqueness and foreign-key violations become
/// domain-level storage errors, everything else is a connection error.
pub(crate) fn write_err(e: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StorageError::Conflict;
        }
        if db.is_foreign_key_violation() {
            return StorageError::MissingReference;
        }
    }
    StorageError::Connection(e.to_string())
}

pub(crate) fn conn_err(e: sqlx::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

pub(crate) fn id_to_i64(field: &'static str, v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} overflow")))
}

pub(crate) fn user_id_from_i64(v: i64) -> Result<UserId, StorageError> {
    Ok(UserId::new(i64_to_u64("user_id", v)?))
}

pub(crate) fn prayer_id_from_i64(v: i64) -> Result<PrayerId, StorageError> {
    Ok(PrayerId::new(i64_to_u64("prayer_id", v)?))
}

pub(crate) fn intention_id_from_i64(v: i64) -> Result<IntentionId, StorageError> {
    Ok(IntentionId::new(i64_to_u64("intention_id", v)?))
}

pub(crate) fn map_user_row(row: &SqliteRow) -> Result<User, StorageError> {
    Ok(User::from_persisted(
        user_id_from_i64(row.try_get("id").map_err(ser)?)?,
        row.try_get("username").map_err(ser)?,
        row.try_get("password").map_err(ser)?,
        row.try_get("created_at").map_err(ser)?,
    ))
}

pub(crate) fn map_prayer_row(row: &SqliteRow) -> Result<PrayerRecord, StorageError> {
    let section: String = row.try_get("section").map_err(ser)?;
    Ok(PrayerRecord {
        id: prayer_id_from_i64(row.try_get("id").map_err(ser)?)?,
        user_id: user_id_from_i64(row.try_get("user_id").map_err(ser)?)?,
        section: section.parse::<Section>().map_err(ser)?,
        completed: row.try_get("completed").map_err(ser)?,
        completed_at: row.try_get("completed_at").map_err(ser)?,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}

pub(crate) fn map_intention_row(row: &SqliteRow) -> Result<Intention, StorageError> {
    Ok(Intention {
        id: intention_id_from_i64(row.try_get("id").map_err(ser)?)?,
        user_id: user_id_from_i64(row.try_get("user_id").map_err(ser)?)?,
        text: row.try_get("text").map_err(ser)?,
        is_active: row.try_get("is_active").map_err(ser)?,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}
