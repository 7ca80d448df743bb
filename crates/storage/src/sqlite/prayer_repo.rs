use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rosary_core::model::{PrayerId, PrayerRecord, UserId};

use super::SqliteRepository;
use super::mapping::{conn_err, id_to_i64, map_prayer_row, prayer_id_from_i64, write_err};
use crate::repository::{NewPrayerRecord, PrayerRepository, StorageError};

#[async_trait]
impl PrayerRepository for SqliteRepository {
    async fn insert_prayer(&self, prayer: NewPrayerRecord) -> Result<PrayerRecord, StorageError> {
        let completed_at = prayer.completed.then_some(prayer.created_at);
        let res = sqlx::query(
            r"
            INSERT INTO prayers (user_id, section, completed, completed_at, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(id_to_i64("user_id", prayer.user_id.value())?)
        .bind(prayer.section.as_str())
        .bind(prayer.completed)
        .bind(completed_at)
        .bind(prayer.created_at)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(PrayerRecord {
            id: prayer_id_from_i64(res.last_insert_rowid())?,
            user_id: prayer.user_id,
            section: prayer.section,
            completed: prayer.completed,
            completed_at,
            created_at: prayer.created_at,
        })
    }

    async fn list_prayers(&self, user_id: UserId) -> Result<Vec<PrayerRecord>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, section, completed, completed_at, created_at
            FROM prayers
            WHERE user_id = ?1
            ORDER BY id ASC
            ",
        )
        .bind(id_to_i64("user_id", user_id.value())?)
        .fetch_all(&self.pool)
        .await
        .map_err(conn_err)?;

        rows.iter().map(map_prayer_row).collect()
    }

    async fn update_prayer_completed(
        &self,
        id: PrayerId,
        completed: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<PrayerRecord>, StorageError> {
        let prayer_id = id_to_i64("prayer_id", id.value())?;
        let mut tx = self.pool.begin().await.map_err(conn_err)?;

        let row = sqlx::query(
            r"
            SELECT id, user_id, section, completed, completed_at, created_at
            FROM prayers WHERE id = ?1
            ",
        )
        .bind(prayer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(conn_err)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut record = map_prayer_row(&row)?;
        record.set_completed(completed, now);

        sqlx::query(
            r"
            UPDATE prayers
            SET completed = ?1, completed_at = ?2
            WHERE id = ?3
            ",
        )
        .bind(record.completed)
        .bind(record.completed_at)
        .bind(prayer_id)
        .execute(&mut *tx)
        .await
        .map_err(conn_err)?;

        tx.commit().await.map_err(conn_err)?;

        Ok(Some(record))
    }
}
