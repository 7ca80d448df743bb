use async_trait::async_trait;
use rosary_core::model::{Intention, IntentionId, UserId};

use super::SqliteRepository;
use super::mapping::{conn_err, id_to_i64, intention_id_from_i64, map_intention_row, write_err};
use crate::repository::{IntentionRepository, NewIntentionRecord, StorageError};

#[async_trait]
impl IntentionRepository for SqliteRepository {
    async fn insert_intention(
        &self,
        intention: NewIntentionRecord,
    ) -> Result<Intention, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO intentions (user_id, text, is_active, created_at)
            VALUES (?1, ?2, 1, ?3)
            ",
        )
        .bind(id_to_i64("user_id", intention.user_id.value())?)
        .bind(intention.text.as_str())
        .bind(intention.created_at)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(Intention {
            id: intention_id_from_i64(res.last_insert_rowid())?,
            user_id: intention.user_id,
            text: intention.text.into_inner(),
            is_active: true,
            created_at: intention.created_at,
        })
    }

    async fn list_intentions(&self, user_id: UserId) -> Result<Vec<Intention>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, text, is_active, created_at
            FROM intentions
            WHERE user_id = ?1
            ORDER BY id ASC
            ",
        )
        .bind(id_to_i64("user_id", user_id.value())?)
        .fetch_all(&self.pool)
        .await
        .map_err(conn_err)?;

        rows.iter().map(map_intention_row).collect()
    }

    async fn delete_intention(
        &self,
        id: IntentionId,
        user_id: UserId,
    ) -> Result<bool, StorageError> {
        let res = sqlx::query("DELETE FROM intentions WHERE id = ?1 AND user_id = ?2")
            .bind(id_to_i64("intention_id", id.value())?)
            .bind(id_to_i64("user_id", user_id.value())?)
            .execute(&self.pool)
            .await
            .map_err(conn_err)?;

        Ok(res.rows_affected() > 0)
    }
}
