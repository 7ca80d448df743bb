use async_trait::async_trait;
use rosary_core::model::{User, UserId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{conn_err, id_to_i64, map_user_row, ser, user_id_from_i64, write_err};
use crate::repository::{NewUserRecord, StorageError, UserRepository};

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn insert_user(&self, user: NewUserRecord) -> Result<User, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO users (username, password, created_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        let id = user_id_from_i64(res.last_insert_rowid())?;
        Ok(User::from_persisted(
            id,
            user.username,
            user.password,
            user.created_at,
        ))
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, username, password, created_at
            FROM users WHERE id = ?1
            ",
        )
        .bind(id_to_i64("user_id", id.value())?)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?;

        row.as_ref().map(map_user_row).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, username, password, created_at
            FROM users WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn_err)?;

        row.as_ref().map(map_user_row).transpose()
    }

    async fn count_users(&self) -> Result<u64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(conn_err)?;
        let n: i64 = row.try_get("n").map_err(ser)?;
        u64::try_from(n).map_err(ser)
    }
}
