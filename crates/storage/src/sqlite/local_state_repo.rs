use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::repository::{LocalStateRecord, LocalStateRepository, StorageError};

use super::SqliteRepository;
use super::mapping::map_local_state_row;

#[async_trait]
impl LocalStateRepository for SqliteRepository {
    async fn load(&self, key: &str) -> Result<Option<LocalStateRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT key, value, updated_at
            FROM local_state
            WHERE key = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        row.as_ref().map(map_local_state_row).transpose()
    }

    async fn store(
        &self,
        key: &str,
        value: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO local_state (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM local_state WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
