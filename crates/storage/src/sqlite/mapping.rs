use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::repository::{LocalStateRecord, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn map_local_state_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<LocalStateRecord, StorageError> {
    let key: String = row.try_get("key").map_err(ser)?;
    let value: String = row.try_get("value").map_err(ser)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(ser)?;
    Ok(LocalStateRecord {
        key,
        value,
        updated_at,
    })
}
