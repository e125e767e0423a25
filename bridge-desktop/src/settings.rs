//! Settings Storage using SQLite

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::SettingsStore,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::PathBuf;
use tracing::debug;

/// SQLite-backed settings store implementation
///
/// One `settings` table of string key/value pairs. The sound collection is a
/// single JSON value in here, so string storage is the only surface needed.
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    /// Open (or create) the settings database at the given path.
    pub async fn new(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(BridgeError::Io)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| BridgeError::OperationFailed(format!("Failed to connect to DB: {e}")))?;

        Self::create_table(&pool).await?;
        debug!(path = ?db_path, "Initialized settings store");
        Ok(Self { pool })
    }

    /// Create an in-memory settings store (for testing)
    pub async fn in_memory() -> Result<Self> {
        // A single connection keeps the in-memory database alive and shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| BridgeError::OperationFailed(format!("Failed to connect to DB: {e}")))?;

        Self::create_table(&pool).await?;
        Ok(Self { pool })
    }

    async fn create_table(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(|e| BridgeError::OperationFailed(format!("Failed to create table: {e}")))?;
        Ok(())
    }

    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn set_string(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Self::now())
        .execute(&self.pool)
        .await
        .map_err(|e| BridgeError::OperationFailed(format!("Failed to set setting: {e}")))?;

        debug!(key, "Stored setting");
        Ok(())
    }

    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BridgeError::OperationFailed(format!("Failed to get setting: {e}")))?;

        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM settings WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| BridgeError::OperationFailed(format!("Failed to delete setting: {e}")))?;

        debug!(key, "Deleted setting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete_roundtrip() {
        let store = SqliteSettingsStore::in_memory().await.unwrap();

        assert_eq!(store.get_string("sounds").await.unwrap(), None);
        assert!(!store.has_key("sounds").await.unwrap());

        store.set_string("sounds", "[]").await.unwrap();
        assert_eq!(store.get_string("sounds").await.unwrap().as_deref(), Some("[]"));
        assert!(store.has_key("sounds").await.unwrap());

        store.delete("sounds").await.unwrap();
        assert_eq!(store.get_string("sounds").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let store = SqliteSettingsStore::in_memory().await.unwrap();

        store.set_string("sounds", "[1]").await.unwrap();
        store.set_string("sounds", "[1,2]").await.unwrap();
        assert_eq!(
            store.get_string("sounds").await.unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[tokio::test]
    async fn persists_across_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("settings.db");

        {
            let store = SqliteSettingsStore::new(db_path.clone()).await.unwrap();
            store.set_string("sounds", "[\"a\"]").await.unwrap();
        }

        let store = SqliteSettingsStore::new(db_path).await.unwrap();
        assert_eq!(
            store.get_string("sounds").await.unwrap().as_deref(),
            Some("[\"a\"]")
        );
    }
}
