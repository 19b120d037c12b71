//! # Settings Repository
//!
//! Persisted key/value flags stored next to the catalog.
//!
//! The session and theme preferences keep one string each here
//! (`@shopsync_auth`, `@shopsync_theme`). Values are opaque to this module;
//! callers own their encoding.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::WriteOutcome;

/// Repository for the `settings` table.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Reads a value. `None` when the key was never set or was removed.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Writes a value, replacing any previous one.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, "Writing setting");

        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes a value.
    pub async fn remove(&self, key: &str) -> DbResult<WriteOutcome> {
        debug!(key = %key, "Removing setting");

        let result = sqlx::query("DELETE FROM settings WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, WriteOutcome};

    #[tokio::test]
    async fn test_set_get_overwrite_remove() {
        let db = Database::new(DbConfig::in_memory().without_seed()).await.unwrap();
        let settings = db.settings();

        assert_eq!(settings.get("@shopsync_theme").await.unwrap(), None);

        settings.set("@shopsync_theme", "dark").await.unwrap();
        assert_eq!(settings.get("@shopsync_theme").await.unwrap().as_deref(), Some("dark"));

        settings.set("@shopsync_theme", "light").await.unwrap();
        assert_eq!(settings.get("@shopsync_theme").await.unwrap().as_deref(), Some("light"));

        assert_eq!(settings.remove("@shopsync_theme").await.unwrap(), WriteOutcome::Applied);
        assert_eq!(settings.get("@shopsync_theme").await.unwrap(), None);
        assert_eq!(settings.remove("@shopsync_theme").await.unwrap(), WriteOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_settings_do_not_touch_catalog() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.settings().set("@shopsync_auth", "{}").await.unwrap();

        assert_eq!(db.products().count().await.unwrap(), 6);
    }
}
