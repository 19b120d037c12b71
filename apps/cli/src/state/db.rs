//! # Database State
//!
//! Holds the process-wide `Database` handle.
//!
//! ## Lifecycle
//! ```text
//! DbState::new()             ← empty, every command fails with NotInitialized
//!      │
//!      ▼
//! initialize(config).await   ← opens, creates tables, seeds (once)
//!      │                        a second call returns the same handle
//!      ▼
//! inner()?                   ← commands borrow the handle
//! ```
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn list_categories(db: &DbState) -> Result<Vec<String>, ApiError> {
//!     Ok(db.inner()?.products().list_categories().await?)
//! }
//! ```

use shopsync_db::{Database, DbConfig, DbError, DbResult};
use tokio::sync::OnceCell;
use tracing::debug;

/// Wrapper around the shared `Database`.
#[derive(Debug, Default)]
pub struct DbState {
    db: OnceCell<Database>,
}

impl DbState {
    /// Creates an empty, uninitialized state.
    pub fn new() -> Self {
        DbState {
            db: OnceCell::new(),
        }
    }

    /// Wraps an already-open database.
    pub fn from_database(db: Database) -> Self {
        DbState {
            db: OnceCell::new_with(Some(db)),
        }
    }

    /// Opens the store on first call. Later calls return the existing handle
    /// and ignore `config`.
    ///
    /// A failed open leaves the state uninitialized, so it can be retried.
    pub async fn initialize(&self, config: DbConfig) -> DbResult<&Database> {
        if self.db.initialized() {
            debug!("Database already initialized");
        }
        self.db.get_or_try_init(|| Database::new(config)).await
    }

    /// Returns the open database.
    ///
    /// ## Errors
    /// `DbError::NotInitialized` before a successful `initialize`.
    pub fn inner(&self) -> DbResult<&Database> {
        self.db.get().ok_or(DbError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.db.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_uninitialized_fails_loudly() {
        let state = DbState::new();
        assert!(!state.is_initialized());
        assert!(matches!(state.inner(), Err(DbError::NotInitialized)));
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let state = DbState::new();

        let first = state.initialize(DbConfig::in_memory()).await.unwrap();
        first
            .products()
            .create(&shopsync_core::ProductInput::new("Desk Lamp", 19.99, 10, "Home"))
            .await
            .unwrap();

        // Second call keeps the first store: no reset, no re-seed
        let second = state.initialize(DbConfig::in_memory()).await.unwrap();
        assert_eq!(second.products().count().await.unwrap(), 7);
        assert!(state.inner().is_ok());
    }
}
