//! # Database Connection Management
//!
//! Opening the SQLite file and building the `Database` handle.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Initialization                            │
//! │                                                                         │
//! │  DbConfig::new(path) ← path, pool size, seed rows                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await                                           │
//! │       │                                                                 │
//! │       ├── 1. open/create the file (WAL, NORMAL sync)                   │
//! │       ├── 2. CREATE TABLE IF NOT EXISTS products, settings             │
//! │       └── 3. seed the catalog if it has no rows                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database { pool } ← cheap to clone, pass it down                      │
//! │       │                                                                 │
//! │       ├── db.products()  → ProductRepository                           │
//! │       └── db.settings()  → SettingsRepository                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global handle. Whoever needs the store receives a `Database`
//! (or the `DbState` wrapper in the app), so each test can open its own
//! in-memory store.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::repository::settings::SettingsRepository;
use crate::{schema, seed};
use shopsync_core::ProductInput;

const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/shopsync.db").without_seed();
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file, or `:memory:`.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 1 (one caller, writes in issue order)
    pub max_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection. `None` keeps it open.
    /// Default: 10 minutes
    pub idle_timeout: Option<Duration>,

    /// Rows inserted when the catalog is empty at startup.
    /// Default: [`seed::default_products`]. Empty disables seeding.
    pub seed_products: Vec<ProductInput>,
}

impl DbConfig {
    /// Creates a configuration for a database file. The file is created if
    /// it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            seed_products: seed::default_products(),
        }
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Each `Database::new` with this config gets its own private store.
    /// The single connection is never recycled, since closing it would
    /// discard the data.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: None,
            seed_products: seed::default_products(),
        }
    }

    /// Sets the maximum number of connections (ignored for in-memory).
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max.max(1);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Disables the first-boot seed.
    pub fn without_seed(mut self) -> Self {
        self.seed_products.clear();
        self
    }

    /// Replaces the first-boot seed rows.
    pub fn seed_with(mut self, products: Vec<ProductInput>) -> Self {
        self.seed_products = products;
        self
    }

    /// True for `:memory:` configurations.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(true)
                // WAL: readers don't block the writer
                .journal_mode(SqliteJournalMode::Wal)
        };

        Ok(options
            // NORMAL synchronous: Good balance of durability and speed
            .synchronous(SqliteSynchronous::Normal))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::new("shopsync.db")).await?;
///
/// let lamp_id = db.products().create(&input).await?;
/// let theme = db.settings().get("@shopsync_theme").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Opens the store, creates missing tables and seeds an empty catalog.
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use handle
    /// * `Err(DbError)` - Connection, schema or seed failure. A failed seed
    ///   leaves no rows behind.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_options = config.connect_options()?;
        debug!("Connection options configured");

        let max_connections = if config.is_in_memory() {
            1
        } else {
            config.max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(if config.is_in_memory() {
                None
            } else {
                Some(Duration::from_secs(30 * 60))
            })
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(max_connections, "Database pool created");

        let db = Database { pool };

        schema::apply_schema(&db.pool).await?;
        seed::seed_if_empty(&db.pool, &config.seed_products).await?;

        Ok(db)
    }

    /// Returns a reference to the connection pool.
    ///
    /// For diagnostics and tests. Prefer the repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Returns the settings repository.
    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(self.pool.clone())
    }

    /// Closes the connection pool.
    ///
    /// Optional: process exit reclaims the handle too. After closing, all
    /// repository operations fail with `ConnectionFailed`.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
        assert_eq!(
            schema::table_names(db.pool()).await.unwrap(),
            vec!["products", "settings"]
        );
    }

    #[tokio::test]
    async fn test_fresh_store_is_seeded() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.products().count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_seed_can_be_disabled_or_replaced() {
        let db = Database::new(DbConfig::in_memory().without_seed()).await.unwrap();
        assert_eq!(db.products().count().await.unwrap(), 0);

        let custom = vec![ProductInput::new("Test Widget", 2.5, 1, "Widgets")];
        let db = Database::new(DbConfig::in_memory().seed_with(custom)).await.unwrap();
        assert_eq!(db.products().list_categories().await.unwrap(), vec!["Widgets"]);
    }

    #[tokio::test]
    async fn test_in_memory_stores_are_isolated() {
        let a = Database::new(DbConfig::in_memory().without_seed()).await.unwrap();
        let b = Database::new(DbConfig::in_memory().without_seed()).await.unwrap();

        a.products()
            .create(&ProductInput::new("Only In A", 1.0, 1, "Misc"))
            .await
            .unwrap();

        assert_eq!(a.products().count().await.unwrap(), 1);
        assert_eq!(b.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_file_store_seeds_once_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopsync.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let lamp = db
            .products()
            .create(&ProductInput::new("Desk Lamp", 19.99, 10, "Home"))
            .await
            .unwrap();
        db.close().await;

        // Reopening must not re-seed or reset
        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(db.products().count().await.unwrap(), 7);
        assert!(db.products().get_by_id(lamp).await.unwrap().is_some());
        db.close().await;
    }

    #[tokio::test]
    async fn test_emptied_file_store_is_reseeded_on_next_boot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopsync.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        for product in db.products().list_all().await.unwrap() {
            assert!(db.products().delete(product.id).await.unwrap().is_applied());
        }
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let products = db.products().list_all().await.unwrap();
        assert_eq!(products.len(), 6);
        // AUTOINCREMENT: the re-seeded rows get fresh ids
        assert!(products.iter().all(|p| p.id > 6));
        db.close().await;
    }

    #[tokio::test]
    async fn test_closed_database_fails_queries() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
        assert!(matches!(
            db.products().list_all().await,
            Err(DbError::ConnectionFailed(_))
        ));
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(0)
            .connect_timeout(Duration::from_secs(3))
            .without_seed();

        assert_eq!(config.max_connections, 1);
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert!(config.seed_products.is_empty());
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }
}
