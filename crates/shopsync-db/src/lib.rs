//! # shopsync-db: Local Catalog Store for ShopSync
//!
//! This crate provides database access for ShopSync.
//! It uses SQLite for on-device storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopSync Data Flow                               │
//! │                                                                         │
//! │  Command (list_products, create_product, adjust_stock ...)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shopsync-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │ Schema/Seed  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │              │  │   │
//! │  │   │               │    │               │    │ CREATE TABLE │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ IF NOT EXISTS│  │   │
//! │  │   │ Connection    │    │ SettingsRepo  │    │ seed-on-empty│  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                 <data dir>/shopsync.db                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection setup and the `Database` handle
//! - [`schema`] - Create-if-absent table definitions
//! - [`seed`] - First-boot fixture rows
//! - [`error`] - Database error types
//! - [`repository`] - Product catalog and settings repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopsync_db::{Database, DbConfig};
//!
//! // Opens the file, creates tables, seeds six products if empty
//! let db = Database::new(DbConfig::new("shopsync.db")).await?;
//!
//! let products = db.products().list_all().await?;
//! let categories = db.products().list_categories().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::settings::SettingsRepository;
pub use repository::WriteOutcome;
