//! # Repository Module
//!
//! Database repository implementations for ShopSync.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Command                                                               │
//! │       │                                                                 │
//! │       │  db.products().list_by_category("Home")                        │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all / list_by_category / get_by_id                           │
//! │  ├── create / update / update_stock / delete                           │
//! │  └── list_categories (derived, no category table)                      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Catalog CRUD and category index
//! - [`SettingsRepository`](settings::SettingsRepository) - Persisted key/value flags

pub mod product;
pub mod settings;

/// Result of a write that targets a row by key.
///
/// A missing row is an expected outcome, not an error: the caller decides
/// whether it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum WriteOutcome {
    /// The row existed and was written.
    Applied,
    /// No row had that key. Nothing changed.
    NotFound,
}

impl WriteOutcome {
    pub(crate) fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            WriteOutcome::NotFound
        } else {
            WriteOutcome::Applied
        }
    }

    #[inline]
    pub fn is_applied(self) -> bool {
        self == WriteOutcome::Applied
    }

    #[inline]
    pub fn is_not_found(self) -> bool {
        self == WriteOutcome::NotFound
    }
}
