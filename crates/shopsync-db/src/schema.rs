//! # Database Schema
//!
//! Create-if-absent table definitions.
//!
//! There is no migration history: every start issues the same
//! `CREATE TABLE IF NOT EXISTS` statements, which are no-ops once the tables
//! exist.
//!
//! ## Tables
//! ```text
//! products                              settings
//! ────────────────────────────────      ─────────────────────
//! id        INTEGER PK AUTOINCREMENT    key    TEXT PK
//! name      TEXT NOT NULL               value  TEXT NOT NULL
//! price     REAL NOT NULL
//! stock     INTEGER NOT NULL
//! category  TEXT NOT NULL
//! imageUri  TEXT
//! ```
//!
//! `AUTOINCREMENT` keeps ids monotonic and never reused, even after the row
//! with the highest id is deleted.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// The product catalog table.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    stock INTEGER NOT NULL,
    category TEXT NOT NULL,
    imageUri TEXT
)
"#;

/// Key/value flags used by the session and theme preferences.
pub const CREATE_SETTINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
)
"#;

const STATEMENTS: &[(&str, &str)] = &[
    ("products", CREATE_PRODUCTS_TABLE),
    ("settings", CREATE_SETTINGS_TABLE),
];

/// Creates any missing tables.
///
/// Idempotent: safe to run on every start.
pub async fn apply_schema(pool: &SqlitePool) -> DbResult<()> {
    for &(table, statement) in STATEMENTS {
        debug!(table, "Ensuring table exists");
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DbError::SchemaFailed(format!("{table}: {e}")))?;
    }

    info!(tables = STATEMENTS.len(), "Schema ready");
    Ok(())
}

/// Lists user tables in the database, sorted by name.
///
/// ## Usage
/// For diagnostics and tests.
pub async fn table_names(pool: &SqlitePool) -> DbResult<Vec<String>> {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(names)
}
