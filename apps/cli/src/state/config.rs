//! # Configuration State
//!
//! Settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--no-seed`)
//! 2. Environment variables (`SHOPSYNC_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup, so no lock.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shopsync_db::DbConfig;
use std::path::{Path, PathBuf};

use crate::error::ApiError;

/// Database file name inside the platform data directory.
pub const DATABASE_FILE: &str = "shopsync.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// SQLite file (or `:memory:`).
    pub database_path: PathBuf,

    /// Insert the example products when the catalog is empty.
    /// Default: true
    pub seed: bool,

    /// Pool size.
    /// Default: 1 (single caller)
    pub max_connections: u32,
}

impl ConfigState {
    /// Creates a ConfigState with defaults for `database_path`.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        ConfigState {
            database_path: database_path.into(),
            seed: true,
            max_connections: 1,
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `SHOPSYNC_DB_PATH`: database file (default: platform data dir)
    /// - `SHOPSYNC_SEED`: `0` or `false` disables the first-boot seed
    /// - `SHOPSYNC_MAX_CONNECTIONS`: pool size
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup("SHOPSYNC_DB_PATH") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_database_path()?,
        };

        let mut config = ConfigState::new(database_path);

        if let Some(seed) = lookup("SHOPSYNC_SEED") {
            config.seed = !matches!(seed.trim().to_ascii_lowercase().as_str(), "0" | "false");
        }

        if let Some(max) = lookup("SHOPSYNC_MAX_CONNECTIONS") {
            match max.trim().parse::<u32>() {
                Ok(n) if n > 0 => config.max_connections = n,
                _ => tracing::warn!(value = %max, "Ignoring invalid SHOPSYNC_MAX_CONNECTIONS"),
            }
        }

        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, database_path: Option<PathBuf>, no_seed: bool) -> Self {
        if let Some(path) = database_path {
            self.database_path = path;
        }
        if no_seed {
            self.seed = false;
        }
        self
    }

    /// Creates the parent directory of a file database.
    pub fn ensure_data_dir(&self) -> Result<(), ApiError> {
        if self.database_path == Path::new(":memory:") {
            return Ok(());
        }
        match self.database_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
                .map_err(|e| ApiError::internal(format!("Cannot create {}: {}", dir.display(), e))),
            _ => Ok(()),
        }
    }

    /// Builds the store configuration.
    pub fn to_db_config(&self) -> DbConfig {
        let config = if self.database_path == Path::new(":memory:") {
            DbConfig::in_memory()
        } else {
            DbConfig::new(&self.database_path).max_connections(self.max_connections)
        };

        if self.seed {
            config
        } else {
            config.without_seed()
        }
    }
}

/// Platform data directory path for the database.
///
/// - **macOS**: `~/Library/Application Support/com.shopsync.shopsync/shopsync.db`
/// - **Windows**: `%APPDATA%\shopsync\shopsync\data\shopsync.db`
/// - **Linux**: `~/.local/share/shopsync/shopsync.db`
fn default_database_path() -> Result<PathBuf, ApiError> {
    let proj_dirs = ProjectDirs::from("com", "shopsync", "shopsync")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    Ok(proj_dirs.data_dir().join(DATABASE_FILE))
}
