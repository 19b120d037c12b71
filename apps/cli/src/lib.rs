//! # ShopSync CLI Library
//!
//! Wires configuration, state and commands together for the `shopsync`
//! binary. The commands are plain async functions, so tests call them
//! directly without going through argument parsing.
//!
//! ## Module Organization
//! ```text
//! shopsync_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap definitions, dispatch, output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database handle (initialize once)
//! │   ├── config.rs   ◄─── Environment + flag configuration
//! │   ├── session.rs  ◄─── Signed-in user
//! │   └── theme.rs    ◄─── Light/dark preference
//! ├── commands/
//! │   ├── product.rs  ◄─── Catalog commands
//! │   ├── category.rs ◄─── Category list and tabs
//! │   ├── auth.rs     ◄─── Mock authentication
//! │   └── theme.rs    ◄─── Theme commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::ApiError;
use state::{ConfigState, DbState, SessionState, ThemeState};

/// Everything a command may need.
#[derive(Debug, Default)]
pub struct App {
    pub db: DbState,
    pub session: SessionState,
    pub theme: ThemeState,
}

impl App {
    pub fn new() -> Self {
        App::default()
    }

    /// Opens the store and restores the persisted session and theme.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Data directory ─── created if missing (file databases only)        │
    /// │  2. Database ───────── open, CREATE TABLE IF NOT EXISTS, seed if empty │
    /// │  3. Session ────────── @shopsync_auth → SessionState                   │
    /// │  4. Theme ──────────── @shopsync_theme → ThemeState                    │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub async fn start(&self, config: &ConfigState) -> Result<(), ApiError> {
        config.ensure_data_dir()?;
        info!(path = %config.database_path.display(), seed = config.seed, "Opening catalog");

        self.db.initialize(config.to_db_config()).await?;
        commands::auth::restore_session(&self.db, &self.session).await?;
        commands::theme::restore_theme(&self.db, &self.theme).await?;

        Ok(())
    }
}

/// Parses arguments, runs one command and maps the outcome to an exit code.
pub async fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let json = cli.json;

    match run_cli(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = ?err.code, "{}", err.message);
            if json {
                match serde_json::to_string_pretty(&err) {
                    Ok(body) => println!("{}", body),
                    Err(_) => eprintln!("{}", err),
                }
            } else {
                eprintln!("{}", err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run_cli(cli: Cli) -> Result<(), ApiError> {
    let config = ConfigState::from_env()?.with_overrides(cli.db, cli.no_seed);

    let app = App::new();
    app.start(&config).await?;

    let result = cli::execute(&app, cli.command, cli.json).await;

    if let Ok(db) = app.db.inner() {
        db.close().await;
    }
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopsync=trace` - Show trace for shopsync crates only
/// - Default: `info,shopsync=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopsync=debug,sqlx=warn"));

    // try_init: a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
