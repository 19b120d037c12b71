//! # ShopSync CLI Entry Point
//!
//! ```text
//! shopsync products --category Home
//!      │
//!      ▼
//! main ──► shopsync_cli::run()
//!            ├── tracing (stderr)
//!            ├── config (env + flags)
//!            ├── open catalog, restore session/theme
//!            └── one command → stdout, exit code
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    shopsync_cli::run().await
}
