//! # State Module
//!
//! Application state shared by the commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐ │
//! │  │   DbState    │  │ SessionState │  │  ThemeState  │  │ConfigState │ │
//! │  │              │  │              │  │              │  │            │ │
//! │  │  OnceCell<   │  │  RwLock<     │  │  RwLock<     │  │ db path    │ │
//! │  │   Database   │  │   Option<    │  │  ColorScheme │  │ seed flag  │ │
//! │  │  >           │  │    User>>    │  │  >           │  │ pool size  │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘ │
//! │                                                                         │
//! │  Each command takes only the state it needs.                           │
//! │  Session and theme mirror a row in the `settings` table; the           │
//! │  commands write the row first, then the in-memory copy.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod session;
mod theme;

pub use config::ConfigState;
pub use db::DbState;
pub use session::{SessionState, AUTH_KEY};
pub use theme::{ThemeState, THEME_KEY};
