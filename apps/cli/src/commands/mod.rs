//! # Commands Module
//!
//! One async function per user action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── List, detail, add/edit, stock, delete
//! ├── category.rs  ◄─── Derived categories and filter tabs
//! ├── auth.rs      ◄─── Mock sign-in / sign-up / sign-out
//! └── theme.rs     ◄─── Light/dark preference
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs database
//! async fn list_products(db: &DbState, category: Option<&str>)
//!
//! // Only needs the session
//! async fn current_user(session: &SessionState)
//!
//! // Needs both
//! async fn login(db: &DbState, session: &SessionState, email: &str, password: &str)
//! ```
//!
//! Every command returns `Result<T, ApiError>`.

pub mod auth;
pub mod category;
pub mod product;
pub mod theme;
