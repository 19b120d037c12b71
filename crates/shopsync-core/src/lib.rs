//! # shopsync-core: Caller Contract for ShopSync
//!
//! This crate holds the shapes that cross the boundary between the screens
//! and the local catalog store, plus the pure rules the screens apply before
//! calling the store. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopSync Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Screens / CLI (apps/cli commands)                  │   │
//! │  │    Products ──► Add Product ──► Product Detail ──► Settings     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopsync-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │   stock   │  │   error   │  │   │
//! │  │   │  Product  │  │   form    │  │  +/- with │  │ CoreError │  │   │
//! │  │   │  Input    │  │   rules   │  │   clamp   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 shopsync-db (Database Layer)                    │   │
//! │  │          SQLite schema, seed, catalog repository                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductInput, ProductForm, User, ColorScheme
//! - [`validation`] - Form and credential validation
//! - [`stock`] - Stock adjustment arithmetic
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopsync_core::{ProductForm, stock::apply_stock_delta};
//! use shopsync_core::validation::validate_product_form;
//!
//! let form = ProductForm::new("Desk Lamp", "19.99", "10", "Home");
//! let input = validate_product_form(&form).unwrap();
//! assert_eq!(input.stock, 10);
//!
//! // The detail screen never lets stock go below zero
//! assert_eq!(apply_stock_delta(input.stock, -25), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel category meaning "no filter".
///
/// Never stored in the catalog. The category tabs prepend it to the derived
/// category list and the product list treats it as "show everything".
pub const ALL_CATEGORY: &str = "All";

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a category label.
pub const MAX_CATEGORY_LEN: usize = 50;

/// Minimum password length accepted by registration.
pub const MIN_PASSWORD_LEN: usize = 6;
