//! # Domain Types
//!
//! Shapes that cross the store boundary.
//!
//! ## Input vs. Stored Record
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐     create()      ┌─────────────────┐             │
//! │  │  ProductInput   │ ────────────────► │    Product      │             │
//! │  │  ─────────────  │   store assigns   │  ─────────────  │             │
//! │  │  name           │        id         │  id (i64)       │             │
//! │  │  price          │                   │  name           │             │
//! │  │  stock          │                   │  price          │             │
//! │  │  category       │                   │  stock          │             │
//! │  │  image_uri      │                   │  category       │             │
//! │  └─────────────────┘                   │  image_uri      │             │
//! │                                        └─────────────────┘             │
//! │  ProductInput has no id field: a caller cannot pick the key.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both serialize with camelCase keys (`imageUri`), matching the column name
//! and the mobile front-end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product row as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Surrogate key assigned by the store. Never reused.
    #[ts(type = "number")]
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Unit price. Expected to be > 0.
    pub price: f64,

    /// Units on hand. Expected to be >= 0.
    #[ts(type = "number")]
    pub stock: i64,

    /// Free-form grouping label.
    pub category: String,

    /// Local image reference from the image picker, if any.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "imageUri"))]
    pub image_uri: Option<String>,
}

impl Product {
    /// Builds a stored record from an input and the id the store assigned.
    pub fn from_input(id: i64, input: ProductInput) -> Self {
        Product {
            id,
            name: input.name,
            price: input.price,
            stock: input.stock,
            category: input.category,
            image_uri: input.image_uri,
        }
    }

    /// Returns the mutable fields of this product.
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            category: self.category.clone(),
            image_uri: self.image_uri.clone(),
        }
    }

    /// True when no units are left.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }
}

// =============================================================================
// Product Input
// =============================================================================

/// All product fields except `id`. Used for create and full update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    #[ts(type = "number")]
    pub stock: i64,
    pub category: String,
    pub image_uri: Option<String>,
}

impl ProductInput {
    /// Creates an input without an image.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        stock: i64,
        category: impl Into<String>,
    ) -> Self {
        ProductInput {
            name: name.into(),
            price,
            stock,
            category: category.into(),
            image_uri: None,
        }
    }

    /// Attaches an image reference.
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// Raw text fields as typed into the add/edit product form.
///
/// Turned into a [`ProductInput`] by
/// [`validate_product_form`](crate::validation::validate_product_form).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub image_uri: Option<String>,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        ProductForm {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
            category: category.into(),
            image_uri: None,
        }
    }

    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// Validates the form and returns the store-ready input.
    pub fn into_input(self) -> crate::validation::ValidationResult<ProductInput> {
        crate::validation::validate_product_form(&self)
    }
}

// =============================================================================
// Session
// =============================================================================

/// The signed-in user of the mock authentication flow.
///
/// There is no account model: whoever signs in is the user until they sign
/// out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub email: String,
    /// Absent in records written as a bare `{"email": ..}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(email: impl Into<String>, signed_in_at: DateTime<Utc>) -> Self {
        User {
            email: email.into(),
            signed_in_at: Some(signed_in_at),
        }
    }
}

// =============================================================================
// Color Scheme
// =============================================================================

/// Light or dark appearance preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The persisted spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Parses a persisted value. Anything other than `light`/`dark` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    /// The other scheme.
    pub const fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_round_trips_through_input() {
        let input = ProductInput::new("Desk Lamp", 19.99, 10, "Home").with_image("file:///lamp.jpg");
        let product = Product::from_input(7, input.clone());

        assert_eq!(product.id, 7);
        assert_eq!(product.to_input(), input);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::from_input(1, ProductInput::new("Sofa", 599.99, 8, "Home"));
        let json = serde_json::to_value(&product).unwrap();

        assert!(json.get("imageUri").is_some());
        assert!(json["imageUri"].is_null());
        assert!(json.get("image_uri").is_none());
    }

    #[test]
    fn test_out_of_stock() {
        let mut product = Product::from_input(1, ProductInput::new("Jeans", 79.99, 0, "Clothing"));
        assert!(product.is_out_of_stock());

        product.stock = 3;
        assert!(!product.is_out_of_stock());
    }

    #[test]
    fn test_user_without_sign_in_time_decodes() {
        let user: User = serde_json::from_str(r#"{"email":"jane@example.com"}"#).unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.signed_in_at, None);

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("signedInAt").is_none());
    }

    #[test]
    fn test_color_scheme_parse_and_toggle() {
        assert_eq!(ColorScheme::parse("dark"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::parse("light"), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::parse("sepia"), None);
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled().as_str(), "light");
    }
}
