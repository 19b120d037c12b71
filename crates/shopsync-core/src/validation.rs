//! # Validation Module
//!
//! Input validation for ShopSync.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen / CLI                                                 │
//! │  └── Collects raw text fields (ProductForm)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present                                           │
//! │  ├── price parses and is > 0                                           │
//! │  └── stock parses and is >= 0                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints only. The store never clamps or rejects      │
//! │      a price or stock value.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopsync_core::validation::{validate_price, validate_stock};
//!
//! assert!(validate_price(19.99).is_ok());
//! assert!(validate_price(0.0).is_err());
//! assert!(validate_stock(0).is_ok());
//! assert!(validate_stock(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{ProductForm, ProductInput};
use crate::{MAX_CATEGORY_LEN, MAX_NAME_LEN, MIN_PASSWORD_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a category label.
///
/// ## Rules
/// - Must not be blank
/// - At most 50 characters
/// - Must not be the `All` sentinel, which is reserved for "no filter"
pub fn validate_category(category: &str) -> ValidationResult<()> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::required("category"));
    }

    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    if category == crate::ALL_CATEGORY {
        return Err(ValidationError::InvalidFormat {
            field: "category".to_string(),
            reason: format!("'{}' is reserved", crate::ALL_CATEGORY),
        });
    }

    Ok(())
}

/// Normalizes an optional image reference: blank becomes `None`.
///
/// The reference is opaque. Whether the file exists is not checked.
pub fn normalize_image_uri(uri: Option<&str>) -> Option<String> {
    uri.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be > 0
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock count.
///
/// ## Rules
/// - Must be >= 0
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Parses the price text field.
pub fn parse_price(text: &str) -> ValidationResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::required("price"));
    }

    let price: f64 = text.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "price".to_string(),
        value: text.to_string(),
    })?;

    validate_price(price)?;
    Ok(price)
}

/// Parses the stock text field. Only whole numbers are accepted.
pub fn parse_stock(text: &str) -> ValidationResult<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::required("stock"));
    }

    let stock: i64 = text.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "stock".to_string(),
        value: text.to_string(),
    })?;

    validate_stock(stock)?;
    Ok(stock)
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates the add/edit form and produces the input to store.
///
/// ## Form Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Add Product                                                            │
/// │                                                                         │
/// │  name: "Desk Lamp"  price: "19.99"  stock: "10"  category: "Home"      │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_product_form() ← THIS FUNCTION                               │
/// │       │                                                                 │
/// │       ├── any field blank?        → "<field> is required"              │
/// │       ├── price not a number/<=0? → price error                        │
/// │       ├── stock not an int/<0?    → stock error                        │
/// │       │                                                                 │
/// │       └── OK → ProductInput { trimmed name/category, parsed numbers }  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_product_form(form: &ProductForm) -> ValidationResult<ProductInput> {
    validate_product_name(&form.name)?;
    let price = parse_price(&form.price)?;
    let stock = parse_stock(&form.stock)?;
    validate_category(&form.category)?;

    Ok(ProductInput {
        name: form.name.trim().to_string(),
        price,
        stock,
        category: form.category.trim().to_string(),
        image_uri: normalize_image_uri(form.image_uri.as_deref()),
    })
}

// =============================================================================
// Credential Validators
// =============================================================================

/// Validates an email address.
///
/// ## Rules
/// - Must not be blank
/// - Must contain a single '@' with text on both sides
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::required("email"));
    }

    let mut parts = email.split('@');
    let well_formed = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    );

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates sign-in fields. Both must be present; the email's shape is
/// not checked.
pub fn validate_login(email: &str, password: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::required("email"));
    }

    if password.is_empty() {
        return Err(ValidationError::required("password"));
    }

    Ok(())
}

/// Validates registration fields.
///
/// ## Rules
/// - Email as in [`validate_email`]
/// - Password at least 6 characters
/// - Confirmation equals password
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> ValidationResult<()> {
    validate_email(email)?;

    if password.is_empty() {
        return Err(ValidationError::required("password"));
    }

    if confirm != password {
        return Err(ValidationError::Mismatch {
            field: "password confirmation".to_string(),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
