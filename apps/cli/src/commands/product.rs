//! # Product Commands
//!
//! Catalog listing, detail, add/edit and stock adjustment.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Flow                                    │
//! │                                                                         │
//! │  Category tab selected: "All" | "Clothing" | "Home" | ...              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products(db, Some(tab))                                          │
//! │       │                                                                 │
//! │       ├── None or "All" → products().list_all()                        │
//! │       └── anything else → products().list_by_category(tab)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto>, newest first                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Buttons
//! The detail screen's +/- buttons send deltas; the result is clamped at zero
//! before it is written. Setting an absolute value must already be `>= 0`.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use shopsync_core::stock::apply_stock_deltas;
use shopsync_core::validation::validate_stock;
use shopsync_core::{CoreError, Product, ProductForm, ALL_CATEGORY};

/// Product DTO for the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub image_uri: Option<String>,
    /// False renders the "Out of Stock" badge.
    pub in_stock: bool,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        let in_stock = !p.is_out_of_stock();
        ProductDto {
            id: p.id,
            name: p.name,
            price: p.price,
            stock: p.stock,
            category: p.category,
            image_uri: p.image_uri,
            in_stock,
        }
    }
}

impl ProductDto {
    /// Pre-fills the edit form with the current values.
    pub fn to_form(&self) -> ProductForm {
        let form = ProductForm::new(
            self.name.clone(),
            self.price.to_string(),
            self.stock.to_string(),
            self.category.clone(),
        );
        match &self.image_uri {
            Some(uri) => form.with_image(uri.clone()),
            None => form,
        }
    }
}

/// Lists products, newest first.
///
/// ## Arguments
/// * `category` - `None` or `"All"` for the whole catalog, otherwise an exact
///   (case-sensitive) category name
pub async fn list_products(db: &DbState, category: Option<&str>) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    let repo = db.inner()?.products();

    let products = match category {
        None | Some(ALL_CATEGORY) => repo.list_all().await?,
        Some(category) => repo.list_by_category(category).await?,
    };
    let dtos: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        category = category.unwrap_or(ALL_CATEGORY),
        "list_products complete"
    );

    Ok(dtos)
}

/// Gets a single product by id.
///
/// ## Returns
/// The product if found, or `ErrorCode::NotFound`
pub async fn get_product(db: &DbState, id: i64) -> Result<ProductDto, ApiError> {
    debug!(id, "get_product command");
    let product = db
        .inner()?
        .products()
        .get_by_id(id)
        .await?
        .ok_or(CoreError::ProductNotFound(id))?;
    Ok(ProductDto::from(product))
}

/// Validates the add-product form and inserts the product.
pub async fn create_product(db: &DbState, form: ProductForm) -> Result<ProductDto, ApiError> {
    debug!(name = %form.name, "create_product command");
    let repo = db.inner()?.products();

    let input = form.into_input()?;
    let id = repo.create(&input).await?;

    info!(id, name = %input.name, category = %input.category, "Product created");
    Ok(ProductDto::from(Product::from_input(id, input)))
}

/// Validates the edit form and replaces every field of the product.
pub async fn update_product(db: &DbState, id: i64, form: ProductForm) -> Result<ProductDto, ApiError> {
    debug!(id, "update_product command");
    let repo = db.inner()?.products();

    let input = form.into_input()?;
    if repo.update(id, &input).await?.is_not_found() {
        return Err(CoreError::ProductNotFound(id).into());
    }

    Ok(ProductDto::from(Product::from_input(id, input)))
}

/// Sets an absolute stock count.
pub async fn set_stock(db: &DbState, id: i64, stock: i64) -> Result<ProductDto, ApiError> {
    debug!(id, stock, "set_stock command");
    validate_stock(stock)?;

    let repo = db.inner()?.products();
    if repo.update_stock(id, stock).await?.is_not_found() {
        return Err(CoreError::ProductNotFound(id).into());
    }

    get_product(db, id).await
}

/// Applies +/- button presses in order, clamping at zero after each.
pub async fn adjust_stock(db: &DbState, id: i64, deltas: &[i64]) -> Result<ProductDto, ApiError> {
    debug!(id, ?deltas, "adjust_stock command");
    let repo = db.inner()?.products();

    let current = repo
        .get_by_id(id)
        .await?
        .ok_or(CoreError::ProductNotFound(id))?;
    let stock = apply_stock_deltas(current.stock, deltas);

    if repo.update_stock(id, stock).await?.is_not_found() {
        // Deleted between the read and the write
        return Err(CoreError::ProductNotFound(id).into());
    }

    info!(id, from = current.stock, to = stock, "Stock adjusted");
    Ok(ProductDto::from(Product { stock, ..current }))
}

/// Deletes a product.
pub async fn delete_product(db: &DbState, id: i64) -> Result<(), ApiError> {
    debug!(id, "delete_product command");

    if db.inner()?.products().delete(id).await?.is_not_found() {
        return Err(CoreError::ProductNotFound(id).into());
    }

    info!(id, "Product deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopsync_db::{Database, DbConfig};

    async fn seeded() -> DbState {
        DbState::from_database(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    async fn empty() -> DbState {
        DbState::from_database(Database::new(DbConfig::in_memory().without_seed()).await.unwrap())
    }

    #[tokio::test]
    async fn test_commands_before_initialize_fail() {
        let db = DbState::new();

        let err = list_products(&db, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotInitialized);

        let err = get_product(&db, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotInitialized);
    }

    #[tokio::test]
    async fn test_all_sentinel_lists_whole_catalog() {
        let db = seeded().await;

        let all = list_products(&db, Some(ALL_CATEGORY)).await.unwrap();
        assert_eq!(all, list_products(&db, None).await.unwrap());
        assert_eq!(all.len(), 6);

        let home = list_products(&db, Some("Home")).await.unwrap();
        assert_eq!(home.len(), 2);
        assert!(home.iter().all(|p| p.category == "Home"));
    }

    #[tokio::test]
    async fn test_create_product_from_form() {
        let db = empty().await;

        let dto = create_product(&db, ProductForm::new("  Desk Lamp ", "19.99", "10", "Home"))
            .await
            .unwrap();

        assert_eq!(dto.name, "Desk Lamp");
        assert_eq!(dto.price, 19.99);
        assert_eq!(dto.stock, 10);
        assert!(dto.in_stock);
        assert_eq!(get_product(&db, dto.id).await.unwrap(), dto);
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_before_the_store() {
        let db = empty().await;

        let err = create_product(&db, ProductForm::new("Desk Lamp", "0", "10", "Home"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = create_product(&db, ProductForm::new("Desk Lamp", "19.99", "-1", "Home"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(list_products(&db, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_adjust_stock_clamps_at_zero() {
        let db = empty().await;
        let dto = create_product(&db, ProductForm::new("Desk Lamp", "19.99", "2", "Home"))
            .await
            .unwrap();

        let after = adjust_stock(&db, dto.id, &[-1, -1, -1, 1]).await.unwrap();
        assert_eq!(after.stock, 1);

        let after = adjust_stock(&db, dto.id, &[-5]).await.unwrap();
        assert_eq!(after.stock, 0);
        assert!(!after.in_stock);
        assert_eq!(get_product(&db, dto.id).await.unwrap().stock, 0);
    }

    #[tokio::test]
    async fn test_set_stock_rejects_negative() {
        let db = seeded().await;
        let id = list_products(&db, None).await.unwrap()[0].id;

        let err = set_stock(&db, id, -3).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(set_stock(&db, id, 40).await.unwrap().stock, 40);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let db = empty().await;

        for err in [
            get_product(&db, 99).await.unwrap_err(),
            set_stock(&db, 99, 1).await.unwrap_err(),
            adjust_stock(&db, 99, &[1]).await.unwrap_err(),
            delete_product(&db, 99).await.unwrap_err(),
            update_product(&db, 99, ProductForm::new("X", "1", "1", "Misc"))
                .await
                .unwrap_err(),
        ] {
            assert_eq!(err.code, ErrorCode::NotFound);
            assert_eq!(err.message, "Product not found: 99");
        }
    }

    #[tokio::test]
    async fn test_edit_round_trips_through_form() {
        let db = seeded().await;
        let original = list_products(&db, Some("Electronics")).await.unwrap()[0].clone();

        let mut form = original.to_form();
        form.price = "1899.00".into();
        let updated = update_product(&db, original.id, form).await.unwrap();

        assert_eq!(updated.price, 1899.0);
        assert_eq!(updated.name, original.name);
        assert_eq!(get_product(&db, original.id).await.unwrap(), updated);
    }
}
