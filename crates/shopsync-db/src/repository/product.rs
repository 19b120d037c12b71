//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Key Operations
//! - Newest-first listing, whole catalog or one category
//! - CRUD by integer id
//! - Stock-only update
//! - Derived category index
//!
//! ## Derived Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Categories Come From                           │
//! │                                                                         │
//! │  products                                                              │
//! │  ┌────┬───────────────┬─────────────┐                                  │
//! │  │ id │ name          │ category    │                                  │
//! │  ├────┼───────────────┼─────────────┤                                  │
//! │  │  1 │ Nike Air Max  │ Clothing    │                                  │
//! │  │  2 │ iPhone 15 Pro │ Electronics │                                  │
//! │  │  3 │ Modern Sofa   │ Home        │                                  │
//! │  │  4 │ Levi's Jeans  │ Clothing    │                                  │
//! │  └────┴───────────────┴─────────────┘                                  │
//! │       │                                                                 │
//! │       ▼  SELECT DISTINCT category ... ORDER BY category                │
//! │  ["Clothing", "Electronics", "Home"]                                   │
//! │                                                                         │
//! │  No category table and no cache: delete the last "Home" product and    │
//! │  "Home" is gone from the next listing.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Ids
//! Reads return `None`, writes return [`WriteOutcome::NotFound`]. Only storage
//! faults become `Err`.

use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::WriteOutcome;
use shopsync_core::{Product, ProductInput};

const SELECT_ALL: &str = r#"
SELECT id, name, price, stock, category, imageUri
FROM products
ORDER BY id DESC
"#;

const SELECT_BY_CATEGORY: &str = r#"
SELECT id, name, price, stock, category, imageUri
FROM products
WHERE category = ?1
ORDER BY id DESC
"#;

const SELECT_BY_ID: &str = r#"
SELECT id, name, price, stock, category, imageUri
FROM products
WHERE id = ?1
"#;

const INSERT: &str = r#"
INSERT INTO products (name, price, stock, category, imageUri)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

const UPDATE: &str = r#"
UPDATE products SET
    name = ?2,
    price = ?3,
    stock = ?4,
    category = ?5,
    imageUri = ?6
WHERE id = ?1
"#;

const UPDATE_STOCK: &str = "UPDATE products SET stock = ?2 WHERE id = ?1";

const DELETE: &str = "DELETE FROM products WHERE id = ?1";

const SELECT_CATEGORIES: &str = "SELECT DISTINCT category FROM products ORDER BY category";

/// Inserts a product through any executor (pool or open transaction).
///
/// Returns the id SQLite assigned.
pub(crate) async fn insert_product<'e, E>(executor: E, input: &ProductInput) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(INSERT)
        .bind(input.name.as_str())
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category.as_str())
        .bind(input.image_uri.as_deref())
        .execute(executor)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.create(&ProductInput::new("Desk Lamp", 19.99, 10, "Home")).await?;
/// let lamp = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product, newest first (descending id). No pagination.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Lists products whose category equals `category` exactly, newest first.
    ///
    /// The match is case-sensitive and does not trim. The `All` sentinel has
    /// no meaning here; callers handle it before calling.
    pub async fn list_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_BY_CATEGORY)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;

        debug!(category = %category, count = products.len(), "Listed products by category");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No such id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Inserts a new product and returns the id the store assigned.
    ///
    /// `ProductInput` carries no id, so the caller can't choose one.
    pub async fn create(&self, input: &ProductInput) -> DbResult<i64> {
        debug!(name = %input.name, category = %input.category, "Creating product");

        let id = insert_product(&self.pool, input).await?;

        debug!(id, "Product created");
        Ok(id)
    }

    /// Sets the stock count of a product. No other column changes.
    ///
    /// The value is written as given. Clamping at zero is the caller's job
    /// (see `shopsync_core::stock`).
    pub async fn update_stock(&self, id: i64, stock: i64) -> DbResult<WriteOutcome> {
        debug!(id, stock, "Updating stock");

        let result = sqlx::query(UPDATE_STOCK)
            .bind(id)
            .bind(stock)
            .execute(&self.pool)
            .await?;

        Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Replaces every mutable field of a product.
    pub async fn update(&self, id: i64, input: &ProductInput) -> DbResult<WriteOutcome> {
        debug!(id, name = %input.name, "Updating product");

        let result = sqlx::query(UPDATE)
            .bind(id)
            .bind(input.name.as_str())
            .bind(input.price)
            .bind(input.stock)
            .bind(input.category.as_str())
            .bind(input.image_uri.as_deref())
            .execute(&self.pool)
            .await?;

        Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Deletes a product.
    pub async fn delete(&self, id: i64) -> DbResult<WriteOutcome> {
        debug!(id, "Deleting product");

        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;

        Ok(WriteOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Distinct categories of the current rows, ascending.
    ///
    /// Read live on every call. No `All` sentinel is included.
    pub async fn list_categories(&self) -> DbResult<Vec<String>> {
        let categories: Vec<String> = sqlx::query_scalar(SELECT_CATEGORIES)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
