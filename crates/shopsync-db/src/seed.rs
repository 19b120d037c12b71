//! # First-Boot Seed
//!
//! Example products inserted once, when the catalog is empty.
//!
//! ## Seed Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Seed-On-Empty                                        │
//! │                                                                         │
//! │  Database::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN                                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT COUNT(*) FROM products                                         │
//! │       │                                                                 │
//! │       ├── > 0 ? → ROLLBACK, nothing to do (not a reset mechanism)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT × N                                                            │
//! │       │                                                                 │
//! │       ├── any failure → ROLLBACK, initialization aborts                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  COMMIT                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopsync_core::ProductInput;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::insert_product;

/// The six example products: two each in Clothing, Electronics and Home.
///
/// Inserted in this order, so the last one (Coffee Table) gets the highest id.
pub fn default_products() -> Vec<ProductInput> {
    vec![
        ProductInput::new("Nike Air Max", 129.99, 25, "Clothing"),
        ProductInput::new("iPhone 15 Pro", 999.99, 12, "Electronics"),
        ProductInput::new("Modern Sofa", 599.99, 8, "Home"),
        ProductInput::new("Levi's Jeans", 79.99, 30, "Clothing"),
        ProductInput::new("MacBook Pro", 1999.99, 5, "Electronics"),
        ProductInput::new("Coffee Table", 249.99, 15, "Home"),
    ]
}

fn seed_error(err: sqlx::Error) -> DbError {
    DbError::SeedFailed(DbError::from(err).to_string())
}

/// Inserts `products` if the catalog is empty.
///
/// All inserts share one transaction: either every row lands or none does.
///
/// ## Returns
/// Number of rows inserted (0 when the catalog already had rows or
/// `products` is empty).
pub async fn seed_if_empty(pool: &SqlitePool, products: &[ProductInput]) -> DbResult<usize> {
    if products.is_empty() {
        debug!("Seeding disabled");
        return Ok(0);
    }

    let mut tx = pool.begin().await.map_err(seed_error)?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *tx)
        .await
        .map_err(seed_error)?;

    if existing > 0 {
        debug!(existing, "Catalog already populated, skipping seed");
        return Ok(0);
    }

    for product in products {
        insert_product(&mut *tx, product).await.map_err(seed_error)?;
    }

    tx.commit().await.map_err(seed_error)?;

    info!(count = products.len(), "Seeded empty catalog");
    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_default_products_shape() {
        let products = default_products();
        assert_eq!(products.len(), 6);

        let categories: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(
            categories.into_iter().collect::<Vec<_>>(),
            vec!["Clothing", "Electronics", "Home"]
        );

        assert!(products.iter().all(|p| p.image_uri.is_none()));
        assert!(products.iter().all(|p| p.price > 0.0 && p.stock >= 0));
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_catalog_empty() {
        let db = crate::Database::new(crate::DbConfig::in_memory().without_seed())
            .await
            .unwrap();

        sqlx::query(
            r#"
            CREATE TRIGGER reject_boom BEFORE INSERT ON products
            WHEN NEW.name = 'Boom'
            BEGIN
                SELECT RAISE(ABORT, 'boom');
            END
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        let products = vec![
            ProductInput::new("Fine", 1.0, 1, "Misc"),
            ProductInput::new("Boom", 1.0, 1, "Misc"),
        ];

        let err = seed_if_empty(db.pool(), &products).await.unwrap_err();
        assert!(matches!(err, DbError::SeedFailed(_)));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_skips_populated_catalog() {
        let db = crate::Database::new(crate::DbConfig::in_memory().without_seed())
            .await
            .unwrap();
        db.products()
            .create(&ProductInput::new("Existing", 5.0, 1, "Misc"))
            .await
            .unwrap();

        let inserted = seed_if_empty(db.pool(), &default_products()).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(db.products().count().await.unwrap(), 1);
    }
}
