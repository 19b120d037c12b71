//! # Category Commands
//!
//! Categories are whatever the current products carry. There is no category
//! table, so the list changes as products are added, edited and deleted.

use tracing::debug;

use crate::error::ApiError;
use crate::state::DbState;
use shopsync_core::ALL_CATEGORY;

/// Distinct categories, ascending.
pub async fn list_categories(db: &DbState) -> Result<Vec<String>, ApiError> {
    let categories = db.inner()?.products().list_categories().await?;
    debug!(count = categories.len(), "list_categories command");
    Ok(categories)
}

/// Filter tabs for the product list: `All` first, then every category.
pub async fn list_category_tabs(db: &DbState) -> Result<Vec<String>, ApiError> {
    let categories = list_categories(db).await?;

    let mut tabs = Vec::with_capacity(categories.len() + 1);
    tabs.push(ALL_CATEGORY.to_string());
    tabs.extend(categories);
    Ok(tabs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::delete_product;
    use shopsync_db::{Database, DbConfig};

    #[tokio::test]
    async fn test_tabs_prepend_all() {
        let db = DbState::from_database(Database::new(DbConfig::in_memory()).await.unwrap());

        assert_eq!(
            list_category_tabs(&db).await.unwrap(),
            vec!["All", "Clothing", "Electronics", "Home"]
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_has_only_all_tab() {
        let db = DbState::from_database(
            Database::new(DbConfig::in_memory().without_seed()).await.unwrap(),
        );

        assert!(list_categories(&db).await.unwrap().is_empty());
        assert_eq!(list_category_tabs(&db).await.unwrap(), vec!["All"]);
    }

    #[tokio::test]
    async fn test_category_disappears_with_last_product() {
        let database = Database::new(DbConfig::in_memory()).await.unwrap();
        let home: Vec<i64> = database
            .products()
            .list_by_category("Home")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        let db = DbState::from_database(database);

        for id in home {
            delete_product(&db, id).await.unwrap();
        }

        assert_eq!(list_categories(&db).await.unwrap(), vec!["Clothing", "Electronics"]);
    }
}
