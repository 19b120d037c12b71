//! End-to-end catalog behavior against a fresh in-memory store.

use shopsync_core::{ProductInput, ALL_CATEGORY};
use shopsync_db::{Database, DbConfig, WriteOutcome};

async fn fresh_store() -> Database {
    Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory store should open")
}

#[tokio::test]
async fn fresh_store_then_first_product() {
    let db = fresh_store().await;
    let products = db.products();

    let seeded = products.list_all().await.unwrap();
    assert_eq!(seeded.len(), 6);
    // Last seed row inserted comes back first
    assert_eq!(seeded[0].name, "Coffee Table");

    assert_eq!(
        products.list_categories().await.unwrap(),
        vec!["Clothing", "Electronics", "Home"]
    );

    let lamp = products
        .create(&ProductInput::new("Desk Lamp", 19.99, 10, "Home"))
        .await
        .unwrap();

    let after = products.list_all().await.unwrap();
    assert_eq!(after.len(), 7);
    assert_eq!(after[0].id, lamp);
    assert_eq!(after[0].name, "Desk Lamp");
    assert_eq!(after[0].image_uri, None);

    let home = products.list_by_category("Home").await.unwrap();
    assert_eq!(
        home.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Desk Lamp", "Coffee Table", "Modern Sofa"]
    );
}

#[tokio::test]
async fn stock_edit_and_delete_keep_categories_live() {
    let db = fresh_store().await;
    let products = db.products();

    let electronics = products.list_by_category("Electronics").await.unwrap();
    assert_eq!(electronics.len(), 2);

    let macbook = &electronics[0];
    assert_eq!(macbook.name, "MacBook Pro");
    assert_eq!(products.update_stock(macbook.id, 0).await.unwrap(), WriteOutcome::Applied);
    assert!(products
        .get_by_id(macbook.id)
        .await
        .unwrap()
        .unwrap()
        .is_out_of_stock());

    for product in &electronics {
        assert!(products.delete(product.id).await.unwrap().is_applied());
    }

    assert_eq!(products.list_categories().await.unwrap(), vec!["Clothing", "Home"]);
    assert_eq!(products.count().await.unwrap(), 4);
}

#[tokio::test]
async fn sentinel_is_not_a_stored_category() {
    let db = fresh_store().await;

    assert!(db
        .products()
        .list_by_category(ALL_CATEGORY)
        .await
        .unwrap()
        .is_empty());
    assert!(!db
        .products()
        .list_categories()
        .await
        .unwrap()
        .iter()
        .any(|c| c == ALL_CATEGORY));
}
