//! Integration tests for the entity CRUD services.

mod common;

use common::{OTHER_USER, TestCatalog, USER};
use larder_catalog::CatalogError;
use larder_catalog::services::{inventories, objects, shelves};
use larder_metadata::models::{
    InventoryUpdate, NewInventory, NewObject, NewShelf, ObjectUpdate, ShelfUpdate,
};

fn is_validation(err: &CatalogError) -> bool {
    matches!(err, CatalogError::Validation(_))
}

#[tokio::test]
async fn inventory_create_requires_a_name() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();

    let err = inventories::create(
        &*metadata,
        NewInventory {
            name: "   ".to_string(),
            description: None,
            icon_name: None,
            user_id: USER,
        },
    )
    .await
    .unwrap_err();
    assert!(is_validation(&err));
}

#[tokio::test]
async fn inventory_update_merges_only_present_fields() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();

    let id = inventories::create(
        &*metadata,
        NewInventory {
            name: "wine rack".to_string(),
            description: Some("cool and dark".to_string()),
            icon_name: Some("barrel".to_string()),
            user_id: USER,
        },
    )
    .await
    .unwrap();

    inventories::update(
        &*metadata,
        id,
        USER,
        InventoryUpdate {
            name: Some("tall wine rack".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let row = inventories::get(&*metadata, id, USER).await.unwrap();
    assert_eq!(row.name, "tall wine rack");
    assert_eq!(row.description.as_deref(), Some("cool and dark"));
    assert_eq!(row.icon_name.as_deref(), Some("barrel"));
}

#[tokio::test]
async fn empty_updates_are_rejected_before_any_mutation() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let inventory = catalog.create_inventory("box room").await;
    let shelf = catalog.create_shelf(inventory, "only shelf").await;
    let object = catalog.create_object(inventory, None, "box").await;

    let err = inventories::update(&*metadata, inventory, USER, InventoryUpdate::default())
        .await
        .unwrap_err();
    assert!(is_validation(&err));

    let err = shelves::update(&*metadata, shelf, USER, ShelfUpdate::default())
        .await
        .unwrap_err();
    assert!(is_validation(&err));

    let err = objects::update(&*metadata, object, USER, ObjectUpdate::default())
        .await
        .unwrap_err();
    assert!(is_validation(&err));
}

#[tokio::test]
async fn shelf_create_checks_inventory_ownership() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let inventory = catalog.create_inventory("theirs").await;

    let err = shelves::create(
        &*metadata,
        NewShelf {
            name: "intruder shelf".to_string(),
            description: None,
            inventory_id: inventory,
            user_id: OTHER_USER,
        },
    )
    .await
    .unwrap_err();
    assert!(is_validation(&err));

    let err = shelves::create(
        &*metadata,
        NewShelf {
            name: "orphan shelf".to_string(),
            description: None,
            inventory_id: 9999,
            user_id: USER,
        },
    )
    .await
    .unwrap_err();
    assert!(is_validation(&err));
}

#[tokio::test]
async fn object_create_validates_quantity_and_shelf_relationship() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let inventory = catalog.create_inventory("kitchen").await;
    let other_inventory = catalog.create_inventory("garage").await;
    let foreign_shelf = catalog.create_shelf(other_inventory, "tool wall").await;

    let err = objects::create(
        &*metadata,
        NewObject {
            name: "plates".to_string(),
            description: None,
            quantity: -1,
            barcode: None,
            inventory_id: inventory,
            shelf_id: None,
            user_id: USER,
        },
    )
    .await
    .unwrap_err();
    assert!(is_validation(&err));

    // A shelf from another inventory is a relationship violation, checked
    // before any insert happens.
    let err = objects::create(
        &*metadata,
        NewObject {
            name: "plates".to_string(),
            description: None,
            quantity: 6,
            barcode: None,
            inventory_id: inventory,
            shelf_id: Some(foreign_shelf),
            user_id: USER,
        },
    )
    .await
    .unwrap_err();
    assert!(is_validation(&err));
    assert!(objects::list(&*metadata, inventory, USER).await.unwrap().is_empty());
}

#[tokio::test]
async fn object_create_with_matching_shelf_succeeds() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let inventory = catalog.create_inventory("pantry").await;
    let shelf = catalog.create_shelf(inventory, "jars").await;

    let id = objects::create(
        &*metadata,
        NewObject {
            name: "jam".to_string(),
            description: None,
            quantity: 12,
            barcode: Some("7311041001233".to_string()),
            inventory_id: inventory,
            shelf_id: Some(shelf),
            user_id: USER,
        },
    )
    .await
    .unwrap();

    let row = objects::get(&*metadata, id, USER).await.unwrap();
    assert_eq!(row.shelf_id, Some(shelf));
    assert_eq!(row.barcode.as_deref(), Some("7311041001233"));
}

#[tokio::test]
async fn move_to_shelf_enforces_same_inventory() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let inventory = catalog.create_inventory("study").await;
    let other_inventory = catalog.create_inventory("bedroom").await;
    let home_shelf = catalog.create_shelf(inventory, "desk hutch").await;
    let foreign_shelf = catalog.create_shelf(other_inventory, "nightstand").await;
    let object = catalog.create_object(inventory, None, "notebook").await;

    let err = objects::move_to_shelf(&*metadata, object, USER, Some(foreign_shelf))
        .await
        .unwrap_err();
    assert!(is_validation(&err));

    objects::move_to_shelf(&*metadata, object, USER, Some(home_shelf))
        .await
        .unwrap();
    let row = metadata.get_object(object, USER).await.unwrap().unwrap();
    assert_eq!(row.shelf_id, Some(home_shelf));

    // Moving off any shelf is always allowed.
    objects::move_to_shelf(&*metadata, object, USER, None).await.unwrap();
    let row = metadata.get_object(object, USER).await.unwrap().unwrap();
    assert_eq!(row.shelf_id, None);
}

#[tokio::test]
async fn reads_are_scoped_to_the_owner() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let inventory = catalog.create_inventory("private").await;

    let err = inventories::get(&*metadata, inventory, OTHER_USER)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = shelves::list(&*metadata, inventory, OTHER_USER).await.unwrap_err();
    assert!(is_validation(&err));
}
