//! Integration tests for the file registry and the primary-file invariant.

mod common;

use common::{TestCatalog, USER};
use larder_core::FileOwner;

/// Count of rows with the primary flag for one owner.
async fn primary_count(catalog: &TestCatalog, owner: &FileOwner) -> usize {
    catalog
        .registry()
        .list_files(owner)
        .await
        .unwrap()
        .iter()
        .filter(|f| f.is_primary)
        .count()
}

#[tokio::test]
async fn insert_files_marks_exactly_the_first_primary() {
    let catalog = TestCatalog::new().await;
    let registry = catalog.registry();
    let owner = FileOwner::inventory(catalog.create_inventory("kitchen").await);

    let stored = vec![
        catalog.stage_upload("one.jpg"),
        catalog.stage_upload("two.jpg"),
        catalog.stage_upload("three.jpg"),
    ];
    let records = registry
        .insert_files(&owner, USER, &stored, true)
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert!(records[0].is_primary);
    assert!(!records[1].is_primary);
    assert!(!records[2].is_primary);
    assert_eq!(primary_count(&catalog, &owner).await, 1);

    // Listing is primary-first, then insertion order.
    let listed = registry.list_files(&owner).await.unwrap();
    assert_eq!(
        listed.iter().map(|f| f.filename.as_str()).collect::<Vec<_>>(),
        vec!["one.jpg", "two.jpg", "three.jpg"]
    );
}

#[tokio::test]
async fn insert_files_without_primary_flag() {
    let catalog = TestCatalog::new().await;
    let registry = catalog.registry();
    let inv = catalog.create_inventory("gear").await;
    let owner = FileOwner::object(catalog.create_object(inv, None, "camera").await);

    let stored = vec![catalog.stage_upload("a.jpg"), catalog.stage_upload("b.jpg")];
    let records = registry
        .insert_files(&owner, USER, &stored, false)
        .await
        .unwrap();

    assert!(records.iter().all(|r| !r.is_primary));
    assert!(registry.get_primary_file(&owner).await.unwrap().is_none());
}

#[tokio::test]
async fn promote_primary_replaces_image_and_targets_old_file() {
    // An inventory with a primary image gets a replacement: exactly one row
    // stays primary and the old stored file is deleted.
    let catalog = TestCatalog::new().await;
    let registry = catalog.registry();
    let owner = FileOwner::inventory(catalog.create_inventory("workshop").await);

    let first = catalog.stage_upload("cover-v1.jpg");
    registry
        .insert_files(&owner, USER, &[first], true)
        .await
        .unwrap();
    assert!(catalog.upload_path("cover-v1.jpg").exists());

    let replacement = catalog.stage_upload("cover-v2.jpg");
    let promoted = registry
        .promote_primary(&owner, USER, &replacement)
        .await
        .unwrap();

    assert!(promoted.is_primary);
    assert_eq!(promoted.filename, "cover-v2.jpg");
    assert_eq!(primary_count(&catalog, &owner).await, 1);
    assert!(!catalog.upload_path("cover-v1.jpg").exists());
    assert!(catalog.upload_path("cover-v2.jpg").exists());

    let primary = registry.get_primary_file(&owner).await.unwrap().unwrap();
    assert_eq!(primary.filename, "cover-v2.jpg");
}

#[tokio::test]
async fn repeated_promotions_keep_the_invariant() {
    let catalog = TestCatalog::new().await;
    let registry = catalog.registry();
    let owner = FileOwner::user_profile(USER);

    for version in 1..=4 {
        let upload = catalog.stage_upload(&format!("avatar-v{version}.png"));
        registry.promote_primary(&owner, USER, &upload).await.unwrap();
        assert_eq!(primary_count(&catalog, &owner).await, 1);
    }

    let primary = registry.get_primary_file(&owner).await.unwrap().unwrap();
    assert_eq!(primary.filename, "avatar-v4.png");
    // Only the latest upload survives on disk.
    for version in 1..=3 {
        assert!(!catalog.upload_path(&format!("avatar-v{version}.png")).exists());
    }
    assert!(catalog.upload_path("avatar-v4.png").exists());
}

#[tokio::test]
async fn promote_primary_works_without_an_existing_primary() {
    let catalog = TestCatalog::new().await;
    let registry = catalog.registry();
    let owner = FileOwner::inventory(catalog.create_inventory("pantry").await);

    let upload = catalog.stage_upload("fresh.jpg");
    let promoted = registry.promote_primary(&owner, USER, &upload).await.unwrap();
    assert!(promoted.is_primary);
    assert_eq!(primary_count(&catalog, &owner).await, 1);
}

#[tokio::test]
async fn delete_by_ids_removes_rows_and_disk_files() {
    let catalog = TestCatalog::new().await;
    let registry = catalog.registry();
    let inv = catalog.create_inventory("garage").await;
    let owner = FileOwner::object(catalog.create_object(inv, None, "bike").await);

    let stored = vec![catalog.stage_upload("x.jpg"), catalog.stage_upload("y.jpg")];
    let records = registry
        .insert_files(&owner, USER, &stored, false)
        .await
        .unwrap();

    let removed = registry.delete_by_ids(&[records[0].id]).await.unwrap();
    assert_eq!(removed, 1);
    assert!(!catalog.upload_path("x.jpg").exists());
    assert!(catalog.upload_path("y.jpg").exists());
    assert_eq!(registry.list_files(&owner).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_by_stored_names_proceeds_past_missing_disk_files() {
    let catalog = TestCatalog::new().await;
    let registry = catalog.registry();
    let inv = catalog.create_inventory("hangar").await;
    let owner = FileOwner::object(catalog.create_object(inv, None, "drone").await);

    let stored = vec![catalog.stage_upload("keep.jpg"), catalog.stage_upload("gone.jpg")];
    registry
        .insert_files(&owner, USER, &stored, false)
        .await
        .unwrap();

    // Simulate an already-missing disk file: the row must still be removed.
    std::fs::remove_file(catalog.upload_path("gone.jpg")).unwrap();

    let removed = registry
        .delete_by_stored_names(&["gone.jpg".to_string()])
        .await
        .unwrap();
    assert_eq!(removed, 1);

    let remaining = registry.list_files(&owner).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].filename, "keep.jpg");
}

#[tokio::test]
async fn delete_all_for_entity_wipes_everything() {
    let catalog = TestCatalog::new().await;
    let registry = catalog.registry();
    let inv = catalog.create_inventory("camping").await;
    let owner = FileOwner::object(catalog.create_object(inv, None, "tent").await);

    let stored = vec![
        catalog.stage_upload("p1.jpg"),
        catalog.stage_upload("p2.jpg"),
        catalog.stage_upload("p3.jpg"),
    ];
    registry
        .insert_files(&owner, USER, &stored, false)
        .await
        .unwrap();

    assert_eq!(registry.delete_all_for_entity(&owner).await.unwrap(), 3);
    assert!(registry.list_files(&owner).await.unwrap().is_empty());
    for name in ["p1.jpg", "p2.jpg", "p3.jpg"] {
        assert!(!catalog.upload_path(name).exists());
    }
}
