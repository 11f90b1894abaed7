//! Integration tests for the retention purge.

mod common;

use common::{TestCatalog, USER};
use larder_catalog::purge::{run_purge_pass, spawn_purge_scheduler};
use larder_core::FileOwner;
use larder_core::config::PurgeConfig;
use time::{Duration, OffsetDateTime};

#[tokio::test]
async fn purge_respects_the_retention_window() {
    // An object trashed at time T is removed by a pass at T+31 days but not
    // by a pass at T+29 days.
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let engine = catalog.engine();
    let now = OffsetDateTime::now_utc();

    let inventory = catalog.create_inventory("warehouse").await;
    let object = catalog.create_object(inventory, None, "pallet").await;
    let trashed_at = now - Duration::days(30);
    metadata
        .soft_delete_object(object, USER, trashed_at)
        .await
        .unwrap();

    // Pass at T+29: cutoff is after the trash time, nothing qualifies.
    let early_cutoff = (trashed_at + Duration::days(29)) - Duration::days(30);
    let stats = run_purge_pass(&metadata, &engine, early_cutoff).await;
    assert_eq!(stats.objects_purged, 0);
    assert!(metadata.get_trashed_object(object, USER).await.unwrap().is_some());

    // Pass at T+31: the row is now older than the window.
    let late_cutoff = (trashed_at + Duration::days(31)) - Duration::days(30);
    let stats = run_purge_pass(&metadata, &engine, late_cutoff).await;
    assert_eq!(stats.objects_purged, 1);
    assert_eq!(stats.errors, 0);
    assert!(metadata.get_trashed_object(object, USER).await.unwrap().is_none());
}

#[tokio::test]
async fn purge_removes_files_with_the_rows() {
    // The purge goes through the cascade engine, so expired rows take their
    // file rows and disk files with them instead of orphaning them.
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let now = OffsetDateTime::now_utc();

    let inventory = catalog.create_inventory("archive").await;
    let object = catalog.create_object(inventory, None, "negatives").await;

    let photo = catalog.stage_upload("negatives.jpg");
    catalog
        .registry()
        .insert_files(&FileOwner::object(object), USER, &[photo], false)
        .await
        .unwrap();

    metadata
        .soft_delete_object(object, USER, now - Duration::days(45))
        .await
        .unwrap();

    let stats = run_purge_pass(&metadata, &catalog.engine(), now - Duration::days(30)).await;
    assert_eq!(stats.objects_purged, 1);
    assert!(
        catalog
            .registry()
            .list_files(&FileOwner::object(object))
            .await
            .unwrap()
            .is_empty()
    );
    assert!(!catalog.upload_path("negatives.jpg").exists());
}

#[tokio::test]
async fn purging_an_expired_inventory_cascades_to_children() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let now = OffsetDateTime::now_utc();

    let inventory = catalog.create_inventory("old house").await;
    let shelf = catalog.create_shelf(inventory, "mantle").await;
    let object = catalog.create_object(inventory, Some(shelf), "clock").await;

    metadata
        .soft_delete_inventory(inventory, USER, now - Duration::days(60))
        .await
        .unwrap();

    let stats = run_purge_pass(&metadata, &catalog.engine(), now - Duration::days(30)).await;
    assert_eq!(stats.inventories_purged, 1);
    assert!(metadata.get_trashed_inventory(inventory, USER).await.unwrap().is_none());
    assert!(metadata.get_shelf(shelf, USER).await.unwrap().is_none());
    assert!(metadata.get_object(object, USER).await.unwrap().is_none());
    assert!(metadata.get_trashed_object(object, USER).await.unwrap().is_none());
}

#[tokio::test]
async fn purge_pass_with_nothing_expired_is_a_noop() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();

    let inventory = catalog.create_inventory("fresh").await;
    let object = catalog.create_object(inventory, None, "new thing").await;
    catalog
        .trash()
        .soft_delete(larder_core::TrashKind::Object, object, USER)
        .await
        .unwrap();

    let cutoff = OffsetDateTime::now_utc() - Duration::days(30);
    let stats = run_purge_pass(&metadata, &catalog.engine(), cutoff).await;
    assert_eq!(stats.objects_purged, 0);
    assert_eq!(stats.inventories_purged, 0);
    assert_eq!(stats.errors, 0);
    assert!(metadata.get_trashed_object(object, USER).await.unwrap().is_some());
}

#[tokio::test]
async fn scheduler_runs_passes_on_its_interval() {
    let catalog = TestCatalog::new().await;
    let metadata = catalog.metadata();
    let now = OffsetDateTime::now_utc();

    let inventory = catalog.create_inventory("timed").await;
    let object = catalog.create_object(inventory, None, "expired thing").await;
    metadata
        .soft_delete_object(object, USER, now - Duration::days(40))
        .await
        .unwrap();

    let config = PurgeConfig {
        enabled: true,
        interval_secs: 1,
        retention_days: 30,
    };
    let handle = spawn_purge_scheduler(metadata.clone(), catalog.engine(), config);

    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(5);
    loop {
        if metadata
            .get_trashed_object(object, USER)
            .await
            .unwrap()
            .is_none()
        {
            break;
        }
        if tokio::time::Instant::now() > deadline {
            handle.abort();
            panic!("Purge scheduler did not run in time");
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    handle.abort();
}
