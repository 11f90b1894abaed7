//! Retention purge: unattended permanent removal of long-trashed rows.

use crate::cascade::CascadeEngine;
use larder_core::config::PurgeConfig;
use larder_metadata::CatalogStore;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Counters for one purge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeStats {
    pub objects_purged: u64,
    pub inventories_purged: u64,
    pub errors: u64,
}

/// Run one retention pass: permanently delete every object, then every
/// inventory, soft-deleted before `cutoff`.
///
/// Each expired row goes through the cascade engine so its files and
/// descendant rows are removed with it. Per-item failures are counted and
/// logged; the pass always completes. The cutoff is injected so the retention
/// window is testable without a clock.
pub async fn run_purge_pass(
    metadata: &Arc<dyn CatalogStore>,
    engine: &CascadeEngine,
    cutoff: OffsetDateTime,
) -> PurgeStats {
    let run_id = Uuid::new_v4();
    let mut stats = PurgeStats::default();

    tracing::info!(run_id = %run_id, cutoff = %cutoff, "Running retention purge pass");

    match metadata.list_expired_trashed_objects(cutoff).await {
        Ok(objects) => {
            for object in objects {
                match engine.hard_delete_object(object.id).await {
                    Ok(()) => stats.objects_purged += 1,
                    Err(e) if e.is_not_found() => {
                        // Lost a race with a user-triggered hard delete; the
                        // row is gone either way.
                        tracing::debug!(run_id = %run_id, object_id = object.id, "Expired object already removed");
                    }
                    Err(e) => {
                        tracing::warn!(
                            run_id = %run_id,
                            object_id = object.id,
                            error = %e,
                            "Failed to purge expired object"
                        );
                        stats.errors += 1;
                    }
                }
            }
        }
        Err(e) => {
            tracing::error!(run_id = %run_id, error = %e, "Failed to list expired objects");
            stats.errors += 1;
        }
    }

    match metadata.list_expired_trashed_inventories(cutoff).await {
        Ok(inventories) => {
            for inventory in inventories {
                match engine
                    .hard_delete_inventory(inventory.id, inventory.user_id)
                    .await
                {
                    Ok(()) => stats.inventories_purged += 1,
                    Err(e) if e.is_not_found() => {
                        tracing::debug!(run_id = %run_id, inventory_id = inventory.id, "Expired inventory already removed");
                    }
                    Err(e) => {
                        tracing::warn!(
                            run_id = %run_id,
                            inventory_id = inventory.id,
                            error = %e,
                            "Failed to purge expired inventory"
                        );
                        stats.errors += 1;
                    }
                }
            }
        }
        Err(e) => {
            tracing::error!(run_id = %run_id, error = %e, "Failed to list expired inventories");
            stats.errors += 1;
        }
    }

    tracing::info!(
        run_id = %run_id,
        objects_purged = stats.objects_purged,
        inventories_purged = stats.inventories_purged,
        errors = stats.errors,
        "Retention purge pass finished"
    );
    stats
}

/// Spawn the recurring purge task.
///
/// A single periodic task with no persisted cursor: each tick computes
/// `cutoff = now − retention` and runs a fresh full pass. Failures in one
/// pass never crash the loop; the next tick proceeds independently.
pub fn spawn_purge_scheduler(
    metadata: Arc<dyn CatalogStore>,
    engine: CascadeEngine,
    config: PurgeConfig,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(
            interval_secs = config.interval_secs,
            retention_days = config.retention_days,
            "Retention purge scheduler enabled"
        );

        loop {
            tokio::time::sleep(config.interval()).await;
            let cutoff = OffsetDateTime::now_utc() - config.retention();
            run_purge_pass(&metadata, &engine, cutoff).await;
        }
    })
}
