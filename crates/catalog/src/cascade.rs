//! Cascade engine: hierarchical hard deletion with deterministic ordering.
//!
//! Ordering invariant: within any cascade, an entity's files are removed
//! before its row, and a row is removed before its parent's row. Row-deletion
//! failures abort the remaining branch; disk problems never do.

use crate::error::{CatalogError, CatalogResult};
use crate::registry::FileRegistry;
use larder_core::FileOwner;
use larder_metadata::CatalogStore;
use std::sync::Arc;
use time::OffsetDateTime;

/// What happens to a shelf's objects when the shelf is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfDeleteMode {
    /// Hard-delete every object on the shelf along with it.
    DestroyObjects,
    /// Keep the objects, clearing their shelf reference.
    DetachObjects,
}

/// Counts from emptying a user's trash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrashPurgeSummary {
    pub objects_deleted: u64,
    pub inventories_deleted: u64,
}

/// Walks the inventory/shelf/object containment graph for hard deletion.
#[derive(Clone)]
pub struct CascadeEngine {
    metadata: Arc<dyn CatalogStore>,
    files: FileRegistry,
}

impl CascadeEngine {
    pub fn new(metadata: Arc<dyn CatalogStore>, files: FileRegistry) -> Self {
        Self { metadata, files }
    }

    /// Permanently delete one object: its files, then its row.
    ///
    /// Deleting an already-absent object reports not-found without side
    /// effects (an absent object has no file rows to remove).
    pub async fn hard_delete_object(&self, object_id: i64) -> CatalogResult<()> {
        self.files
            .delete_all_for_entity(&FileOwner::object(object_id))
            .await?;

        if !self.metadata.delete_object_row(object_id).await? {
            return Err(CatalogError::NotFound(format!(
                "object {object_id} not found"
            )));
        }
        tracing::debug!(object_id, "Hard-deleted object");
        Ok(())
    }

    /// Permanently delete one shelf, handling its objects per `mode`.
    pub async fn hard_delete_shelf(
        &self,
        shelf_id: i64,
        user_id: i64,
        mode: ShelfDeleteMode,
    ) -> CatalogResult<()> {
        match mode {
            ShelfDeleteMode::DestroyObjects => {
                let objects = self.metadata.list_objects_for_shelf(shelf_id, user_id).await?;
                for object in &objects {
                    self.hard_delete_object(object.id).await?;
                }
            }
            ShelfDeleteMode::DetachObjects => {
                let detached = self
                    .metadata
                    .detach_objects_from_shelf(shelf_id, user_id, OffsetDateTime::now_utc())
                    .await?;
                if detached > 0 {
                    tracing::debug!(shelf_id, detached, "Detached objects from shelf");
                }
            }
        }

        if !self.metadata.delete_shelf_row(shelf_id, user_id).await? {
            return Err(CatalogError::NotFound(format!("shelf {shelf_id} not found")));
        }
        tracing::debug!(shelf_id, mode = ?mode, "Hard-deleted shelf");
        Ok(())
    }

    /// Permanently delete one inventory and everything under it: every shelf
    /// (destroying its objects), every remaining object, the inventory's own
    /// files, then the inventory row.
    pub async fn hard_delete_inventory(
        &self,
        inventory_id: i64,
        user_id: i64,
    ) -> CatalogResult<()> {
        let shelves = self.metadata.list_shelves(inventory_id, user_id).await?;
        for shelf in &shelves {
            self.hard_delete_shelf(shelf.id, user_id, ShelfDeleteMode::DestroyObjects)
                .await?;
        }

        let remaining = self
            .metadata
            .list_all_objects_for_inventory(inventory_id, user_id)
            .await?;
        for object in &remaining {
            self.hard_delete_object(object.id).await?;
        }

        self.files
            .delete_all_for_entity(&FileOwner::inventory(inventory_id))
            .await?;

        if !self.metadata.delete_inventory_row(inventory_id, user_id).await? {
            return Err(CatalogError::NotFound(format!(
                "inventory {inventory_id} not found"
            )));
        }

        tracing::info!(
            inventory_id,
            user_id,
            shelves = shelves.len(),
            unshelved_objects = remaining.len(),
            "Hard-deleted inventory"
        );
        Ok(())
    }

    /// Empty a user's trash: every soft-deleted object, then every
    /// soft-deleted inventory, each through the full cascade.
    ///
    /// This is the administrative wipe behind "empty trash"; it is not a
    /// full-account deletion.
    pub async fn purge_user_trash(&self, user_id: i64) -> CatalogResult<TrashPurgeSummary> {
        let mut summary = TrashPurgeSummary::default();

        let objects = self.metadata.list_trashed_objects(user_id).await?;
        for object in &objects {
            self.hard_delete_object(object.id).await?;
            summary.objects_deleted += 1;
        }

        let inventories = self.metadata.list_trashed_inventories(user_id).await?;
        for inventory in &inventories {
            self.hard_delete_inventory(inventory.id, user_id).await?;
            summary.inventories_deleted += 1;
        }

        tracing::info!(
            user_id,
            objects = summary.objects_deleted,
            inventories = summary.inventories_deleted,
            "Emptied user trash"
        );
        Ok(summary)
    }
}
