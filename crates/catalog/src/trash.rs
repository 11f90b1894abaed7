//! Trash lifecycle: reversible deletion for inventories and objects.

use crate::cascade::{CascadeEngine, TrashPurgeSummary};
use crate::error::{CatalogError, CatalogResult};
use larder_core::TrashKind;
use larder_metadata::CatalogStore;
use larder_metadata::models::{InventoryRow, ObjectRow};
use std::sync::Arc;
use time::OffsetDateTime;

/// A user's trash contents, most recently trashed first.
#[derive(Debug, Clone)]
pub struct TrashListing {
    pub inventories: Vec<InventoryRow>,
    pub objects: Vec<ObjectRow>,
}

/// Soft delete, restore, and permanent deletion of trashed items.
#[derive(Clone)]
pub struct TrashLifecycle {
    metadata: Arc<dyn CatalogStore>,
    cascade: CascadeEngine,
}

impl TrashLifecycle {
    pub fn new(metadata: Arc<dyn CatalogStore>, cascade: CascadeEngine) -> Self {
        Self { metadata, cascade }
    }

    /// Move an item to the trash, stamping the deletion time.
    ///
    /// Zero rows matched (absent, wrong owner, or already trashed) is the
    /// not-found negative result.
    pub async fn soft_delete(&self, kind: TrashKind, id: i64, user_id: i64) -> CatalogResult<()> {
        let now = OffsetDateTime::now_utc();
        let matched = match kind {
            TrashKind::Inventory => self.metadata.soft_delete_inventory(id, user_id, now).await?,
            TrashKind::Object => self.metadata.soft_delete_object(id, user_id, now).await?,
        };
        if !matched {
            return Err(CatalogError::NotFound(format!(
                "{kind} {id} not found or already deleted"
            )));
        }
        tracing::info!(kind = %kind, id, user_id, "Moved item to trash");
        Ok(())
    }

    /// Take an item back out of the trash.
    pub async fn restore(&self, kind: TrashKind, id: i64, user_id: i64) -> CatalogResult<()> {
        let matched = match kind {
            TrashKind::Inventory => self.metadata.restore_inventory(id, user_id).await?,
            TrashKind::Object => self.metadata.restore_object(id, user_id).await?,
        };
        if !matched {
            return Err(CatalogError::NotFound(format!(
                "{kind} {id} not found or not deleted"
            )));
        }
        tracing::info!(kind = %kind, id, user_id, "Restored item from trash");
        Ok(())
    }

    /// List the user's trashed inventories and objects.
    pub async fn list_trash(&self, user_id: i64) -> CatalogResult<TrashListing> {
        Ok(TrashListing {
            inventories: self.metadata.list_trashed_inventories(user_id).await?,
            objects: self.metadata.list_trashed_objects(user_id).await?,
        })
    }

    /// Permanently delete one trashed item through the cascade engine.
    ///
    /// The item must currently be in the trash: permanent deletion of a
    /// non-trashed item is refused as not-found before any mutation. The
    /// retention purge and trash-emptying paths do not pass through this
    /// gate.
    pub async fn hard_delete_one(
        &self,
        kind: TrashKind,
        id: i64,
        user_id: i64,
    ) -> CatalogResult<()> {
        match kind {
            TrashKind::Object => {
                if self.metadata.get_trashed_object(id, user_id).await?.is_none() {
                    return Err(CatalogError::NotFound(format!("object {id} not found")));
                }
                self.cascade.hard_delete_object(id).await
            }
            TrashKind::Inventory => {
                if self
                    .metadata
                    .get_trashed_inventory(id, user_id)
                    .await?
                    .is_none()
                {
                    return Err(CatalogError::NotFound(format!("inventory {id} not found")));
                }
                self.cascade.hard_delete_inventory(id, user_id).await
            }
        }
    }

    /// Permanently delete everything in the user's trash.
    pub async fn hard_delete_all_trash(&self, user_id: i64) -> CatalogResult<TrashPurgeSummary> {
        self.cascade.purge_user_trash(user_id).await
    }
}
