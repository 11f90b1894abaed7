//! Inventory CRUD.

use crate::error::{CatalogError, CatalogResult};
use larder_metadata::CatalogStore;
use larder_metadata::models::{InventoryRow, InventoryUpdate, NewInventory};
use time::OffsetDateTime;

/// Create an inventory. The name is required.
pub async fn create(metadata: &dyn CatalogStore, new: NewInventory) -> CatalogResult<i64> {
    if new.name.trim().is_empty() {
        return Err(CatalogError::Validation("name is required".to_string()));
    }

    let id = metadata
        .create_inventory(&new, OffsetDateTime::now_utc())
        .await?;
    tracing::info!(inventory_id = id, user_id = new.user_id, "Created inventory");
    Ok(id)
}

/// Get a non-deleted inventory owned by the user.
pub async fn get(
    metadata: &dyn CatalogStore,
    inventory_id: i64,
    user_id: i64,
) -> CatalogResult<InventoryRow> {
    metadata
        .get_inventory(inventory_id, user_id)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("inventory {inventory_id} not found")))
}

/// List the user's non-deleted inventories, newest first.
pub async fn list(metadata: &dyn CatalogStore, user_id: i64) -> CatalogResult<Vec<InventoryRow>> {
    Ok(metadata.list_inventories(user_id).await?)
}

/// Apply a partial update to an inventory.
pub async fn update(
    metadata: &dyn CatalogStore,
    inventory_id: i64,
    user_id: i64,
    update: InventoryUpdate,
) -> CatalogResult<()> {
    if update.is_empty() {
        return Err(CatalogError::Validation("nothing to update".to_string()));
    }

    let matched = metadata
        .update_inventory(inventory_id, user_id, &update, OffsetDateTime::now_utc())
        .await?;
    if !matched {
        return Err(CatalogError::NotFound(format!(
            "inventory {inventory_id} not found"
        )));
    }
    Ok(())
}
