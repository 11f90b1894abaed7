//! Shelf CRUD.

use crate::error::{CatalogError, CatalogResult};
use larder_metadata::CatalogStore;
use larder_metadata::models::{NewShelf, ShelfRow, ShelfUpdate};
use time::OffsetDateTime;

/// Create a shelf under an inventory the user owns.
pub async fn create(metadata: &dyn CatalogStore, new: NewShelf) -> CatalogResult<i64> {
    if new.name.trim().is_empty() {
        return Err(CatalogError::Validation("name is required".to_string()));
    }
    if metadata
        .get_inventory(new.inventory_id, new.user_id)
        .await?
        .is_none()
    {
        return Err(CatalogError::Validation(format!(
            "inventory {} not found or access denied",
            new.inventory_id
        )));
    }

    let id = metadata.create_shelf(&new, OffsetDateTime::now_utc()).await?;
    tracing::info!(
        shelf_id = id,
        inventory_id = new.inventory_id,
        user_id = new.user_id,
        "Created shelf"
    );
    Ok(id)
}

/// Get a shelf owned by the user.
pub async fn get(
    metadata: &dyn CatalogStore,
    shelf_id: i64,
    user_id: i64,
) -> CatalogResult<ShelfRow> {
    metadata
        .get_shelf(shelf_id, user_id)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("shelf {shelf_id} not found")))
}

/// List the shelves of an inventory the user owns, newest first.
pub async fn list(
    metadata: &dyn CatalogStore,
    inventory_id: i64,
    user_id: i64,
) -> CatalogResult<Vec<ShelfRow>> {
    if metadata.get_inventory(inventory_id, user_id).await?.is_none() {
        return Err(CatalogError::Validation(format!(
            "inventory {inventory_id} not found or access denied"
        )));
    }
    Ok(metadata.list_shelves(inventory_id, user_id).await?)
}

/// Apply a partial update to a shelf.
pub async fn update(
    metadata: &dyn CatalogStore,
    shelf_id: i64,
    user_id: i64,
    update: ShelfUpdate,
) -> CatalogResult<()> {
    if update.is_empty() {
        return Err(CatalogError::Validation("nothing to update".to_string()));
    }

    let matched = metadata
        .update_shelf(shelf_id, user_id, &update, OffsetDateTime::now_utc())
        .await?;
    if !matched {
        return Err(CatalogError::NotFound(format!("shelf {shelf_id} not found")));
    }
    Ok(())
}
