//! Object CRUD.

use crate::error::{CatalogError, CatalogResult};
use larder_metadata::CatalogStore;
use larder_metadata::models::{NewObject, ObjectRow, ObjectUpdate};
use time::OffsetDateTime;

/// Verify that a shelf exists, is owned by the user, and sits in the stated
/// inventory.
async fn check_shelf_in_inventory(
    metadata: &dyn CatalogStore,
    shelf_id: i64,
    inventory_id: i64,
    user_id: i64,
) -> CatalogResult<()> {
    let shelf = metadata
        .get_shelf(shelf_id, user_id)
        .await?
        .ok_or_else(|| {
            CatalogError::Validation(format!("shelf {shelf_id} not found or access denied"))
        })?;
    if shelf.inventory_id != inventory_id {
        return Err(CatalogError::Validation(format!(
            "shelf {shelf_id} does not belong to inventory {inventory_id}"
        )));
    }
    Ok(())
}

/// Create an object under an inventory the user owns, optionally on one of
/// that inventory's shelves.
pub async fn create(metadata: &dyn CatalogStore, new: NewObject) -> CatalogResult<i64> {
    if new.name.trim().is_empty() {
        return Err(CatalogError::Validation("name is required".to_string()));
    }
    if new.quantity < 0 {
        return Err(CatalogError::Validation(
            "quantity must not be negative".to_string(),
        ));
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
    if let Some(shelf_id) = new.shelf_id {
        check_shelf_in_inventory(metadata, shelf_id, new.inventory_id, new.user_id).await?;
    }

    let id = metadata.create_object(&new, OffsetDateTime::now_utc()).await?;
    tracing::info!(
        object_id = id,
        inventory_id = new.inventory_id,
        user_id = new.user_id,
        "Created object"
    );
    Ok(id)
}

/// Get a non-deleted object owned by the user.
pub async fn get(
    metadata: &dyn CatalogStore,
    object_id: i64,
    user_id: i64,
) -> CatalogResult<ObjectRow> {
    metadata
        .get_object(object_id, user_id)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("object {object_id} not found")))
}

/// List the non-deleted objects of an inventory the user owns, newest first.
pub async fn list(
    metadata: &dyn CatalogStore,
    inventory_id: i64,
    user_id: i64,
) -> CatalogResult<Vec<ObjectRow>> {
    if metadata.get_inventory(inventory_id, user_id).await?.is_none() {
        return Err(CatalogError::Validation(format!(
            "inventory {inventory_id} not found or access denied"
        )));
    }
    Ok(metadata.list_objects(inventory_id, user_id).await?)
}

/// Apply a partial update to an object.
pub async fn update(
    metadata: &dyn CatalogStore,
    object_id: i64,
    user_id: i64,
    update: ObjectUpdate,
) -> CatalogResult<()> {
    if update.is_empty() {
        return Err(CatalogError::Validation("nothing to update".to_string()));
    }
    if update.quantity.is_some_and(|q| q < 0) {
        return Err(CatalogError::Validation(
            "quantity must not be negative".to_string(),
        ));
    }

    let matched = metadata
        .update_object(object_id, user_id, &update, OffsetDateTime::now_utc())
        .await?;
    if !matched {
        return Err(CatalogError::NotFound(format!(
            "object {object_id} not found"
        )));
    }
    Ok(())
}

/// Move an object onto a shelf of its own inventory, or off any shelf.
pub async fn move_to_shelf(
    metadata: &dyn CatalogStore,
    object_id: i64,
    user_id: i64,
    shelf_id: Option<i64>,
) -> CatalogResult<()> {
    let object = get(metadata, object_id, user_id).await?;
    if let Some(shelf_id) = shelf_id {
        check_shelf_in_inventory(metadata, shelf_id, object.inventory_id, user_id).await?;
    }

    let matched = metadata
        .set_object_shelf(object_id, user_id, shelf_id, OffsetDateTime::now_utc())
        .await?;
    if !matched {
        return Err(CatalogError::NotFound(format!(
            "object {object_id} not found"
        )));
    }
    Ok(())
}
