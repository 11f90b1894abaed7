//! Inventory repository trait.

use crate::error::MetadataResult;
use crate::models::{InventoryRow, InventoryUpdate, NewInventory};
use async_trait::async_trait;
use time::OffsetDateTime;

/// Repository for inventory rows.
///
/// Read operations exclude soft-deleted rows; the trash repository is the
/// only way to see those.
#[async_trait]
pub trait InventoryRepo: Send + Sync {
    /// Insert a new inventory and return its id.
    async fn create_inventory(
        &self,
        new: &NewInventory,
        created_at: OffsetDateTime,
    ) -> MetadataResult<i64>;

    /// Get a non-deleted inventory owned by the user.
    async fn get_inventory(
        &self,
        inventory_id: i64,
        user_id: i64,
    ) -> MetadataResult<Option<InventoryRow>>;

    /// List the user's non-deleted inventories, newest first.
    async fn list_inventories(&self, user_id: i64) -> MetadataResult<Vec<InventoryRow>>;

    /// Apply a partial update to a non-deleted inventory owned by the user.
    /// Returns false if no row matched.
    async fn update_inventory(
        &self,
        inventory_id: i64,
        user_id: i64,
        update: &InventoryUpdate,
        updated_at: OffsetDateTime,
    ) -> MetadataResult<bool>;

    /// Delete an inventory row outright, regardless of trash state.
    /// Returns false if no row matched. Cascade callers are responsible for
    /// removing children and files first.
    async fn delete_inventory_row(&self, inventory_id: i64, user_id: i64)
    -> MetadataResult<bool>;
}
