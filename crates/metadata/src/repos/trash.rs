//! Trash repository trait for the soft-delete lifecycle.

use crate::error::MetadataResult;
use crate::models::{InventoryRow, ObjectRow};
use async_trait::async_trait;
use time::OffsetDateTime;

/// Repository for soft-delete state on inventories and objects.
///
/// All mutations return false when zero rows matched (absent, wrong owner,
/// or wrong trash state); that outcome is a normal negative result, not a
/// fault.
#[async_trait]
pub trait TrashRepo: Send + Sync {
    /// Mark a non-deleted inventory as deleted, stamping `deleted_at`.
    async fn soft_delete_inventory(
        &self,
        inventory_id: i64,
        user_id: i64,
        deleted_at: OffsetDateTime,
    ) -> MetadataResult<bool>;

    /// Clear the deleted flag and timestamp of a currently-deleted inventory.
    async fn restore_inventory(&self, inventory_id: i64, user_id: i64) -> MetadataResult<bool>;

    /// Mark a non-deleted object as deleted, stamping `deleted_at`.
    async fn soft_delete_object(
        &self,
        object_id: i64,
        user_id: i64,
        deleted_at: OffsetDateTime,
    ) -> MetadataResult<bool>;

    /// Clear the deleted flag and timestamp of a currently-deleted object.
    async fn restore_object(&self, object_id: i64, user_id: i64) -> MetadataResult<bool>;

    /// Get a currently-trashed inventory owned by the user.
    /// This is the trash gate check for permanent deletion.
    async fn get_trashed_inventory(
        &self,
        inventory_id: i64,
        user_id: i64,
    ) -> MetadataResult<Option<InventoryRow>>;

    /// Get a currently-trashed object owned by the user.
    async fn get_trashed_object(
        &self,
        object_id: i64,
        user_id: i64,
    ) -> MetadataResult<Option<ObjectRow>>;

    /// List the user's trashed inventories, most recently trashed first.
    async fn list_trashed_inventories(&self, user_id: i64) -> MetadataResult<Vec<InventoryRow>>;

    /// List the user's trashed objects, most recently trashed first.
    async fn list_trashed_objects(&self, user_id: i64) -> MetadataResult<Vec<ObjectRow>>;

    /// List trashed inventories of all users whose `deleted_at` is older than
    /// the cutoff. Used by the retention purge.
    async fn list_expired_trashed_inventories(
        &self,
        cutoff: OffsetDateTime,
    ) -> MetadataResult<Vec<InventoryRow>>;

    /// List trashed objects of all users whose `deleted_at` is older than the
    /// cutoff.
    async fn list_expired_trashed_objects(
        &self,
        cutoff: OffsetDateTime,
    ) -> MetadataResult<Vec<ObjectRow>>;
}
