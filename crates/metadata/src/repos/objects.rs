//! Object repository trait.

use crate::error::MetadataResult;
use crate::models::{NewObject, ObjectRow, ObjectUpdate};
use async_trait::async_trait;
use time::OffsetDateTime;

/// Repository for object rows.
///
/// The `list_*_for_*` enumeration methods used by the cascade engine include
/// soft-deleted rows: a hard deletion of a shelf or inventory takes trashed
/// descendants with it. Normal read paths (`get_object`, `list_objects`)
/// exclude them.
#[async_trait]
pub trait ObjectRepo: Send + Sync {
    /// Insert a new object and return its id.
    async fn create_object(
        &self,
        new: &NewObject,
        created_at: OffsetDateTime,
    ) -> MetadataResult<i64>;

    /// Get a non-deleted object owned by the user.
    async fn get_object(&self, object_id: i64, user_id: i64)
    -> MetadataResult<Option<ObjectRow>>;

    /// List the non-deleted objects of one inventory, newest first.
    async fn list_objects(&self, inventory_id: i64, user_id: i64)
    -> MetadataResult<Vec<ObjectRow>>;

    /// Enumerate every object on a shelf, trashed or not.
    async fn list_objects_for_shelf(
        &self,
        shelf_id: i64,
        user_id: i64,
    ) -> MetadataResult<Vec<ObjectRow>>;

    /// Enumerate every object under an inventory, trashed or not, shelved or
    /// not.
    async fn list_all_objects_for_inventory(
        &self,
        inventory_id: i64,
        user_id: i64,
    ) -> MetadataResult<Vec<ObjectRow>>;

    /// Apply a partial update to a non-deleted object owned by the user.
    /// Returns false if no row matched.
    async fn update_object(
        &self,
        object_id: i64,
        user_id: i64,
        update: &ObjectUpdate,
        updated_at: OffsetDateTime,
    ) -> MetadataResult<bool>;

    /// Move an object to a shelf (or off any shelf with `None`).
    /// Returns false if no row matched.
    async fn set_object_shelf(
        &self,
        object_id: i64,
        user_id: i64,
        shelf_id: Option<i64>,
        updated_at: OffsetDateTime,
    ) -> MetadataResult<bool>;

    /// Clear the shelf reference of every object on a shelf, leaving the
    /// objects in place. Returns the number of objects detached.
    async fn detach_objects_from_shelf(
        &self,
        shelf_id: i64,
        user_id: i64,
        updated_at: OffsetDateTime,
    ) -> MetadataResult<u64>;

    /// Delete an object row outright, regardless of trash state.
    /// Returns false if no row matched. Callers remove the object's files
    /// first.
    async fn delete_object_row(&self, object_id: i64) -> MetadataResult<bool>;
}
