//! Shelf repository trait.

use crate::error::MetadataResult;
use crate::models::{NewShelf, ShelfRow, ShelfUpdate};
use async_trait::async_trait;
use time::OffsetDateTime;

/// Repository for shelf rows.
#[async_trait]
pub trait ShelfRepo: Send + Sync {
    /// Insert a new shelf and return its id.
    async fn create_shelf(&self, new: &NewShelf, created_at: OffsetDateTime)
    -> MetadataResult<i64>;

    /// Get a shelf owned by the user.
    async fn get_shelf(&self, shelf_id: i64, user_id: i64) -> MetadataResult<Option<ShelfRow>>;

    /// List the shelves of one inventory, newest first.
    async fn list_shelves(&self, inventory_id: i64, user_id: i64)
    -> MetadataResult<Vec<ShelfRow>>;

    /// Apply a partial update to a shelf owned by the user.
    /// Returns false if no row matched.
    async fn update_shelf(
        &self,
        shelf_id: i64,
        user_id: i64,
        update: &ShelfUpdate,
        updated_at: OffsetDateTime,
    ) -> MetadataResult<bool>;

    /// Delete a shelf row. Returns false if no row matched. The cascade
    /// engine decides beforehand what happens to the shelf's objects.
    async fn delete_shelf_row(&self, shelf_id: i64, user_id: i64) -> MetadataResult<bool>;
}
