//! Database models mapping to the catalog schema.

use sqlx::FromRow;
use time::OffsetDateTime;

// =============================================================================
// Inventories
// =============================================================================

/// Inventory record: the root of a containment tree.
#[derive(Debug, Clone, FromRow)]
pub struct InventoryRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub user_id: i64,
    pub deleted: bool,
    pub deleted_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Fields for creating an inventory.
#[derive(Debug, Clone)]
pub struct NewInventory {
    pub name: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub user_id: i64,
}

/// Partial update for an inventory. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct InventoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon_name: Option<String>,
}

impl InventoryUpdate {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.icon_name.is_none()
    }
}

// =============================================================================
// Shelves
// =============================================================================

/// Shelf record. Shelves have no soft-delete state of their own.
#[derive(Debug, Clone, FromRow)]
pub struct ShelfRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub inventory_id: i64,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Fields for creating a shelf.
#[derive(Debug, Clone)]
pub struct NewShelf {
    pub name: String,
    pub description: Option<String>,
    pub inventory_id: i64,
    pub user_id: i64,
}

/// Partial update for a shelf.
#[derive(Debug, Clone, Default)]
pub struct ShelfUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ShelfUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

// =============================================================================
// Objects
// =============================================================================

/// Object record. `shelf_id` is nullable: an object may be unshelved while
/// still belonging to an inventory.
#[derive(Debug, Clone, FromRow)]
pub struct ObjectRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub barcode: Option<String>,
    pub inventory_id: i64,
    pub shelf_id: Option<i64>,
    pub user_id: i64,
    pub deleted: bool,
    pub deleted_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Fields for creating an object.
#[derive(Debug, Clone)]
pub struct NewObject {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub barcode: Option<String>,
    pub inventory_id: i64,
    pub shelf_id: Option<i64>,
    pub user_id: i64,
}

/// Partial update for an object.
#[derive(Debug, Clone, Default)]
pub struct ObjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub barcode: Option<String>,
}

impl ObjectUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.barcode.is_none()
    }
}

// =============================================================================
// Files
// =============================================================================

/// File record linking a stored filename to its owning entity.
///
/// `entity_type` holds a `FileOwnerKind` wire string; at most one row per
/// owner may have `is_primary = true`.
#[derive(Debug, Clone, FromRow)]
pub struct FileRow {
    pub id: i64,
    pub entity_id: i64,
    pub entity_type: String,
    pub filename: String,
    pub is_primary: bool,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
