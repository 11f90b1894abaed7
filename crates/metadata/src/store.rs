//! Catalog store trait and SQLite implementation.

use crate::error::MetadataResult;
use crate::repos::{FileRepo, InventoryRepo, ObjectRepo, ShelfRepo, TrashRepo};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Combined catalog store trait.
#[async_trait]
pub trait CatalogStore:
    InventoryRepo + ShelfRepo + ObjectRepo + FileRepo + TrashRepo + Send + Sync
{
    /// Apply the database schema.
    async fn migrate(&self) -> MetadataResult<()>;

    /// Check database connectivity and health.
    async fn health_check(&self) -> MetadataResult<()>;
}

/// SQLite-based catalog store.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Create a new SQLite store and apply the schema.
    pub async fn new(
        path: impl AsRef<Path>,
        busy_timeout_secs: Option<u64>,
    ) -> MetadataResult<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .foreign_keys(true)
            // Prevent transient "database is locked" errors under concurrent access.
            .busy_timeout(Duration::from_secs(busy_timeout_secs.unwrap_or(5)));

        let pool = SqlitePoolOptions::new()
            // SQLite permits limited write concurrency; a single connection avoids
            // persistent "database is locked" failures under scheduler/request overlap.
            .max_connections(1)
            .connect_with(opts)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        tracing::debug!(path = %path.display(), "Opened SQLite catalog store");
        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for SqliteStore {
    async fn migrate(&self) -> MetadataResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    async fn health_check(&self) -> MetadataResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

// Implement the repository traits for SqliteStore
mod sqlite_impl {
    use super::*;
    use crate::models::*;
    use larder_core::FileOwner;
    use time::OffsetDateTime;

    #[async_trait]
    impl InventoryRepo for SqliteStore {
        async fn create_inventory(
            &self,
            new: &NewInventory,
            created_at: OffsetDateTime,
        ) -> MetadataResult<i64> {
            let result = sqlx::query(
                r#"
                INSERT INTO inventories (name, description, icon_name, user_id, deleted, deleted_at, created_at, updated_at)
                VALUES (?, ?, ?, ?, 0, NULL, ?, ?)
                "#,
            )
            .bind(&new.name)
            .bind(&new.description)
            .bind(&new.icon_name)
            .bind(new.user_id)
            .bind(created_at)
            .bind(created_at)
            .execute(&self.pool)
            .await?;
            Ok(result.last_insert_rowid())
        }

        async fn get_inventory(
            &self,
            inventory_id: i64,
            user_id: i64,
        ) -> MetadataResult<Option<InventoryRow>> {
            let row = sqlx::query_as::<_, InventoryRow>(
                "SELECT * FROM inventories WHERE id = ? AND user_id = ? AND deleted = 0",
            )
            .bind(inventory_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
            Ok(row)
        }

        async fn list_inventories(&self, user_id: i64) -> MetadataResult<Vec<InventoryRow>> {
            let rows = sqlx::query_as::<_, InventoryRow>(
                "SELECT * FROM inventories WHERE user_id = ? AND deleted = 0 ORDER BY id DESC",
            )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn update_inventory(
            &self,
            inventory_id: i64,
            user_id: i64,
            update: &InventoryUpdate,
            updated_at: OffsetDateTime,
        ) -> MetadataResult<bool> {
            // Absent fields keep their stored value via COALESCE.
            let result = sqlx::query(
                r#"
                UPDATE inventories
                SET name = COALESCE(?, name),
                    description = COALESCE(?, description),
                    icon_name = COALESCE(?, icon_name),
                    updated_at = ?
                WHERE id = ? AND user_id = ? AND deleted = 0
                "#,
            )
            .bind(&update.name)
            .bind(&update.description)
            .bind(&update.icon_name)
            .bind(updated_at)
            .bind(inventory_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        }

        async fn delete_inventory_row(
            &self,
            inventory_id: i64,
            user_id: i64,
        ) -> MetadataResult<bool> {
            let result = sqlx::query("DELETE FROM inventories WHERE id = ? AND user_id = ?")
                .bind(inventory_id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;
            Ok(result.rows_affected() > 0)
        }
    }

    #[async_trait]
    impl ShelfRepo for SqliteStore {
        async fn create_shelf(
            &self,
            new: &NewShelf,
            created_at: OffsetDateTime,
        ) -> MetadataResult<i64> {
            let result = sqlx::query(
                r#"
                INSERT INTO shelves (name, description, inventory_id, user_id, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&new.name)
            .bind(&new.description)
            .bind(new.inventory_id)
            .bind(new.user_id)
            .bind(created_at)
            .bind(created_at)
            .execute(&self.pool)
            .await?;
            Ok(result.last_insert_rowid())
        }

        async fn get_shelf(
            &self,
            shelf_id: i64,
            user_id: i64,
        ) -> MetadataResult<Option<ShelfRow>> {
            let row =
                sqlx::query_as::<_, ShelfRow>("SELECT * FROM shelves WHERE id = ? AND user_id = ?")
                    .bind(shelf_id)
                    .bind(user_id)
                    .fetch_optional(&self.pool)
                    .await?;
            Ok(row)
        }

        async fn list_shelves(
            &self,
            inventory_id: i64,
            user_id: i64,
        ) -> MetadataResult<Vec<ShelfRow>> {
            let rows = sqlx::query_as::<_, ShelfRow>(
                "SELECT * FROM shelves WHERE user_id = ? AND inventory_id = ? ORDER BY id DESC",
            )
            .bind(user_id)
            .bind(inventory_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn update_shelf(
            &self,
            shelf_id: i64,
            user_id: i64,
            update: &ShelfUpdate,
            updated_at: OffsetDateTime,
        ) -> MetadataResult<bool> {
            let result = sqlx::query(
                r#"
                UPDATE shelves
                SET name = COALESCE(?, name),
                    description = COALESCE(?, description),
                    updated_at = ?
                WHERE id = ? AND user_id = ?
                "#,
            )
            .bind(&update.name)
            .bind(&update.description)
            .bind(updated_at)
            .bind(shelf_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        }

        async fn delete_shelf_row(&self, shelf_id: i64, user_id: i64) -> MetadataResult<bool> {
            let result = sqlx::query("DELETE FROM shelves WHERE id = ? AND user_id = ?")
                .bind(shelf_id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;
            Ok(result.rows_affected() > 0)
        }
    }

    #[async_trait]
    impl ObjectRepo for SqliteStore {
        async fn create_object(
            &self,
            new: &NewObject,
            created_at: OffsetDateTime,
        ) -> MetadataResult<i64> {
            let result = sqlx::query(
                r#"
                INSERT INTO objects (name, description, quantity, barcode, inventory_id, shelf_id, user_id, deleted, deleted_at, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, 0, NULL, ?, ?)
                "#,
            )
            .bind(&new.name)
            .bind(&new.description)
            .bind(new.quantity)
            .bind(&new.barcode)
            .bind(new.inventory_id)
            .bind(new.shelf_id)
            .bind(new.user_id)
            .bind(created_at)
            .bind(created_at)
            .execute(&self.pool)
            .await?;
            Ok(result.last_insert_rowid())
        }

        async fn get_object(
            &self,
            object_id: i64,
            user_id: i64,
        ) -> MetadataResult<Option<ObjectRow>> {
            let row = sqlx::query_as::<_, ObjectRow>(
                "SELECT * FROM objects WHERE id = ? AND user_id = ? AND deleted = 0",
            )
            .bind(object_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
            Ok(row)
        }

        async fn list_objects(
            &self,
            inventory_id: i64,
            user_id: i64,
        ) -> MetadataResult<Vec<ObjectRow>> {
            let rows = sqlx::query_as::<_, ObjectRow>(
                "SELECT * FROM objects WHERE user_id = ? AND inventory_id = ? AND deleted = 0 ORDER BY id DESC",
            )
            .bind(user_id)
            .bind(inventory_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn list_objects_for_shelf(
            &self,
            shelf_id: i64,
            user_id: i64,
        ) -> MetadataResult<Vec<ObjectRow>> {
            let rows = sqlx::query_as::<_, ObjectRow>(
                "SELECT * FROM objects WHERE shelf_id = ? AND user_id = ? ORDER BY id",
            )
            .bind(shelf_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn list_all_objects_for_inventory(
            &self,
            inventory_id: i64,
            user_id: i64,
        ) -> MetadataResult<Vec<ObjectRow>> {
            let rows = sqlx::query_as::<_, ObjectRow>(
                "SELECT * FROM objects WHERE inventory_id = ? AND user_id = ? ORDER BY id",
            )
            .bind(inventory_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn update_object(
            &self,
            object_id: i64,
            user_id: i64,
            update: &ObjectUpdate,
            updated_at: OffsetDateTime,
        ) -> MetadataResult<bool> {
            let result = sqlx::query(
                r#"
                UPDATE objects
                SET name = COALESCE(?, name),
                    description = COALESCE(?, description),
                    quantity = COALESCE(?, quantity),
                    barcode = COALESCE(?, barcode),
                    updated_at = ?
                WHERE id = ? AND user_id = ? AND deleted = 0
                "#,
            )
            .bind(&update.name)
            .bind(&update.description)
            .bind(update.quantity)
            .bind(&update.barcode)
            .bind(updated_at)
            .bind(object_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        }

        async fn set_object_shelf(
            &self,
            object_id: i64,
            user_id: i64,
            shelf_id: Option<i64>,
            updated_at: OffsetDateTime,
        ) -> MetadataResult<bool> {
            let result = sqlx::query(
                "UPDATE objects SET shelf_id = ?, updated_at = ? WHERE id = ? AND user_id = ? AND deleted = 0",
            )
            .bind(shelf_id)
            .bind(updated_at)
            .bind(object_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        }

        async fn detach_objects_from_shelf(
            &self,
            shelf_id: i64,
            user_id: i64,
            updated_at: OffsetDateTime,
        ) -> MetadataResult<u64> {
            let result = sqlx::query(
                "UPDATE objects SET shelf_id = NULL, updated_at = ? WHERE shelf_id = ? AND user_id = ?",
            )
            .bind(updated_at)
            .bind(shelf_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected())
        }

        async fn delete_object_row(&self, object_id: i64) -> MetadataResult<bool> {
            let result = sqlx::query("DELETE FROM objects WHERE id = ?")
                .bind(object_id)
                .execute(&self.pool)
                .await?;
            Ok(result.rows_affected() > 0)
        }
    }

    #[async_trait]
    impl FileRepo for SqliteStore {
        async fn insert_file(
            &self,
            owner: &FileOwner,
            filename: &str,
            is_primary: bool,
            user_id: i64,
            created_at: OffsetDateTime,
        ) -> MetadataResult<FileRow> {
            let result = sqlx::query(
                r#"
                INSERT INTO files (entity_id, entity_type, filename, is_primary, user_id, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(owner.id)
            .bind(owner.kind.as_str())
            .bind(filename)
            .bind(is_primary)
            .bind(user_id)
            .bind(created_at)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

            Ok(FileRow {
                id: result.last_insert_rowid(),
                entity_id: owner.id,
                entity_type: owner.kind.as_str().to_string(),
                filename: filename.to_string(),
                is_primary,
                user_id,
                created_at,
                updated_at: created_at,
            })
        }

        async fn list_files(&self, owner: &FileOwner) -> MetadataResult<Vec<FileRow>> {
            let rows = sqlx::query_as::<_, FileRow>(
                "SELECT * FROM files WHERE entity_id = ? AND entity_type = ? ORDER BY is_primary DESC, id ASC",
            )
            .bind(owner.id)
            .bind(owner.kind.as_str())
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn get_primary_file(&self, owner: &FileOwner) -> MetadataResult<Option<FileRow>> {
            let row = sqlx::query_as::<_, FileRow>(
                "SELECT * FROM files WHERE entity_id = ? AND entity_type = ? AND is_primary = 1 LIMIT 1",
            )
            .bind(owner.id)
            .bind(owner.kind.as_str())
            .fetch_optional(&self.pool)
            .await?;
            Ok(row)
        }

        async fn clear_primary(&self, owner: &FileOwner) -> MetadataResult<u64> {
            let result = sqlx::query(
                "UPDATE files SET is_primary = 0 WHERE entity_id = ? AND entity_type = ?",
            )
            .bind(owner.id)
            .bind(owner.kind.as_str())
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected())
        }

        async fn filenames_by_ids(&self, ids: &[i64]) -> MetadataResult<Vec<String>> {
            if ids.is_empty() {
                return Ok(Vec::new());
            }

            let placeholders: Vec<&str> = ids.iter().map(|_| "?").collect();
            let query = format!(
                "SELECT filename FROM files WHERE id IN ({})",
                placeholders.join(", ")
            );

            let mut query_builder = sqlx::query_as::<_, (String,)>(&query);
            for id in ids {
                query_builder = query_builder.bind(id);
            }

            let rows = query_builder.fetch_all(&self.pool).await?;
            Ok(rows.into_iter().map(|(name,)| name).collect())
        }

        async fn filenames_for_owner(&self, owner: &FileOwner) -> MetadataResult<Vec<String>> {
            let rows: Vec<(String,)> = sqlx::query_as(
                "SELECT filename FROM files WHERE entity_id = ? AND entity_type = ?",
            )
            .bind(owner.id)
            .bind(owner.kind.as_str())
            .fetch_all(&self.pool)
            .await?;
            Ok(rows.into_iter().map(|(name,)| name).collect())
        }

        async fn delete_files_by_ids(&self, ids: &[i64]) -> MetadataResult<u64> {
            if ids.is_empty() {
                return Ok(0);
            }

            let placeholders: Vec<&str> = ids.iter().map(|_| "?").collect();
            let query = format!(
                "DELETE FROM files WHERE id IN ({})",
                placeholders.join(", ")
            );

            let mut query_builder = sqlx::query(&query);
            for id in ids {
                query_builder = query_builder.bind(id);
            }

            let result = query_builder.execute(&self.pool).await?;
            Ok(result.rows_affected())
        }

        async fn delete_files_by_names(&self, names: &[String]) -> MetadataResult<u64> {
            if names.is_empty() {
                return Ok(0);
            }

            let placeholders: Vec<&str> = names.iter().map(|_| "?").collect();
            let query = format!(
                "DELETE FROM files WHERE filename IN ({})",
                placeholders.join(", ")
            );

            let mut query_builder = sqlx::query(&query);
            for name in names {
                query_builder = query_builder.bind(name);
            }

            let result = query_builder.execute(&self.pool).await?;
            Ok(result.rows_affected())
        }

        async fn delete_files_for_owner(&self, owner: &FileOwner) -> MetadataResult<u64> {
            let result =
                sqlx::query("DELETE FROM files WHERE entity_id = ? AND entity_type = ?")
                    .bind(owner.id)
                    .bind(owner.kind.as_str())
                    .execute(&self.pool)
                    .await?;
            Ok(result.rows_affected())
        }
    }

    #[async_trait]
    impl TrashRepo for SqliteStore {
        async fn soft_delete_inventory(
            &self,
            inventory_id: i64,
            user_id: i64,
            deleted_at: OffsetDateTime,
        ) -> MetadataResult<bool> {
            let result = sqlx::query(
                "UPDATE inventories SET deleted = 1, deleted_at = ? WHERE id = ? AND user_id = ? AND deleted = 0",
            )
            .bind(deleted_at)
            .bind(inventory_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        }

        async fn restore_inventory(
            &self,
            inventory_id: i64,
            user_id: i64,
        ) -> MetadataResult<bool> {
            let result = sqlx::query(
                "UPDATE inventories SET deleted = 0, deleted_at = NULL WHERE id = ? AND user_id = ? AND deleted = 1",
            )
            .bind(inventory_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        }

        async fn soft_delete_object(
            &self,
            object_id: i64,
            user_id: i64,
            deleted_at: OffsetDateTime,
        ) -> MetadataResult<bool> {
            let result = sqlx::query(
                "UPDATE objects SET deleted = 1, deleted_at = ? WHERE id = ? AND user_id = ? AND deleted = 0",
            )
            .bind(deleted_at)
            .bind(object_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        }

        async fn restore_object(&self, object_id: i64, user_id: i64) -> MetadataResult<bool> {
            let result = sqlx::query(
                "UPDATE objects SET deleted = 0, deleted_at = NULL WHERE id = ? AND user_id = ? AND deleted = 1",
            )
            .bind(object_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        }

        async fn get_trashed_inventory(
            &self,
            inventory_id: i64,
            user_id: i64,
        ) -> MetadataResult<Option<InventoryRow>> {
            let row = sqlx::query_as::<_, InventoryRow>(
                "SELECT * FROM inventories WHERE id = ? AND user_id = ? AND deleted = 1",
            )
            .bind(inventory_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
            Ok(row)
        }

        async fn get_trashed_object(
            &self,
            object_id: i64,
            user_id: i64,
        ) -> MetadataResult<Option<ObjectRow>> {
            let row = sqlx::query_as::<_, ObjectRow>(
                "SELECT * FROM objects WHERE id = ? AND user_id = ? AND deleted = 1",
            )
            .bind(object_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
            Ok(row)
        }

        async fn list_trashed_inventories(
            &self,
            user_id: i64,
        ) -> MetadataResult<Vec<InventoryRow>> {
            let rows = sqlx::query_as::<_, InventoryRow>(
                "SELECT * FROM inventories WHERE user_id = ? AND deleted = 1 ORDER BY deleted_at DESC, id DESC",
            )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn list_trashed_objects(&self, user_id: i64) -> MetadataResult<Vec<ObjectRow>> {
            let rows = sqlx::query_as::<_, ObjectRow>(
                "SELECT * FROM objects WHERE user_id = ? AND deleted = 1 ORDER BY deleted_at DESC, id DESC",
            )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn list_expired_trashed_inventories(
            &self,
            cutoff: OffsetDateTime,
        ) -> MetadataResult<Vec<InventoryRow>> {
            let rows = sqlx::query_as::<_, InventoryRow>(
                "SELECT * FROM inventories WHERE deleted = 1 AND deleted_at < ? ORDER BY id",
            )
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }

        async fn list_expired_trashed_objects(
            &self,
            cutoff: OffsetDateTime,
        ) -> MetadataResult<Vec<ObjectRow>> {
            let rows = sqlx::query_as::<_, ObjectRow>(
                "SELECT * FROM objects WHERE deleted = 1 AND deleted_at < ? ORDER BY id",
            )
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        }
    }
}

const SCHEMA_SQL: &str = r#"
-- Inventories: roots of the containment tree
CREATE TABLE IF NOT EXISTS inventories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    icon_name TEXT,
    user_id INTEGER NOT NULL,
    deleted INTEGER NOT NULL DEFAULT 0,
    deleted_at TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_inventories_user ON inventories(user_id, deleted);
CREATE INDEX IF NOT EXISTS idx_inventories_trash ON inventories(deleted, deleted_at);

-- Shelves: no soft-delete state of their own, deletion is immediate/cascading
CREATE TABLE IF NOT EXISTS shelves (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    inventory_id INTEGER NOT NULL,
    user_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_shelves_inventory ON shelves(user_id, inventory_id);

-- Objects: shelf_id is nullable, an object may be unshelved
CREATE TABLE IF NOT EXISTS objects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    quantity INTEGER NOT NULL DEFAULT 0,
    barcode TEXT,
    inventory_id INTEGER NOT NULL,
    shelf_id INTEGER,
    user_id INTEGER NOT NULL,
    deleted INTEGER NOT NULL DEFAULT 0,
    deleted_at TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_objects_inventory ON objects(user_id, inventory_id, deleted);
CREATE INDEX IF NOT EXISTS idx_objects_shelf ON objects(shelf_id);
CREATE INDEX IF NOT EXISTS idx_objects_trash ON objects(deleted, deleted_at);

-- Files: polymorphic owner reference (entity_type + entity_id)
CREATE TABLE IF NOT EXISTS files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    entity_id INTEGER NOT NULL,
    entity_type TEXT NOT NULL,
    filename TEXT NOT NULL,
    is_primary INTEGER NOT NULL DEFAULT 0,
    user_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_files_owner ON files(entity_type, entity_id, is_primary);
CREATE INDEX IF NOT EXISTS idx_files_name ON files(filename);
"#;
