//! File registry: the file-to-entity mapping and primary-file invariant.

use crate::error::CatalogResult;
use larder_core::{FileOwner, StoredFile};
use larder_metadata::CatalogStore;
use larder_metadata::models::FileRow;
use larder_storage::FileStore;
use std::sync::Arc;
use time::OffsetDateTime;

/// Registry pairing file rows with their on-disk counterparts.
///
/// Deletion always follows the disk-then-rows pattern: filenames are fetched
/// and targeted for disk deletion before their rows are removed, and row
/// deletion proceeds even when disk deletion partially fails (disk problems
/// are logged by the store, never raised).
#[derive(Clone)]
pub struct FileRegistry {
    metadata: Arc<dyn CatalogStore>,
    store: Arc<dyn FileStore>,
}

impl FileRegistry {
    /// Create a new registry over the given stores.
    pub fn new(metadata: Arc<dyn CatalogStore>, store: Arc<dyn FileStore>) -> Self {
        Self { metadata, store }
    }

    /// Insert one row per stored file for an owner.
    ///
    /// When `mark_first_primary` is set, exactly the first inserted record is
    /// primary. Inserts are sequential and best-effort: a failure propagates,
    /// but rows already inserted in the same call stay committed.
    pub async fn insert_files(
        &self,
        owner: &FileOwner,
        user_id: i64,
        stored: &[StoredFile],
        mark_first_primary: bool,
    ) -> CatalogResult<Vec<FileRow>> {
        let now = OffsetDateTime::now_utc();
        let mut records = Vec::with_capacity(stored.len());
        for (index, file) in stored.iter().enumerate() {
            let is_primary = mark_first_primary && index == 0;
            let row = self
                .metadata
                .insert_file(owner, &file.server_filename, is_primary, user_id, now)
                .await?;
            records.push(row);
        }
        Ok(records)
    }

    /// List an owner's files, primary first, then by insertion order.
    pub async fn list_files(&self, owner: &FileOwner) -> CatalogResult<Vec<FileRow>> {
        Ok(self.metadata.list_files(owner).await?)
    }

    /// Get the owner's primary file, if any.
    pub async fn get_primary_file(&self, owner: &FileOwner) -> CatalogResult<Option<FileRow>> {
        Ok(self.metadata.get_primary_file(owner).await?)
    }

    /// Replace the owner's primary file.
    ///
    /// Sequential, not transactional: (1) disk-delete the current primary
    /// file(s), (2) flip all existing rows to non-primary, (3) insert the new
    /// row as primary. A crash between the last two steps leaves the owner
    /// with no primary file; callers fall back to a default image.
    pub async fn promote_primary(
        &self,
        owner: &FileOwner,
        user_id: i64,
        new_file: &StoredFile,
    ) -> CatalogResult<FileRow> {
        let old_names: Vec<String> = self
            .metadata
            .list_files(owner)
            .await?
            .into_iter()
            .filter(|f| f.is_primary)
            .map(|f| f.filename)
            .collect();
        let removed = self.store.delete_many(&old_names).await;

        self.metadata.clear_primary(owner).await?;

        let row = self
            .metadata
            .insert_file(
                owner,
                &new_file.server_filename,
                true,
                user_id,
                OffsetDateTime::now_utc(),
            )
            .await?;

        tracing::info!(
            owner = %owner,
            filename = %row.filename,
            old_files_removed = removed,
            "Promoted new primary file"
        );
        Ok(row)
    }

    /// Delete files by row id: disk first, then rows.
    /// Returns the number of rows removed.
    pub async fn delete_by_ids(&self, ids: &[i64]) -> CatalogResult<u64> {
        let names = self.metadata.filenames_by_ids(ids).await?;
        self.store.delete_many(&names).await;
        Ok(self.metadata.delete_files_by_ids(ids).await?)
    }

    /// Delete files by stored filename: disk first, then rows.
    /// Returns the number of rows removed.
    pub async fn delete_by_stored_names(&self, names: &[String]) -> CatalogResult<u64> {
        self.store.delete_many(names).await;
        Ok(self.metadata.delete_files_by_names(names).await?)
    }

    /// Delete every file of one owner: disk first, then rows.
    /// Returns the number of rows removed.
    pub async fn delete_all_for_entity(&self, owner: &FileOwner) -> CatalogResult<u64> {
        let names = self.metadata.filenames_for_owner(owner).await?;
        self.store.delete_many(&names).await;
        let rows = self.metadata.delete_files_for_owner(owner).await?;
        if rows > 0 {
            tracing::debug!(owner = %owner, rows, "Deleted entity files");
        }
        Ok(rows)
    }
}
