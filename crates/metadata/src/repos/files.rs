//! File repository trait: the file-to-entity mapping.

use crate::error::MetadataResult;
use crate::models::FileRow;
use async_trait::async_trait;
use larder_core::FileOwner;
use time::OffsetDateTime;

/// Repository for file rows.
///
/// Disk deletion is not this trait's concern; the registry layer pairs these
/// row operations with the file store so filenames are always fetched before
/// their rows disappear.
#[async_trait]
pub trait FileRepo: Send + Sync {
    /// Insert one file row for an owner and return the stored record.
    async fn insert_file(
        &self,
        owner: &FileOwner,
        filename: &str,
        is_primary: bool,
        user_id: i64,
        created_at: OffsetDateTime,
    ) -> MetadataResult<FileRow>;

    /// List an owner's files, primary first, then by insertion order
    /// (ascending id). Callers rely on this ordering to pick thumbnails.
    async fn list_files(&self, owner: &FileOwner) -> MetadataResult<Vec<FileRow>>;

    /// Get the primary file for an owner, if any.
    async fn get_primary_file(&self, owner: &FileOwner) -> MetadataResult<Option<FileRow>>;

    /// Flip every file row of an owner to non-primary.
    /// Returns the number of rows changed.
    async fn clear_primary(&self, owner: &FileOwner) -> MetadataResult<u64>;

    /// Look up the stored filenames for a set of file ids.
    async fn filenames_by_ids(&self, ids: &[i64]) -> MetadataResult<Vec<String>>;

    /// Look up the stored filenames for an owner.
    async fn filenames_for_owner(&self, owner: &FileOwner) -> MetadataResult<Vec<String>>;

    /// Delete file rows by id. Returns the number of rows removed.
    async fn delete_files_by_ids(&self, ids: &[i64]) -> MetadataResult<u64>;

    /// Delete file rows by stored filename. Returns the number of rows
    /// removed.
    async fn delete_files_by_names(&self, names: &[String]) -> MetadataResult<u64>;

    /// Delete every file row of an owner. Returns the number of rows removed.
    async fn delete_files_for_owner(&self, owner: &FileOwner) -> MetadataResult<u64>;
}
