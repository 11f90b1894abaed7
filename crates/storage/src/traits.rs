//! File store trait.

use crate::error::StorageResult;
use async_trait::async_trait;

/// Physical store for uploaded files.
///
/// Deletion never raises: a filename that cannot be deleted (traversal
/// attempt, I/O failure, already absent) is logged and reported as
/// not-removed. Row deletion must never be blocked by disk state, so disk
/// problems surface as warnings, not errors.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Delete a single stored file by its server-assigned name.
    ///
    /// Returns `true` only if a file existed and was removed. Returns `false`
    /// for absent files (deletion is idempotent), for names that fail the
    /// path-safety checks, and for I/O failures. Never raises.
    async fn delete_by_name(&self, name: &str) -> bool;

    /// Delete many stored files, independently; one failure does not abort
    /// the rest. Returns the number of files actually removed.
    async fn delete_many(&self, names: &[String]) -> usize;

    /// Check that the backing store is accessible.
    async fn health_check(&self) -> StorageResult<()>;
}
