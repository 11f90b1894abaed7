//! Local filesystem upload store.

use crate::error::{StorageError, StorageResult};
use crate::traits::FileStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Upload store rooted at a single directory of flat, server-named files.
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a new filesystem store, creating the upload root if needed.
    pub async fn new(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Resolve a stored filename to its absolute path, with path traversal
    /// protection.
    ///
    /// This is an async wrapper around `resolve_name_sync` that uses
    /// `spawn_blocking` so `canonicalize`/`symlink_metadata` don't block the
    /// Tokio runtime.
    async fn resolve_name(&self, name: &str) -> StorageResult<PathBuf> {
        let root = self.root.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || Self::resolve_name_sync(&root, &name))
            .await
            .map_err(|e| {
                StorageError::Io(std::io::Error::other(format!("spawn_blocking failed: {e}")))
            })?
    }

    /// Synchronous name validation with path traversal protection.
    ///
    /// Stored names are flat: any separator or parent-directory sequence is
    /// rejected outright. For names that pass, the resolved path is verified
    /// to still be inside the upload root, which catches symlink-based
    /// escapes.
    fn resolve_name_sync(root: &Path, name: &str) -> StorageResult<PathBuf> {
        if name.is_empty()
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(StorageError::InvalidName(format!(
                "path traversal not allowed: {name}"
            )));
        }

        // A valid stored name is exactly one normal path component.
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(std::path::Component::Normal(_)), None) => {}
            _ => {
                return Err(StorageError::InvalidName(format!(
                    "contains unsafe path component: {name}"
                )));
            }
        }

        let path = root.join(name);

        let root_canonical = root.canonicalize().map_err(|e| {
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to canonicalize upload root: {e}"),
            ))
        })?;

        // For existing entries (or symlinks, even broken ones), canonicalize
        // and verify they don't escape the root.
        match std::fs::symlink_metadata(&path) {
            Ok(meta) => {
                let canonical = path.canonicalize().map_err(|e| {
                    if meta.file_type().is_symlink() {
                        StorageError::InvalidName(format!("symlink target missing or invalid: {name}"))
                    } else {
                        StorageError::Io(std::io::Error::new(
                            e.kind(),
                            format!("failed to canonicalize path: {e}"),
                        ))
                    }
                })?;

                if !canonical.starts_with(&root_canonical) {
                    return Err(StorageError::InvalidName(format!(
                        "resolved path escapes upload root: {name}"
                    )));
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(StorageError::Io(std::io::Error::new(
                    err.kind(),
                    format!("failed to stat path: {err}"),
                )));
            }
        }

        Ok(path)
    }
}

#[async_trait]
impl FileStore for FilesystemStore {
    async fn delete_by_name(&self, name: &str) -> bool {
        let path = match self.resolve_name(name).await {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Refusing to delete upload file");
                return false;
            }
        };

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(name = %name, "Deleted upload file");
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(name = %name, "Upload file already absent");
                false
            }
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Failed to delete upload file");
                false
            }
        }
    }

    async fn delete_many(&self, names: &[String]) -> usize {
        let mut removed = 0;
        for name in names {
            if self.delete_by_name(name).await {
                removed += 1;
            }
        }
        removed
    }

    async fn health_check(&self) -> StorageResult<()> {
        let metadata = fs::metadata(&self.root).await.map_err(|e| {
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!("upload root not accessible: {e}"),
            ))
        })?;

        if !metadata.is_dir() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                format!("upload root is not a directory: {:?}", self.root),
            )));
        }

        Ok(())
    }
}
