//! Physical file storage for Larder.
//!
//! This crate owns on-disk persistence of uploaded files:
//! - Traversal-safe deletion by server-assigned filename
//! - Batch deletion with independent per-file outcomes
//! - Backend: local filesystem upload root

pub mod error;
pub mod filesystem;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use filesystem::FilesystemStore;
pub use traits::FileStore;

use larder_core::config::StorageConfig;
use std::sync::Arc;

/// Create a file store from configuration.
pub async fn from_config(config: &StorageConfig) -> StorageResult<Arc<dyn FileStore>> {
    let store = FilesystemStore::new(&config.upload_dir).await?;
    Ok(Arc::new(store))
}
