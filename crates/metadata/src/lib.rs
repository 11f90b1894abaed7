//! Catalog metadata store abstraction and implementation for Larder.
//!
//! This crate provides the control-plane data model:
//! - Inventory, shelf, and object rows with ownership scoping
//! - File rows mapping stored filenames to their owning entities
//! - Soft-delete (trash) state and retention queries
//! - Raw row deletion primitives consumed by the cascade engine

pub mod error;
pub mod models;
pub mod repos;
pub mod store;

pub use error::{MetadataError, MetadataResult};
pub use store::{CatalogStore, SqliteStore};

use larder_core::config::MetadataConfig;
use std::sync::Arc;

/// Create a catalog store from configuration.
pub async fn from_config(config: &MetadataConfig) -> MetadataResult<Arc<dyn CatalogStore>> {
    match config {
        MetadataConfig::Sqlite {
            path,
            busy_timeout_secs,
        } => {
            let store = SqliteStore::new(path, *busy_timeout_secs).await?;
            Ok(Arc::new(store) as Arc<dyn CatalogStore>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::config::MetadataConfig;

    #[tokio::test]
    async fn from_config_sqlite() {
        let temp = tempfile::tempdir().unwrap();
        let db_path = temp.path().join("catalog.db");
        let config = MetadataConfig::Sqlite {
            path: db_path.clone(),
            busy_timeout_secs: None,
        };

        let store = from_config(&config).await.unwrap();
        store.health_check().await.unwrap();
        assert!(db_path.exists());
    }
}
