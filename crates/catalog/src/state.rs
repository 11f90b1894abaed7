//! Application state shared across the service layer and the daemon.

use crate::cascade::CascadeEngine;
use crate::registry::FileRegistry;
use crate::trash::TrashLifecycle;
use larder_core::config::AppConfig;
use larder_metadata::CatalogStore;
use larder_storage::FileStore;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Physical upload-file store.
    pub storage: Arc<dyn FileStore>,
    /// Catalog metadata store.
    pub metadata: Arc<dyn CatalogStore>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Panics
    ///
    /// Panics if the purge configuration is invalid; a daemon with a broken
    /// retention setup must not start.
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn FileStore>,
        metadata: Arc<dyn CatalogStore>,
    ) -> Self {
        if let Err(error) = config.purge.validate() {
            panic!("Invalid purge configuration: {error}");
        }

        Self {
            config: Arc::new(config),
            storage,
            metadata,
        }
    }

    /// File registry over this state's stores.
    pub fn file_registry(&self) -> FileRegistry {
        FileRegistry::new(self.metadata.clone(), self.storage.clone())
    }

    /// Cascade engine over this state's stores.
    pub fn cascade_engine(&self) -> CascadeEngine {
        CascadeEngine::new(self.metadata.clone(), self.file_registry())
    }

    /// Trash lifecycle over this state's stores.
    pub fn trash(&self) -> TrashLifecycle {
        TrashLifecycle::new(self.metadata.clone(), self.cascade_engine())
    }
}
