//! Shared test harness: a real SQLite store and upload directory in a
//! tempdir, wired the way the daemon wires them.

#![allow(dead_code)]

use larder_catalog::{AppState, CascadeEngine, FileRegistry, TrashLifecycle, services};
use larder_core::StoredFile;
use larder_core::config::{AppConfig, MetadataConfig};
use larder_metadata::CatalogStore;
use larder_metadata::SqliteStore;
use larder_metadata::models::{NewInventory, NewObject, NewShelf};
use larder_storage::{FileStore, FilesystemStore};
use std::path::PathBuf;
use std::sync::Arc;

pub const USER: i64 = 1;
pub const OTHER_USER: i64 = 2;

pub struct TestCatalog {
    pub temp: tempfile::TempDir,
    pub state: AppState,
}

impl TestCatalog {
    pub async fn new() -> Self {
        let temp = tempfile::tempdir().expect("Failed to create tempdir");
        let upload_dir = temp.path().join("uploads");
        let db_path = temp.path().join("catalog.db");

        let storage: Arc<dyn FileStore> = Arc::new(
            FilesystemStore::new(&upload_dir)
                .await
                .expect("Failed to create upload store"),
        );
        let metadata: Arc<dyn CatalogStore> = Arc::new(
            SqliteStore::new(&db_path, None)
                .await
                .expect("Failed to open metadata store"),
        );

        let mut config = AppConfig::for_testing();
        config.storage.upload_dir = upload_dir;
        config.metadata = MetadataConfig::Sqlite {
            path: db_path,
            busy_timeout_secs: None,
        };

        let state = AppState::new(config, storage, metadata);
        Self { temp, state }
    }

    pub fn metadata(&self) -> Arc<dyn CatalogStore> {
        self.state.metadata.clone()
    }

    pub fn registry(&self) -> FileRegistry {
        self.state.file_registry()
    }

    pub fn engine(&self) -> CascadeEngine {
        self.state.cascade_engine()
    }

    pub fn trash(&self) -> TrashLifecycle {
        self.state.trash()
    }

    pub fn upload_path(&self, name: &str) -> PathBuf {
        self.state.config.storage.upload_dir.join(name)
    }

    /// Put a file on disk the way the upload receiver would, returning the
    /// handle the registry expects.
    pub fn stage_upload(&self, name: &str) -> StoredFile {
        std::fs::write(self.upload_path(name), b"image-bytes").expect("Failed to stage upload");
        StoredFile::new(name, format!("original-{name}"))
    }

    pub async fn create_inventory(&self, name: &str) -> i64 {
        services::inventories::create(
            &*self.state.metadata,
            NewInventory {
                name: name.to_string(),
                description: None,
                icon_name: None,
                user_id: USER,
            },
        )
        .await
        .expect("Failed to create inventory")
    }

    pub async fn create_shelf(&self, inventory_id: i64, name: &str) -> i64 {
        services::shelves::create(
            &*self.state.metadata,
            NewShelf {
                name: name.to_string(),
                description: None,
                inventory_id,
                user_id: USER,
            },
        )
        .await
        .expect("Failed to create shelf")
    }

    pub async fn create_object(&self, inventory_id: i64, shelf_id: Option<i64>, name: &str) -> i64 {
        services::objects::create(
            &*self.state.metadata,
            NewObject {
                name: name.to_string(),
                description: None,
                quantity: 1,
                barcode: None,
                inventory_id,
                shelf_id,
                user_id: USER,
            },
        )
        .await
        .expect("Failed to create object")
    }
}
