//! Entity lifecycle and cascade-consistency engine for Larder.
//!
//! This crate provides the catalog control plane:
//! - File registry with the primary-file invariant
//! - Cascading hard deletion across inventories, shelves, and objects
//! - Trash lifecycle (soft delete, restore, permanent deletion)
//! - Time-based retention purge of long-deleted rows
//! - Entity CRUD services with fail-fast validation

pub mod cascade;
pub mod error;
pub mod purge;
pub mod registry;
pub mod services;
pub mod state;
pub mod trash;

pub use cascade::{CascadeEngine, ShelfDeleteMode, TrashPurgeSummary};
pub use error::{CatalogError, CatalogResult};
pub use purge::{PurgeStats, run_purge_pass, spawn_purge_scheduler};
pub use registry::FileRegistry;
pub use state::AppState;
pub use trash::{TrashLifecycle, TrashListing};
