//! Core domain types and shared configuration for Larder.
//!
//! This crate defines the canonical data model used across all other crates:
//! - File ownership references (which entity a stored file belongs to)
//! - Trashable entity kinds for the soft-delete lifecycle
//! - Stored-file handles produced by the upload receiver
//! - Application configuration

pub mod config;
pub mod entity;

pub use config::{AppConfig, MetadataConfig, PurgeConfig, StorageConfig};
pub use entity::{FileOwner, FileOwnerKind, StoredFile, TrashKind};
