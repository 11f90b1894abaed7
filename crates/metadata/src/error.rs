//! Metadata store error types.

use thiserror::Error;

/// Metadata store operation errors.
///
/// Zero-rows-matched outcomes are not errors at this layer: repository
/// methods report them as `false`/empty results and the catalog layer decides
/// what a miss means.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for metadata operations.
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;
