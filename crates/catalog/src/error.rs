//! Catalog error types.

use larder_metadata::MetadataError;

/// Catalog operation errors.
///
/// Disk-deletion problems never appear here: the file store logs them and
/// reports not-removed, so row deletion is never blocked by disk state.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Target row absent, wrong owner, or wrong trash state for the
    /// requested operation. A normal negative result, not a fault.
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing required field or a cross-entity relationship violation.
    /// Raised before any mutation is performed.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

impl CatalogError {
    /// Whether this error is the not-found negative result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
