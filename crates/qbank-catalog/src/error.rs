//! Catalog error types.

use qbank_core::CoreError;
use qbank_lake::LakeError;
use thiserror::Error;

/// Errors from catalog queries and subject switching.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested subject position is past the end of the index.
    #[error("Subject index {index} out of range (index has {len} subjects)")]
    SubjectOutOfRange { index: usize, len: usize },

    /// The subject is indexed but its table could not be loaded.
    #[error("Failed to load subject {subject}: {source}")]
    SubjectLoad {
        subject: String,
        #[source]
        source: LakeError,
    },

    /// A lookup failure from the domain layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Loading from object storage failed.
    #[error(transparent)]
    Lake(#[from] LakeError),
}

impl CatalogError {
    /// Whether the error should surface to clients as "not found".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::SubjectOutOfRange { .. } | Self::Core(CoreError::NotFound { .. }) => true,
            Self::Lake(error) => error.is_not_found(),
            Self::SubjectLoad { .. } => false,
        }
    }
}
