//! Lake error types.

/// Errors that can occur in the object storage layer.
#[derive(Debug, thiserror::Error)]
pub enum LakeError {
    /// The requested object does not exist.
    #[error("Object not found: {path}")]
    NotFound {
        /// Object key that was looked up.
        path: String,
    },

    /// The subject index parsed but listed no subjects.
    #[error("Subject index is empty: {path}")]
    EmptyIndex {
        /// Object key of the index file.
        path: String,
    },

    /// A tabular file could not be parsed.
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// Object key of the file being parsed.
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The key is not a valid object path.
    #[error("Invalid object path: {0}")]
    InvalidPath(#[from] object_store::path::Error),

    /// Object store request failed.
    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),
}

impl LakeError {
    /// Whether the error means "no such object".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
