//! Errors raised while loading or validating qbank configuration.

use thiserror::Error;

use crate::StorageBackend;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layered source (TOML file or `QBANK_*` variable) failed to parse.
    #[error("failed to load qbank configuration: {0}")]
    Load(#[from] figment::Error),

    /// The selected storage backend lacks a field it needs to connect.
    #[error("storage backend '{}' requires `storage.{field}` to be set", backend.as_str())]
    StorageIncomplete {
        backend: StorageBackend,
        field: &'static str,
    },

    /// `catalog.default_page_size` must be positive.
    #[error("`catalog.default_page_size` must be positive, got {0}")]
    InvalidPageSize(i64),
}
