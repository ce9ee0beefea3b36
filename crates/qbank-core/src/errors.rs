//! Cross-cutting error types for qbank.
//!
//! Domain-specific errors (e.g., `LakeError`, `CatalogError`) are defined in
//! their respective crates. They converge in `qbank-server`, where each one
//! is mapped to an HTTP status.

use thiserror::Error;

/// Errors that can be raised by any qbank crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}

impl CoreError {
    /// Shorthand for a missing question.
    #[must_use]
    pub fn question_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "Question".to_string(),
            id: id.to_string(),
        }
    }
}
