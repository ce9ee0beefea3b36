//! Response types returned as JSON by the HTTP surface.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Question;

/// One page of a filtered question listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub results: Vec<Question>,
    /// Number of rows matching the filters, independent of pagination.
    pub total: usize,
    pub page: i64,
    pub page_size: i64,
}

/// Acknowledgement body for mutations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}
