//! Mapping of domain errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qbank_catalog::CatalogError;
use qbank_core::CoreError;
use qbank_lake::LakeError;
use serde_json::json;
use tracing::error;

/// Error returned by request handlers.
///
/// Every variant renders as `{"detail": "..."}`; not-found conditions map to
/// 404 and everything else to 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Catalog(CatalogError),

    #[error(transparent)]
    Lake(LakeError),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Catalog(_) | Self::Lake(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Core(CoreError::NotFound { entity_type, .. }) => {
                Self::NotFound(format!("{entity_type} not found"))
            }
            CatalogError::SubjectOutOfRange { .. } => Self::NotFound(error.to_string()),
            CatalogError::Lake(lake) => lake.into(),
            other => Self::Catalog(other),
        }
    }
}

impl From<LakeError> for ApiError {
    fn from(error: LakeError) -> Self {
        if error.is_not_found() {
            Self::NotFound(error.to_string())
        } else {
            Self::Lake(error)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
