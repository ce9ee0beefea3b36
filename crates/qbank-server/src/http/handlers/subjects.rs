use axum::Json;
use axum::extract::{Path, State};
use qbank_core::SubjectEntry;

use crate::{ApiError, AppState};

/// GET /api/subjects
pub async fn list(State(state): State<AppState>) -> Json<Vec<SubjectEntry>> {
    Json(state.catalog().subjects().to_vec())
}

/// POST /api/subjects/{subject_index}
///
/// Switches the active subject by its position in the index.
pub async fn select(
    State(state): State<AppState>,
    Path(subject_index): Path<usize>,
) -> Result<Json<SubjectEntry>, ApiError> {
    let entry = state.catalog().set_active_subject(subject_index).await?;
    Ok(Json(entry))
}
