use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

use crate::{ApiError, AppState};

/// GET /static/{*path}
pub async fn fetch(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let image = state.images().fetch_image(&path).await?;
    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes))
}
