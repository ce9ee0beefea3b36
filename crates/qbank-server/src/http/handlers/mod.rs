pub mod images;
pub mod questions;
pub mod subjects;
pub mod users;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub subject: String,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let active = state.catalog().active().await;
    Json(Health {
        status: "ok",
        subject: active.entry.subject.clone(),
    })
}
