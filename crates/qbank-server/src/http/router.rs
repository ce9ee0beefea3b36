use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

/// Create the API router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    let cors = state.config().server.cors;
    let router = Router::new()
        .route("/health", get(handlers::health))
        // Subjects
        .route("/api/subjects", get(handlers::subjects::list))
        .route("/api/subjects/{subject_index}", post(handlers::subjects::select))
        // Images
        .route("/static/{*path}", get(handlers::images::fetch))
        // Questions
        .route("/api/questions", get(handlers::questions::list))
        .route("/api/questions/units", get(handlers::questions::units))
        .route("/api/questions/paperTypes", get(handlers::questions::paper_types))
        .route("/api/questions/years", get(handlers::questions::years))
        .route("/api/questions/{question_id}", get(handlers::questions::get))
        .route(
            "/api/questions/{question_id}/report",
            post(handlers::questions::report),
        )
        // Per-user lists
        .route(
            "/api/users/{user_id}/bookmarks",
            get(handlers::users::list_bookmarks).post(handlers::users::add_bookmark),
        )
        .route(
            "/api/users/{user_id}/bookmarks/{question_id}",
            delete(handlers::users::remove_bookmark),
        )
        .route(
            "/api/users/{user_id}/done",
            get(handlers::users::list_done).post(handlers::users::add_done),
        )
        .route(
            "/api/users/{user_id}/done/{question_id}",
            delete(handlers::users::remove_done),
        )
        .with_state(state);

    let router = if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };
    router.layer(TraceLayer::new_for_http())
}
