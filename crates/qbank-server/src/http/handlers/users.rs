//! Per-user bookmark and done lists.
//!
//! Both lists share one set of semantics; the handlers differ only in which
//! [`UserList`] they address.

use axum::Json;
use axum::extract::{Path, State};
use qbank_core::{SuccessResponse, UserList};
use serde::Deserialize;

use crate::AppState;

/// Body of POST /api/users/{user_id}/{list}.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRef {
    pub question_id: String,
}

async fn list(state: &AppState, list: UserList, user_id: &str) -> Json<Vec<String>> {
    Json(state.users().list(list, user_id).await)
}

async fn add(
    state: &AppState,
    list: UserList,
    user_id: &str,
    body: QuestionRef,
) -> Json<SuccessResponse> {
    state.users().add(list, user_id, &body.question_id).await;
    Json(SuccessResponse::ok())
}

async fn remove(
    state: &AppState,
    list: UserList,
    user_id: &str,
    question_id: &str,
) -> Json<SuccessResponse> {
    state.users().remove(list, user_id, question_id).await;
    Json(SuccessResponse::ok())
}

/// GET /api/users/{user_id}/bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<String>> {
    list(&state, UserList::Bookmarks, &user_id).await
}

/// POST /api/users/{user_id}/bookmarks
pub async fn add_bookmark(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<QuestionRef>,
) -> Json<SuccessResponse> {
    add(&state, UserList::Bookmarks, &user_id, body).await
}

/// DELETE /api/users/{user_id}/bookmarks/{question_id}
pub async fn remove_bookmark(
    State(state): State<AppState>,
    Path((user_id, question_id)): Path<(String, String)>,
) -> Json<SuccessResponse> {
    remove(&state, UserList::Bookmarks, &user_id, &question_id).await
}

/// GET /api/users/{user_id}/done
pub async fn list_done(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<String>> {
    list(&state, UserList::Done, &user_id).await
}

/// POST /api/users/{user_id}/done
pub async fn add_done(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<QuestionRef>,
) -> Json<SuccessResponse> {
    add(&state, UserList::Done, &user_id, body).await
}

/// DELETE /api/users/{user_id}/done/{question_id}
pub async fn remove_done(
    State(state): State<AppState>,
    Path((user_id, question_id)): Path<(String, String)>,
) -> Json<SuccessResponse> {
    remove(&state, UserList::Done, &user_id, &question_id).await
}
