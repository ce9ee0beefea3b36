use axum::Json;
use axum::extract::{Path, Query, State};
use qbank_core::{Question, QuestionFilter, QuestionPage, SuccessResponse};
use serde::{Deserialize, Deserializer};

use crate::{ApiError, AppState};

/// Query string of GET /api/questions.
///
/// Empty values (`?year=&unit=`) are read as absent; any other value is
/// taken verbatim.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub paper_type: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

impl ListParams {
    fn filter(&self) -> QuestionFilter {
        QuestionFilter {
            unit: self.unit.clone(),
            paper_type: self.paper_type.clone(),
            year: self.year,
            subject: self.subject.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SubjectParam {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBody {
    #[serde(default)]
    pub user_id: Option<String>,
    pub reason: String,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// GET /api/questions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<QuestionPage> {
    let page = params.page.unwrap_or(1);
    let page_size = params
        .page_size
        .unwrap_or(state.config().catalog.default_page_size);
    Json(
        state
            .catalog()
            .list_questions(&params.filter(), page, page_size)
            .await,
    )
}

/// GET /api/questions/{question_id}
pub async fn get(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<Question>, ApiError> {
    Ok(Json(state.catalog().get_question(&question_id).await?))
}

/// GET /api/questions/units
pub async fn units(
    State(state): State<AppState>,
    Query(params): Query<SubjectParam>,
) -> Json<Vec<String>> {
    Json(state.catalog().list_units(params.subject.as_deref()).await)
}

/// GET /api/questions/paperTypes
pub async fn paper_types(
    State(state): State<AppState>,
    Query(params): Query<SubjectParam>,
) -> Json<Vec<String>> {
    Json(state.catalog().list_paper_types(params.subject.as_deref()).await)
}

/// GET /api/questions/years
pub async fn years(
    State(state): State<AppState>,
    Query(params): Query<SubjectParam>,
) -> Json<Vec<i64>> {
    Json(state.catalog().list_years(params.subject.as_deref()).await)
}

/// POST /api/questions/{question_id}/report
///
/// Accepted for any identifier; reports are not checked against the table.
pub async fn report(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    Json(body): Json<ReportBody>,
) -> Json<SuccessResponse> {
    state
        .users()
        .report(&question_id, body.user_id.as_deref(), &body.reason)
        .await;
    Json(SuccessResponse::ok())
}
