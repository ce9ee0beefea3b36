use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user's report against a question. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub question_id: String,
    pub user_id: Option<String>,
    pub reason: String,
    pub reported_at: DateTime<Utc>,
}

impl ReportRecord {
    /// Build a report stamped with the current time.
    #[must_use]
    pub fn new(question_id: &str, user_id: Option<&str>, reason: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            user_id: user_id.map(String::from),
            reason: reason.to_string(),
            reported_at: Utc::now(),
        }
    }
}
