use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::{blank_as_none, integral};

/// One exam question as stored in a subject's data file.
///
/// Field names follow the data file's header row. `question_id` is unique
/// within a subject's table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionRow {
    #[serde(rename = "QuestionID")]
    pub question_id: String,
    #[serde(rename = "Image Filename")]
    pub image_filename: String,
    #[serde(rename = "Year", deserialize_with = "integral")]
    pub year: i64,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Paper Type")]
    pub paper_type: String,
    #[serde(rename = "Timezone")]
    pub timezone: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Question Number", deserialize_with = "integral")]
    pub question_number: i64,
    #[serde(rename = "Syllabus")]
    pub syllabus: String,
    #[serde(
        rename = "Markscheme Answer",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub markscheme_answer: Option<String>,
}

/// The client-facing shape of a question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub image_filename: String,
    pub year: i64,
    pub month: String,
    pub subject: String,
    pub paper_type: String,
    pub timezone: String,
    pub level: String,
    pub question_number: i64,
    pub markscheme_answer: Option<String>,
    pub syllabus: String,
    pub image_url: String,
}

impl Question {
    /// Project a stored row into the client-facing shape.
    ///
    /// `image_url_prefix` is the static-file route the image is served under
    /// (e.g. `/static/`); the row's image filename is appended to it verbatim.
    #[must_use]
    pub fn project(row: &QuestionRow, image_url_prefix: &str) -> Self {
        Self {
            question_id: row.question_id.clone(),
            image_filename: row.image_filename.clone(),
            year: row.year,
            month: row.month.clone(),
            subject: row.subject.clone(),
            paper_type: row.paper_type.clone(),
            timezone: row.timezone.clone(),
            level: row.level.clone(),
            question_number: row.question_number,
            markscheme_answer: row.markscheme_answer.clone(),
            syllabus: row.syllabus.clone(),
            image_url: format!("{image_url_prefix}{}", row.image_filename),
        }
    }
}
