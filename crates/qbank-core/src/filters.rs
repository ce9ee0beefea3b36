//! Equality filters for question listings.

use serde::{Deserialize, Serialize};

use crate::entities::QuestionRow;

/// Exact-match filters over a question table. Unset filters match every row;
/// set filters are combined by conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilter {
    /// Syllabus code (`Syllabus` column).
    pub unit: Option<String>,
    pub paper_type: Option<String>,
    pub year: Option<i64>,
    pub subject: Option<String>,
}

impl QuestionFilter {
    /// Filter scoped to a single subject only.
    #[must_use]
    pub fn for_subject(subject: Option<&str>) -> Self {
        Self {
            subject: subject.map(String::from),
            ..Self::default()
        }
        .normalized()
    }

    /// Drop blank text filters and a zero year.
    ///
    /// Clients send empty query parameters for "any"; those must not be
    /// matched literally against the table.
    #[must_use]
    pub fn normalized(self) -> Self {
        let keep = |value: Option<String>| value.filter(|v| !v.is_empty());
        Self {
            unit: keep(self.unit),
            paper_type: keep(self.paper_type),
            year: self.year.filter(|y| *y != 0),
            subject: keep(self.subject),
        }
    }

    /// Whether no filter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.unit.is_none()
            && self.paper_type.is_none()
            && self.year.is_none()
            && self.subject.is_none()
    }

    /// Whether `row` satisfies every set filter.
    #[must_use]
    pub fn matches(&self, row: &QuestionRow) -> bool {
        self.unit.as_deref().is_none_or(|v| row.syllabus == v)
            && self.paper_type.as_deref().is_none_or(|v| row.paper_type == v)
            && self.year.is_none_or(|v| row.year == v)
            && self.subject.as_deref().is_none_or(|v| row.subject == v)
    }
}
