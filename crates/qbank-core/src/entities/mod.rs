//! Entity structs for the qbank domain objects.
//!
//! `SubjectEntry` and `QuestionRow` mirror the columns of the tabular files in
//! object storage; `Question` is the projection served to API clients.

mod question;
mod report;
mod subject;

pub use question::{Question, QuestionRow};
pub use report::ReportRecord;
pub use subject::SubjectEntry;
