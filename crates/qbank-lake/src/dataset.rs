//! Subject index and question table loading.
//!
//! Both files are CSV with a header row. Rows are deserialized by header
//! name, so column order does not matter and extra columns are ignored.

use serde::de::DeserializeOwned;
use tracing::info;

use qbank_core::{QuestionRow, SubjectEntry};

use crate::{LakeError, QbankLake};

impl QbankLake {
    /// Load the subject index, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::NotFound`] if the index is missing,
    /// [`LakeError::Csv`] if it cannot be parsed, and
    /// [`LakeError::EmptyIndex`] if it lists no subjects.
    pub async fn load_subjects(&self, index_file: &str) -> Result<Vec<SubjectEntry>, LakeError> {
        let subjects: Vec<SubjectEntry> = self.read_csv(index_file).await?;
        if subjects.is_empty() {
            return Err(LakeError::EmptyIndex {
                path: self.resolve(index_file)?.to_string(),
            });
        }
        info!(path = index_file, count = subjects.len(), "subject index loaded");
        Ok(subjects)
    }

    /// Load the question table of one subject.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::NotFound`] if the data file is missing and
    /// [`LakeError::Csv`] if a row cannot be parsed.
    pub async fn load_questions(
        &self,
        subject: &SubjectEntry,
    ) -> Result<Vec<QuestionRow>, LakeError> {
        let rows: Vec<QuestionRow> = self.read_csv(&subject.data_file).await?;
        info!(
            subject = %subject.subject,
            path = %subject.data_file,
            rows = rows.len(),
            "question table loaded"
        );
        Ok(rows)
    }

    async fn read_csv<T: DeserializeOwned>(&self, relative: &str) -> Result<Vec<T>, LakeError> {
        let content = self.read(relative).await?;
        csv::Reader::from_reader(content.as_ref())
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .map_err(|source| LakeError::Csv {
                path: relative.to_string(),
                source,
            })
    }
}
