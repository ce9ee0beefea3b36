//! Subject index and active-table management.

use std::sync::Arc;

use qbank_config::CatalogConfig;
use qbank_core::{CoreError, Question, QuestionFilter, QuestionPage, SubjectEntry};
use qbank_lake::QbankLake;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::table::QuestionTable;

/// The subject currently serving queries, with its fully loaded table.
#[derive(Debug)]
pub struct ActiveSubject {
    /// Position of the subject in the index.
    pub index: usize,
    pub entry: SubjectEntry,
    pub table: QuestionTable,
}

/// The subject index plus the active question table.
///
/// Readers take a snapshot (`Arc<ActiveSubject>`) and release the lock at
/// once, so a query always runs against a single complete table even while
/// a switch is in progress.
#[derive(Debug)]
pub struct Catalog {
    lake: QbankLake,
    subjects: Vec<SubjectEntry>,
    active: RwLock<Arc<ActiveSubject>>,
    switch_lock: Mutex<()>,
    image_url_prefix: String,
}

impl Catalog {
    /// Load the subject index and make the first subject active.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Lake`] if the index is missing or unparsable,
    /// and [`CatalogError::SubjectLoad`] if the first subject's table is.
    pub async fn open(lake: QbankLake, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let subjects = lake.load_subjects(&config.index_file).await?;
        let first = Self::load_subject(&lake, &subjects, 0).await?;
        info!(
            subjects = subjects.len(),
            active = %first.entry.subject,
            rows = first.table.len(),
            "catalog opened"
        );
        Ok(Self {
            lake,
            subjects,
            active: RwLock::new(Arc::new(first)),
            switch_lock: Mutex::new(()),
            image_url_prefix: config.image_url_prefix.clone(),
        })
    }

    /// The subject index, in load order.
    #[must_use]
    pub fn subjects(&self) -> &[SubjectEntry] {
        &self.subjects
    }

    /// Snapshot of the active subject.
    pub async fn active(&self) -> Arc<ActiveSubject> {
        Arc::clone(&*self.active.read().await)
    }

    /// Make the subject at `index` active, re-fetching its table.
    ///
    /// The new table is loaded completely before it replaces the current one;
    /// on failure the previously active subject keeps serving.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SubjectOutOfRange`] for a position past the end
    /// of the index and [`CatalogError::SubjectLoad`] if the data file cannot
    /// be loaded.
    pub async fn set_active_subject(&self, index: usize) -> Result<SubjectEntry, CatalogError> {
        let _switching = self.switch_lock.lock().await;
        let loaded = match Self::load_subject(&self.lake, &self.subjects, index).await {
            Ok(loaded) => loaded,
            Err(error) => {
                warn!(index, %error, "subject switch failed; keeping current subject");
                return Err(error);
            }
        };
        let entry = loaded.entry.clone();
        let rows = loaded.table.len();
        *self.active.write().await = Arc::new(loaded);
        info!(index, subject = %entry.subject, rows, "active subject switched");
        Ok(entry)
    }

    /// Filter, paginate and project the active table.
    ///
    /// Blank filters and a zero year are treated as unset.
    pub async fn list_questions(
        &self,
        filter: &QuestionFilter,
        page: i64,
        page_size: i64,
    ) -> QuestionPage {
        let filter = filter.clone().normalized();
        let active = self.active().await;
        let result = active
            .table
            .list(&filter, page, page_size, &self.image_url_prefix);
        debug!(?filter, page, page_size, total = result.total, "questions listed");
        result
    }

    /// Look up one question in the active table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Core`] with [`CoreError::NotFound`] if no row
    /// has this identifier.
    pub async fn get_question(&self, question_id: &str) -> Result<Question, CatalogError> {
        let active = self.active().await;
        active
            .table
            .get(question_id)
            .map(|row| Question::project(row, &self.image_url_prefix))
            .ok_or_else(|| CoreError::question_not_found(question_id).into())
    }

    pub async fn list_units(&self, subject: Option<&str>) -> Vec<String> {
        self.active().await.table.units(subject)
    }

    pub async fn list_paper_types(&self, subject: Option<&str>) -> Vec<String> {
        self.active().await.table.paper_types(subject)
    }

    pub async fn list_years(&self, subject: Option<&str>) -> Vec<i64> {
        self.active().await.table.years(subject)
    }

    async fn load_subject(
        lake: &QbankLake,
        subjects: &[SubjectEntry],
        index: usize,
    ) -> Result<ActiveSubject, CatalogError> {
        let entry = subjects
            .get(index)
            .cloned()
            .ok_or(CatalogError::SubjectOutOfRange {
                index,
                len: subjects.len(),
            })?;
        let rows = match lake.load_questions(&entry).await {
            Ok(rows) => rows,
            Err(source) => {
                return Err(CatalogError::SubjectLoad {
                    subject: entry.subject,
                    source,
                });
            }
        };
        Ok(ActiveSubject {
            index,
            entry,
            table: QuestionTable::new(rows),
        })
    }
}
