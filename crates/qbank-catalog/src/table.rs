//! In-memory question table and the query engine over it.

use std::collections::BTreeSet;
use std::ops::Range;

use qbank_core::{Question, QuestionFilter, QuestionPage, QuestionRow};

/// An immutable question table in source-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionTable {
    rows: Vec<QuestionRow>,
}

impl QuestionTable {
    #[must_use]
    pub const fn new(rows: Vec<QuestionRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[QuestionRow] {
        &self.rows
    }

    /// Rows matching every set filter, in table order.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a QuestionFilter,
    ) -> impl Iterator<Item = &'a QuestionRow> + 'a {
        self.rows.iter().filter(move |row| filter.matches(row))
    }

    /// One page of the filtered rows, projected for clients.
    ///
    /// `total` counts every matching row regardless of the page requested.
    #[must_use]
    pub fn list(
        &self,
        filter: &QuestionFilter,
        page: i64,
        page_size: i64,
        image_url_prefix: &str,
    ) -> QuestionPage {
        let matching: Vec<&QuestionRow> = self.filtered(filter).collect();
        let total = matching.len();
        let results = matching[page_bounds(total, page, page_size)]
            .iter()
            .map(|row| Question::project(row, image_url_prefix))
            .collect();
        QuestionPage {
            results,
            total,
            page,
            page_size,
        }
    }

    /// First row with the given identifier.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&QuestionRow> {
        self.rows.iter().find(|row| row.question_id == question_id)
    }

    /// Distinct syllabus codes, ascending.
    #[must_use]
    pub fn units(&self, subject: Option<&str>) -> Vec<String> {
        self.distinct(subject, |row| row.syllabus.clone())
    }

    /// Distinct paper types, ascending.
    #[must_use]
    pub fn paper_types(&self, subject: Option<&str>) -> Vec<String> {
        self.distinct(subject, |row| row.paper_type.clone())
    }

    /// Distinct years, ascending.
    #[must_use]
    pub fn years(&self, subject: Option<&str>) -> Vec<i64> {
        self.distinct(subject, |row| row.year)
    }

    fn distinct<T: Ord>(
        &self,
        subject: Option<&str>,
        column: impl Fn(&QuestionRow) -> T,
    ) -> Vec<T> {
        let filter = QuestionFilter::for_subject(subject);
        self.filtered(&filter)
            .map(column)
            .collect::<BTreeSet<T>>()
            .into_iter()
            .collect()
    }
}

/// Index range of page `page` (1-based) of size `page_size` over `total` rows.
///
/// The bounds `(page-1)*page_size` and `page*page_size` follow ordinary slice
/// semantics: a negative bound counts back from the end (`total + bound`),
/// and both are then clamped to `[0, total]`. Zero or negative inputs are not
/// rejected. An end that is not past the start yields an empty range.
#[must_use]
pub fn page_bounds(total: usize, page: i64, page_size: i64) -> Range<usize> {
    let len = i64::try_from(total).unwrap_or(i64::MAX);
    let resolve = |bound: i64| {
        let bound = if bound < 0 { len.saturating_add(bound) } else { bound };
        usize::try_from(bound.clamp(0, len)).map_or(total, |b| b.min(total))
    };
    let start = resolve(page.saturating_sub(1).saturating_mul(page_size));
    let end = resolve(page.saturating_mul(page_size));
    if end <= start { start..start } else { start..end }
}
