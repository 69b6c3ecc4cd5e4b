use crate::error::EngineError;
use ccwc_core::{Counts, ReportRow, Selection, TotalsMode};

/// Outcome of counting one source.
///
/// A failed source keeps whatever it counted before the failure.
#[derive(Debug)]
pub struct SourceResult {
    /// `None` for standard input read implicitly.
    pub label: Option<String>,
    pub counts: Counts,
    pub error: Option<EngineError>,
}

impl SourceResult {
    #[must_use]
    pub const fn new(label: Option<String>, counts: Counts) -> Self {
        Self {
            label,
            counts,
            error: None,
        }
    }

    #[must_use]
    pub const fn failed(label: Option<String>, error: EngineError) -> Self {
        Self {
            label,
            counts: Counts::new(),
            error: Some(error),
        }
    }

    #[must_use]
    pub fn row(&self) -> ReportRow<'_> {
        ReportRow::new(self.label.as_deref(), self.counts)
    }
}

/// Results of a whole run, in the order the sources were given.
#[derive(Debug, Default)]
pub struct RunResult {
    pub results: Vec<SourceResult>,
}

impl RunResult {
    pub fn errors(&self) -> impl Iterator<Item = &EngineError> {
        self.results.iter().filter_map(|r| r.error.as_ref())
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    #[must_use]
    pub fn total(&self) -> Counts {
        self.results.iter().map(|r| &r.counts).sum()
    }

    #[must_use]
    pub fn render(&self, selection: &Selection, totals: TotalsMode) -> String {
        let rows: Vec<ReportRow<'_>> = self.results.iter().map(SourceResult::row).collect();
        ccwc_core::render(&rows, selection, totals)
    }
}
