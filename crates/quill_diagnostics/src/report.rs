//! The uniform diagnostics report.

use serde::{Deserialize, Serialize};

use crate::entry::DiagnosticEntry;

/// The answer to a diagnostics request: `{ "errors": [...] }`.
///
/// An empty report means the file is clean. Entries keep the order the
/// pipeline produced them in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// All diagnostics of the stage that ended the pipeline.
    pub errors: Vec<DiagnosticEntry>,
}

impl Report {
    /// A report with no diagnostics.
    pub fn clean() -> Self {
        Self::default()
    }

    /// Wraps the given entries.
    pub fn new(errors: Vec<DiagnosticEntry>) -> Self {
        Self { errors }
    }

    /// Returns `true` if there are no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
