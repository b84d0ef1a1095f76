//! The pipeline stage a diagnostic came from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pipeline stage produced a diagnostic.
///
/// Declared in pipeline order, so the derived ordering matches the order in
/// which stages run.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// Project configuration could not be loaded or is inconsistent.
    Configuration,
    /// Declaration emit diagnostics from the analysis engine.
    Declaration,
    /// Type-checking diagnostics from the analysis engine.
    Semantic,
    /// Parse diagnostics from the analysis engine.
    Syntactic,
    /// Findings of the lint pass.
    Lint,
}

impl DiagnosticKind {
    /// Returns `true` for kinds whose messages carry a `TS<n>: ` prefix.
    pub fn is_compiler(self) -> bool {
        !matches!(self, DiagnosticKind::Lint)
    }

    /// The lowercase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::Configuration => "configuration",
            DiagnosticKind::Declaration => "declaration",
            DiagnosticKind::Semantic => "semantic",
            DiagnosticKind::Syntactic => "syntactic",
            DiagnosticKind::Lint => "lint",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
