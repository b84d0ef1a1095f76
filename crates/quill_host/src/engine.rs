//! The analysis engine contract.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::host::AnalysisHost;
use crate::message::MessageChain;

/// Where an engine diagnostic starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticLocation {
    /// The file the offset refers to.
    pub file: PathBuf,
    /// Byte offset into that file's snapshot text.
    pub start: usize,
}

/// A diagnostic as produced by an engine, before it is shaped for a report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineDiagnostic {
    /// Numeric compiler code, shown as `TS<code>`.
    pub code: u32,
    /// The message, possibly chained.
    pub message: MessageChain,
    /// Start location, when the diagnostic is tied to source.
    pub location: Option<DiagnosticLocation>,
}

impl EngineDiagnostic {
    /// A diagnostic without location.
    pub fn new(code: u32, message: impl Into<MessageChain>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Attaches a start location.
    pub fn at(mut self, file: impl Into<PathBuf>, start: usize) -> Self {
        self.location = Some(DiagnosticLocation {
            file: file.into(),
            start,
        });
        self
    }
}

/// One completion candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntry {
    /// The text to insert.
    pub name: String,
    /// The kind of symbol, e.g. `keyword`, `var`, `function`.
    pub kind: String,
    /// Key the editor sorts by.
    #[serde(rename = "sortText")]
    pub sort_text: String,
}

impl CompletionEntry {
    /// Creates a completion entry.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, sort_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            sort_text: sort_text.into(),
        }
    }
}

/// Failures of an analysis engine query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The host has no content for the requested file.
    #[error("could not find source file '{}'", .0.display())]
    MissingSource(PathBuf),

    /// A completion offset lies outside the file.
    #[error("offset {offset} is out of range for '{}'", .file.display())]
    OffsetOutOfRange {
        /// The file queried.
        file: PathBuf,
        /// The offending byte offset.
        offset: usize,
    },

    /// Any other engine failure.
    #[error("analysis engine failure: {0}")]
    Internal(String),
}

/// A language-analysis engine driven through an [`AnalysisHost`].
///
/// Engines may keep their own incremental state between calls, keyed by
/// the script versions the host reports; that is why queries take
/// `&mut self`. They must never read the filesystem directly.
pub trait AnalysisEngine {
    /// Diagnostics from declaration emit for `file`.
    fn declaration_diagnostics(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError>;

    /// Type-checking diagnostics for `file`.
    fn semantic_diagnostics(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError>;

    /// Parse diagnostics for `file`.
    fn syntactic_diagnostics(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError>;

    /// Completion candidates at byte `offset` in `file`.
    fn completions(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
        offset: usize,
    ) -> Result<Vec<CompletionEntry>, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_builder() {
        let d = EngineDiagnostic::new(2304, "Cannot find name 'x'.").at("/p/a.ts", 12);
        assert_eq!(d.code, 2304);
        assert_eq!(d.message.flatten("\n"), "Cannot find name 'x'.");
        assert_eq!(
            d.location,
            Some(DiagnosticLocation {
                file: PathBuf::from("/p/a.ts"),
                start: 12
            })
        );
    }

    #[test]
    fn completion_wire_shape() {
        let e = CompletionEntry::new("length", "property", "0");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "length", "kind": "property", "sortText": "0" })
        );
    }

    #[test]
    fn error_display() {
        let err = EngineError::MissingSource(PathBuf::from("/p/a.ts"));
        assert_eq!(err.to_string(), "could not find source file '/p/a.ts'");
        let err = EngineError::OffsetOutOfRange {
            file: PathBuf::from("/p/a.ts"),
            offset: 99,
        };
        assert_eq!(err.to_string(), "offset 99 is out of range for '/p/a.ts'");
    }
}
