//! A single diagnostic in a report.

use quill_source::Position;
use serde::{Deserialize, Serialize};

use crate::code::DiagnosticCode;
use crate::kind::DiagnosticKind;

/// One diagnostic as delivered to the caller.
///
/// Serializes as `{ "kind": "...", "message": "...", "pos": { "line", "ch" } }`
/// with `pos` omitted when the diagnostic has no location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    /// The pipeline stage that produced this diagnostic.
    pub kind: DiagnosticKind,
    /// The human-readable message, code-prefixed for compiler kinds.
    pub message: String,
    /// Zero-based location, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Position>,
}

impl DiagnosticEntry {
    /// Creates a compiler-originated entry, prefixing `message` with `code`.
    pub fn compiler(
        kind: DiagnosticKind,
        code: DiagnosticCode,
        message: &str,
        pos: Option<Position>,
    ) -> Self {
        Self {
            kind,
            message: code.prefix(message),
            pos,
        }
    }

    /// Creates a configuration entry without a location.
    pub fn configuration(code: DiagnosticCode, message: &str) -> Self {
        Self::compiler(DiagnosticKind::Configuration, code, message, None)
    }

    /// Creates a lint entry with message `<rule>: <text>`.
    pub fn lint(rule: &str, text: &str, pos: Option<Position>) -> Self {
        Self {
            kind: DiagnosticKind::Lint,
            message: format!("{rule}: {text}"),
            pos,
        }
    }
}
