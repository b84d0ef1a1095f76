//! Human-readable rendering of diagnostics.

use std::path::Path;

use quill_source::ScriptSnapshot;

use crate::entry::DiagnosticEntry;
use crate::kind::DiagnosticKind;

/// Formats one diagnostic for display.
pub trait DiagnosticRenderer {
    /// Renders `entry`, reported against `path`. When `source` is given and
    /// the entry has a position, the offending line is quoted.
    fn render(&self, path: &Path, entry: &DiagnosticEntry, source: Option<&ScriptSnapshot>)
        -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[semantic]: TS2304: Cannot find name 'x'.
///   --> src/main.ts:3:9
///   |
/// 3 | let y = x;
///   |         ^
/// ```
/// Lint findings use the `warning` header; every other kind is an `error`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalRenderer {
    /// Whether to quote the source line under the location.
    pub show_source: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(show_source: bool) -> Self {
        Self { show_source }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(
        &self,
        path: &Path,
        entry: &DiagnosticEntry,
        source: Option<&ScriptSnapshot>,
    ) -> String {
        let severity = match entry.kind {
            DiagnosticKind::Lint => "warning",
            _ => "error",
        };
        let mut out = format!("{severity}[{}]: {}\n", entry.kind, entry.message);

        let Some(pos) = entry.pos else {
            out.push_str(&format!("  --> {}\n", path.display()));
            return out;
        };
        out.push_str(&format!("  --> {}:{pos}\n", path.display()));

        let line = source
            .filter(|_| self.show_source)
            .and_then(|s| s.line(pos.line as usize));
        if let Some(line_content) = line {
            let line_num = (pos.line + 1).to_string();
            let padding = " ".repeat(line_num.len());
            let col_padding = " ".repeat(pos.ch as usize);
            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));
            out.push_str(&format!("{padding} | {col_padding}^\n"));
        }

        out
    }
}
