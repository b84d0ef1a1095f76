//! A fallback analysis engine that only checks delimiter balance.
//!
//! Used when no full language engine is wired in. It scans the snapshot the
//! host serves, never the filesystem, and reports unmatched brackets and
//! unterminated literals or comments as syntactic diagnostics. A file the
//! host has no snapshot for (absent, or empty on disk) has no content and
//! therefore nothing to report.

use std::collections::BTreeSet;
use std::path::Path;

use quill_host::{AnalysisEngine, AnalysisHost, CompletionEntry, EngineDiagnostic, EngineError};
use quill_service::EngineProvider;
use quill_source::{tokenize, TokenKind};

const UNTERMINATED_STRING: u32 = 1002;
const EXPECTED: u32 = 1005;
const COMMENT_NOT_CLOSED: u32 = 1010;
const STATEMENT_EXPECTED: u32 = 1128;
const UNTERMINATED_TEMPLATE: u32 = 1160;

/// Balance checker for `()`, `[]` and `{}`.
#[derive(Debug, Default)]
pub struct DelimiterEngine;

impl DelimiterEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

/// An [`EngineProvider`] handing every project its own [`DelimiterEngine`].
pub fn provider() -> Box<dyn EngineProvider> {
    Box::new(|_root: &Path| -> Box<dyn AnalysisEngine> { Box::new(DelimiterEngine::new()) })
}

fn closer_for(open: u8) -> u8 {
    match open {
        b'(' => b')',
        b'[' => b']',
        _ => b'}',
    }
}

fn expected(file: &Path, closer: u8, at: usize) -> EngineDiagnostic {
    EngineDiagnostic::new(EXPECTED, format!("'{}' expected.", closer as char)).at(file, at)
}

/// Checks `source` and returns diagnostics in source order.
fn check_balance(file: &Path, source: &str) -> Vec<EngineDiagnostic> {
    let mut found = Vec::new();
    let mut open: Vec<u8> = Vec::new();

    for token in tokenize(source) {
        match token.kind {
            TokenKind::Punct(b @ (b'(' | b'[' | b'{')) => open.push(b),
            TokenKind::Punct(b @ (b')' | b']' | b'}')) => {
                match open.iter().rposition(|&o| closer_for(o) == b) {
                    Some(index) => {
                        for &unclosed in open[index + 1..].iter().rev() {
                            found.push(expected(file, closer_for(unclosed), token.start));
                        }
                        open.truncate(index);
                    }
                    None => found.push(
                        EngineDiagnostic::new(STATEMENT_EXPECTED, "Declaration or statement expected.")
                            .at(file, token.start),
                    ),
                }
            }
            TokenKind::Str { terminated: false } => found.push(
                EngineDiagnostic::new(UNTERMINATED_STRING, "Unterminated string literal.")
                    .at(file, token.start),
            ),
            TokenKind::Template { terminated: false } => found.push(
                EngineDiagnostic::new(UNTERMINATED_TEMPLATE, "Unterminated template literal.")
                    .at(file, token.start),
            ),
            TokenKind::UnterminatedComment => {
                found.push(EngineDiagnostic::new(COMMENT_NOT_CLOSED, "'*/' expected.").at(file, source.len()))
            }
            _ => {}
        }
    }

    for &unclosed in open.iter().rev() {
        found.push(expected(file, closer_for(unclosed), source.len()));
    }
    found
}

impl AnalysisEngine for DelimiterEngine {
    fn declaration_diagnostics(
        &mut self,
        _host: &dyn AnalysisHost,
        _file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError> {
        Ok(Vec::new())
    }

    fn semantic_diagnostics(
        &mut self,
        _host: &dyn AnalysisHost,
        _file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError> {
        Ok(Vec::new())
    }

    fn syntactic_diagnostics(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError> {
        let Some(snapshot) = host.script_snapshot(file) else {
            return Ok(Vec::new());
        };
        let found = check_balance(file, snapshot.text());
        tracing::debug!(file = %file.display(), count = found.len(), "delimiter check");
        Ok(found)
    }

    /// Every distinct identifier in the file except the one being typed at
    /// `offset`.
    fn completions(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
        offset: usize,
    ) -> Result<Vec<CompletionEntry>, EngineError> {
        let Some(snapshot) = host.script_snapshot(file) else {
            return Ok(Vec::new());
        };
        let source = snapshot.text();
        let names: BTreeSet<&str> = tokenize(source)
            .into_iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .filter(|t| !(t.start < offset && offset <= t.end))
            .map(|t| t.text(source))
            .collect();
        Ok(names
            .into_iter()
            .map(|name| CompletionEntry::new(name, "identifier", "0"))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(source: &str) -> Vec<(u32, String, usize)> {
        check_balance(Path::new("/p/a.ts"), source)
            .into_iter()
            .map(|d| {
                let start = d.location.map(|l| l.start).unwrap_or(usize::MAX);
                (d.code, d.message.text, start)
            })
            .collect()
    }

    #[test]
    fn balanced_source_is_clean() {
        assert!(codes("function f(a) { return [a, (a)]; }").is_empty());
    }

    #[test]
    fn brackets_in_strings_and_comments_are_ignored() {
        assert!(codes("let s = '(' + \"]\"; // }\n/* { */").is_empty());
    }

    #[test]
    fn stray_closer() {
        assert_eq!(
            codes("a);"),
            vec![(STATEMENT_EXPECTED, "Declaration or statement expected.".to_string(), 1)]
        );
    }

    #[test]
    fn unclosed_opener_reported_at_end() {
        assert_eq!(codes("f(a"), vec![(EXPECTED, "')' expected.".to_string(), 3)]);
    }

    #[test]
    fn mismatched_closer_reports_inner_opener() {
        // `[` is never closed before `}` closes the block.
        assert_eq!(codes("{ [ }"), vec![(EXPECTED, "']' expected.".to_string(), 4)]);
    }

    #[test]
    fn unterminated_literals() {
        let found = codes("let a = 'x\nlet b = `y");
        assert_eq!(found[0].0, UNTERMINATED_STRING);
        assert_eq!(found[0].2, 8);
        assert_eq!(found[1].0, UNTERMINATED_TEMPLATE);
    }

    #[test]
    fn unterminated_comment() {
        let src = "a /* open";
        assert_eq!(
            codes(src),
            vec![(COMMENT_NOT_CLOSED, "'*/' expected.".to_string(), src.len())]
        );
    }
}
