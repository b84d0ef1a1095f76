//! L101: Trailing whitespace at the end of a line.

use quill_config::LintConfig;
use quill_source::{Position, ScriptSnapshot};

use crate::{LintFinding, LintRule};

/// Detects spaces and tabs between the last visible character of a line and
/// its line break.
pub struct TrailingWhitespace;

impl LintRule for TrailingWhitespace {
    fn code(&self) -> &str {
        "L101"
    }

    fn name(&self) -> &str {
        "trailing-whitespace"
    }

    fn description(&self) -> &str {
        "whitespace at the end of a line"
    }

    fn check(&self, source: &ScriptSnapshot, _config: &LintConfig, findings: &mut Vec<LintFinding>) {
        for line_no in 0..source.line_count() {
            let Some(line) = source.line(line_no) else {
                continue;
            };
            let trimmed = line.trim_end_matches([' ', '\t']);
            if trimmed.len() != line.len() {
                findings.push(LintFinding::new(
                    "trailing whitespace",
                    Position::new(line_no as u32, trimmed.chars().count() as u32),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Vec<LintFinding> {
        let mut findings = Vec::new();
        TrailingWhitespace.check(
            &ScriptSnapshot::new("a.ts", text),
            &LintConfig::default(),
            &mut findings,
        );
        findings
    }

    #[test]
    fn flags_spaces_and_tabs() {
        let findings = check("let a = 1;  \nlet b;\t\nok\n");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].pos, Position::new(0, 10));
        assert_eq!(findings[1].pos, Position::new(1, 6));
    }

    #[test]
    fn crlf_is_not_whitespace() {
        assert!(check("let a = 1;\r\nlet b = 2;\r\n").is_empty());
    }

    #[test]
    fn clean_text() {
        assert!(check("let a = 1;\n").is_empty());
    }
}
