//! L103: Lines longer than the configured limit.

use quill_config::LintConfig;
use quill_source::{Position, ScriptSnapshot};

use crate::{LintFinding, LintRule};

/// Detects lines with more than `max_line_length` characters. The position
/// points at the first character past the limit.
pub struct MaxLineLength;

impl LintRule for MaxLineLength {
    fn code(&self) -> &str {
        "L103"
    }

    fn name(&self) -> &str {
        "max-line-length"
    }

    fn description(&self) -> &str {
        "line exceeds the configured maximum length"
    }

    fn check(&self, source: &ScriptSnapshot, config: &LintConfig, findings: &mut Vec<LintFinding>) {
        let limit = config.max_line_length;
        for line_no in 0..source.line_count() {
            let Some(line) = source.line(line_no) else {
                continue;
            };
            let length = line.chars().count();
            if length > limit {
                findings.push(LintFinding::new(
                    format!("exceeds maximum line length of {limit} ({length} characters)"),
                    Position::new(line_no as u32, limit as u32),
                ));
            }
        }
    }
}
