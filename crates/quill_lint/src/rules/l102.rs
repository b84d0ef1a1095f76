//! L102: `debugger` statements left in code.

use quill_config::LintConfig;
use quill_source::{tokenize, ScriptSnapshot, TokenKind};

use crate::{LintFinding, LintRule};

/// Detects the `debugger` keyword outside comments and strings.
///
/// A property access such as `options.debugger` is not a statement and is
/// not reported.
pub struct NoDebugger;

impl LintRule for NoDebugger {
    fn code(&self) -> &str {
        "L102"
    }

    fn name(&self) -> &str {
        "no-debugger"
    }

    fn description(&self) -> &str {
        "debugger statement left in code"
    }

    fn check(&self, source: &ScriptSnapshot, _config: &LintConfig, findings: &mut Vec<LintFinding>) {
        let text = source.text();
        let mut previous = None;
        for token in tokenize(text) {
            let is_member = previous == Some(TokenKind::Punct(b'.'));
            if token.kind == TokenKind::Identifier && token.text(text) == "debugger" && !is_member {
                findings.push(LintFinding::new(
                    "use of debugger statement",
                    source.position_at(token.start),
                ));
            }
            previous = Some(token.kind);
        }
    }
}
