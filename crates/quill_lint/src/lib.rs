//! Lint rules and engine for script text.
//!
//! Rules look at a [`ScriptSnapshot`] and report [`LintFinding`]s. The
//! [`LintEngine`] runs every registered rule not suppressed by the project's
//! `[lint] allow` list and turns findings into `lint` diagnostic entries,
//! each message prefixed with the rule name.
//!
//! # Rules
//!
//! - **L101 `trailing-whitespace`:** spaces or tabs at the end of a line
//! - **L102 `no-debugger`:** `debugger` statements
//! - **L103 `max-line-length`:** lines longer than `max_line_length` characters

#![warn(missing_docs)]

mod engine;
mod rules;

pub use engine::LintEngine;
pub use rules::register_builtin_rules;
pub use rules::{MaxLineLength, NoDebugger, TrailingWhitespace};

use quill_config::LintConfig;
use quill_source::{Position, ScriptSnapshot};

/// One problem found by a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintFinding {
    /// What is wrong.
    pub message: String,
    /// Where it starts.
    pub pos: Position,
}

impl LintFinding {
    /// Creates a finding.
    pub fn new(message: impl Into<String>, pos: Position) -> Self {
        Self {
            message: message.into(),
            pos,
        }
    }
}

/// A single lint rule that checks one script.
///
/// Each rule has a unique code, a short kebab-case name, and a description.
/// Either the code or the name may appear in `[lint] allow`.
pub trait LintRule: Send + Sync {
    /// Returns the rule code (e.g., `L101`).
    fn code(&self) -> &str;

    /// Returns the short kebab-case name of this rule (e.g., `no-debugger`).
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Checks `source` and appends findings.
    fn check(&self, source: &ScriptSnapshot, config: &LintConfig, findings: &mut Vec<LintFinding>);
}
