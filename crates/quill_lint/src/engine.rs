//! Lint engine that manages rule registration, configuration, and execution.
//!
//! The `LintEngine` accepts a `LintConfig` to decide which rules are allowed
//! (suppressed), then runs every remaining rule over one script.

use std::collections::HashSet;

use quill_config::LintConfig;
use quill_diagnostics::DiagnosticEntry;
use quill_source::ScriptSnapshot;

use crate::rules::register_builtin_rules;
use crate::{LintFinding, LintRule};

/// The lint engine that runs lint rules on a script.
///
/// Rules are registered at construction time. A rule is skipped when either
/// its name or its code appears in `config.allow`.
pub struct LintEngine {
    /// All registered lint rules.
    rules: Vec<Box<dyn LintRule>>,
    /// Rule names or codes that should be suppressed (not reported).
    allowed: HashSet<String>,
    /// The configuration rules are checked against.
    config: LintConfig,
}

impl LintEngine {
    /// Creates a new lint engine configured by the given `LintConfig`.
    ///
    /// All builtin rules are registered automatically.
    pub fn new(config: &LintConfig) -> Self {
        let mut engine = Self {
            rules: Vec::new(),
            allowed: config.allow.iter().cloned().collect(),
            config: config.clone(),
        };
        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates a new lint engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&LintConfig::default())
    }

    /// Registers a lint rule with the engine.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs all enabled rules on `source`.
    ///
    /// Findings become `lint` entries with message `<rule>: <text>`, ordered
    /// by position; findings at the same position keep rule registration
    /// order.
    pub fn run(&self, source: &ScriptSnapshot) -> Vec<DiagnosticEntry> {
        let mut entries: Vec<(LintFinding, &str)> = Vec::new();
        for rule in &self.rules {
            if self.is_allowed(rule.as_ref()) {
                continue;
            }
            let mut findings = Vec::new();
            rule.check(source, &self.config, &mut findings);
            entries.extend(findings.into_iter().map(|f| (f, rule.name())));
        }
        entries.sort_by_key(|(f, _)| f.pos);
        entries
            .into_iter()
            .map(|(f, name)| DiagnosticEntry::lint(name, &f.message, Some(f.pos)))
            .collect()
    }

    fn is_allowed(&self, rule: &dyn LintRule) -> bool {
        self.allowed.contains(rule.name()) || self.allowed.contains(rule.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_diagnostics::DiagnosticKind;
    use quill_source::Position;

    struct DummyRule;
    impl LintRule for DummyRule {
        fn code(&self) -> &str {
            "L999"
        }
        fn name(&self) -> &str {
            "dummy-rule"
        }
        fn description(&self) -> &str {
            "a test rule"
        }
        fn check(&self, _source: &ScriptSnapshot, _config: &LintConfig, findings: &mut Vec<LintFinding>) {
            findings.push(LintFinding::new("dummy warning", Position::new(0, 0)));
        }
    }

    fn snap(text: &str) -> ScriptSnapshot {
        ScriptSnapshot::new("/p/a.ts", text)
    }

    #[test]
    fn builtin_rules_registered() {
        let engine = LintEngine::with_defaults();
        assert_eq!(engine.rule_count(), 3);
        assert_eq!(
            engine.rule_names(),
            vec!["trailing-whitespace", "no-debugger", "max-line-length"]
        );
    }

    #[test]
    fn custom_rule_runs() {
        let mut engine = LintEngine::with_defaults();
        engine.register(Box::new(DummyRule));
        let entries = engine.run(&snap("let a = 1;\n"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, DiagnosticKind::Lint);
        assert_eq!(entries[0].message, "dummy-rule: dummy warning");
    }

    #[test]
    fn findings_are_ordered_by_position() {
        let engine = LintEngine::with_defaults();
        let entries = engine.run(&snap("debugger; \nlet a = 1;\ndebugger;\n"));
        let positions: Vec<Position> = entries.iter().filter_map(|e| e.pos).collect();
        assert_eq!(
            positions,
            vec![Position::new(0, 0), Position::new(0, 9), Position::new(2, 0)]
        );
        assert!(entries[0].message.starts_with("no-debugger: "));
        assert!(entries[1].message.starts_with("trailing-whitespace: "));
    }

    #[test]
    fn allow_by_name_or_code() {
        let config = LintConfig {
            allow: vec!["no-debugger".into(), "L101".into()],
            ..LintConfig::default()
        };
        let engine = LintEngine::new(&config);
        assert!(engine.run(&snap("debugger; \n")).is_empty());
    }

    #[test]
    fn uses_configured_line_length() {
        let config = LintConfig {
            max_line_length: 5,
            ..LintConfig::default()
        };
        let entries = LintEngine::new(&config).run(&snap("let abc;\n"));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.starts_with("max-line-length: "));
    }

    #[test]
    fn clean_source() {
        assert!(LintEngine::with_defaults().run(&snap("let a = 1;\n")).is_empty());
    }
}
