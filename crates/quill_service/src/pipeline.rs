//! The staged diagnostics pipeline and the completion path.
//!
//! Both run against one [`Project`] and keep no state of their own. Each
//! stage either ends the request with its findings or hands over to the
//! next; configuration errors end it before the engine is consulted.

use std::path::Path;

use quill_diagnostics::{DiagnosticCode, DiagnosticEntry, DiagnosticKind, Report};
use quill_host::{AnalysisHost, CompletionEntry, EngineDiagnostic, EngineError};
use serde::{Deserialize, Serialize};

use crate::project::Project;

/// Separator used when flattening chained engine messages into a report.
const MESSAGE_SEPARATOR: &str = " ";

/// The answer to a completion request: `{ "entries": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// Candidates ordered by sort text, then name.
    pub entries: Vec<CompletionEntry>,
}

/// Runs the diagnostics pipeline for `file` with the caller's `code`.
///
/// Stages, each ending the request when it has findings:
/// configuration errors; declaration, semantic and syntactic engine
/// diagnostics (concatenated in that order); lint findings when the project
/// enables lint. A request that passes every stage gets a clean report.
pub fn diagnostics(project: &mut Project, file: &Path, code: &str) -> Result<Report, EngineError> {
    if !project.config_errors.is_empty() {
        return Ok(Report::new(project.config_errors.clone()));
    }

    project.host.set_content(file, code);

    let host = &project.host;
    let engine = project.engine.as_mut();
    let mut errors = Vec::new();
    let declaration = engine.declaration_diagnostics(host, file)?;
    errors.extend(to_entries(host, DiagnosticKind::Declaration, declaration));
    let semantic = engine.semantic_diagnostics(host, file)?;
    errors.extend(to_entries(host, DiagnosticKind::Semantic, semantic));
    let syntactic = engine.syntactic_diagnostics(host, file)?;
    errors.extend(to_entries(host, DiagnosticKind::Syntactic, syntactic));
    if !errors.is_empty() {
        return Ok(Report::new(errors));
    }

    if let Some(lint) = &project.lint {
        if let Some(snapshot) = host.script_snapshot(file) {
            let findings = lint.run(&snapshot);
            if !findings.is_empty() {
                return Ok(Report::new(findings));
            }
        }
    }

    Ok(Report::clean())
}

/// Collects completion candidates at byte `offset` of `file`.
///
/// A project with configuration errors answers with no candidates and the
/// engine is not consulted.
pub fn completions(
    project: &mut Project,
    file: &Path,
    code: &str,
    offset: usize,
) -> Result<CompletionReport, EngineError> {
    if !project.config_errors.is_empty() {
        return Ok(CompletionReport::default());
    }

    project.host.set_content(file, code);

    let host = &project.host;
    if let Some(snapshot) = host.script_snapshot(file) {
        if offset > snapshot.len() {
            return Err(EngineError::OffsetOutOfRange {
                file: file.to_path_buf(),
                offset,
            });
        }
    }

    let mut entries = project.engine.completions(host, file, offset)?;
    entries.sort_by(|a, b| {
        a.sort_text
            .cmp(&b.sort_text)
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(CompletionReport { entries })
}

/// Shapes engine diagnostics into report entries, resolving each start
/// offset against the snapshot of the file it refers to.
fn to_entries(
    host: &dyn AnalysisHost,
    kind: DiagnosticKind,
    diagnostics: Vec<EngineDiagnostic>,
) -> impl Iterator<Item = DiagnosticEntry> + '_ {
    diagnostics.into_iter().map(move |d| {
        let pos = d.location.as_ref().and_then(|loc| {
            host.script_snapshot(&loc.file)
                .map(|snapshot| snapshot.position_at(loc.start))
        });
        DiagnosticEntry::compiler(
            kind,
            DiagnosticCode(d.code),
            &d.message.flatten(MESSAGE_SEPARATOR),
            pos,
        )
    })
}
