//! `quill check`: one-shot diagnostics for files on disk.

use std::path::{Path, PathBuf};

use quill_common::normalize_path;
use quill_diagnostics::{DiagnosticRenderer, Report, TerminalRenderer};
use quill_host::AnalysisHost;
use quill_service::Service;
use serde::Serialize;

use crate::{delimiter, CheckArgs, GlobalArgs, ReportFormat};

/// One file's result in `--format json` output.
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    file: &'a Path,
    report: &'a Report,
}

/// Runs `quill check`. Returns exit code 1 if any file has a compiler or
/// configuration diagnostic, 0 otherwise; lint findings alone do not fail.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let root = normalize_path(&cwd.join(&args.root));
    let files: Vec<PathBuf> = args
        .files
        .iter()
        .map(|f| normalize_path(&cwd.join(f)))
        .collect();

    let mut service = Service::with_filesystem(delimiter::provider(), global.options.clone());
    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        reports.push(service.get_diagnostics(&root, file, "")?);
    }

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(true);
            for (file, report) in files.iter().zip(&reports) {
                let snapshot = service
                    .registry()
                    .get(&root)
                    .and_then(|project| project.host().script_snapshot(file));
                for entry in &report.errors {
                    eprintln!("{}", renderer.render(file, entry, snapshot.as_deref()));
                }
            }
        }
        ReportFormat::Json => {
            let out: Vec<FileReport<'_>> = files
                .iter()
                .zip(&reports)
                .map(|(file, report)| FileReport { file, report })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    let (errors, warnings) = count(&reports);
    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!("   Result: {errors} error(s), {warnings} warning(s)");
    }
    Ok(if errors > 0 { 1 } else { 0 })
}

/// Counts compiler/configuration entries and lint entries.
fn count(reports: &[Report]) -> (usize, usize) {
    reports
        .iter()
        .flat_map(|r| &r.errors)
        .fold((0, 0), |(errors, warnings), entry| {
            if entry.kind.is_compiler() {
                (errors + 1, warnings)
            } else {
                (errors, warnings + 1)
            }
        })
}
