//! One project: host adapter, engines, and configuration state.

use std::path::Path;
use std::sync::Arc;

use quill_config::{HostOptions, ResolvedProject};
use quill_diagnostics::DiagnosticEntry;
use quill_host::{AnalysisEngine, LanguageServiceHost};
use quill_lint::LintEngine;
use quill_source::SourceStore;

/// Everything kept per project root between requests.
pub struct Project {
    pub(crate) host: LanguageServiceHost,
    pub(crate) engine: Box<dyn AnalysisEngine>,
    pub(crate) lint: Option<LintEngine>,
    pub(crate) config_errors: Vec<DiagnosticEntry>,
}

impl Project {
    /// Builds a project from its resolved configuration and preloads its
    /// root files.
    pub fn new(
        resolved: ResolvedProject,
        options: HostOptions,
        store: Arc<dyn SourceStore>,
        engine: Box<dyn AnalysisEngine>,
    ) -> Self {
        let ResolvedProject {
            root,
            settings,
            root_files,
            lint,
            errors,
        } = resolved;
        let mut host = LanguageServiceHost::new(root, settings, options, store);
        let loaded = host.preload(&root_files);
        tracing::info!(
            root = %host.root().display(),
            files = loaded,
            config_errors = errors.len(),
            lint = lint.is_some(),
            "created project"
        );
        Self {
            host,
            engine,
            lint: lint.as_ref().map(LintEngine::new),
            config_errors: errors,
        }
    }

    /// Applies a re-resolved configuration without discarding cached
    /// snapshots.
    pub fn reconfigure(&mut self, resolved: ResolvedProject) {
        self.host.update_settings(resolved.settings);
        self.lint = resolved.lint.as_ref().map(LintEngine::new);
        self.config_errors = resolved.errors;
        let loaded = self.host.preload(&resolved.root_files);
        tracing::info!(
            root = %self.host.root().display(),
            files = loaded,
            config_errors = self.config_errors.len(),
            "reconfigured project"
        );
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        self.host.root()
    }

    /// The host adapter serving this project's files.
    pub fn host(&self) -> &LanguageServiceHost {
        &self.host
    }

    /// Mutable access to the host adapter, for change notifications.
    pub fn host_mut(&mut self) -> &mut LanguageServiceHost {
        &mut self.host
    }

    /// Configuration diagnostics. Non-empty means every diagnostics request
    /// answers with exactly these.
    pub fn config_errors(&self) -> &[DiagnosticEntry] {
        &self.config_errors
    }

    /// Returns `true` if the lint stage is enabled.
    pub fn lint_enabled(&self) -> bool {
        self.lint.is_some()
    }
}
