//! The three boundary operations.

use std::path::Path;
use std::sync::Arc;

use quill_common::normalize_path;
use quill_config::HostOptions;
use quill_diagnostics::Report;
use quill_source::{FsStore, SourceStore};

use crate::error::ServiceError;
use crate::notification::{ChangeKind, FileChangeNotification};
use crate::pipeline::{self, CompletionReport};
use crate::registry::ProjectRegistry;
use crate::resolver::{EngineProvider, ProjectResolver, TomlProjectResolver};

/// Entry point for change notifications, diagnostics, and completions.
///
/// Requests are processed one at a time through `&mut self`; the caller
/// serializes them. Failures are logged here, once, and returned as
/// [`ServiceError`], which is distinct from a report with findings.
pub struct Service {
    registry: ProjectRegistry,
}

impl Service {
    /// Creates a service from explicit collaborators.
    pub fn new(
        resolver: Box<dyn ProjectResolver>,
        engines: Box<dyn EngineProvider>,
        store: Arc<dyn SourceStore>,
        options: HostOptions,
    ) -> Self {
        Self {
            registry: ProjectRegistry::new(resolver, engines, store, options),
        }
    }

    /// Creates a service over `store` with `quill.toml` project resolution.
    pub fn with_store(
        store: Arc<dyn SourceStore>,
        engines: Box<dyn EngineProvider>,
        options: HostOptions,
    ) -> Self {
        let resolver = Box::new(TomlProjectResolver::new(Arc::clone(&store)));
        Self::new(resolver, engines, store, options)
    }

    /// Creates a service reading the real filesystem.
    pub fn with_filesystem(engines: Box<dyn EngineProvider>, options: HostOptions) -> Self {
        Self::with_store(Arc::new(FsStore::new()), engines, options)
    }

    /// Applies every change in `notification`, in order.
    ///
    /// Returns `true` if any project tracked a changed file, cached a
    /// changed directory, or was reconfigured. Unknown paths are ignored.
    pub fn notify_file_changed(&mut self, notification: &FileChangeNotification) -> bool {
        let mut processed = false;
        for change in &notification.changes {
            let path = normalize_path(&change.full_path);
            processed |= match change.kind {
                ChangeKind::File => self.registry.file_changed(&path),
                ChangeKind::Directory => self.registry.directory_changed(&path),
            };
        }
        tracing::debug!(changes = notification.changes.len(), processed, "applied change notification");
        processed
    }

    /// Diagnoses `full_path` in the project at `project_root`, using `code`
    /// as its current content. Empty `code` means "read it from disk".
    pub fn get_diagnostics(
        &mut self,
        project_root: &Path,
        full_path: &Path,
        code: &str,
    ) -> Result<Report, ServiceError> {
        let file = normalize_path(full_path);
        let result = self
            .registry
            .get_or_create(project_root)
            .map_err(ServiceError::from)
            .and_then(|project| pipeline::diagnostics(project, &file, code).map_err(ServiceError::from));
        if let Err(e) = &result {
            tracing::error!(
                root = %project_root.display(),
                file = %file.display(),
                error = %e,
                "diagnostics request failed"
            );
        }
        result
    }

    /// Lists completions at byte offset `position` of `full_path`.
    pub fn get_completions(
        &mut self,
        project_root: &Path,
        full_path: &Path,
        code: &str,
        position: usize,
    ) -> Result<CompletionReport, ServiceError> {
        let file = normalize_path(full_path);
        let result = self
            .registry
            .get_or_create(project_root)
            .map_err(ServiceError::from)
            .and_then(|project| {
                pipeline::completions(project, &file, code, position).map_err(ServiceError::from)
            });
        if let Err(e) = &result {
            tracing::error!(
                root = %project_root.display(),
                file = %file.display(),
                position,
                error = %e,
                "completions request failed"
            );
        }
        result
    }

    /// The project registry.
    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }
}
