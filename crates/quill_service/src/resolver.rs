//! Collaborators that build projects: configuration and engines.

use std::path::Path;
use std::sync::Arc;

use quill_common::QuillResult;
use quill_config::{resolve_project, ResolvedProject};
use quill_host::AnalysisEngine;
use quill_source::SourceStore;

/// Produces the configuration of a project from its root.
///
/// Configuration problems are not errors here: they travel inside
/// [`ResolvedProject::errors`] and become the project's diagnostics. `Err`
/// is reserved for a resolver that cannot answer at all.
pub trait ProjectResolver {
    /// Resolves the project rooted at `root`.
    fn resolve(&self, root: &Path) -> QuillResult<ResolvedProject>;
}

/// Resolves projects from `quill.toml` files read through a store.
pub struct TomlProjectResolver {
    store: Arc<dyn SourceStore>,
}

impl TomlProjectResolver {
    /// Creates a resolver reading through `store`.
    pub fn new(store: Arc<dyn SourceStore>) -> Self {
        Self { store }
    }
}

impl ProjectResolver for TomlProjectResolver {
    fn resolve(&self, root: &Path) -> QuillResult<ResolvedProject> {
        Ok(resolve_project(self.store.as_ref(), root))
    }
}

/// Creates an analysis engine for a newly built project.
pub trait EngineProvider {
    /// Returns a fresh engine for the project at `root`.
    fn create(&self, root: &Path) -> Box<dyn AnalysisEngine>;
}

impl<F> EngineProvider for F
where
    F: Fn(&Path) -> Box<dyn AnalysisEngine>,
{
    fn create(&self, root: &Path) -> Box<dyn AnalysisEngine> {
        self(root)
    }
}
