//! Projects keyed by root, created on first use.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quill_common::{is_within, normalize_path, QuillResult};
use quill_config::{HostOptions, CONFIG_FILE_NAME};
use quill_source::SourceStore;

use crate::project::Project;
use crate::resolver::{EngineProvider, ProjectResolver};

/// Owns every project served by one process.
///
/// Roots are normalized before lookup, so `/proj/./` and `/proj` share a
/// project. Projects live until the registry is dropped.
pub struct ProjectRegistry {
    projects: BTreeMap<PathBuf, Project>,
    resolver: Box<dyn ProjectResolver>,
    engines: Box<dyn EngineProvider>,
    store: Arc<dyn SourceStore>,
    options: HostOptions,
}

impl ProjectRegistry {
    /// Creates an empty registry.
    pub fn new(
        resolver: Box<dyn ProjectResolver>,
        engines: Box<dyn EngineProvider>,
        store: Arc<dyn SourceStore>,
        options: HostOptions,
    ) -> Self {
        Self {
            projects: BTreeMap::new(),
            resolver,
            engines,
            store,
            options,
        }
    }

    /// Returns the project for `root`, resolving and building it first if
    /// this is the first request for that root.
    pub fn get_or_create(&mut self, root: &Path) -> QuillResult<&mut Project> {
        match self.projects.entry(normalize_path(root)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let resolved = self.resolver.resolve(entry.key())?;
                let engine = self.engines.create(entry.key());
                let project = Project::new(
                    resolved,
                    self.options.clone(),
                    Arc::clone(&self.store),
                    engine,
                );
                Ok(entry.insert(project))
            }
        }
    }

    /// Returns the project for `root` if it exists.
    pub fn get(&self, root: &Path) -> Option<&Project> {
        self.projects.get(&normalize_path(root))
    }

    /// Number of live projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if no project has been created.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Applies a file change to every project. Returns whether any project
    /// tracked the file or was reconfigured by it.
    pub fn file_changed(&mut self, path: &Path) -> bool {
        let mut processed = false;
        if path.file_name().is_some_and(|name| name == CONFIG_FILE_NAME) {
            if let Some(root) = path.parent() {
                processed |= self.reconfigure(root);
            }
        }
        for project in self.projects.values_mut() {
            processed |= project.host_mut().on_file_changed(path);
        }
        processed
    }

    /// Applies a directory change to every project. Projects whose
    /// configuration file lies under `dir` are reconfigured. Returns whether
    /// any project was affected.
    pub fn directory_changed(&mut self, dir: &Path) -> bool {
        let mut processed = false;
        let affected_roots: Vec<PathBuf> = self
            .projects
            .keys()
            .filter(|root| is_within(&root.join(CONFIG_FILE_NAME), dir))
            .cloned()
            .collect();
        for root in &affected_roots {
            processed |= self.reconfigure(root);
        }
        for project in self.projects.values_mut() {
            processed |= project.host_mut().on_directory_changed(dir);
        }
        processed
    }

    /// Re-resolves the configuration of the project at `root`, if it exists.
    fn reconfigure(&mut self, root: &Path) -> bool {
        let Some(project) = self.projects.get_mut(root) else {
            return false;
        };
        match self.resolver.resolve(root) {
            Ok(resolved) => {
                project.reconfigure(resolved);
                true
            }
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "keeping previous configuration");
                false
            }
        }
    }
}
