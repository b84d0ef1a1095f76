//! The host adapter over a project's source cache.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quill_cache::SourceCache;
use quill_common::ContentHash;
use quill_config::{CompilationSettings, HostOptions};
use quill_source::{ScriptSnapshot, SourceStore};

use crate::host::AnalysisHost;
use crate::lib_file::default_lib_file_name;
use crate::script_kind::{is_script_file_name, ScriptKind};

/// Line terminator reported to the engine.
const NEW_LINE: &str = "\n";

/// Serves one project's files to the analysis engine.
///
/// Owns the project's [`SourceCache`]. Engine queries arrive through
/// [`AnalysisHost`] with `&self`, and cache misses during those queries are
/// filled through a `RefCell`; each borrow ends before the method returns,
/// so nested engine calls never overlap. Change notifications and pushed
/// content take `&mut self`.
#[derive(Debug)]
pub struct LanguageServiceHost {
    root: PathBuf,
    settings: CompilationSettings,
    options: HostOptions,
    cache: RefCell<SourceCache>,
}

impl LanguageServiceHost {
    /// Creates a host for the project at `root` with an empty cache.
    pub fn new(
        root: impl Into<PathBuf>,
        settings: CompilationSettings,
        options: HostOptions,
        store: Arc<dyn SourceStore>,
    ) -> Self {
        Self {
            root: root.into(),
            settings,
            options,
            cache: RefCell::new(SourceCache::new(store)),
        }
    }

    /// Reads each of `files` into the cache. Returns how many had content.
    pub fn preload(&mut self, files: &[PathBuf]) -> usize {
        let cache = self.cache.get_mut();
        files
            .iter()
            .filter(|path| cache.snapshot(path).is_some())
            .count()
    }

    /// Pushes caller-supplied content for `path` and returns the resulting
    /// version. Empty content re-reads the file from the store instead.
    pub fn set_content(&mut self, path: &Path, text: &str) -> Option<ContentHash> {
        self.cache
            .get_mut()
            .set_content(path, text)
            .map(|s| s.version())
    }

    /// Applies a file change. Returns whether the file was tracked.
    pub fn on_file_changed(&mut self, path: &Path) -> bool {
        self.cache.get_mut().on_file_changed(path)
    }

    /// Applies a directory change to the subtree below `dir`.
    pub fn on_directory_changed(&mut self, dir: &Path) -> bool {
        self.cache.get_mut().on_directory_changed(dir)
    }

    /// Replaces the compiler settings.
    pub fn update_settings(&mut self, settings: CompilationSettings) {
        self.settings = settings;
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The process-wide options this host was built with.
    pub fn options(&self) -> &HostOptions {
        &self.options
    }

    /// All tracked files, script or not.
    pub fn tracked_files(&self) -> Vec<PathBuf> {
        self.cache.borrow().tracked_files()
    }
}

impl AnalysisHost for LanguageServiceHost {
    fn compilation_settings(&self) -> &CompilationSettings {
        &self.settings
    }

    fn new_line(&self) -> &str {
        NEW_LINE
    }

    fn script_file_names(&self) -> Vec<PathBuf> {
        self.cache
            .borrow()
            .tracked_files()
            .into_iter()
            .filter(|p| is_script_file_name(p))
            .collect()
    }

    fn script_kind(&self, path: &Path) -> ScriptKind {
        ScriptKind::from_path(path)
    }

    fn script_version(&self, path: &Path) -> Option<ContentHash> {
        self.cache.borrow_mut().version(path)
    }

    fn script_snapshot(&self, path: &Path) -> Option<Arc<ScriptSnapshot>> {
        self.cache.borrow_mut().snapshot(path)
    }

    fn current_directory(&self) -> &Path {
        &self.root
    }

    fn default_lib_file_name(&self, settings: &CompilationSettings) -> PathBuf {
        default_lib_file_name(&self.options.toolchain_lib_dir, settings.target())
    }

    fn use_case_sensitive_file_names(&self) -> bool {
        self.options.case_sensitive_file_names
    }

    fn directory_exists(&self, path: &Path) -> bool {
        self.cache.borrow_mut().directory_exists(path)
    }

    fn directories(&self, path: &Path) -> Vec<String> {
        self.cache.borrow_mut().directories(path)
    }

    fn trace(&self, message: &str) {
        tracing::info!(root = %self.root.display(), "engine trace: {message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(root = %self.root.display(), "engine error: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_source::MemoryStore;
    use serde_json::{json, Map, Value};

    fn settings(target: &str) -> CompilationSettings {
        let mut map = Map::new();
        map.insert("target".into(), Value::from(target));
        CompilationSettings::new(map)
    }

    fn host_over(store: &Arc<MemoryStore>) -> LanguageServiceHost {
        LanguageServiceHost::new(
            "/proj",
            settings("es2017"),
            HostOptions::with_toolchain_lib_dir("/opt/ts/lib"),
            Arc::clone(store) as Arc<dyn SourceStore>,
        )
    }

    #[test]
    fn preload_reads_root_files() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/proj/src/a.ts", "a");
        store.write_file("/proj/src/b.ts", "b");
        let mut host = host_over(&store);
        let loaded = host.preload(&[
            PathBuf::from("/proj/src/a.ts"),
            PathBuf::from("/proj/src/b.ts"),
            PathBuf::from("/proj/src/missing.ts"),
        ]);
        assert_eq!(loaded, 2);
        assert_eq!(host.tracked_files().len(), 2);
        assert_eq!(store.read_count(), 3);
    }

    #[test]
    fn script_file_names_filter_extensions() {
        let store = Arc::new(MemoryStore::new());
        let mut host = host_over(&store);
        host.set_content(Path::new("/proj/a.ts"), "a");
        host.set_content(Path::new("/proj/b.tsx"), "b");
        host.set_content(Path::new("/proj/types.d.ts"), "c");
        host.set_content(Path::new("/proj/c.js"), "d");
        host.set_content(Path::new("/proj/data.json"), "{}");
        assert_eq!(
            host.script_file_names(),
            vec![
                PathBuf::from("/proj/a.ts"),
                PathBuf::from("/proj/b.tsx"),
                PathBuf::from("/proj/types.d.ts"),
            ]
        );
        assert_eq!(host.tracked_files().len(), 5);
    }

    #[test]
    fn version_and_snapshot_are_lazy() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/proj/a.ts", "let a;");
        let host = host_over(&store);
        assert_eq!(
            host.script_version(Path::new("/proj/a.ts")),
            Some(ContentHash::of_text("let a;"))
        );
        let snap = host.script_snapshot(Path::new("/proj/a.ts")).unwrap();
        assert_eq!(snap.text(), "let a;");
        assert_eq!(store.read_count(), 1);
        assert!(host.script_snapshot(Path::new("/proj/none.ts")).is_none());
        assert!(host.script_version(Path::new("/proj/none.ts")).is_none());
    }

    #[test]
    fn pushed_content_wins_until_file_change() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/proj/a.ts", "disk");
        let mut host = host_over(&store);
        let pushed = host.set_content(Path::new("/proj/a.ts"), "buffer");
        assert_eq!(pushed, Some(ContentHash::of_text("buffer")));
        assert_eq!(host.script_version(Path::new("/proj/a.ts")), pushed);

        assert!(host.on_file_changed(Path::new("/proj/a.ts")));
        assert_eq!(
            host.script_version(Path::new("/proj/a.ts")),
            Some(ContentHash::of_text("disk"))
        );
    }

    #[test]
    fn directory_queries() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/proj/src/a.ts", "a");
        store.write_file("/proj/node_modules/x/index.d.ts", "x");
        let host = host_over(&store);
        assert!(host.directory_exists(Path::new("/proj")));
        assert!(!host.directory_exists(Path::new("/proj/src/a.ts")));
        assert_eq!(
            host.directories(Path::new("/proj")),
            vec!["node_modules", "src"]
        );
    }

    #[test]
    fn directories_of_non_directories_stay_absent() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/proj/src/a.ts", "a");
        let host = host_over(&store);

        assert!(host.directories(Path::new("/proj/node_modules")).is_empty());
        assert!(!host.directory_exists(Path::new("/proj/node_modules")));

        assert!(host.directories(Path::new("/proj/src/a.ts")).is_empty());
        assert!(!host.directory_exists(Path::new("/proj/src/a.ts")));

        assert_eq!(host.directories(Path::new("/proj")), vec!["src"]);
    }

    #[test]
    fn default_lib_comes_from_toolchain() {
        let store = Arc::new(MemoryStore::new());
        let host = host_over(&store);
        assert_eq!(
            host.default_lib_file_name(host.compilation_settings()),
            PathBuf::from("/opt/ts/lib/lib.es2017.full.d.ts")
        );
        assert_eq!(
            host.default_lib_file_name(&settings("es5")),
            PathBuf::from("/opt/ts/lib/lib.d.ts")
        );
    }

    #[test]
    fn settings_are_verbatim_and_replaceable() {
        let store = Arc::new(MemoryStore::new());
        let mut host = host_over(&store);
        assert_eq!(
            serde_json::to_value(host.compilation_settings()).unwrap(),
            json!({ "target": "es2017" })
        );
        host.update_settings(settings("esnext"));
        assert_eq!(host.compilation_settings().target(), Some("esnext"));
    }

    #[test]
    fn fixed_host_answers() {
        let store = Arc::new(MemoryStore::new());
        let host = host_over(&store);
        assert_eq!(host.new_line(), "\n");
        assert_eq!(host.current_directory(), Path::new("/proj"));
        assert!(host.use_case_sensitive_file_names());
        assert_eq!(host.script_kind(Path::new("/proj/a.tsx")), ScriptKind::Tsx);
        host.trace("tracing works");
        host.error("errors are logged, not raised");
    }

    #[test]
    fn case_sensitivity_is_configurable() {
        let store = Arc::new(MemoryStore::new());
        let options = HostOptions {
            case_sensitive_file_names: false,
            ..HostOptions::default()
        };
        let host = LanguageServiceHost::new(
            "/proj",
            CompilationSettings::default(),
            options,
            store as Arc<dyn SourceStore>,
        );
        assert!(!host.use_case_sensitive_file_names());
    }
}
