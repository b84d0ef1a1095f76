//! The query surface an analysis engine uses to see a project.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use quill_common::ContentHash;
use quill_config::CompilationSettings;
use quill_source::ScriptSnapshot;

use crate::script_kind::ScriptKind;

/// Everything an [`AnalysisEngine`](crate::AnalysisEngine) may ask about a
/// project.
///
/// All methods take `&self` because the engine holds the host by shared
/// reference for the duration of a query. Implementations that refresh
/// caches lazily must use interior mutability. None of these methods may
/// fail: absence is expressed by `None`, `false`, or an empty list.
pub trait AnalysisHost {
    /// The project's compiler settings, verbatim.
    fn compilation_settings(&self) -> &CompilationSettings;

    /// The line terminator the engine should use when joining text.
    fn new_line(&self) -> &str;

    /// Tracked files the engine treats as roots (`.ts`/`.tsx` only).
    fn script_file_names(&self) -> Vec<PathBuf>;

    /// The language variant of `path`.
    fn script_kind(&self, path: &Path) -> ScriptKind;

    /// The version token of `path`, or `None` if it has no content.
    fn script_version(&self, path: &Path) -> Option<ContentHash>;

    /// The current snapshot of `path`, or `None` if it has no content.
    fn script_snapshot(&self, path: &Path) -> Option<Arc<ScriptSnapshot>>;

    /// The project root.
    fn current_directory(&self) -> &Path;

    /// The default library file for `settings`, inside the toolchain.
    fn default_lib_file_name(&self, settings: &CompilationSettings) -> PathBuf;

    /// Whether file names compare case-sensitively.
    fn use_case_sensitive_file_names(&self) -> bool;

    /// Returns `true` if `path` is a directory.
    fn directory_exists(&self, path: &Path) -> bool;

    /// Sorted subdirectory names of `path`.
    fn directories(&self, path: &Path) -> Vec<String>;

    /// Receives engine trace output.
    fn trace(&self, message: &str);

    /// Receives engine error output.
    fn error(&self, message: &str);
}
