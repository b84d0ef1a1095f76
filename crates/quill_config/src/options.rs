//! Process-wide options shared by every project host.

use std::path::PathBuf;

/// Options that apply to every project served by one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOptions {
    /// Whether file names are compared case-sensitively. Defaults to `true`
    /// regardless of the underlying filesystem.
    pub case_sensitive_file_names: bool,
    /// Directory holding the toolchain's default library files. The default
    /// library is always looked up here, never inside a project.
    pub toolchain_lib_dir: PathBuf,
}

impl HostOptions {
    /// Options with the given toolchain library directory and defaults for
    /// everything else.
    pub fn with_toolchain_lib_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            toolchain_lib_dir: dir.into(),
            ..Self::default()
        }
    }
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            case_sensitive_file_names: true,
            toolchain_lib_dir: PathBuf::from("lib"),
        }
    }
}
