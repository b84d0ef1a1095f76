//! Project resolution: configuration plus the checks that need the store.

use std::path::{Path, PathBuf};

use quill_common::combine_paths;
use quill_diagnostics::{DiagnosticCode, DiagnosticEntry};
use quill_source::{ReadOutcome, SourceStore};

use crate::error::ConfigError;
use crate::loader::{load_config, CONFIG_FILE_NAME};
use crate::types::{CompilationSettings, LintConfig, ProjectConfig};

/// Everything needed to build one project.
#[derive(Debug, Clone, Default)]
pub struct ResolvedProject {
    /// The project directory.
    pub root: PathBuf,
    /// Compiler settings for the analysis engine.
    pub settings: CompilationSettings,
    /// Absolute paths of the configured root files that exist.
    pub root_files: Vec<PathBuf>,
    /// Lint configuration, if the lint stage is enabled.
    pub lint: Option<LintConfig>,
    /// Configuration diagnostics. When non-empty, every diagnostics request
    /// for this project answers with exactly these.
    pub errors: Vec<DiagnosticEntry>,
}

impl ResolvedProject {
    /// Returns `true` if the configuration produced diagnostics.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Loads `quill.toml` under `root` and checks it against the store.
///
/// Never fails: a configuration that cannot be parsed or converted yields a
/// `TS5014` diagnostic, and every listed file that cannot be read yields a
/// `TS6053` diagnostic.
pub fn resolve_project(store: &dyn SourceStore, root: &Path) -> ResolvedProject {
    let config_path = root.join(CONFIG_FILE_NAME);
    let mut resolved = ResolvedProject {
        root: root.to_path_buf(),
        ..ResolvedProject::default()
    };

    let config = match load_config(store, root).and_then(|c| convert(c, &mut resolved)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(config = %config_path.display(), error = %e, "invalid project configuration");
            resolved.errors.push(parse_failure(&config_path, &e));
            return resolved;
        }
    };

    for file in &config.files {
        let path = combine_paths(root, file);
        match store.read_text(&path) {
            ReadOutcome::Found(_) => resolved.root_files.push(path),
            ReadOutcome::Absent => resolved.errors.push(DiagnosticEntry::configuration(
                DiagnosticCode::FILE_NOT_FOUND,
                &format!("File '{}' not found.", path.display()),
            )),
        }
    }
    resolved.lint = config.lint;
    resolved
}

fn convert(config: ProjectConfig, resolved: &mut ResolvedProject) -> Result<ProjectConfig, ConfigError> {
    resolved.settings = CompilationSettings::from_toml(&config.compiler)
        .map_err(|e| ConfigError::ValidationError(format!("compiler: {e}")))?;
    Ok(config)
}

fn parse_failure(config_path: &Path, err: &ConfigError) -> DiagnosticEntry {
    let detail = match err {
        ConfigError::ParseError(msg) | ConfigError::ValidationError(msg) => msg.trim_end(),
    };
    DiagnosticEntry::configuration(
        DiagnosticCode::CONFIG_PARSE,
        &format!("Failed to parse file '{}': {detail}.", config_path.display()),
    )
}
