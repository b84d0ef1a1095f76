//! Configuration file loading and validation.

use std::path::Path;

use quill_source::{ReadOutcome, SourceStore};

use crate::error::ConfigError;
use crate::types::ProjectConfig;

/// File name of the per-project configuration.
pub const CONFIG_FILE_NAME: &str = "quill.toml";

/// Loads and validates `<project_dir>/quill.toml` through `store`.
///
/// A missing file is not an error: it yields the default configuration.
pub fn load_config(store: &dyn SourceStore, project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    match store.read_text(&config_path) {
        ReadOutcome::Found(content) => load_config_from_str(&content),
        ReadOutcome::Absent => {
            tracing::debug!(dir = %project_dir.display(), "no {CONFIG_FILE_NAME}, using defaults");
            Ok(ProjectConfig::default())
        }
    }
}

/// Parses and validates a `quill.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are consistent.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.files.iter().any(|f| f.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "files must not contain empty paths".to_string(),
        ));
    }
    if let Some(lint) = &config.lint {
        if lint.max_line_length == 0 {
            return Err(ConfigError::ValidationError(
                "lint.max_line_length must be positive".to_string(),
            ));
        }
    }
    Ok(())
}
