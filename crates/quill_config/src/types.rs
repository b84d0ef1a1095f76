//! Configuration types deserialized from `quill.toml`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Line length limit used when `[lint]` does not set `max_line_length`.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;

/// The top-level `quill.toml` document.
///
/// Every section is optional; an absent file is equivalent to an empty one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Root files, relative to the project directory.
    #[serde(default)]
    pub files: Vec<String>,
    /// Compiler options, handed to the analysis engine without interpretation.
    #[serde(default)]
    pub compiler: toml::Table,
    /// Lint configuration. Its presence enables the lint stage.
    #[serde(default)]
    pub lint: Option<LintConfig>,
}

/// The `[lint]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Rule names or codes to suppress.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Maximum line length for the `max-line-length` rule.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            allow: Vec::new(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Compiler settings as an opaque JSON object.
///
/// The host stores and exposes these verbatim. Only `target` is ever read
/// back, to pick the default library file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompilationSettings(Map<String, Value>);

impl CompilationSettings {
    /// Wraps an existing JSON object.
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Converts a `[compiler]` TOML table into JSON.
    pub fn from_toml(table: &toml::Table) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(table)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Ok(Self::default()),
        }
    }

    /// Looks up one setting.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `target` setting, if present and a string.
    pub fn target(&self) -> Option<&str> {
        self.get("target").and_then(Value::as_str)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns `true` if no setting is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
