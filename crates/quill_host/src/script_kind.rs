//! Script kinds inferred from file extensions.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The language variant of a script, decided by its extension.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    /// Any extension not listed below.
    Unknown,
    /// `.js`
    Js,
    /// `.jsx`
    Jsx,
    /// `.ts`, including `.d.ts`
    Ts,
    /// `.tsx`
    Tsx,
}

impl ScriptKind {
    /// Infers the kind from the text after the last `.` in `path`,
    /// case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return ScriptKind::Unknown;
        };
        match ext.to_ascii_lowercase().as_str() {
            "js" => ScriptKind::Js,
            "jsx" => ScriptKind::Jsx,
            "ts" => ScriptKind::Ts,
            "tsx" => ScriptKind::Tsx,
            _ => ScriptKind::Unknown,
        }
    }
}

/// Returns `true` for paths the engine accepts as root scripts: those ending
/// in `.ts` or `.tsx` (so `.d.ts` too). The match is case-sensitive.
pub fn is_script_file_name(path: &Path) -> bool {
    path.to_str()
        .is_some_and(|p| p.ends_with(".ts") || p.ends_with(".tsx"))
}
