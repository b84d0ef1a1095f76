//! Numeric compiler diagnostic codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A compiler diagnostic code, displayed as `TS` followed by the number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticCode(pub u32);

impl DiagnosticCode {
    /// The configuration file could not be parsed.
    pub const CONFIG_PARSE: DiagnosticCode = DiagnosticCode(5014);
    /// A file listed in the configuration does not exist.
    pub const FILE_NOT_FOUND: DiagnosticCode = DiagnosticCode(6053);

    /// The numeric value.
    pub fn number(self) -> u32 {
        self.0
    }

    /// Prefixes `message` with this code, e.g. `TS2304: Cannot find name 'x'`.
    pub fn prefix(self, message: &str) -> String {
        format!("{self}: {message}")
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TS{}", self.0)
    }
}
