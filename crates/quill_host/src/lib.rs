//! The analysis host adapter and the analysis engine contract.
//!
//! An [`AnalysisEngine`] never touches the filesystem. Everything it needs
//! (settings, file names, versions, snapshots, directory structure) it asks
//! of an [`AnalysisHost`]. [`LanguageServiceHost`] implements that query
//! surface over a project's [`SourceCache`](quill_cache::SourceCache),
//! refreshing lazily on cache misses.

#![warn(missing_docs)]

pub mod engine;
pub mod host;
pub mod lib_file;
pub mod message;
pub mod script_kind;
pub mod service_host;

pub use engine::{AnalysisEngine, CompletionEntry, DiagnosticLocation, EngineDiagnostic, EngineError};
pub use host::AnalysisHost;
pub use lib_file::default_lib_file_name;
pub use message::MessageChain;
pub use script_kind::ScriptKind;
pub use service_host::LanguageServiceHost;
