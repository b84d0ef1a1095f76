//! Parsing of `quill.toml` project configuration and process-wide host options.
//!
//! A project is a directory with an optional `quill.toml`. The loader turns
//! it into a strongly-typed [`ProjectConfig`]; [`resolve_project`] then
//! checks it against the files on disk and produces everything the service
//! needs to build a project: opaque [`CompilationSettings`], root files,
//! optional lint configuration, and any configuration diagnostics.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod options;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use options::HostOptions;
pub use resolve::{resolve_project, ResolvedProject};
pub use types::*;
