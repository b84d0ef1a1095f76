//! Project registry, diagnostics orchestration, and the three boundary
//! operations.
//!
//! A [`Service`] owns one [`ProjectRegistry`]. Each project root maps to a
//! [`Project`] holding its host adapter, its analysis engine, its lint
//! engine, and its configuration diagnostics. Requests resolve the project
//! lazily, push the caller's content into the host, and run the staged
//! pipeline in [`pipeline`]:
//!
//! 1. configuration errors, if any, are the whole answer;
//! 2. declaration, semantic, then syntactic engine diagnostics;
//! 3. lint findings, when the project enables lint;
//! 4. otherwise a clean report.
//!
//! Change notifications fan out to every project's cache.

#![warn(missing_docs)]

pub mod error;
pub mod notification;
pub mod pipeline;
pub mod project;
pub mod registry;
pub mod resolver;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ServiceError;
pub use notification::{ChangeKind, FileChange, FileChangeNotification};
pub use pipeline::CompletionReport;
pub use project::Project;
pub use registry::ProjectRegistry;
pub use resolver::{EngineProvider, ProjectResolver, TomlProjectResolver};
pub use service::Service;
