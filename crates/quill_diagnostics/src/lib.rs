//! Diagnostic entries, reports, and terminal rendering.
//!
//! Every stage of the diagnostics pipeline produces [`DiagnosticEntry`]
//! values tagged with a [`DiagnosticKind`]. Compiler-originated entries carry
//! their [`DiagnosticCode`] as a `TS<n>: ` message prefix. A request answers
//! with a single [`Report`], which serializes to `{ "errors": [...] }`.

#![warn(missing_docs)]

pub mod code;
pub mod entry;
pub mod kind;
pub mod renderer;
pub mod report;

pub use code::DiagnosticCode;
pub use entry::DiagnosticEntry;
pub use kind::DiagnosticKind;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use report::Report;
