//! Script snapshots, source positions, and the source store abstraction.
//!
//! This crate provides the immutable [`ScriptSnapshot`] handed to the analysis
//! engine, zero-based [`Position`] coordinates for diagnostics, and the
//! [`SourceStore`] trait through which the caches read files and directories.
//! [`FsStore`] reads the real filesystem; [`MemoryStore`] keeps everything in
//! memory and is what tests drive. A small comment-aware [`lexer`] is shared
//! by the lint rules and the fallback analysis engine.

#![warn(missing_docs)]

pub mod lexer;
pub mod position;
pub mod snapshot;
pub mod store;

pub use lexer::{tokenize, Token, TokenKind};
pub use position::Position;
pub use snapshot::ScriptSnapshot;
pub use store::{FsStore, MemoryStore, ReadOutcome, SourceStore};
