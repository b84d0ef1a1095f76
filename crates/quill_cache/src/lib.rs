//! In-memory snapshot and directory caches with change-driven invalidation.
//!
//! The [`SnapshotCache`] holds one immutable [`ScriptSnapshot`] per tracked
//! file and refreshes it lazily from a [`SourceStore`] on a miss. The
//! [`DirectoryCache`] memoizes subdirectory listings. [`SourceCache`] owns
//! both, together with the store they read from, and is the single place
//! where file and directory change notifications are applied.
//!
//! Nothing here is persisted: a cache lives exactly as long as the project
//! that owns it.
//!
//! [`ScriptSnapshot`]: quill_source::ScriptSnapshot
//! [`SourceStore`]: quill_source::SourceStore

#![warn(missing_docs)]

pub mod directory;
pub mod snapshot;
pub mod source_cache;

pub use directory::DirectoryCache;
pub use snapshot::SnapshotCache;
pub use source_cache::SourceCache;
