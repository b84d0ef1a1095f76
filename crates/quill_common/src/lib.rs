//! Shared foundational types used across the Quill analysis host.
//!
//! This crate provides the content hash used as a script version token,
//! path helpers shared by the caches and the host adapter, and the internal
//! error type surfaced when an analysis request cannot complete.

#![warn(missing_docs)]

pub mod hash;
pub mod path;
pub mod result;

pub use hash::{ContentHash, ParseContentHashError};
pub use path::{combine_paths, is_within, normalize_path};
pub use result::{InternalError, QuillResult};
