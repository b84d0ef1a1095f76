//! Common result and error types for the Quill host.

/// The standard result type for fallible internal operations.
///
/// `Err` marks an unexpected failure inside the host (a bug, or a broken
/// collaborator), never a user-facing finding. Findings about the analyzed
/// code travel as diagnostic entries and the operation still returns `Ok`.
pub type QuillResult<T> = Result<T, InternalError>;

/// An internal error indicating that a request could not be analyzed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
