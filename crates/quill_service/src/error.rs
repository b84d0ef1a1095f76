//! Error types for failed service requests.

use quill_common::InternalError;
use quill_host::EngineError;

/// A request that could not produce a report.
///
/// Diagnostics and lint findings are never errors; they are report content.
/// This type covers the failures that leave the caller without an answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The analysis engine failed.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// An unexpected internal failure.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_is_transparent() {
        let err: ServiceError = EngineError::Internal("parser crashed".into()).into();
        assert_eq!(err.to_string(), "analysis engine failure: parser crashed");
    }

    #[test]
    fn internal_error_is_transparent() {
        let err: ServiceError = InternalError::new("registry corrupted").into();
        assert_eq!(err.to_string(), "internal error: registry corrupted");
    }
}
