//! Engine error types.

use thiserror::Error;

/// Errors that can occur while computing assignments.
///
/// `NotFound` and `Validation` are input problems surfaced to the caller
/// as-is. `CoverageMismatch` and `Internal` indicate a logic defect in
/// packing or resolution and must fail the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(
        "not all redundant assignments accounted for: {accounted} / {expected} expected in period"
    )]
    CoverageMismatch { accounted: usize, expected: usize },

    #[error("internal error: {0}")]
    Internal(String),

    /// A collaborator's backing store failed. Returned by `PeriodSource`,
    /// `ItemSource`, `WorkerSource` and `SettingsSource` implementations.
    #[error("source error: {0}")]
    Source(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Whether this error signals a defect in the engine rather than bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CoverageMismatch { .. } | Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_accounting() {
        let err = EngineError::CoverageMismatch {
            accounted: 7,
            expected: 9,
        };
        assert_eq!(
            err.to_string(),
            "not all redundant assignments accounted for: 7 / 9 expected in period"
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_input_errors_are_not_fatal() {
        assert!(!EngineError::NotFound("Period".into()).is_fatal());
        assert!(!EngineError::Validation("bad".into()).is_fatal());
        assert!(!EngineError::Source("timeout".into()).is_fatal());
        assert!(EngineError::Internal("empty stack".into()).is_fatal());
    }
}
