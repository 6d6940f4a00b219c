//! Error taxonomy shared by every solving component

use thiserror::Error;

/// Errors that can occur while loading or solving a system.
///
/// All variants are terminal for the current solve attempt; nothing is
/// retried internally. The caller decides whether to abort or retry with a
/// different strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("System order must be at least 2, got {got}")]
    InvalidOrder { got: usize },

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("System is singular: zero pivot at step {step}")]
    SingularSystem { step: usize },

    #[error("Matrix is not positive definite (detected at step {step})")]
    NotPositiveDefinite { step: usize },
}
