use crate::transient::Overflow;

/// Errors that can occur during adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Overflow(#[from] Overflow),

    #[error("initial step size must be positive and finite (got {0})")]
    InvalidStepSize(f64),

    #[error("bound must be finite and ahead of the initial state (got {0})")]
    InvalidBound(f64),

    #[error("initial state must be finite")]
    NonFiniteInitialState,
}
