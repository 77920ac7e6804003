use crate::transient::Overflow;

/// Errors that can occur during fixed-step integration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Overflow(#[from] Overflow),

    #[error("step size must be positive and finite (got {0})")]
    InvalidStepSize(f64),
}
