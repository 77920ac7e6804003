use kutta_core::State;

use super::Counters;

/// Indicates how the adaptive solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the bound (within the configured edge).
    Reached,

    /// Used up the step budget before reaching the bound.
    MaxSteps,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// The last committed state.
    pub state: State<N>,

    /// The step size the controller would have tried next.
    pub h: f64,

    /// Controller activity over the whole run.
    pub counters: Counters,

    /// Accumulated arc length, for arc-length runs only.
    pub length: Option<f64>,
}
