use kutta_core::State;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No further full step fits below the bound.
    Complete,

    /// Took the maximum number of steps before reaching the bound.
    MaxSteps,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// The last state reached.
    pub state: State<N>,

    /// Every state visited, including the initial one.
    pub history: Vec<State<N>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<const N: usize> Solution<N> {
    pub(super) fn new(
        status: Status,
        state: State<N>,
        history: Vec<State<N>>,
        steps: usize,
    ) -> Self {
        Self {
            status,
            state,
            history,
            steps,
        }
    }
}
