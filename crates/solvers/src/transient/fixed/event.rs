use kutta_core::State;

/// Event emitted by the fixed-step solver for each state.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<const N: usize> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The state reached at this step.
    pub state: State<N>,
}
