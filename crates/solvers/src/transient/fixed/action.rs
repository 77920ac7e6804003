/// What an observer can ask of the fixed-step solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Halt with the history recorded so far.
    StopEarly,
}
