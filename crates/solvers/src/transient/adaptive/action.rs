/// What an observer can ask of the adaptive solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Halt after the current event.
    ///
    /// The solution keeps the last committed state and reports
    /// [`Status::StoppedByObserver`](super::Status::StoppedByObserver).
    StopEarly,
}
