//! Capability traits for cross-solver observers.
//!
//! The fixed-step and adaptive solvers emit different event and action types.
//! These traits expose what the two have in common so one observer can watch
//! either solver.
//!
//! - [`HasState`]: events that may carry a state on the solution curve
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use kutta_core::{Observer, State};
//! use kutta_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops a run once the first component leaves `[-limit, limit]`.
//! struct Fence {
//!     limit: f64,
//! }
//!
//! impl<E: HasState<1>, A: CanStopEarly> Observer<E, A> for Fence {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let escaped = event.state().is_some_and(|s| s.y[0].abs() > self.limit);
//!         escaped.then(A::stop_early)
//!     }
//! }
//! ```

use kutta_core::State;

use kutta_solvers::transient::{adaptive, fixed};

/// An event that may carry a state on the solution curve.
pub trait HasState<const N: usize> {
    /// Returns the state the solution moved to, or `None` if the event did
    /// not advance the solution.
    fn state(&self) -> Option<&State<N>>;

    /// Returns the step size that produced [`state`](HasState::state), if
    /// the solver reports one.
    fn step_size(&self) -> Option<f64> {
        None
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<const N: usize> HasState<N> for adaptive::Event<N> {
    fn state(&self) -> Option<&State<N>> {
        match self {
            adaptive::Event::Started { state, .. } => Some(state),
            adaptive::Event::Accepted(record) => Some(&record.state),
            adaptive::Event::Rejected { .. } | adaptive::Event::RolledBack { .. } => None,
        }
    }

    fn step_size(&self) -> Option<f64> {
        self.record().map(|record| record.h)
    }
}

impl<const N: usize> HasState<N> for fixed::Event<N> {
    fn state(&self) -> Option<&State<N>> {
        Some(&self.state)
    }
}

impl CanStopEarly for adaptive::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fixed::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
