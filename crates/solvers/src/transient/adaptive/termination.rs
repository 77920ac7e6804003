//! Rules deciding where an adaptive run stops.

mod arc_length;
mod domain;

pub(super) use arc_length::ArcLength;
pub(super) use domain::Domain;

use kutta_core::State;

use super::{StepKind, trial::Trial};

/// The step the controller should attempt next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Plan {
    pub(super) h: f64,
    pub(super) landing: bool,
}

/// What to do with a step whose error estimate was acceptable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Review {
    /// Commit and let the error estimate pick the next step size.
    Adaptive,

    /// Commit as the given kind and keep the step size.
    Fixed(StepKind),

    /// Discard the step and retry from the same origin with half the size.
    Rollback { increment: f64 },
}

/// A termination policy for the adaptive controller.
pub(super) trait Termination<const N: usize> {
    /// Returns `true` once the run is within `edge` of its bound.
    fn is_reached(&self, state: &State<N>, edge: f64) -> bool;

    /// Chooses the next step given the controller's current step size.
    fn plan(&self, state: &State<N>, h: f64, edge: f64) -> Plan;

    /// Reviews an error-accepted trial before it is committed.
    ///
    /// The policy may adjust the trial in place, for example to snap it onto
    /// the bound.
    fn review(&mut self, origin: &State<N>, trial: &mut Trial<N>, plan: Plan) -> Review;

    /// Returns the accumulated arc length, if the policy tracks one.
    fn length(&self) -> Option<f64>;
}
