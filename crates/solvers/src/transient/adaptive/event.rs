use kutta_core::State;

use super::{Counters, ErrorEstimate};

/// Events emitted by the adaptive solver.
///
/// A run emits [`Event::Started`] once, then one event per attempted step.
/// Only [`Event::Accepted`] moves the solution forward; the other step
/// events leave the state where it was and halve the step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<const N: usize> {
    /// The run is about to take its first step.
    Started {
        /// The initial state.
        state: State<N>,

        /// The initial step size.
        h: f64,
    },

    /// The error estimate exceeded the tolerance.
    Rejected {
        /// The state the step started from, which is kept.
        origin: State<N>,

        /// The rejected step size.
        h: f64,

        /// The estimate that caused the rejection.
        estimate: ErrorEstimate<N>,

        /// Counters after the rejection.
        counters: Counters,
    },

    /// An error-accepted step would have pushed the arc length past its target.
    RolledBack {
        /// The state the step started from, which is kept.
        origin: State<N>,

        /// The rolled-back step size.
        h: f64,

        /// Arc length the step would have added.
        increment: f64,

        /// Accumulated arc length, unchanged by the rollback.
        length: f64,

        /// Counters after the rollback.
        counters: Counters,
    },

    /// A step was committed.
    Accepted(Record<N>),
}

/// How a committed step was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Error well below tolerance; the next step is twice as long.
    Grow,

    /// Error within tolerance; the step size is kept.
    Steady,

    /// Arc-length refinement after a rollback; the step size is kept.
    Refine,

    /// Final step onto the domain bound.
    Landing,
}

/// Diagnostic record for one committed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<const N: usize> {
    /// How the step was classified.
    pub kind: StepKind,

    /// The committed state, from the full step.
    pub state: State<N>,

    /// Dependent variables from the two half steps.
    pub half: [f64; N],

    /// The step size used.
    pub h: f64,

    /// Local error estimate for the step.
    pub estimate: ErrorEstimate<N>,

    /// Counters after the step was committed.
    pub counters: Counters,

    /// Accumulated arc length, for arc-length runs only.
    pub length: Option<f64>,
}

impl<const N: usize> Record<N> {
    /// Returns `y_full - y_half` per component.
    #[must_use]
    pub fn difference(&self) -> [f64; N] {
        std::array::from_fn(|i| self.state.y[i] - self.half[i])
    }
}

impl<const N: usize> Event<N> {
    /// Returns the committed record, if this event carries one.
    #[must_use]
    pub fn record(&self) -> Option<&Record<N>> {
        match self {
            Self::Accepted(record) => Some(record),
            _ => None,
        }
    }
}
