//! Post-run report of an adaptive integration.

use std::fmt;

use kutta_core::Observer;
use kutta_solvers::transient::adaptive::{self, Counters};

use crate::Reference;

/// A value paired with the `x` at which it occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct At {
    /// Where the value occurred.
    pub x: f64,

    /// The value.
    pub value: f64,
}

/// Collects extremes over the accepted steps of an adaptive run.
///
/// Steps are attributed to the `x` they end at. The deviation from a
/// reference solution compares the first component only.
#[derive(Default)]
pub struct Summary {
    reference: Option<Reference>,
    max_error: Option<At>,
    largest_step: Option<At>,
    smallest_step: Option<At>,
    max_deviation: Option<At>,
    counters: Counters,
    length: Option<f64>,
    last_x: Option<f64>,
}

fn keep(slot: &mut Option<At>, candidate: At, better: impl Fn(f64, f64) -> bool) {
    if slot.is_none_or(|current| better(candidate.value, current.value)) {
        *slot = Some(candidate);
    }
}

impl Summary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks the largest `|u - y1|` against an exact solution.
    #[must_use]
    pub fn reference(mut self, exact: impl Fn(f64) -> f64 + 'static) -> Self {
        self.reference = Some(Box::new(exact));
        self
    }

    /// Largest full-step error estimate.
    #[must_use]
    pub fn max_error(&self) -> Option<At> {
        self.max_error
    }

    /// Largest accepted step size.
    #[must_use]
    pub fn largest_step(&self) -> Option<At> {
        self.largest_step
    }

    /// Smallest accepted step size.
    #[must_use]
    pub fn smallest_step(&self) -> Option<At> {
        self.smallest_step
    }

    /// Largest deviation from the reference solution, if one was given.
    #[must_use]
    pub fn max_deviation(&self) -> Option<At> {
        self.max_deviation
    }

    /// Counters as of the last accepted step.
    #[must_use]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    fn absorb<const N: usize>(&mut self, record: &adaptive::Record<N>) {
        let x = record.state.x;
        let at = |value| At { x, value };

        keep(&mut self.max_error, at(record.estimate.full_step()), |a, b| a > b);
        keep(&mut self.largest_step, at(record.h), |a, b| a > b);
        keep(&mut self.smallest_step, at(record.h), |a, b| a < b);

        if let (Some(exact), Some(y)) = (&self.reference, record.state.y.first()) {
            keep(&mut self.max_deviation, at((exact(x) - y).abs()), |a, b| a > b);
        }

        self.counters = record.counters;
        self.length = record.length;
        self.last_x = Some(x);
    }
}

impl<A, const N: usize> Observer<adaptive::Event<N>, A> for Summary {
    fn observe(&mut self, event: &adaptive::Event<N>) -> Option<A> {
        if let Some(record) = event.record() {
            self.absorb(record);
        }
        None
    }
}

impl<A, const N: usize> Observer<adaptive::Event<N>, A> for &mut Summary {
    fn observe(&mut self, event: &adaptive::Event<N>) -> Option<A> {
        Observer::<adaptive::Event<N>, A>::observe(&mut **self, event)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(last_x) = self.last_x else {
            return writeln!(f, "no accepted steps");
        };

        writeln!(
            f,
            "accepted {} steps ({} rejected, {} doubled), ending at x = {last_x}",
            self.counters.accepted, self.counters.rejected, self.counters.doubled,
        )?;
        if let Some(length) = self.length {
            writeln!(f, "arc length {length}")?;
        }
        if let Some(At { x, value }) = self.max_error {
            writeln!(f, "max error estimate {value:e} at x = {x}")?;
        }
        if let Some(At { x, value }) = self.largest_step {
            writeln!(f, "largest step {value} at x = {x}")?;
        }
        if let Some(At { x, value }) = self.smallest_step {
            writeln!(f, "smallest step {value} at x = {x}")?;
        }
        if let Some(At { x, value }) = self.max_deviation {
            writeln!(f, "max |u - y1| {value:e} at x = {x}")?;
        }
        Ok(())
    }
}
