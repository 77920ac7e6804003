use kutta_core::State;

use super::{Plan, Review, StepKind, Termination, Trial};

/// Integrate until the `(x, y₁)` curve reaches a target length.
///
/// Once a step overshoots the target the policy refines: the step is rolled
/// back and every later step keeps its (halved) size, so the run creeps up
/// on the target instead of jumping past it.
#[derive(Debug, Clone, Copy)]
pub(in crate::transient::adaptive) struct ArcLength {
    target: f64,
    length: f64,
    refining: bool,
}

impl ArcLength {
    pub(in crate::transient::adaptive) fn new(target: f64) -> Self {
        Self {
            target,
            length: 0.0,
            refining: false,
        }
    }
}

/// Chord length between two states in the `(x, y₁)` plane.
fn chord<const N: usize>(from: &State<N>, to: &State<N>) -> f64 {
    let dy = match (from.y.first(), to.y.first()) {
        (Some(a), Some(b)) => b - a,
        _ => 0.0,
    };
    (to.x - from.x).hypot(dy)
}

impl<const N: usize> Termination<N> for ArcLength {
    fn is_reached(&self, _state: &State<N>, edge: f64) -> bool {
        self.target - self.length <= edge
    }

    fn plan(&self, _state: &State<N>, h: f64, _edge: f64) -> Plan {
        Plan { h, landing: false }
    }

    fn review(&mut self, origin: &State<N>, trial: &mut Trial<N>, _plan: Plan) -> Review {
        let increment = chord(origin, &trial.full);

        if self.length + increment > self.target {
            self.refining = true;
            return Review::Rollback { increment };
        }

        self.length += increment;
        if self.refining {
            Review::Fixed(StepKind::Refine)
        } else {
            Review::Adaptive
        }
    }

    fn length(&self) -> Option<f64> {
        Some(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::transient::adaptive::ErrorEstimate;

    fn trial(from: &State<1>, to: State<1>) -> Trial<1> {
        Trial {
            full: to,
            half: to,
            h: to.x - from.x,
            estimate: ErrorEstimate::new(&to.y, &to.y),
        }
    }

    fn plan(h: f64) -> Plan {
        Plan { h, landing: false }
    }

    #[test]
    fn chord_uses_first_component_only() {
        let from = State::new(0.0, [0.0, 100.0]);
        let to = State::new(3.0, [4.0, -100.0]);

        assert_relative_eq!(chord(&from, &to), 5.0);
    }

    #[test]
    fn fitting_step_accumulates_length() {
        let mut policy = ArcLength::new(1.0);
        let origin = State::new(0.0, [0.0]);
        let mut step = trial(&origin, State::new(0.3, [0.4]));

        let review = policy.review(&origin, &mut step, plan(0.3));

        assert_eq!(review, Review::Adaptive);
        assert_relative_eq!(policy.length, 0.5);
    }

    #[test]
    fn overshooting_step_rolls_back_then_refines() {
        let mut policy = ArcLength::new(1.0);
        let origin = State::new(0.0, [0.0]);

        let mut long = trial(&origin, State::new(3.0, [4.0]));
        let review = policy.review(&origin, &mut long, plan(3.0));
        let Review::Rollback { increment } = review else {
            panic!("expected rollback, got {review:?}");
        };
        assert_relative_eq!(increment, 5.0);
        assert_eq!(policy.length, 0.0);

        let mut short = trial(&origin, State::new(0.3, [0.4]));
        let review = policy.review(&origin, &mut short, plan(0.3));
        assert_eq!(review, Review::Fixed(StepKind::Refine));
        assert_relative_eq!(policy.length, 0.5);
    }

    #[test]
    fn reached_within_edge_of_target() {
        let mut policy = ArcLength::new(1.0);
        let state = State::new(0.0, [0.0]);
        assert!(!Termination::<1>::is_reached(&policy, &state, 1e-6));

        policy.length = 1.0 - 1e-7;
        assert!(Termination::<1>::is_reached(&policy, &state, 1e-6));
    }
}
