use kutta_core::State;

use super::{Plan, Review, StepKind, Termination, Trial};

/// Integrate up to a fixed bound on `x`.
#[derive(Debug, Clone, Copy)]
pub(in crate::transient::adaptive) struct Domain {
    xmax: f64,
}

impl Domain {
    pub(in crate::transient::adaptive) fn new(xmax: f64) -> Self {
        Self { xmax }
    }
}

impl<const N: usize> Termination<N> for Domain {
    fn is_reached(&self, state: &State<N>, edge: f64) -> bool {
        self.xmax - state.x <= edge
    }

    fn plan(&self, state: &State<N>, h: f64, edge: f64) -> Plan {
        let gap = self.xmax - state.x;

        // A step of at most half the gap never lands, so a rejected landing
        // still makes progress.
        if state.x + h <= self.xmax - edge || h <= 0.5 * gap {
            Plan { h, landing: false }
        } else {
            Plan {
                h: gap,
                landing: true,
            }
        }
    }

    fn review(&mut self, _origin: &State<N>, trial: &mut Trial<N>, plan: Plan) -> Review {
        if plan.landing {
            trial.full.x = self.xmax;
            trial.half.x = self.xmax;
            Review::Fixed(StepKind::Landing)
        } else {
            Review::Adaptive
        }
    }

    fn length(&self) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64) -> State<1> {
        State::new(x, [0.0])
    }

    #[test]
    fn regular_step_fits_below_edge_band() {
        let domain = Domain::new(1.0);

        let plan = domain.plan(&at(0.5), 0.25, 1e-6);

        assert_eq!(plan, Plan { h: 0.25, landing: false });
    }

    #[test]
    fn overshooting_step_becomes_landing() {
        let domain = Domain::new(1.0);

        let plan = domain.plan(&at(0.75), 0.5, 1e-6);

        assert_eq!(plan, Plan { h: 0.25, landing: true });
    }

    #[test]
    fn step_ending_inside_edge_band_becomes_landing() {
        let domain = Domain::new(1.0);

        let plan = domain.plan(&at(0.5), 0.5 - 1e-7, 1e-6);

        assert!(plan.landing);
        assert_eq!(plan.h, 0.5);
    }

    #[test]
    fn short_step_near_bound_does_not_land() {
        // Gap 1.5e-6 with edge 1e-6: the landing was rejected and halved.
        let domain = Domain::new(1.0);
        let state = at(1.0 - 1.5e-6);

        let plan = domain.plan(&state, 0.5 * (1.0 - state.x), 1e-6);

        assert!(!plan.landing);
    }

    #[test]
    fn reached_within_edge() {
        let domain = Domain::new(1.0);

        assert!(!Termination::<1>::is_reached(&domain, &at(0.999), 1e-6));
        assert!(Termination::<1>::is_reached(&domain, &at(1.0 - 1e-7), 1e-6));
        assert!(Termination::<1>::is_reached(&domain, &at(1.0), 0.0));
    }
}
