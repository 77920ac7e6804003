use kutta_core::{OdeSystem, State};

use crate::transient::{Overflow, rk4_step};

use super::ErrorEstimate;

/// One full step and two half steps from the same origin.
#[derive(Debug, Clone, Copy)]
pub(super) struct Trial<const N: usize> {
    pub(super) full: State<N>,
    pub(super) half: State<N>,
    pub(super) h: f64,
    pub(super) estimate: ErrorEstimate<N>,
}

impl<const N: usize> Trial<N> {
    /// Steps from `origin` by `h` once and by `h / 2` twice.
    pub(super) fn run<S>(system: &S, origin: &State<N>, h: f64) -> Result<Self, Overflow>
    where
        S: OdeSystem<N>,
    {
        let full = rk4_step(system, origin, h)?;

        let midpoint = rk4_step(system, origin, 0.5 * h)?;
        let half = rk4_step(system, &midpoint, 0.5 * h)?;

        Ok(Self {
            full,
            half,
            h,
            estimate: ErrorEstimate::new(&full.y, &half.y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growth(_x: f64, y: &[f64; 1]) -> [f64; 1] {
        [y[0]]
    }

    /// Sums the local estimates of fixed steps across `[0, 1]`.
    fn accumulated_estimate(h: f64, steps: usize) -> f64 {
        let mut state = State::new(0.0, [1.0]);
        let mut total = 0.0;
        for _ in 0..steps {
            let trial = Trial::run(&growth, &state, h).expect("finite");
            total += trial.estimate.combined;
            state = trial.full;
        }
        total
    }

    #[test]
    fn full_and_half_steps_share_an_origin() {
        let trial = Trial::run(&growth, &State::new(0.5, [2.0]), 0.2).expect("finite");

        assert!((trial.full.x - 0.7).abs() < 1e-15);
        assert!((trial.half.x - 0.7).abs() < 1e-15);
        assert_eq!(trial.h, 0.2);
        assert!(trial.estimate.combined > 0.0);
    }

    #[test]
    fn local_estimate_shrinks_with_fifth_power_of_step() {
        let origin = State::new(0.0, [1.0]);

        let coarse = Trial::run(&growth, &origin, 0.1).expect("finite");
        let fine = Trial::run(&growth, &origin, 0.05).expect("finite");
        let ratio = coarse.estimate.combined / fine.estimate.combined;

        assert!((28.0..36.0).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn accumulated_estimate_shrinks_sixteen_fold_when_step_halves() {
        let ratio = accumulated_estimate(0.1, 10) / accumulated_estimate(0.05, 20);

        assert!((14.0..18.0).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn overflow_in_any_substep_is_reported() {
        let square = |_x: f64, y: &[f64; 1]| [y[0] * y[0]];

        let result = Trial::run(&square, &State::new(0.0, [1e200]), 1.0);

        assert!(result.is_err());
    }
}
