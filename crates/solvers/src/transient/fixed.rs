//! Fixed-step fourth-order Runge-Kutta solver.
//!
//! Steps a state forward with a constant step size and no error control:
//!
//! ```text
//! state_{n+1} = rk4_step(state_n, h)
//! ```
//!
//! Stepping continues while a full step still fits below `xmax`, so the last
//! state may stop short of `xmax` by less than one step. Use
//! [`adaptive`](super::adaptive) when the run must land exactly on the bound
//! or the local error must be controlled.
//!
//! # Example
//!
//! ```
//! use kutta_core::State;
//! use kutta_solvers::transient::fixed;
//!
//! let growth = |_x: f64, y: &[f64; 1]| [y[0]];
//! let solution = fixed::solve_unobserved(&growth, State::new(0.0, [1.0]), 0.125, 1.0, 100)?;
//!
//! assert_eq!(solution.status, fixed::Status::Complete);
//! assert!((solution.state.y[0] - 1.0_f64.exp()).abs() < 1e-5);
//! # Ok::<(), fixed::Error>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use kutta_core::{Observer, OdeSystem, State};

use super::rk4_step;

/// Integrates an ODE system with fixed-step RK4.
///
/// # Algorithm
///
/// 1. Emit the initial state as step 0.
/// 2. While `x + h ≤ xmax`:
///    - Stop with [`Status::MaxSteps`] if `max_steps` steps were taken.
///    - Advance the state with one RK4 step.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// # Errors
///
/// Returns [`Error::InvalidStepSize`] if `h` is not positive and finite, and
/// [`Error::Overflow`] if a step produces a non-finite value.
pub fn solve<S, Obs, const N: usize>(
    system: &S,
    initial: State<N>,
    h: f64,
    xmax: f64,
    max_steps: usize,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    S: OdeSystem<N>,
    Obs: Observer<Event<N>, Action>,
{
    if !h.is_finite() || h <= 0.0 {
        return Err(Error::InvalidStepSize(h));
    }

    let mut history = Vec::new();
    history.push(initial);

    let event = Event {
        step: 0,
        state: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution::new(Status::StoppedByObserver, initial, history, 0));
    }

    let mut state = initial;
    let mut step = 0;

    while state.x + h <= xmax {
        if step == max_steps {
            log::debug!("fixed-step run hit the step limit at x = {}", state.x);
            return Ok(Solution::new(Status::MaxSteps, state, history, step));
        }

        state = rk4_step(system, &state, h)?;
        step += 1;
        history.push(state);

        let event = Event { step, state };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, state, history, step));
        }
    }

    Ok(Solution::new(Status::Complete, state, history, step))
}

/// Integrates an ODE system with fixed-step RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<S, const N: usize>(
    system: &S,
    initial: State<N>,
    h: f64,
    xmax: f64,
    max_steps: usize,
) -> Result<Solution<N>, Error>
where
    S: OdeSystem<N>,
{
    solve(system, initial, h, xmax, max_steps, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::transient::Overflow;

    fn growth(_x: f64, y: &[f64; 1]) -> [f64; 1] {
        [y[0]]
    }

    fn global_error(h: f64) -> f64 {
        let solution =
            solve_unobserved(&growth, State::new(0.0, [1.0]), h, 1.0, 1000).expect("should solve");
        (solution.state.y[0] - 1.0_f64.exp()).abs()
    }

    #[test]
    fn integrates_exponential_growth() {
        let solution = solve_unobserved(&growth, State::new(0.0, [1.0]), 0.125, 1.0, 100)
            .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 8);
        assert_eq!(solution.history.len(), 9); // initial + 8 steps
        assert_relative_eq!(solution.state.x, 1.0);
        assert_relative_eq!(solution.state.y[0], 1.0_f64.exp(), epsilon = 1e-5);
    }

    #[test]
    fn global_error_shrinks_with_fourth_power_of_step() {
        let ratio = global_error(0.125) / global_error(0.0625);

        assert!((14.0..18.0).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn stops_short_of_bound_when_step_does_not_fit() {
        let solution = solve_unobserved(&growth, State::new(0.0, [1.0]), 0.3, 1.0, 100)
            .expect("should solve");

        assert_eq!(solution.steps, 3);
        assert!(solution.state.x < 1.0);
        assert!(solution.state.x + 0.3 > 1.0);
    }

    #[test]
    fn step_limit_ends_run() {
        let solution = solve_unobserved(&growth, State::new(0.0, [1.0]), 0.01, 1.0, 5)
            .expect("should solve");

        assert_eq!(solution.status, Status::MaxSteps);
        assert_eq!(solution.steps, 5);
        assert_relative_eq!(solution.state.x, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |event: &Event<1>| (event.step >= 3).then_some(Action::StopEarly);

        let solution = solve(&growth, State::new(0.0, [1.0]), 0.1, 1.0, 100, observer)
            .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 3);
        assert_eq!(solution.history.len(), 4);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let mut steps = Vec::new();
        solve(
            &growth,
            State::new(0.0, [1.0]),
            0.25,
            1.0,
            100,
            |event: &Event<1>| {
                steps.push(event.step);
                None
            },
        )
        .expect("should solve");

        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn blow_up_is_reported_as_overflow() {
        // y' = y² from y(0) = 1 blows up at x = 1.
        let square = |_x: f64, y: &[f64; 1]| [y[0] * y[0]];

        let result = solve_unobserved(&square, State::new(0.0, [1.0]), 0.5, 3.0, 100);

        assert!(matches!(result, Err(Error::Overflow(Overflow { .. }))));
    }

    #[test]
    fn rejects_non_positive_step() {
        let result = solve_unobserved(&growth, State::new(0.0, [1.0]), 0.0, 1.0, 100);

        assert!(matches!(result, Err(Error::InvalidStepSize(_))));
    }
}
