//! Adaptive fourth-order Runge-Kutta with step-doubling error control.
//!
//! # Algorithm
//!
//! From the current state the controller takes one RK4 step of size `h` and
//! two of size `h / 2`, then estimates the local error per component as
//!
//! ```text
//! s_i = |y_full_i - y_half_i| / (2^p - 1),   p = 4
//! ```
//!
//! combined with the Euclidean norm. The step is then:
//!
//! - **rejected** if the error exceeds the tolerance: `h` is halved and the
//!   step retried from the same state;
//! - **grown** if the error is below `tolerance / 2^(p+1)`: the full step is
//!   committed and `h` doubled;
//! - **kept** otherwise: the full step is committed and `h` unchanged.
//!
//! Every attempt, rejected or not, consumes one step of the budget in
//! [`Config::max_steps`]. Running out of budget is a [`Status`], not an error.
//!
//! # Termination
//!
//! - [`solve`] integrates up to a bound `xmax`. When the next step would end
//!   within `edge` of the bound or beyond it, the controller takes a landing
//!   step of exactly `xmax - x` and the final state sits on the bound.
//! - [`solve_arc_length`] integrates until the length of the `(x, y₁)` curve
//!   reaches a target. A step that would overshoot is rolled back and `h`
//!   halved; from then on the step size is only ever halved, so the run
//!   approaches the target from below.
//!
//! # Observer Events
//!
//! The solver emits [`Event::Started`] once, then one event per attempt:
//! [`Event::Rejected`], [`Event::RolledBack`] or [`Event::Accepted`]. Accepted
//! events carry a [`Record`] with the full-step and half-step results, the
//! error estimate, and the counters. Observers can return
//! [`Action::StopEarly`] to halt after any event.
//!
//! # Example
//!
//! ```
//! use kutta_core::State;
//! use kutta_solvers::transient::adaptive::{self, Config, Status};
//!
//! let growth = |_x: f64, y: &[f64; 1]| [y[0]];
//! let solution =
//!     adaptive::solve_unobserved(&growth, State::new(0.0, [1.0]), 0.1, 1.0, &Config::default())?;
//!
//! assert_eq!(solution.status, Status::Reached);
//! assert_eq!(solution.state.x, 1.0);
//! assert!((solution.state.y[0] - 1.0_f64.exp()).abs() < 1e-4);
//! # Ok::<(), adaptive::Error>(())
//! ```

mod action;
mod config;
mod controller;
mod counters;
mod error;
mod estimate;
mod event;
mod solution;
mod termination;
mod trial;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use counters::Counters;
pub use error::Error;
pub use estimate::{ErrorEstimate, ORDER, Verdict};
pub use event::{Event, Record, StepKind};
pub use solution::{Solution, Status};

use kutta_core::{Observer, OdeSystem, State};

use controller::integrate;
use termination::{ArcLength, Domain};

/// Integrates an ODE system from `initial` up to `xmax`.
///
/// The observer receives an [`Event`] for the start of the run and for every
/// attempted step. See the [module docs](self) for the control rules.
///
/// # Errors
///
/// Returns [`Error::InvalidStepSize`] if `h0` is not positive and finite,
/// [`Error::NonFiniteInitialState`] if `initial` has a non-finite value,
/// [`Error::InvalidBound`] if `xmax` is non-finite or behind `initial.x`, and
/// [`Error::Overflow`] if a step produces a non-finite value.
pub fn solve<S, Obs, const N: usize>(
    system: &S,
    initial: State<N>,
    h0: f64,
    xmax: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    S: OdeSystem<N>,
    Obs: Observer<Event<N>, Action>,
{
    validate(&initial, h0)?;
    if !xmax.is_finite() || xmax < initial.x {
        return Err(Error::InvalidBound(xmax));
    }

    integrate(system, initial, h0, config, Domain::new(xmax), observer)
}

/// Integrates an ODE system up to `xmax` without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<S, const N: usize>(
    system: &S,
    initial: State<N>,
    h0: f64,
    xmax: f64,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    S: OdeSystem<N>,
{
    solve(system, initial, h0, xmax, config, ())
}

/// Integrates an ODE system until the `(x, y₁)` curve is `target` long.
///
/// Arc length is accumulated as the chord length of each committed step. For
/// systems without components only `x` contributes.
///
/// # Errors
///
/// Returns [`Error::InvalidStepSize`] if `h0` is not positive and finite,
/// [`Error::NonFiniteInitialState`] if `initial` has a non-finite value,
/// [`Error::InvalidBound`] if `target` is negative or non-finite, and
/// [`Error::Overflow`] if a step produces a non-finite value.
pub fn solve_arc_length<S, Obs, const N: usize>(
    system: &S,
    initial: State<N>,
    h0: f64,
    target: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    S: OdeSystem<N>,
    Obs: Observer<Event<N>, Action>,
{
    validate(&initial, h0)?;
    if !target.is_finite() || target < 0.0 {
        return Err(Error::InvalidBound(target));
    }

    integrate(system, initial, h0, config, ArcLength::new(target), observer)
}

/// Integrates an ODE system to a target arc length without observation.
///
/// This is a convenience wrapper around [`solve_arc_length`] that discards
/// events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve_arc_length`].
pub fn solve_arc_length_unobserved<S, const N: usize>(
    system: &S,
    initial: State<N>,
    h0: f64,
    target: f64,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    S: OdeSystem<N>,
{
    solve_arc_length(system, initial, h0, target, config, ())
}

fn validate<const N: usize>(initial: &State<N>, h0: f64) -> Result<(), Error> {
    if !h0.is_finite() || h0 <= 0.0 {
        return Err(Error::InvalidStepSize(h0));
    }
    if !initial.x.is_finite() || !initial.is_finite() {
        return Err(Error::NonFiniteInitialState);
    }
    Ok(())
}
