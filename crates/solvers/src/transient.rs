//! Solvers that march an initial-value problem forward in `x`.
//!
//! # Solvers
//!
//! - [`fixed`]: classic fourth-order Runge-Kutta with a constant step
//! - [`adaptive`]: fourth-order Runge-Kutta with step-doubling error control,
//!   stopping at a bound on `x` or on the arc length of the solution curve
//!
//! Both solvers share the single-step evaluator [`rk4_step`], which reports a
//! non-finite result as [`Overflow`].

mod step;

pub use step::{Overflow, rk4_step};

pub mod adaptive;
pub mod fixed;
