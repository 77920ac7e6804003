//! Runge-Kutta solvers for initial-value problems.
//!
//! Every solver in this crate advances a [`State`] through an [`OdeSystem`]
//! and reports its progress to an [`Observer`]. See [`transient`] for the
//! available solvers.
//!
//! [`State`]: kutta_core::State
//! [`OdeSystem`]: kutta_core::OdeSystem
//! [`Observer`]: kutta_core::Observer

pub mod transient;
