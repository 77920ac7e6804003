//! Core traits and types for Kutta.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`State`]: the independent variable and the dependent variables a solver
//!   advances
//! - [`OdeSystem`]: a pure right-hand side `dy/dx = f(x, y)`
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod state;
mod system;

pub use observer::Observer;
pub use state::State;
pub use system::OdeSystem;
