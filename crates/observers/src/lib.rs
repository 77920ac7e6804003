//! Reusable observers for Kutta solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with both the fixed-step and the adaptive solver.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasState`], [`CanStopEarly`])
//! - [`CsvTrace`]: delimited-text trace of every committed step
//! - [`Summary`]: extremes of error, step size and deviation over a run
//!
//! # Features
//!
//! - `plot`: Enables `PlotObserver` for viewing solution curves and step
//!   sizes via egui. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`Observer`]: kutta_core::Observer
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

mod csv;
mod summary;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use csv::{CsvTrace, Reference};
pub use summary::{At, Summary};

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Window};
