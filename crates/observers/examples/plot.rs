//! Interactive views of Kutta solver runs.
//!
//! Each mode integrates a small problem and opens a window with the solution
//! curves on top and the step-size history below.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- pendulum
//! cargo run --example plot --features plot -- pendulum 1e-9
//! cargo run --example plot --features plot -- elastica
//! cargo run --example plot --features plot -- fixed 0.2
//! ```
//!
//! # Modes
//!
//! - **pendulum [tol]**: Damped pendulum released from 2 rad, integrated
//!   adaptively to x = 20. Tighter tolerances shrink the steps; the step panel
//!   shows them breathing with the swing. Default tolerance `1e-7`.
//!
//! - **elastica**: Bent elastic rod integrated until the curve is one unit
//!   long. Watch the steps halve as the run refines onto the target length.
//!
//! - **fixed [h]**: The same pendulum with constant steps of `h` (default
//!   `0.1`). Larger steps visibly drift from the adaptive run.

use std::error::Error;

use kutta_core::State;
use kutta_observers::{PlotObserver, Window};
use kutta_solvers::transient::{adaptive, fixed};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "pendulum".into());
    let value = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid number, expected e.g. 0.1 or 1e-9");
            std::process::exit(1);
        });

    match mode.as_str() {
        "pendulum" => pendulum(value.unwrap_or(1e-7)),
        "elastica" => elastica(),
        "fixed" => fixed_pendulum(value.unwrap_or(0.1)),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [pendulum [tol]|elastica|fixed [h]]");
            std::process::exit(1);
        }
    }
}

/// Damped pendulum: θ' = ω, ω' = −0.2 ω − 9.81 sin θ.
fn swing(_x: f64, y: &[f64; 2]) -> [f64; 2] {
    [y[1], -0.2 * y[1] - 9.81 * y[0].sin()]
}

/// Elastic rod with K = 2, L = 1: y₁' = y₂, y₂' = K (L − x)(1 + y₂²)^(3/2).
fn rod(x: f64, y: &[f64; 2]) -> [f64; 2] {
    [y[1], 2.0 * (1.0 - x) * (1.0 + y[1] * y[1]).powf(1.5)]
}

fn pendulum(tolerance: f64) -> Result<(), Box<dyn Error>> {
    let config = adaptive::Config::new(100_000, tolerance, 1e-9)?;
    let mut plot = PlotObserver::new(["θ", "ω"]);

    let start = State::new(0.0, [2.0, 0.0]);
    let solution = adaptive::solve(&swing, start, 0.1, 20.0, &config, &mut plot)?;

    plot.show(
        Window::new()
            .title(format!(
                "Pendulum (tol={tolerance}): {} accepted, {} rejected",
                solution.counters.accepted, solution.counters.rejected
            ))
            .log_step(),
    )?;

    Ok(())
}

fn elastica() -> Result<(), Box<dyn Error>> {
    let config = adaptive::Config::new(10_000, 1e-7, 1e-6)?;
    let mut plot = PlotObserver::new(["deflection", "slope"]);

    let start = State::new(0.0, [0.0, 0.0]);
    adaptive::solve_arc_length(&rod, start, 0.001, 1.0, &config, &mut plot)?;

    plot.show(Window::new().title("Elastica: rod of unit length").log_step())?;

    Ok(())
}

fn fixed_pendulum(h: f64) -> Result<(), Box<dyn Error>> {
    let mut plot = PlotObserver::new(["θ", "ω"]);

    fixed::solve(&swing, State::new(0.0, [2.0, 0.0]), h, 20.0, 100_000, &mut plot)?;

    plot.show(Window::new().title(format!("Pendulum with fixed h = {h}")))?;

    Ok(())
}
