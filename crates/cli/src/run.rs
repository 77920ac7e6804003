//! Wires a run file to a solver, a CSV trace and a summary.

use std::{fmt, io::Write};

use kutta_core::{Observer, OdeSystem, State};
use kutta_observers::{CsvTrace, Summary};
use kutta_solvers::transient::{adaptive, fixed};

use crate::{
    equations::{Elastica, Exponential, Oscillating, Pendulum},
    error::RunError,
    run_file::{Equation, RunFile, SolverKind},
};

/// What a finished run reports back to the user.
pub struct Report {
    /// How the solver terminated.
    pub status: String,

    /// Independent variable of the last committed state.
    pub x: f64,

    /// Dependent variables of the last committed state.
    pub y: Vec<f64>,

    /// Step statistics, for adaptive runs only.
    pub summary: Option<Summary>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status: {}", self.status)?;
        writeln!(f, "final state: x = {}, y = {:?}", self.x, self.y)?;
        if let Some(summary) = &self.summary {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Integrates the run file's equation, writing the trace to `writer`.
///
/// # Errors
///
/// Returns an error if the run file is inconsistent, the solver fails, or the
/// trace cannot be written.
pub fn execute<W: Write>(run: &RunFile, writer: W) -> Result<Report, RunError> {
    log::debug!("running {} with the {:?} solver", run.equation.name(), run.solver);

    let none = None::<fn(f64) -> f64>;

    match run.equation {
        Equation::Exponential => {
            let initial = run.initial_state::<1>()?;
            let exact = Exponential::exact(initial);
            drive(&Exponential, initial, run, writer, Some(exact))
        }
        Equation::Oscillating => {
            let initial = run.initial_state::<1>()?;
            drive(&Oscillating, initial, run, writer, none)
        }
        Equation::Pendulum { a, b } => {
            let initial = run.initial_state::<2>()?;
            drive(&Pendulum { a, b }, initial, run, writer, none)
        }
        Equation::Elastica { k, l } => {
            let initial = run.initial_state::<2>()?;
            drive(&Elastica { k, l }, initial, run, writer, none)
        }
    }
}

fn drive<S, R, W, const N: usize>(
    system: &S,
    initial: State<N>,
    run: &RunFile,
    writer: W,
    reference: Option<R>,
) -> Result<Report, RunError>
where
    S: OdeSystem<N>,
    R: Fn(f64) -> f64 + Copy + 'static,
    W: Write,
{
    let config = run.config()?;
    let h0 = run.integration.h0;
    let bound = run.integration.bound;

    let mut trace = CsvTrace::new(writer).delimiter(run.delimiter);
    let mut summary = Summary::new();
    if let Some(exact) = reference {
        trace = trace.reference(exact);
        summary = summary.reference(exact);
    }

    let mut observer = |event: &adaptive::Event<N>| -> Option<adaptive::Action> {
        let _: Option<adaptive::Action> = summary.observe(event);
        trace.observe(event)
    };

    let (status, state) = match run.solver {
        SolverKind::Domain => {
            let solution = adaptive::solve(system, initial, h0, bound, &config, &mut observer)?;
            (format!("{:?}", solution.status), solution.state)
        }
        SolverKind::ArcLength => {
            let solution =
                adaptive::solve_arc_length(system, initial, h0, bound, &config, &mut observer)?;
            (format!("{:?}", solution.status), solution.state)
        }
        SolverKind::Fixed => {
            let max_steps = run.integration.max_steps;
            let solution = fixed::solve(system, initial, h0, bound, max_steps, &mut trace)?;
            trace.finish().map_err(RunError::Trace)?;
            return Ok(Report {
                status: format!("{:?}", solution.status),
                x: solution.state.x,
                y: solution.state.y.to_vec(),
                summary: None,
            });
        }
    };

    trace.finish().map_err(RunError::Trace)?;

    Ok(Report {
        status,
        x: state.x,
        y: state.y.to_vec(),
        summary: Some(summary),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn run_file(text: &str) -> RunFile {
        text.parse().expect("valid run file")
    }

    fn execute_to_string(run: &RunFile) -> (Report, String) {
        let mut buffer = Vec::new();
        let report = execute(run, &mut buffer).expect("run succeeds");
        (report, String::from_utf8(buffer).expect("utf-8 trace"))
    }

    #[test]
    fn exponential_run_lands_on_bound_with_reference_columns() {
        let run = run_file(include_str!("../runs/exponential.toml"));

        let (report, trace) = execute_to_string(&run);

        assert_eq!(report.status, "Reached");
        assert_eq!(report.x, 1.0);
        assert_relative_eq!(report.y[0], 1.0_f64.exp(), max_relative = 1e-4);
        assert!(trace.lines().next().expect("header").ends_with(";u;|u-y1|"));

        let summary = report.summary.expect("adaptive runs summarize");
        assert!(summary.max_deviation().expect("reference given").value < 1e-4);
    }

    #[test]
    fn elastica_run_reaches_unit_length() {
        let run = run_file(include_str!("../runs/elastica.toml"));

        let (report, trace) = execute_to_string(&run);

        assert_eq!(report.status, "Reached");
        assert!(trace.lines().next().expect("header").ends_with(";length"));
        assert_relative_eq!(report.x, 0.718, max_relative = 1e-2);
    }

    #[test]
    fn fixed_run_writes_states() {
        let text = include_str!("../runs/pendulum.toml").replace("\"domain\"", "\"fixed\"");
        let run = run_file(&text);

        let (report, trace) = execute_to_string(&run);

        assert_eq!(report.status, "Complete");
        assert!(report.summary.is_none());
        assert_eq!(trace.lines().next(), Some("x;y1;y2"));
    }

    #[test]
    fn mismatched_initial_values_fail_before_solving() {
        let text = include_str!("../runs/pendulum.toml").replace("y = [1.0, 0.0]", "y = [1.0]");
        let run = run_file(&text);

        let result = execute(&run, Vec::new());

        assert!(matches!(
            result,
            Err(RunError::Dimension {
                equation: "pendulum",
                ..
            })
        ));
    }

    #[test]
    fn overflow_is_reported_as_error() {
        let text = r#"
            solver = "domain"

            [equation]
            kind = "pendulum"
            a = -1.0e6
            b = 0.0

            [initial]
            x = 0.0
            y = [0.0, 1.0]

            [integration]
            h0 = 0.5
            bound = 1.0e4
            tolerance = 1e300
        "#;

        let result = execute(&run_file(text), Vec::new());

        assert!(matches!(
            result,
            Err(RunError::Adaptive(adaptive::Error::Overflow(_)))
        ));
    }
}
