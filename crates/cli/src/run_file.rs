//! TOML description of a single run.

use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;
use simplelog::LevelFilter;

use kutta_core::State;
use kutta_solvers::transient::adaptive;

use crate::error::RunError;

/// Everything needed to integrate one equation.
///
/// ```toml
/// solver = "domain"
/// output = "output/exponential.csv"
///
/// [equation]
/// kind = "exponential"
///
/// [initial]
/// x = 0.0
/// y = [1.0]
///
/// [integration]
/// h0 = 0.1
/// bound = 1.0
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    pub solver: SolverKind,

    pub equation: Equation,

    pub initial: Initial,

    pub integration: Integration,

    /// Where to write the CSV trace; stdout when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Which solver drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    /// Adaptive steps up to `bound` on `x`.
    Domain,

    /// Adaptive steps until the `(x, y₁)` curve is `bound` long.
    ArcLength,

    /// Constant steps of `h0` while they fit below `bound`.
    Fixed,
}

/// The equation to integrate and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Equation {
    Exponential,
    Oscillating,
    Pendulum { a: f64, b: f64 },
    Elastica { k: f64, l: f64 },
}

impl Equation {
    /// Name used in messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exponential => "exponential",
            Self::Oscillating => "oscillating",
            Self::Pendulum { .. } => "pendulum",
            Self::Elastica { .. } => "elastica",
        }
    }
}

/// The initial state, with as many `y` values as the equation has components.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Initial {
    pub x: f64,
    pub y: Vec<f64>,
}

/// Step size, bound and controller settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Integration {
    /// Initial step size (the only step size for the fixed solver).
    pub h0: f64,

    /// `xmax` for domain and fixed runs, the target length for arc-length runs.
    pub bound: f64,

    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_edge")]
    pub edge: f64,
}

fn default_delimiter() -> char {
    ';'
}

fn default_max_steps() -> usize {
    adaptive::Config::default().max_steps()
}

fn default_tolerance() -> f64 {
    adaptive::Config::default().tolerance()
}

fn default_edge() -> f64 {
    adaptive::Config::default().edge()
}

impl FromStr for RunFile {
    type Err = RunError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(text)?)
    }
}

impl RunFile {
    /// Returns the initial state for an `N`-component equation.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Dimension`] if the run file lists a different
    /// number of initial values.
    pub fn initial_state<const N: usize>(&self) -> Result<State<N>, RunError> {
        let y: [f64; N] = self
            .initial
            .y
            .as_slice()
            .try_into()
            .map_err(|_| RunError::Dimension {
                equation: self.equation.name(),
                expected: N,
                got: self.initial.y.len(),
            })?;
        Ok(State::new(self.initial.x, y))
    }

    /// Builds the adaptive controller settings.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Config`] if the tolerance or edge is invalid.
    pub fn config(&self) -> Result<adaptive::Config, RunError> {
        let Integration {
            max_steps,
            tolerance,
            edge,
            ..
        } = self.integration;
        Ok(adaptive::Config::new(max_steps, tolerance, edge)?)
    }

    /// Parses `log_level`, defaulting to `info`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::LogLevel`] for an unrecognized level.
    pub fn log_level(&self) -> Result<LevelFilter, RunError> {
        match &self.log_level {
            None => Ok(LevelFilter::Info),
            Some(level) => {
                LevelFilter::from_str(level).map_err(|_| RunError::LogLevel(level.clone()))
            }
        }
    }
}
