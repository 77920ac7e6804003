use std::{io, path::PathBuf};

use kutta_solvers::transient::{adaptive, fixed};

/// Errors that can stop the runner.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("usage: kutta <run.toml> [--output PATH] [--verbose]")]
    Usage,

    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),

    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot create {path}: {source}")]
    Create { path: PathBuf, source: io::Error },

    #[error("invalid run file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{equation} takes {expected} initial values (got {got})")]
    Dimension {
        equation: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unknown log level {0:?}")]
    LogLevel(String),

    #[error("invalid integration settings: {0}")]
    Config(#[from] adaptive::ConfigError),

    #[error(transparent)]
    Adaptive(#[from] adaptive::Error),

    #[error(transparent)]
    Fixed(#[from] fixed::Error),

    #[error("cannot write trace: {0}")]
    Trace(#[source] io::Error),
}
