use thiserror::Error;

/// Configuration for the adaptive solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_steps: usize,
    tolerance: f64,
    edge: f64,
}

/// Errors that can occur when validating an adaptive solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("edge must be finite and non-negative")]
    Edge,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 1e-6, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and edge.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not positive and finite, or if
    /// `edge` is negative or non-finite.
    pub fn new(max_steps: usize, tolerance: f64, edge: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !edge.is_finite() || edge < 0.0 {
            return Err(ConfigError::Edge);
        }

        Ok(Self {
            max_steps,
            tolerance,
            edge,
        })
    }

    /// Returns the maximum number of attempted steps in a run.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the upper bound on the combined local error estimate.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the distance from the bound at which a run counts as reached.
    #[must_use]
    pub fn edge(&self) -> f64 {
        self.edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(config.max_steps(), 1000);
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.edge(), 1e-6);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0, 1e-6), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, -1e-3, 1e-6), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::NAN, 1e-6), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_bad_edge() {
        assert_eq!(Config::new(10, 1e-6, -1e-9), Err(ConfigError::Edge));
        assert_eq!(Config::new(10, 1e-6, f64::INFINITY), Err(ConfigError::Edge));
    }

    #[test]
    fn zero_edge_is_allowed() {
        assert!(Config::new(10, 1e-6, 0.0).is_ok());
    }
}
