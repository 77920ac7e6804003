/// Order of the classic Runge-Kutta method.
pub const ORDER: i32 = 4;

/// `2^p - 1`: divides the full-vs-half discrepancy into a local error.
const RICHARDSON: f64 = 15.0;

/// `2^p`: scales a local error back to the full step.
const FULL_STEP: f64 = 16.0;

/// `2^(p+1)`: a step grows when its error is this far below tolerance.
const GROWTH_MARGIN: f64 = 32.0;

/// Local error estimate from one full step and two half steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorEstimate<const N: usize> {
    /// Per-component estimates `|y_full - y_half| / (2^p - 1)`.
    pub components: [f64; N],

    /// Euclidean norm of the components.
    pub combined: f64,
}

/// What the controller does with a step given its error estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The error exceeds the tolerance: discard the step and halve `h`.
    Reject,

    /// The error is far below the tolerance: commit, then double `h`.
    Grow,

    /// Commit and keep `h`.
    Steady,
}

impl<const N: usize> ErrorEstimate<N> {
    /// Estimates the local error from the full-step and half-step results.
    #[must_use]
    pub fn new(full: &[f64; N], half: &[f64; N]) -> Self {
        let components: [f64; N] = std::array::from_fn(|i| (full[i] - half[i]).abs() / RICHARDSON);
        let combined = components.iter().fold(0.0, |norm: f64, s| norm.hypot(*s));

        Self {
            components,
            combined,
        }
    }

    /// Returns the combined estimate scaled to the full step.
    #[must_use]
    pub fn full_step(&self) -> f64 {
        self.combined * FULL_STEP
    }

    /// Returns the per-component estimates scaled to the full step.
    #[must_use]
    pub fn full_step_components(&self) -> [f64; N] {
        self.components.map(|s| s * FULL_STEP)
    }

    /// Classifies the estimate against `tolerance`.
    ///
    /// Comparisons are strict: an estimate equal to the tolerance is kept,
    /// and one equal to the growth threshold does not grow.
    #[must_use]
    pub fn verdict(&self, tolerance: f64) -> Verdict {
        if self.combined > tolerance {
            Verdict::Reject
        } else if self.combined < tolerance / GROWTH_MARGIN {
            Verdict::Grow
        } else {
            Verdict::Steady
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn scalar(error: f64) -> ErrorEstimate<1> {
        ErrorEstimate {
            components: [error],
            combined: error,
        }
    }

    #[test]
    fn scales_difference_by_richardson_factor() {
        let estimate = ErrorEstimate::new(&[1.0 + 3e-6], &[1.0]);

        assert_relative_eq!(estimate.components[0], 2e-7, max_relative = 1e-9);
        assert_relative_eq!(estimate.full_step(), 3.2e-6, max_relative = 1e-9);
    }

    #[test]
    fn scalar_combined_equals_component() {
        let estimate = ErrorEstimate::new(&[0.25], &[0.75]);

        assert_eq!(estimate.combined, estimate.components[0]);
    }

    #[test]
    fn combines_components_with_euclidean_norm() {
        // Differences of 45 and 60 scale to 3 and 4.
        let estimate = ErrorEstimate::new(&[45.0, 0.0], &[0.0, 60.0]);

        assert_relative_eq!(estimate.components[0], 3.0);
        assert_relative_eq!(estimate.components[1], 4.0);
        assert_relative_eq!(estimate.combined, 5.0);
        assert_relative_eq!(estimate.full_step_components()[1], 64.0);
    }

    #[test]
    fn verdict_thresholds_are_strict() {
        let tolerance = 32e-6;

        assert_eq!(scalar(33e-6).verdict(tolerance), Verdict::Reject);
        assert_eq!(scalar(32e-6).verdict(tolerance), Verdict::Steady);
        assert_eq!(scalar(1e-6).verdict(tolerance), Verdict::Steady);
        assert_eq!(scalar(0.5e-6).verdict(tolerance), Verdict::Grow);
        assert_eq!(scalar(0.0).verdict(tolerance), Verdict::Grow);
    }
}
