//! Right-hand sides shipped with the runner.

use kutta_core::{OdeSystem, State};

/// Exponential growth: `y' = y`.
#[derive(Debug, Clone, Copy)]
pub struct Exponential;

impl Exponential {
    /// Exact solution through `initial`: `u(x) = y₀ e^(x - x₀)`.
    pub fn exact(initial: State<1>) -> impl Fn(f64) -> f64 + Copy + 'static {
        let State { x: x0, y: [y0] } = initial;
        move |x| y0 * (x - x0).exp()
    }
}

impl OdeSystem<1> for Exponential {
    fn derivative(&self, _x: f64, y: &[f64; 1]) -> [f64; 1] {
        [y[0]]
    }
}

/// A rapidly oscillating scalar equation:
/// `y' = y² x / (1 + x²) + y - y³ sin(10x)`.
#[derive(Debug, Clone, Copy)]
pub struct Oscillating;

impl OdeSystem<1> for Oscillating {
    fn derivative(&self, x: f64, y: &[f64; 1]) -> [f64; 1] {
        let y = y[0];
        [y * y * x / (1.0 + x * x) + y - y.powi(3) * (10.0 * x).sin()]
    }
}

/// Damped pendulum written as a first-order system:
/// `y₁' = y₂`, `y₂' = -a y₂ + b sin y₁`.
///
/// A physical pendulum has `a ≥ 0` and `b < 0`.
#[derive(Debug, Clone, Copy)]
pub struct Pendulum {
    pub a: f64,
    pub b: f64,
}

impl OdeSystem<2> for Pendulum {
    fn derivative(&self, _x: f64, y: &[f64; 2]) -> [f64; 2] {
        [y[1], -self.a * y[1] + self.b * y[0].sin()]
    }
}

/// Large deflection of a loaded elastic rod:
/// `y₁' = y₂`, `y₂' = K (L - x) (1 + y₂²)^(3/2)`.
///
/// Usually integrated to a target arc length, the length of the rod.
#[derive(Debug, Clone, Copy)]
pub struct Elastica {
    pub k: f64,
    pub l: f64,
}

impl OdeSystem<2> for Elastica {
    fn derivative(&self, x: f64, y: &[f64; 2]) -> [f64; 2] {
        [y[1], self.k * (self.l - x) * (1.0 + y[1] * y[1]).powf(1.5)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exponential_exact_passes_through_initial_state() {
        let exact = Exponential::exact(State::new(1.0, [3.0]));

        assert_relative_eq!(exact(1.0), 3.0);
        assert_relative_eq!(exact(2.0), 3.0 * 1.0_f64.exp());
    }

    #[test]
    fn oscillating_matches_formula() {
        let [dy] = Oscillating.derivative(0.5, &[2.0]);
        let expected = 4.0 * 0.5 / 1.25 + 2.0 - 8.0 * 5.0_f64.sin();

        assert_relative_eq!(dy, expected);
    }

    #[test]
    fn pendulum_at_rest_stays_at_rest() {
        let pendulum = Pendulum { a: 0.2, b: -9.81 };

        assert_eq!(pendulum.derivative(3.0, &[0.0, 0.0]), [0.0, 0.0]);
    }

    #[test]
    fn elastica_curvature_vanishes_at_free_end() {
        let rod = Elastica { k: 2.0, l: 1.0 };

        let [slope, curvature] = rod.derivative(1.0, &[0.3, 0.7]);

        assert_relative_eq!(slope, 0.7);
        assert_relative_eq!(curvature, 0.0);
        assert_relative_eq!(rod.derivative(0.0, &[0.0, 0.0])[1], 2.0);
    }
}
