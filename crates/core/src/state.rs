/// A point on a solution curve: the independent variable `x` and the `N`
/// dependent variables `y`.
///
/// Solvers own a `State` for the duration of a run and replace it each time a
/// step is committed. `N` is usually 1 (a scalar equation) or 2 (a
/// second-order equation written as a first-order system).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<const N: usize> {
    /// The independent variable.
    pub x: f64,

    /// The dependent variables at `x`.
    pub y: [f64; N],
}

impl<const N: usize> State<N> {
    /// Creates a new state.
    #[must_use]
    pub fn new(x: f64, y: [f64; N]) -> Self {
        Self { x, y }
    }

    /// Returns the state reached by moving `delta` along `slope`.
    ///
    /// The result is `(x + delta, y + slope * delta)`, the building block of
    /// every explicit Runge-Kutta stage.
    #[must_use]
    pub fn advanced(&self, slope: &[f64; N], delta: f64) -> Self {
        Self {
            x: self.x + delta,
            y: std::array::from_fn(|i| self.y[i] + slope[i] * delta),
        }
    }

    /// Returns `true` if every dependent variable is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.y.iter().all(|v| v.is_finite())
    }
}
