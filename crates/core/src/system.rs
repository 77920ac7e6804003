/// The right-hand side of a system of `N` first-order ordinary differential
/// equations, `dy/dx = f(x, y)`.
///
/// Implementations must be pure: the same `(x, y)` always yields the same
/// derivative, with no side effects. Equation constants (spring stiffness,
/// damping, load, ...) are fields of the implementing type rather than extra
/// arguments.
///
/// Closures of the form `Fn(f64, &[f64; N]) -> [f64; N]` implement this trait
/// automatically.
///
/// # Example
///
/// ```
/// use kutta_core::OdeSystem;
///
/// /// Damped pendulum: y₁' = y₂, y₂' = −a·y₂ − b·sin(y₁).
/// struct Pendulum {
///     a: f64,
///     b: f64,
/// }
///
/// impl OdeSystem<2> for Pendulum {
///     fn derivative(&self, _x: f64, y: &[f64; 2]) -> [f64; 2] {
///         [y[1], -self.a * y[1] - self.b * y[0].sin()]
///     }
/// }
///
/// let pendulum = Pendulum { a: 0.5, b: 9.81 };
/// assert_eq!(pendulum.derivative(0.0, &[0.0, 1.0]), [1.0, -0.5]);
/// ```
pub trait OdeSystem<const N: usize> {
    /// Evaluates `dy/dx` at `(x, y)`.
    fn derivative(&self, x: f64, y: &[f64; N]) -> [f64; N];
}

impl<F, const N: usize> OdeSystem<N> for F
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    fn derivative(&self, x: f64, y: &[f64; N]) -> [f64; N] {
        self(x, y)
    }
}
