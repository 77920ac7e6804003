use kutta_core::{OdeSystem, State};

/// A step produced a NaN or infinite dependent variable.
///
/// Overflow is fatal for a run: solvers return it to the caller instead of
/// emitting the non-finite state.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("non-finite value after stepping from x = {x} with h = {h}")]
pub struct Overflow {
    /// The independent variable at the start of the failed step.
    pub x: f64,

    /// The step size of the failed step.
    pub h: f64,
}

/// Advances `state` by one classic fourth-order Runge-Kutta step of size `h`.
///
/// ```text
/// k1 = f(x,       y)
/// k2 = f(x + h/2, y + h/2 · k1)
/// k3 = f(x + h/2, y + h/2 · k2)
/// k4 = f(x + h,   y + h · k3)
/// y' = y + h · (k1 + 2·k2 + 2·k3 + k4) / 6
/// ```
///
/// The evaluation is deterministic: identical inputs give bit-identical
/// outputs.
///
/// # Errors
///
/// Returns [`Overflow`] if any component of the result is NaN or infinite.
pub fn rk4_step<S, const N: usize>(
    system: &S,
    state: &State<N>,
    h: f64,
) -> Result<State<N>, Overflow>
where
    S: OdeSystem<N>,
{
    let half = 0.5 * h;

    let k1 = system.derivative(state.x, &state.y);

    let stage = state.advanced(&k1, half);
    let k2 = system.derivative(stage.x, &stage.y);

    let stage = state.advanced(&k2, half);
    let k3 = system.derivative(stage.x, &stage.y);

    let stage = state.advanced(&k3, h);
    let k4 = system.derivative(stage.x, &stage.y);

    let slope: [f64; N] =
        std::array::from_fn(|i| (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) / 6.0);
    let next = state.advanced(&slope, h);

    if next.is_finite() {
        Ok(next)
    } else {
        Err(Overflow { x: state.x, h })
    }
}
