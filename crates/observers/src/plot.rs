//! Plotting observer for solution curves and step-size histories.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use kutta_core::{Observer, State};

use crate::traits::HasState;

/// Window options for [`PlotObserver::show`].
#[derive(Debug, Clone, Default)]
pub struct Window {
    title: Option<String>,
    log_step: bool,
}

impl Window {
    /// Creates options with no title and a linear step-size axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Plots `log₁₀ h` instead of `h` in the step-size panel.
    #[must_use]
    pub fn log_step(mut self) -> Self {
        self.log_step = true;
        self
    }
}

/// Collects the states of a run and shows them in an egui window.
///
/// The window has two panels: every component `y_i(x)` on top, and the step
/// size of each committed step below. The step panel stays empty for solvers
/// that do not report step sizes.
///
/// Pass `&mut PlotObserver` to a solver, then call [`show`](Self::show):
///
/// ```ignore
/// let mut plot = PlotObserver::new(["angle", "velocity"]);
/// adaptive::solve(&pendulum, start, 0.1, 10.0, &Config::default(), &mut plot)?;
/// plot.show(Window::new().title("Pendulum").log_step())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    curves: [Vec<[f64; 2]>; N],
    steps: Vec<[f64; 2]>,
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an observer with one curve name per component.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            curves: std::array::from_fn(|_| Vec::new()),
            steps: Vec::new(),
        }
    }

    /// Records a state and, optionally, the step size that produced it.
    pub fn record(&mut self, state: &State<N>, h: Option<f64>) {
        for (curve, y) in self.curves.iter_mut().zip(state.y) {
            curve.push([state.x, y]);
        }
        if let Some(h) = h {
            self.steps.push([state.x, h]);
        }
    }

    /// Opens a blocking egui window with the collected data.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, window: Window) -> Result<(), eframe::Error> {
        let title = window.title.unwrap_or_else(|| "kutta".to_owned());
        let curves: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.curves).collect();
        let steps = if window.log_step {
            self.steps
                .into_iter()
                .filter(|p| p[1] > 0.0)
                .map(|p| [p[0], p[1].log10()])
                .collect()
        } else {
            self.steps
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    curves,
                    steps,
                    step_label: if window.log_step { "log₁₀ h" } else { "h" },
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: HasState<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(state) = event.state() {
            self.record(state, event.step_size());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to a solver so
/// [`PlotObserver::show`] can be called after the run.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: HasState<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

struct PlotApp {
    curves: Vec<(String, Vec<[f64; 2]>)>,
    steps: Vec<[f64; 2]>,
    step_label: &'static str,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("step_size")
            .resizable(true)
            .min_height(160.0)
            .show(ctx, |ui| {
                Plot::new("step_size_plot")
                    .x_axis_label("x")
                    .y_axis_label(self.step_label)
                    .show(ui, |plot_ui| {
                        let points: PlotPoints = self.steps.iter().copied().collect();
                        plot_ui.line(Line::new(points).name("step size"));
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("solution_plot")
                .legend(Legend::default())
                .x_axis_label("x")
                .show(ui, |plot_ui| {
                    for (name, points) in &self.curves {
                        let points: PlotPoints = points.iter().copied().collect();
                        plot_ui.line(Line::new(points).name(name));
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kutta_solvers::transient::{adaptive, fixed};

    fn growth(_x: f64, y: &[f64; 1]) -> [f64; 1] {
        [y[0]]
    }

    #[test]
    fn records_every_component() {
        let mut plot = PlotObserver::new(["a", "b"]);

        plot.record(&State::new(1.0, [2.0, 3.0]), Some(0.5));
        plot.record(&State::new(2.0, [4.0, 5.0]), None);

        assert_eq!(plot.curves[0], [[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(plot.curves[1], [[1.0, 3.0], [2.0, 5.0]]);
        assert_eq!(plot.steps, [[1.0, 0.5]]);
    }

    #[test]
    fn adaptive_run_fills_curve_and_step_history() {
        let mut plot = PlotObserver::new(["y"]);

        let solution = adaptive::solve(
            &growth,
            State::new(0.0, [1.0]),
            0.1,
            1.0,
            &adaptive::Config::default(),
            &mut plot,
        )
        .expect("should solve");

        // The initial state has no step size.
        assert_eq!(plot.curves[0].len(), solution.counters.accepted + 1);
        assert_eq!(plot.steps.len(), solution.counters.accepted);
        assert_eq!(plot.curves[0][0], [0.0, 1.0]);
    }

    #[test]
    fn fixed_run_has_no_step_history() {
        let mut plot = PlotObserver::new(["y"]);

        fixed::solve(&growth, State::new(0.0, [1.0]), 0.25, 1.0, 10, &mut plot)
            .expect("should solve");

        assert_eq!(plot.curves[0].len(), 5);
        assert!(plot.steps.is_empty());
    }

    #[test]
    fn never_returns_an_action() {
        let mut plot = PlotObserver::new(["y"]);
        let event = fixed::Event {
            step: 0,
            state: State::new(0.0, [1.0]),
        };

        let action: Option<fixed::Action> = plot.observe(&event);

        assert!(action.is_none());
    }
}
