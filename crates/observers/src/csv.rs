//! Delimited-text trace of a solver run.

use std::io::{self, Write};

use kutta_core::{Observer, State};
use kutta_solvers::transient::{adaptive, fixed};

use crate::traits::CanStopEarly;

/// Exact solution `u(x)` used to report the deviation of the first component.
pub type Reference = Box<dyn Fn(f64) -> f64>;

/// Writes one delimited row per committed state.
///
/// The header is written with the first row, so its columns can depend on
/// the run: adaptive traces add step-doubling diagnostics and counters, and
/// arc-length runs add the accumulated length. With a [`Reference`] every row
/// also carries `u(x)` and `|u - y1|`.
///
/// Adaptive columns, for `N = 1`:
///
/// ```text
/// x;y1;y1_half;y1_diff;h;E;E1;rejected;doubled;accepted[;length][;u;|u-y1|]
/// ```
///
/// `E` and `E1` are error estimates scaled to the full step. Fixed-step traces
/// only write `x` and the components.
///
/// A failed write stops the solver through [`CanStopEarly`]; the error is
/// returned by [`finish`](CsvTrace::finish).
pub struct CsvTrace<W: Write> {
    writer: W,
    delimiter: char,
    reference: Option<Reference>,
    header_written: bool,
    error: Option<io::Error>,
}

impl<W: Write> CsvTrace<W> {
    /// Creates a trace writing `;`-delimited rows to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: ';',
            reference: None,
            header_written: false,
            error: None,
        }
    }

    /// Sets the column delimiter.
    #[must_use]
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Adds `u` and `|u - y1|` columns computed from an exact solution.
    #[must_use]
    pub fn reference(mut self, exact: impl Fn(f64) -> f64 + 'static) -> Self {
        self.reference = Some(Box::new(exact));
        self
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first write error hit while tracing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_line(&mut self, cells: &[String]) -> io::Result<()> {
        let delimiter = self.delimiter.to_string();
        writeln!(self.writer, "{}", cells.join(&delimiter))
    }

    fn reference_cells(&self, x: f64, y: Option<f64>) -> Vec<String> {
        match (&self.reference, y) {
            (Some(exact), Some(y)) => {
                let u = exact(x);
                vec![u.to_string(), (u - y).abs().to_string()]
            }
            _ => Vec::new(),
        }
    }

    fn reference_header(&self) -> Vec<String> {
        if self.reference.is_some() {
            vec!["u".to_owned(), "|u-y1|".to_owned()]
        } else {
            Vec::new()
        }
    }

    fn write_record<const N: usize>(&mut self, record: &adaptive::Record<N>) -> io::Result<()> {
        if !self.header_written {
            let mut header = vec!["x".to_owned()];
            header.extend((1..=N).map(|i| format!("y{i}")));
            header.extend((1..=N).map(|i| format!("y{i}_half")));
            header.extend((1..=N).map(|i| format!("y{i}_diff")));
            header.extend(["h", "E"].map(str::to_owned));
            header.extend((1..=N).map(|i| format!("E{i}")));
            header.extend(["rejected", "doubled", "accepted"].map(str::to_owned));
            if record.length.is_some() {
                header.push("length".to_owned());
            }
            header.extend(self.reference_header());
            self.write_line(&header)?;
            self.header_written = true;
        }

        let mut row = vec![record.state.x.to_string()];
        row.extend(record.state.y.iter().map(f64::to_string));
        row.extend(record.half.iter().map(f64::to_string));
        row.extend(record.difference().iter().map(f64::to_string));
        row.push(record.h.to_string());
        row.push(record.estimate.full_step().to_string());
        row.extend(record.estimate.full_step_components().iter().map(f64::to_string));
        row.extend(
            [record.counters.rejected, record.counters.doubled, record.counters.accepted]
                .map(|count| count.to_string()),
        );
        if let Some(length) = record.length {
            row.push(length.to_string());
        }
        row.extend(self.reference_cells(record.state.x, record.state.y.first().copied()));
        self.write_line(&row)
    }

    fn write_state<const N: usize>(&mut self, state: &State<N>) -> io::Result<()> {
        if !self.header_written {
            let mut header = vec!["x".to_owned()];
            header.extend((1..=N).map(|i| format!("y{i}")));
            header.extend(self.reference_header());
            self.write_line(&header)?;
            self.header_written = true;
        }

        let mut row = vec![state.x.to_string()];
        row.extend(state.y.iter().map(f64::to_string));
        row.extend(self.reference_cells(state.x, state.y.first().copied()));
        self.write_line(&row)
    }

    /// Runs a write, keeping the first error and asking the solver to stop.
    fn guard<A, F>(&mut self, write: F) -> Option<A>
    where
        A: CanStopEarly,
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        if self.error.is_some() {
            return Some(A::stop_early());
        }
        match write(self) {
            Ok(()) => None,
            Err(error) => {
                self.error = Some(error);
                Some(A::stop_early())
            }
        }
    }
}

impl<W: Write, A: CanStopEarly, const N: usize> Observer<adaptive::Event<N>, A> for CsvTrace<W> {
    fn observe(&mut self, event: &adaptive::Event<N>) -> Option<A> {
        let record = event.record()?;
        self.guard(|trace| trace.write_record(record))
    }
}

impl<W: Write, A: CanStopEarly, const N: usize> Observer<fixed::Event<N>, A> for CsvTrace<W> {
    fn observe(&mut self, event: &fixed::Event<N>) -> Option<A> {
        self.guard(|trace| trace.write_state(&event.state))
    }
}

/// Allows `&mut CsvTrace` to be passed to a solver so
/// [`CsvTrace::finish`] can be called after the run.
impl<W, E, A> Observer<E, A> for &mut CsvTrace<W>
where
    W: Write,
    CsvTrace<W>: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
