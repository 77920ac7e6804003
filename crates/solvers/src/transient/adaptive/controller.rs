use kutta_core::{Observer, OdeSystem, State};

use super::{
    Action, Config, Counters, Error, Event, Record, Solution, Status, StepKind, Verdict,
    termination::{Review, Termination},
    trial::Trial,
};

/// Mutable state of a single run.
struct Run<const N: usize> {
    state: State<N>,
    h: f64,
    counters: Counters,
}

impl<const N: usize> Run<N> {
    fn finish<T: Termination<N>>(&self, status: Status, policy: &T) -> Solution<N> {
        log::info!(
            "adaptive run finished ({status:?}) at x = {} after {} steps ({} accepted, {} rejected)",
            self.state.x,
            self.counters.steps,
            self.counters.accepted,
            self.counters.rejected,
        );

        Solution {
            status,
            state: self.state,
            h: self.h,
            counters: self.counters,
            length: policy.length(),
        }
    }

    fn reject(&mut self, trial: &Trial<N>) -> Event<N> {
        self.counters.rejected += 1;
        self.h = 0.5 * trial.h;
        log::debug!(
            "rejected h = {} at x = {} (error {:e})",
            trial.h,
            self.state.x,
            trial.estimate.combined,
        );

        Event::Rejected {
            origin: self.state,
            h: trial.h,
            estimate: trial.estimate,
            counters: self.counters,
        }
    }

    fn roll_back(&mut self, trial: &Trial<N>, increment: f64, length: f64) -> Event<N> {
        self.counters.rejected += 1;
        self.h = 0.5 * trial.h;
        log::debug!(
            "rolled back h = {} at x = {} (length {length} + {increment})",
            trial.h,
            self.state.x,
        );

        Event::RolledBack {
            origin: self.state,
            h: trial.h,
            increment,
            length,
            counters: self.counters,
        }
    }

    fn commit(&mut self, trial: &Trial<N>, kind: StepKind, length: Option<f64>) -> Event<N> {
        self.counters.accepted += 1;
        self.state = trial.full;
        self.h = if kind == StepKind::Grow {
            self.counters.doubled += 1;
            2.0 * trial.h
        } else {
            trial.h
        };
        log::trace!("accepted h = {} ({kind:?}), now at x = {}", trial.h, self.state.x);

        Event::Accepted(Record {
            kind,
            state: trial.full,
            half: trial.half.y,
            h: trial.h,
            estimate: trial.estimate,
            counters: self.counters,
            length,
        })
    }
}

/// Runs the step-doubling controller under a termination policy.
pub(super) fn integrate<S, T, Obs, const N: usize>(
    system: &S,
    initial: State<N>,
    h0: f64,
    config: &Config,
    mut policy: T,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    S: OdeSystem<N>,
    T: Termination<N>,
    Obs: Observer<Event<N>, Action>,
{
    let mut run = Run {
        state: initial,
        h: h0,
        counters: Counters::default(),
    };

    let event = Event::Started {
        state: initial,
        h: h0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(run.finish(Status::StoppedByObserver, &policy));
    }

    loop {
        if policy.is_reached(&run.state, config.edge()) {
            return Ok(run.finish(Status::Reached, &policy));
        }
        if run.counters.steps >= config.max_steps() {
            return Ok(run.finish(Status::MaxSteps, &policy));
        }

        let plan = policy.plan(&run.state, run.h, config.edge());
        run.counters.steps += 1;
        let mut trial = Trial::run(system, &run.state, plan.h)?;

        let event = match trial.estimate.verdict(config.tolerance()) {
            Verdict::Reject => run.reject(&trial),
            verdict => match policy.review(&run.state, &mut trial, plan) {
                Review::Rollback { increment } => {
                    let length = policy.length().unwrap_or_default();
                    run.roll_back(&trial, increment, length)
                }
                Review::Fixed(kind) => run.commit(&trial, kind, policy.length()),
                Review::Adaptive => {
                    let kind = if verdict == Verdict::Grow {
                        StepKind::Grow
                    } else {
                        StepKind::Steady
                    };
                    run.commit(&trial, kind, policy.length())
                }
            },
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(run.finish(Status::StoppedByObserver, &policy));
        }
    }
}
