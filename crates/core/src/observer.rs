/// Receives solver events and decides how the integration should proceed.
///
/// Observers let callers record or steer a run without changing the solver
/// API. Trace sinks, run summaries, plots and cancellation checks are all
/// observers.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Halt,
    }

    fn drive<Obs: Observer<u32, Action>>(mut observer: Obs, events: &[u32]) -> Option<usize> {
        events
            .iter()
            .position(|event| observer.observe(event) == Some(Action::Halt))
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let mut seen = Vec::new();
        let halted = drive(
            |event: &u32| {
                seen.push(*event);
                (*event == 2).then_some(Action::Halt)
            },
            &[1, 2, 3],
        );

        assert_eq!(halted, Some(1));
        assert_eq!(seen, vec![1, 2]);
    }
}
