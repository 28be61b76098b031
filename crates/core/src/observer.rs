/// Receives events from a solver and optionally steers it.
///
/// Solvers call [`observe`](Observer::observe) once per event. Returning
/// `None` lets the solver continue; returning `Some(action)` asks the solver to
/// act on it. Each solver documents the events it emits and the actions it
/// understands.
///
/// Implementations are provided for:
///
/// - `()` — a no-op observer that never returns an action
/// - any `FnMut(&E) -> Option<A>` closure
pub trait Observer<E, A> {
    /// Observes a single event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<Obs: Observer<u32, &'static str>>(
        mut observer: Obs,
        events: &[u32],
    ) -> Vec<&'static str> {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(feed((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = feed(
            |event: &u32| {
                seen.push(*event);
                (*event == 2).then_some("stop")
            },
            &[1, 2, 3],
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
