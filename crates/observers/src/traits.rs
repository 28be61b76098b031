//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused with any integrator that supports
//! the capability.
//!
//! # Event traits
//!
//! - [`HasState`] — events that carry the state reached at a grid point
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use kutta_core::{Observer, State};
//! use kutta_observers::traits::{CanStopEarly, HasState};
//! use kutta_solvers::ode::rk4;
//!
//! /// Stops once the solution leaves `[-limit, limit]`.
//! struct Bounded {
//!     limit: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Bounded {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state().y.abs() > self.limit).then(A::stop_early)
//!     }
//! }
//!
//! // y'' - 4y = 0 from y(0) = 1, y'(0) = 2 grows like e^(2x).
//! let system = (|_: f64, _: f64, z: f64| z, |_: f64, y: f64, _: f64| 4.0 * y);
//! let solution = rk4::solve(
//!     &system,
//!     State::new(0.0, 1.0, 2.0),
//!     10.0,
//!     0.01,
//!     &rk4::Config::default(),
//!     Bounded { limit: 100.0 },
//! )?;
//!
//! assert_eq!(solution.status, rk4::Status::StoppedByObserver);
//! assert!(solution.trajectory.last().unwrap().y > 100.0);
//! # Ok::<(), rk4::Error>(())
//! ```

use kutta_core::State;
use kutta_solvers::ode::rk4;

/// An event that carries the state reached at a grid point.
pub trait HasState {
    /// Returns the state for this event.
    fn state(&self) -> State;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasState for rk4::Event ---

impl HasState for rk4::Event {
    fn state(&self) -> State {
        self.state
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kutta_core::Observer;

    /// Counts events and stops after a fixed number of them.
    struct StopAfter {
        seen: Vec<f64>,
        limit: usize,
    }

    impl<E: HasState, A: CanStopEarly> Observer<E, A> for StopAfter {
        fn observe(&mut self, event: &E) -> Option<A> {
            self.seen.push(event.state().x);
            (self.seen.len() >= self.limit).then(A::stop_early)
        }
    }

    #[test]
    fn event_exposes_its_state() {
        let event = rk4::Event {
            step: 2,
            state: State::new(1.0, 2.0, 3.0),
        };

        assert_eq!(event.state(), State::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn generic_observer_drives_rk4() {
        let system = (|_: f64, _: f64, z: f64| z, |_: f64, y: f64, _: f64| -y);
        let mut observer = StopAfter {
            seen: Vec::new(),
            limit: 3,
        };

        let solution = rk4::solve(
            &system,
            State::new(0.0, 1.0, 0.0),
            1.0,
            0.25,
            &rk4::Config::default(),
            |event: &rk4::Event| -> Option<rk4::Action> { observer.observe(event) },
        )
        .expect("should stop");

        assert_eq!(solution.status, rk4::Status::StoppedByObserver);
        assert_eq!(solution.steps, 2);
        assert_eq!(observer.seen, vec![0.0, 0.25, 0.5]);
    }
}
