use kutta_core::State;

/// Event emitted by the RK4 solver for each grid point.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The state reached at this step.
    pub state: State,
}
