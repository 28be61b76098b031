//! Fixed-step fourth-order Runge–Kutta integrator.
//!
//! # Algorithm
//!
//! Each step from `(x, y, z)` with step size `h` evaluates four stages, where
//! `k` are increments of `y` and `l` are increments of `z`:
//!
//! ```text
//! k1 = h·f(x,       y,        z)          l1 = h·g(x,       y,        z)
//! k2 = h·f(x + h/2, y + k1/2, z + l1/2)   l2 = h·g(x + h/2, y + k1/2, z + l1/2)
//! k3 = h·f(x + h/2, y + k2/2, z + l2/2)   l3 = h·g(x + h/2, y + k2/2, z + l2/2)
//! k4 = h·f(x + h,   y + kₛ,   z + lₛ)     l4 = h·g(x + h,   y + kₛ,   z + lₛ)
//!
//! y ← y + (k1 + 2·k2 + 2·k3 + k4) / 6
//! z ← z + (l1 + 2·l2 + 2·l3 + l4) / 6
//! ```
//!
//! The fourth stage is evaluated from the increments selected by
//! [`FourthStage`] (`s = 2` by default, `s = 3` for the textbook method).
//!
//! The grid is `x_i = x0 + i·h` for `i = 0..=floor((xn - x0) / h)`. When `h`
//! does not divide the span evenly the integration stops at the last grid
//! point before `xn`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] for the initial state (step 0) and one after
//! each step. Observers can return [`Action::StopEarly`] to halt; the returned
//! [`Solution`] then holds the states computed so far.
//!
//! # Example
//!
//! ```
//! use kutta_solvers::ode::rk4;
//!
//! // y'' - 4y = 0 with y(0) = 1, y'(0) = 2, whose solution is e^(2x).
//! let trajectory = rk4::integrate(0.0, 1.0, 1.0, 2.0, 0.001, |_, _, z| z, |_, y, _| 4.0 * y)?;
//!
//! assert_eq!(trajectory.len(), 1001);
//! assert!((trajectory[1000].y - 2.0_f64.exp()).abs() < 1e-4);
//! # Ok::<(), rk4::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;
mod stage;


pub use action::Action;
pub use config::{Config, FourthStage};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use stage::advance;

use kutta_core::{DerivativeSystem, Grid, Observer, State, Trajectory};
use tracing::debug;

/// Integrates a derivative system from `initial` to `end` with step `step`.
///
/// # Algorithm
///
/// 1. Build the grid over `[initial.x, end]`, rejecting invalid parameters.
/// 2. Emit step 0 with the initial state.
/// 3. For each grid point `i = 1..=n`:
///    - Advance `(y, z)` with one RK4 step from the previous state.
///    - Set `x = x0 + i·step`.
///    - Emit an [`Event`] and stop if the observer returns
///      [`Action::StopEarly`].
/// 4. Return the solution with the full trajectory.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `step` is not positive, if
/// `end <= initial.x`, or if a bound or the step is not finite. No trajectory
/// is produced in that case.
pub fn solve<S, Obs>(
    system: &S,
    initial: State,
    end: f64,
    step: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: DerivativeSystem + ?Sized,
    Obs: Observer<Event, Action>,
{
    let grid = Grid::new(initial.x, end, step)?;
    let fourth_stage = config.fourth_stage();

    debug!(
        start = grid.start(),
        end = grid.end(),
        step = grid.step(),
        points = grid.len(),
        ?fourth_stage,
        "starting RK4 integration"
    );

    let mut states = Vec::with_capacity(grid.len());
    states.push(initial);

    let event = Event {
        step: 0,
        state: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!(step = 0, "integration stopped by observer");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory: Trajectory::from(states),
            steps: 0,
        });
    }

    let mut current = initial;

    for i in 1..=grid.intervals() {
        let (y, z) = advance(system, &current, grid.step(), fourth_stage);
        let next = State::new(grid.point(i), y, z);
        states.push(next);

        let event = Event {
            step: i,
            state: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step = i, x = next.x, "integration stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory: Trajectory::from(states),
                steps: i,
            });
        }

        current = next;
    }

    debug!(
        steps = grid.intervals(),
        x = current.x,
        y = current.y,
        "RK4 integration complete"
    );

    Ok(Solution {
        status: Status::Complete,
        trajectory: Trajectory::from(states),
        steps: grid.intervals(),
    })
}

/// Integrates a derivative system without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] under the same conditions as [`solve`].
pub fn solve_unobserved<S>(
    system: &S,
    initial: State,
    end: f64,
    step: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    S: DerivativeSystem + ?Sized,
{
    solve(system, initial, end, step, config, ())
}

/// Integrates `y' = f(x, y, z)`, `z' = g(x, y, z)` from `(x0, y0, z0)` to `xn`.
///
/// Uses the default [`Config`] and returns only the trajectory.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `h <= 0`, if `xn <= x0`, or if a
/// bound or the step is not finite.
pub fn integrate<F, G>(
    x0: f64,
    xn: f64,
    y0: f64,
    z0: f64,
    h: f64,
    f: F,
    g: G,
) -> Result<Trajectory, Error>
where
    F: Fn(f64, f64, f64) -> f64,
    G: Fn(f64, f64, f64) -> f64,
{
    let initial = State::new(x0, y0, z0);
    let solution = solve_unobserved(&(f, g), initial, xn, h, &Config::default())?;
    Ok(solution.trajectory)
}
