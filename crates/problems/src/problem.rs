use kutta_core::{DerivativeSystem, State, Trajectory};

/// A derivative system with a known closed-form solution.
pub trait Problem: DerivativeSystem {
    /// The equation in human-readable form, e.g. `"y'' - 4y = 0"`.
    fn equation(&self) -> &'static str;

    /// Evaluates the solution through `initial` at `x`.
    ///
    /// The solution is the unique one with `y(initial.x) = initial.y` and
    /// `y'(initial.x) = initial.z`.
    fn exact(&self, initial: &State, x: f64) -> f64;

    /// Returns the largest `|y - y_exact|` over the states of a trajectory.
    ///
    /// The analytical solution is taken through the trajectory's first state.
    /// Returns 0 for an empty trajectory.
    fn max_error(&self, trajectory: &Trajectory) -> f64 {
        let Some(initial) = trajectory.first() else {
            return 0.0;
        };

        trajectory
            .iter()
            .map(|s| (s.y - self.exact(initial, s.x)).abs())
            .fold(0.0, f64::max)
    }
}
