//! Dense samples of an analytical solution.
//!
//! The reference curve is drawn on a much finer grid than the numerical
//! solution so it reads as a smooth line in plots.

use kutta_core::{Grid, GridError, State};
use tracing::trace;

use crate::Problem;

/// Evaluates `exact` at every point of the grid over `[start, end]`.
///
/// The grid follows the same rules as the integrator's: points are
/// `start + i·step` for `i = 0..=floor((end - start) / step)`.
///
/// # Errors
///
/// Returns a [`GridError`] if the bounds or the step cannot form a grid.
pub fn sample<F>(exact: F, start: f64, end: f64, step: f64) -> Result<Vec<[f64; 2]>, GridError>
where
    F: Fn(f64) -> f64,
{
    let grid = Grid::new(start, end, step)?;
    trace!(points = grid.len(), step, "sampling analytical reference");

    Ok(grid.iter().map(|x| [x, exact(x)]).collect())
}

/// Samples the analytical solution of `problem` through `initial` up to `end`.
///
/// # Errors
///
/// Returns a [`GridError`] if the bounds or the step cannot form a grid.
pub fn sample_problem<P>(
    problem: &P,
    initial: &State,
    end: f64,
    step: f64,
) -> Result<Vec<[f64; 2]>, GridError>
where
    P: Problem + ?Sized,
{
    sample(|x| problem.exact(initial, x), initial.x, end, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::ExponentialGrowth;

    #[test]
    fn samples_every_grid_point() {
        let points = sample(|x| x * x, 0.0, 1.0, 0.25).unwrap();

        assert_eq!(
            points,
            [[0.0, 0.0], [0.25, 0.0625], [0.5, 0.25], [0.75, 0.5625], [1.0, 1.0]]
        );
    }

    #[test]
    fn fine_grid_covers_the_interval() {
        let points = sample(f64::sin, 0.0, 7.0, 0.001).unwrap();

        assert_eq!(points.len(), 7001);
        assert_relative_eq!(points[7000][0], 7.0, epsilon = 1e-12);
    }

    #[test]
    fn problem_samples_start_at_the_initial_state() {
        let initial = State::new(0.0, 1.0, 2.0);
        let points = sample_problem(&ExponentialGrowth, &initial, 3.0, 0.001).unwrap();

        assert_eq!(points[0], [0.0, 1.0]);
        assert_relative_eq!(points[3000][1], 6.0_f64.exp(), max_relative = 1e-12);
    }

    #[test]
    fn rejects_invalid_grid() {
        assert_eq!(sample(f64::cos, 0.0, 1.0, 0.0), Err(GridError::InvalidStep));
        assert_eq!(sample(f64::cos, 1.0, 0.0, 0.1), Err(GridError::EmptyInterval));
    }
}
