use thiserror::Error;

/// A uniform grid `x_i = start + i * step` for `i = 0..=intervals`.
///
/// The number of intervals is `floor((end - start) / step)`. When the step
/// does not divide the span evenly the grid stops short of `end`; it is never
/// rounded up. Each point is computed from its index rather than by repeated
/// addition, so there is no accumulated drift.
///
/// ```
/// use kutta_core::Grid;
///
/// let grid = Grid::new(0.0, 1.0, 0.25).unwrap();
/// assert_eq!(grid.len(), 5);
/// assert_eq!(grid.iter().collect::<Vec<_>>(), [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    start: f64,
    step: f64,
    intervals: usize,
}

/// Errors that can occur when constructing a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("interval bounds must be finite")]
    NonFiniteBound,

    #[error("step size must be finite and positive")]
    InvalidStep,

    #[error("interval end must be greater than its start")]
    EmptyInterval,

    #[error("step size is too small for the interval")]
    TooManyPoints,
}

impl Grid {
    /// Largest number of intervals a grid may hold.
    ///
    /// A full trajectory on the largest grid is a few hundred megabytes.
    pub const MAX_INTERVALS: usize = 1 << 24;

    /// Creates a grid over `[start, end]` with the given step.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, if `step` is not finite and
    /// positive, if `end <= start`, or if the grid would have more than
    /// [`Grid::MAX_INTERVALS`] intervals.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, GridError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::NonFiniteBound);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(GridError::InvalidStep);
        }
        if end <= start {
            return Err(GridError::EmptyInterval);
        }

        #[allow(clippy::cast_precision_loss)]
        let max_intervals = Self::MAX_INTERVALS as f64;

        let intervals = ((end - start) / step).floor();
        if !intervals.is_finite() || intervals > max_intervals {
            return Err(GridError::TooManyPoints);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = intervals as usize;

        Ok(Self {
            start,
            step,
            intervals,
        })
    }

    /// Returns the first grid point.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the last grid point, which may fall short of the requested end.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.point(self.intervals)
    }

    /// Returns the step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of intervals.
    #[must_use]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Returns the number of grid points, `intervals + 1`.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.intervals + 1
    }

    /// Returns the `i`-th grid point, `start + i * step`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn point(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    /// Iterates over all grid points in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.intervals).map(|i| self.point(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evenly_divided_span() {
        let grid = Grid::new(0.0, 3.0, 0.5).unwrap();

        assert_eq!(grid.intervals(), 6);
        assert_eq!(grid.len(), 7);
        assert_relative_eq!(grid.end(), 3.0);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 0.3 / 0.1 is 2.9999999999999996 in binary floating point.
        let grid = Grid::new(0.0, 0.3, 0.1).unwrap();

        assert_eq!(grid.len(), 3);
        assert_relative_eq!(grid.end(), 0.2);

        let grid = Grid::new(0.0, 1.0, 0.3).unwrap();
        assert_eq!(grid.len(), 4);
        assert_relative_eq!(grid.end(), 0.9, epsilon = 1e-15);
    }

    #[test]
    fn step_larger_than_span_gives_single_point() {
        let grid = Grid::new(1.0, 1.5, 2.0).unwrap();

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.iter().collect::<Vec<_>>(), [1.0]);
    }

    #[test]
    fn points_are_computed_from_index() {
        let grid = Grid::new(-1.0, 1.0, 0.001).unwrap();

        for (i, x) in grid.iter().enumerate() {
            assert_eq!(x, -1.0 + i as f64 * 0.001);
        }
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(Grid::new(0.0, 1.0, 0.0), Err(GridError::InvalidStep));
        assert_eq!(Grid::new(0.0, 1.0, -0.1), Err(GridError::InvalidStep));
        assert_eq!(Grid::new(0.0, 1.0, f64::NAN), Err(GridError::InvalidStep));
        assert_eq!(Grid::new(1.0, 1.0, 0.1), Err(GridError::EmptyInterval));
        assert_eq!(Grid::new(2.0, 1.0, 0.1), Err(GridError::EmptyInterval));
        assert_eq!(
            Grid::new(0.0, f64::INFINITY, 0.1),
            Err(GridError::NonFiniteBound)
        );
        assert_eq!(Grid::new(0.0, 1.0, 1e-300), Err(GridError::TooManyPoints));
    }

    #[test]
    fn caps_the_number_of_intervals() {
        let largest = Grid::MAX_INTERVALS as f64;

        let grid = Grid::new(0.0, largest, 1.0).unwrap();
        assert_eq!(grid.intervals(), Grid::MAX_INTERVALS);
        assert_eq!(grid.len(), Grid::MAX_INTERVALS + 1);

        assert_eq!(
            Grid::new(0.0, largest + 1.0, 1.0),
            Err(GridError::TooManyPoints)
        );
        // About 4.3e9 intervals, which no trajectory could hold in memory.
        assert_eq!(Grid::new(0.0, 1.0, 2.3e-10), Err(GridError::TooManyPoints));
    }
}
