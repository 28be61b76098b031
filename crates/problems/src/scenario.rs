//! Launch parameters and the numerical-versus-analytical comparison.
//!
//! A [`ScenarioConfig`] fixes the interval, the initial conditions, and the
//! two step sizes: a coarse one for the integrator and a fine one for the
//! analytical reference. [`run_scenario`] integrates a system under a config;
//! [`compare`] also samples the analytical solution and measures the error.
//!
//! # Example
//!
//! ```
//! use kutta_problems::{ExponentialGrowth, ScenarioConfig, compare};
//! use kutta_solvers::ode::rk4;
//!
//! let config = ScenarioConfig::growth();
//! let comparison = compare(&ExponentialGrowth, &config, &rk4::Config::classic())?;
//!
//! assert_eq!(comparison.numeric.len(), 7);
//! assert_eq!(comparison.reference.len(), 3001);
//! # Ok::<(), kutta_problems::ScenarioError>(())
//! ```

use kutta_core::{DerivativeSystem, GridError, State, Trajectory};
use kutta_solvers::ode::rk4;
use thiserror::Error;
use tracing::debug;

use crate::{Problem, reference};

/// Launch parameters for one scenario.
///
/// With the `serde` feature the config can be read from any serde format:
///
/// ```toml
/// x0 = 0.0
/// xn = 3.0
/// y0 = 1.0
/// z0 = 2.0
/// h_numeric = 0.5
/// h_reference = 0.001
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ScenarioConfig {
    /// Start of the interval.
    pub x0: f64,

    /// Requested end of the interval.
    pub xn: f64,

    /// Initial value `y(x0)`.
    pub y0: f64,

    /// Initial slope `y'(x0)`.
    pub z0: f64,

    /// Step size of the numerical solution.
    pub h_numeric: f64,

    /// Step size of the analytical reference samples.
    pub h_reference: f64,
}

impl ScenarioConfig {
    /// Parameters for [`ForcedOscillator`](crate::ForcedOscillator):
    /// `x ∈ [0, 7]`, `y(0) = 1`, `y'(0) = 2`, `h = 0.2`.
    #[must_use]
    pub const fn forced() -> Self {
        Self {
            x0: 0.0,
            xn: 7.0,
            y0: 1.0,
            z0: 2.0,
            h_numeric: 0.2,
            h_reference: 0.001,
        }
    }

    /// Parameters for [`ExponentialGrowth`](crate::ExponentialGrowth):
    /// `x ∈ [0, 3]`, `y(0) = 1`, `y'(0) = 2`, `h = 0.5`.
    #[must_use]
    pub const fn growth() -> Self {
        Self {
            x0: 0.0,
            xn: 3.0,
            y0: 1.0,
            z0: 2.0,
            h_numeric: 0.5,
            h_reference: 0.001,
        }
    }

    /// Replaces the numerical step size.
    #[must_use]
    pub const fn with_numeric_step(mut self, h: f64) -> Self {
        self.h_numeric = h;
        self
    }

    /// Returns the initial state `(x0, y0, z0)`.
    #[must_use]
    pub const fn initial(&self) -> State {
        State::new(self.x0, self.y0, self.z0)
    }
}

/// Errors that can occur while running a scenario.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("integration failed: {0}")]
    Integration(#[from] rk4::Error),

    #[error("invalid reference grid: {0}")]
    Reference(#[from] GridError),
}

/// Integrates `system` under `config` with the default RK4 configuration.
///
/// # Errors
///
/// Returns [`ScenarioError::Integration`] if the interval or the numerical
/// step size is invalid.
pub fn run_scenario<S>(system: &S, config: &ScenarioConfig) -> Result<Trajectory, ScenarioError>
where
    S: DerivativeSystem + ?Sized,
{
    let solution = rk4::solve_unobserved(
        system,
        config.initial(),
        config.xn,
        config.h_numeric,
        &rk4::Config::default(),
    )?;

    Ok(solution.trajectory)
}

/// A numerical trajectory alongside its analytical reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// The RK4 trajectory on the coarse grid.
    pub numeric: Trajectory,

    /// `[x, y_exact]` samples on the fine grid.
    pub reference: Vec<[f64; 2]>,

    /// Largest `|y - y_exact|` over the numerical grid points.
    pub max_error: f64,
}

/// Integrates `problem` and samples its analytical solution.
///
/// # Errors
///
/// Returns an error if either step size or the interval is invalid. The
/// numerical run is validated first.
pub fn compare<P>(
    problem: &P,
    config: &ScenarioConfig,
    rk4_config: &rk4::Config,
) -> Result<Comparison, ScenarioError>
where
    P: Problem + ?Sized,
{
    let initial = config.initial();
    let numeric =
        rk4::solve_unobserved(problem, initial, config.xn, config.h_numeric, rk4_config)?
            .trajectory;
    let reference =
        reference::sample_problem(problem, &initial, config.xn, config.h_reference)?;
    let max_error = problem.max_error(&numeric);

    debug!(
        equation = problem.equation(),
        h = config.h_numeric,
        max_error,
        "compared numerical and analytical solutions"
    );

    Ok(Comparison {
        numeric,
        reference,
        max_error,
    })
}

/// Builds the plot title for a scenario, e.g. `"y'' - 4y = 0, h = 0.5, Runge–Kutta method"`.
#[must_use]
pub fn title<P>(problem: &P, h: f64) -> String
where
    P: Problem + ?Sized,
{
    format!("{}, h = {h}, Runge–Kutta method", problem.equation())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{ExponentialGrowth, ForcedOscillator};

    #[test]
    fn presets() {
        let forced = ScenarioConfig::forced();
        assert_eq!(forced.initial(), State::new(0.0, 1.0, 2.0));
        assert_relative_eq!(forced.h_numeric, 0.2);

        let growth = ScenarioConfig::growth().with_numeric_step(0.1);
        assert_relative_eq!(growth.xn, 3.0);
        assert_relative_eq!(growth.h_numeric, 0.1);
        assert_relative_eq!(growth.h_reference, 0.001);
    }

    #[test]
    fn run_scenario_uses_the_numeric_step() {
        let trajectory = run_scenario(&ForcedOscillator, &ScenarioConfig::forced()).unwrap();

        assert_eq!(trajectory.len(), 36);
        assert_eq!(trajectory[0], State::new(0.0, 1.0, 2.0));
        assert_relative_eq!(trajectory.last().unwrap().x, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn run_scenario_accepts_closure_pairs() {
        let system = (|_x: f64, _y: f64, z: f64| z, |_x: f64, y: f64, _z: f64| 4.0 * y);

        let from_closures = run_scenario(&system, &ScenarioConfig::growth()).unwrap();
        let from_problem = run_scenario(&ExponentialGrowth, &ScenarioConfig::growth()).unwrap();

        assert_eq!(from_closures, from_problem);
    }

    #[test]
    fn run_scenario_rejects_bad_step() {
        let config = ScenarioConfig::growth().with_numeric_step(-0.5);

        assert_eq!(
            run_scenario(&ExponentialGrowth, &config),
            Err(ScenarioError::Integration(rk4::Error::InvalidParameter(
                GridError::InvalidStep
            )))
        );
    }

    #[test]
    fn compare_rejects_bad_reference_step() {
        let config = ScenarioConfig {
            h_reference: 0.0,
            ..ScenarioConfig::growth()
        };

        assert_eq!(
            compare(&ExponentialGrowth, &config, &rk4::Config::default()),
            Err(ScenarioError::Reference(GridError::InvalidStep))
        );
    }

    #[test]
    fn classic_error_is_smaller_on_both_scenarios() {
        let cases: [(&dyn Problem, ScenarioConfig); 2] = [
            (&ForcedOscillator, ScenarioConfig::forced()),
            (&ExponentialGrowth, ScenarioConfig::growth()),
        ];

        for (problem, config) in cases {
            let second = compare(problem, &config, &rk4::Config::default()).unwrap();
            let classic = compare(problem, &config, &rk4::Config::classic()).unwrap();

            assert!(classic.max_error < second.max_error, "{}", problem.equation());
            assert_eq!(classic.reference, second.reference);
        }
    }

    #[test]
    fn fine_steps_track_the_analytical_solution() {
        let config = ScenarioConfig::forced().with_numeric_step(0.001);
        let comparison = compare(&ForcedOscillator, &config, &rk4::Config::default()).unwrap();

        assert!(comparison.max_error < 1e-7, "max error {}", comparison.max_error);
    }

    #[test]
    fn growth_error_is_measured_at_grid_points() {
        let config = ScenarioConfig::growth();
        let comparison = compare(&ExponentialGrowth, &config, &rk4::Config::default()).unwrap();

        // The error grows with y, so it peaks at the last point, x = 3.
        let last = comparison.numeric.last().unwrap().y;
        assert_relative_eq!(comparison.max_error, 6.0_f64.exp() - last, max_relative = 1e-12);
    }

    #[test]
    fn titles() {
        assert_eq!(
            title(&ExponentialGrowth, 0.5),
            "y'' - 4y = 0, h = 0.5, Runge–Kutta method"
        );
        assert_eq!(
            title(&ForcedOscillator, 0.2),
            "y'' + 4y = cos(3x), h = 0.2, Runge–Kutta method"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_config_from_toml() {
        let config: ScenarioConfig = toml::from_str(
            r"
            x0 = 0.0
            xn = 3.0
            y0 = 1.0
            z0 = 2.0
            h_numeric = 0.5
            h_reference = 0.001
            ",
        )
        .unwrap();

        assert_eq!(config, ScenarioConfig::growth());
    }
}
