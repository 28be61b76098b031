use kutta_core::{DerivativeSystem, State};

use crate::Problem;

/// The unforced equation `y'' - 4y = 0`.
///
/// As a first-order system:
///
/// ```text
/// y' = z
/// z' = 4y
/// ```
///
/// The general solution is `A·e^(2x) + B·e^(-2x)`. Through `y(0) = 1`,
/// `y'(0) = 2` the decaying mode vanishes and `y = e^(2x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialGrowth;

impl DerivativeSystem for ExponentialGrowth {
    fn dy(&self, _x: f64, _y: f64, z: f64) -> f64 {
        z
    }

    fn dz(&self, _x: f64, y: f64, _z: f64) -> f64 {
        4.0 * y
    }
}

impl Problem for ExponentialGrowth {
    fn equation(&self) -> &'static str {
        "y'' - 4y = 0"
    }

    fn exact(&self, initial: &State, x: f64) -> f64 {
        let State { x: x0, y: y0, z: z0 } = *initial;
        let growing = (y0 + z0 / 2.0) / 2.0;
        let decaying = (y0 - z0 / 2.0) / 2.0;
        let u = 2.0 * (x - x0);

        growing * u.exp() + decaying * (-u).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reduces_to_exponential_from_origin() {
        let initial = State::new(0.0, 1.0, 2.0);

        for x in [0.0_f64, 0.5, 1.0, 3.0] {
            assert_eq!(ExponentialGrowth.exact(&initial, x), (2.0 * x).exp());
        }
    }

    #[test]
    fn honors_initial_conditions_away_from_origin() {
        let initial = State::new(-0.5, 3.0, -1.0);
        let y = |x: f64| ExponentialGrowth.exact(&initial, x);
        let h = 1e-5;

        assert_relative_eq!(y(-0.5), 3.0, epsilon = 1e-14);
        assert_relative_eq!((y(-0.5 + h) - y(-0.5 - h)) / (2.0 * h), -1.0, epsilon = 1e-7);
    }

    #[test]
    fn pure_decay_when_slope_cancels_growth() {
        let initial = State::new(0.0, 1.0, -2.0);

        assert_relative_eq!(
            ExponentialGrowth.exact(&initial, 1.5),
            (-3.0_f64).exp(),
            max_relative = 1e-14
        );
    }
}
