use kutta_core::{DerivativeSystem, State};

use crate::Problem;

/// The forced oscillator `y'' + 4y = cos(3x)`.
///
/// As a first-order system:
///
/// ```text
/// y' = z
/// z' = cos(3x) - 4y
/// ```
///
/// The general solution is a natural oscillation at frequency 2 plus the
/// particular solution `-cos(3x)/5`. Through `y(0) = 1`, `y'(0) = 2` it is
///
/// ```text
/// y = 1.2·cos(2x) + sin(2x) - 0.2·cos(3x)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForcedOscillator;

impl DerivativeSystem for ForcedOscillator {
    fn dy(&self, _x: f64, _y: f64, z: f64) -> f64 {
        z
    }

    fn dz(&self, x: f64, y: f64, _z: f64) -> f64 {
        (3.0 * x).cos() - 4.0 * y
    }
}

impl Problem for ForcedOscillator {
    fn equation(&self) -> &'static str {
        "y'' + 4y = cos(3x)"
    }

    fn exact(&self, initial: &State, x: f64) -> f64 {
        let State { x: x0, y: y0, z: z0 } = *initial;
        let a = y0 + (3.0 * x0).cos() / 5.0;
        let b = (z0 - 0.6 * (3.0 * x0).sin()) / 2.0;
        let u = 2.0 * (x - x0);

        a * u.cos() + b * u.sin() - (3.0 * x).cos() / 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const H: f64 = 1e-4;

    fn derivative(f: impl Fn(f64) -> f64, x: f64) -> f64 {
        (f(x + H) - f(x - H)) / (2.0 * H)
    }

    #[test]
    fn matches_closed_form_from_origin() {
        let initial = State::new(0.0, 1.0, 2.0);

        for x in [0.0_f64, 0.7, 1.9, 4.2, 7.0] {
            let expected = 1.2 * (2.0 * x).cos() + (2.0 * x).sin() - 0.2 * (3.0 * x).cos();
            assert_relative_eq!(
                ForcedOscillator.exact(&initial, x),
                expected,
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn honors_initial_conditions_away_from_origin() {
        let initial = State::new(1.3, -0.4, 0.9);
        let y = |x| ForcedOscillator.exact(&initial, x);

        assert_relative_eq!(y(1.3), -0.4, epsilon = 1e-14);
        assert_relative_eq!(derivative(y, 1.3), 0.9, epsilon = 1e-7);
    }

    #[test]
    fn satisfies_the_equation() {
        let initial = State::new(0.0, 1.0, 2.0);
        let y = |x| ForcedOscillator.exact(&initial, x);

        for x in [0.25_f64, 1.0, 3.5, 6.0] {
            let y_pp = (y(x + H) - 2.0 * y(x) + y(x - H)) / (H * H);
            let residual = y_pp + 4.0 * y(x) - (3.0 * x).cos();
            assert!(residual.abs() < 1e-5, "residual {residual} at x = {x}");
        }
    }
}
