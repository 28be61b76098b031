/// A second-order ODE written as two first-order equations.
///
/// With `z = y'`, the system is
///
/// ```text
/// y' = dy(x, y, z)
/// z' = dz(x, y, z)
/// ```
///
/// Both methods must be pure: the integrator calls them several times per step
/// at intermediate points and relies on getting the same answer for the same
/// arguments.
///
/// Any pair of closures `(f, g)` with signature `Fn(f64, f64, f64) -> f64` is a
/// `DerivativeSystem`, which keeps one-off problems short:
///
/// ```
/// use kutta_core::DerivativeSystem;
///
/// // y'' = -y
/// let system = (|_x: f64, _y: f64, z: f64| z, |_x: f64, y: f64, _z: f64| -y);
///
/// assert_eq!(system.dy(0.0, 1.0, 2.0), 2.0);
/// assert_eq!(system.dz(0.0, 1.0, 2.0), -1.0);
/// ```
pub trait DerivativeSystem {
    /// Returns `y'` at `(x, y, z)`.
    fn dy(&self, x: f64, y: f64, z: f64) -> f64;

    /// Returns `z'` at `(x, y, z)`.
    fn dz(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<F, G> DerivativeSystem for (F, G)
where
    F: Fn(f64, f64, f64) -> f64,
    G: Fn(f64, f64, f64) -> f64,
{
    fn dy(&self, x: f64, y: f64, z: f64) -> f64 {
        (self.0)(x, y, z)
    }

    fn dz(&self, x: f64, y: f64, z: f64) -> f64 {
        (self.1)(x, y, z)
    }
}
