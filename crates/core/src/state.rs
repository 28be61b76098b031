/// A point of a second-order system reduced to first order.
///
/// `x` is the independent variable, `y` the solution value, and `z` its first
/// derivative `y'`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl State {
    /// Creates a state from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the `[x, y]` pair, the form plotting code consumes.
    #[must_use]
    pub const fn point(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}
