/// Selects the increments used to evaluate the fourth RK4 stage.
///
/// The first three stages are the same for both variants. They differ only in
/// the point at which the end-of-step slope is taken:
///
/// | variant | fourth stage evaluated at |
/// |---|---|
/// | [`FromSecondStage`](Self::FromSecondStage) | `(x + h, y + k2, z + l2)` |
/// | [`FromThirdStage`](Self::FromThirdStage) | `(x + h, y + k3, z + l3)` |
///
/// `FromThirdStage` is the textbook method with fourth-order global error.
/// `FromSecondStage` keeps the same weights but is only third-order accurate.
/// It is the default, and the recorded trajectories of the bundled scenarios
/// were computed with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FourthStage {
    /// Evaluate the fourth stage at `(x + h, y + k2, z + l2)`.
    #[default]
    FromSecondStage,

    /// Evaluate the fourth stage at `(x + h, y + k3, z + l3)`.
    FromThirdStage,
}

/// Configuration for the RK4 solver.
///
/// ```
/// use kutta_solvers::ode::rk4::{Config, FourthStage};
///
/// let config = Config::default().with_fourth_stage(FourthStage::FromThirdStage);
/// assert_eq!(config, Config::classic());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    fourth_stage: FourthStage,
}

impl Config {
    /// Creates a config using the textbook fourth stage.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            fourth_stage: FourthStage::FromThirdStage,
        }
    }

    /// Sets the fourth-stage variant.
    #[must_use]
    pub fn with_fourth_stage(mut self, fourth_stage: FourthStage) -> Self {
        self.fourth_stage = fourth_stage;
        self
    }

    /// Returns the fourth-stage variant.
    #[must_use]
    pub fn fourth_stage(&self) -> FourthStage {
        self.fourth_stage
    }
}
