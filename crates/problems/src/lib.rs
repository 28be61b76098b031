//! Second-order ODEs with closed-form solutions, and the scenarios that
//! compare them against the RK4 integrator.
//!
//! # Problems
//!
//! - [`ForcedOscillator`] — `y'' + 4y = cos(3x)`
//! - [`ExponentialGrowth`] — `y'' - 4y = 0`
//!
//! Both implement [`Problem`], which pairs a [`DerivativeSystem`] with its
//! analytical solution.
//!
//! # Modules
//!
//! - [`reference`] — samples an analytical solution on a fine grid
//! - [`scenario`] — launch parameters and the numerical-versus-analytical
//!   comparison
//!
//! # Features
//!
//! - `serde` (default) — derives `Serialize` and `Deserialize` for
//!   [`ScenarioConfig`].
//!
//! [`DerivativeSystem`]: kutta_core::DerivativeSystem

mod forced;
mod growth;
mod problem;

pub mod reference;
pub mod scenario;

pub use forced::ForcedOscillator;
pub use growth::ExponentialGrowth;
pub use problem::Problem;
pub use scenario::{Comparison, ScenarioConfig, ScenarioError, compare, run_scenario};
