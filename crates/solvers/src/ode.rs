//! Integrators for ordinary differential equations.
//!
//! A [`DerivativeSystem`] describes `y' = f(x, y, z)` and `z' = g(x, y, z)`.
//! Integrators in this module advance a [`State`] across a uniform [`Grid`]
//! and return the resulting [`Trajectory`].
//!
//! # Integrators
//!
//! - [`rk4`] — fixed-step fourth-order Runge–Kutta
//!
//! [`DerivativeSystem`]: kutta_core::DerivativeSystem
//! [`State`]: kutta_core::State
//! [`Grid`]: kutta_core::Grid
//! [`Trajectory`]: kutta_core::Trajectory

pub mod rk4;
