//! Core traits and types for Kutta.
//!
//! This crate defines the shared abstractions that the integrator, the problem
//! definitions, and the observers build on:
//!
//! - [`State`] — a point `(x, y, z)` of a second-order system written as two
//!   first-order equations, where `z = y'`
//! - [`DerivativeSystem`] — the pair of functions `y' = f(x, y, z)` and
//!   `z' = g(x, y, z)` that defines the problem
//! - [`Grid`] — a validated uniform grid over `[x0, xn]`
//! - [`Trajectory`] — the immutable sequence of states produced by one run
//! - [`Observer`] — receives solver events and optionally returns control actions

mod grid;
mod observer;
mod state;
mod system;
mod trajectory;

pub use grid::{Grid, GridError};
pub use observer::Observer;
pub use state::State;
pub use system::DerivativeSystem;
pub use trajectory::Trajectory;
