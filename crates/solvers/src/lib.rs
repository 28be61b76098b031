//! Numerical integrators for Kutta.
//!
//! # Modules
//!
//! - [`ode`] — integrators for second-order ODEs written as first-order pairs

pub mod ode;
