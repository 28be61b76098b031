use kutta_core::GridError;
use thiserror::Error;

/// Errors that can occur during RK4 integration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The step size or interval cannot form an integration grid.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] GridError),
}
