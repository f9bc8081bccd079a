//! Error types for the simulation layer.
//!
//! Everything fatal is raised before the integrator is invoked, so a failed
//! simulation never produces a partial trajectory.

use thiserror::Error;

use crate::validation::network::ValidationError;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("rate constant count {found} does not match reaction count {expected}")]
    RateConstantMismatch { expected: usize, found: usize },
    #[error("time grid must contain at least two points")]
    TimeGridTooShort,
    #[error("time grid must be strictly ascending")]
    TimeGridNotAscending,
    #[error("solver output step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("ODE integration failed: {0}")]
    Integration(String),
}
