//! Solver configuration for ODE simulations.
//!
//! [`SimulationSetup`] holds the numerical-integration knobs: the dense output
//! step and the error tolerances. The time range itself is not configured
//! here; it always comes from the network's time grid.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for the numerical integrator.
///
/// # Examples
///
/// ```
/// use crnsim::prelude::SimulationSetupBuilder;
///
/// let setup = SimulationSetupBuilder::default()
///     .dt(0.01)
///     .rtol(1e-8)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct SimulationSetup {
    /// Dense output step of the solver. The trajectory is resampled from
    /// these points onto the requested time grid.
    #[builder(default = "0.1")]
    pub dt: f64,
    /// Relative tolerance for error control.
    #[builder(default = "1e-6")]
    pub rtol: f64,
    /// Absolute tolerance for error control.
    #[builder(default = "1e-8")]
    pub atol: f64,
}

impl Default for SimulationSetup {
    fn default() -> Self {
        SimulationSetupBuilder::default()
            .build()
            .expect("all fields have builder defaults")
    }
}
