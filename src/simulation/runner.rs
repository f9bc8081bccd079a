//! Simulation entry point.
//!
//! [`simulate`] ties the pipeline together: validate and normalize the
//! network, build the stoichiometry matrices and the mass-action system, run
//! the adaptive-step integrator over the network's time range, and resample
//! the trajectory onto the requested time grid.

use log::debug;
use ndarray::Array2;
use ode_solvers::{DVector, Dopri5};

use crate::network::ReactionNetwork;
use crate::simulation::error::SimulationError;
use crate::simulation::interpolation::resample;
use crate::simulation::result::SimulationResult;
use crate::simulation::setup::SimulationSetup;
use crate::simulation::stoich::build_matrices;
use crate::simulation::system::MassActionSystem;
use crate::validation::network::{normalize, ValidationError};
use crate::validation::report::Report;

/// Simulates a reaction network over its time grid.
///
/// All fatal errors (grammar, structural, degenerate reactions) surface here
/// before the integrator is invoked. Non-fatal findings are returned in the
/// result's `diagnostics`.
///
/// # Arguments
///
/// * `network` - The reaction network to simulate.
/// * `setup` - Solver options (dense output step and tolerances).
///
/// # Returns
///
/// Returns the concentration trajectory with one row per entry of
/// `network.times`, or a [`SimulationError`].
pub fn simulate(
    network: &ReactionNetwork,
    setup: &SimulationSetup,
) -> Result<SimulationResult, SimulationError> {
    let mut report = Report::new();
    let reactions = normalize(network, &mut report)?;

    check_time_grid(&network.times)?;
    if setup.dt <= 0.0 {
        return Err(SimulationError::NonPositiveStep(setup.dt));
    }

    let matrices =
        build_matrices(&network.species, &reactions).map_err(ValidationError::from)?;
    let system = MassActionSystem::new(&matrices, &network.rate_constants)?;
    debug!(
        "assembled mass-action system with {} species and {} reactions",
        system.num_species(),
        system.num_reactions()
    );

    let y0 = DVector::from_row_slice(&network.initial_concentrations);
    let t0 = network.times[0];
    let t1 = *network.times.last().expect("time grid is non-empty");

    let mut stepper = Dopri5::new(system, t0, t1, setup.dt, y0, setup.rtol, setup.atol);
    stepper
        .integrate()
        .map_err(|err| SimulationError::Integration(err.to_string()))?;

    let rows = resample(stepper.y_out(), stepper.x_out(), &network.times);
    let mut concentrations = Array2::zeros((network.times.len(), network.species.len()));
    for (i, row) in rows.iter().enumerate() {
        for j in 0..network.species.len() {
            concentrations[(i, j)] = row[j];
        }
    }

    Ok(SimulationResult {
        time: network.times.clone(),
        species: network.species.clone(),
        concentrations,
        diagnostics: report.into_diagnostics(),
    })
}

fn check_time_grid(times: &[f64]) -> Result<(), SimulationError> {
    if times.len() < 2 {
        return Err(SimulationError::TimeGridTooShort);
    }
    if times.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(SimulationError::TimeGridNotAscending);
    }
    Ok(())
}
