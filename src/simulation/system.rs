//! Mass-action ODE system assembly.
//!
//! [`MassActionSystem`] turns the stoichiometry matrices and rate constants
//! into the derivative function consumed by the integrator. All
//! precomputation (reactant indices, exponents, the transposed net-change
//! matrix) happens once, before integration starts; the system is read-only
//! afterwards and safe to evaluate at arbitrary `(t, y)` probes in any order.

use nalgebra::{DMatrix, DVector};
use ode_solvers::System;

use super::error::SimulationError;
use super::stoich::StoichiometryMatrices;

/// Type alias for the state vector used in the ODE system
pub(crate) type State = DVector<f64>;
/// Type alias for time values used in the ODE system
pub(crate) type Time = f64;

/// The mass-action derivative function of a reaction network.
///
/// Under mass-action kinetics the instantaneous rate of reaction `i` is
/// `v_i = k_i * prod_j y_j^s_ij`, where `s_ij` is the stoichiometric count of
/// reactant `j` in reaction `i`; each reactant concentration is raised to its
/// own coefficient, not a fixed power. A reaction with no registered
/// reactants (formation from the `0` sentinel or from unregistered species)
/// has the constant rate `k_i`. The species derivatives are
/// `dy = N^T * v` with `N` the net-change matrix.
#[derive(Debug, Clone)]
pub struct MassActionSystem {
    /// Transposed net-change matrix, one row per species, one column per
    /// reaction.
    net_transpose: DMatrix<f64>,
    rate_constants: DVector<f64>,
    /// Per reaction, the state indices of its reactants and their exponents.
    reactant_orders: Vec<Vec<(usize, i32)>>,
}

impl MassActionSystem {
    /// Assembles the derivative function from the stoichiometry matrices and
    /// the per-reaction rate constants.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of rate constants does not match the
    /// number of reactions.
    pub fn new(
        matrices: &StoichiometryMatrices,
        rate_constants: &[f64],
    ) -> Result<Self, SimulationError> {
        let (n_reactions, n_species) = matrices.net.dim();
        if rate_constants.len() != n_reactions {
            return Err(SimulationError::RateConstantMismatch {
                expected: n_reactions,
                found: rate_constants.len(),
            });
        }

        let net_transpose =
            DMatrix::from_fn(n_species, n_reactions, |i, j| matrices.net[(j, i)]);

        let reactant_orders = (0..n_reactions)
            .map(|i| {
                (0..n_species)
                    .filter_map(|j| {
                        let count = matrices.reactant[(i, j)];
                        (count > 0.0).then_some((j, count as i32))
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            net_transpose,
            rate_constants: DVector::from_row_slice(rate_constants),
            reactant_orders,
        })
    }

    pub fn num_species(&self) -> usize {
        self.net_transpose.nrows()
    }

    pub fn num_reactions(&self) -> usize {
        self.net_transpose.ncols()
    }

    /// Instantaneous reaction rates at state `y`.
    ///
    /// The empty product is 1, so a reaction without registered reactants
    /// rates at exactly `k_i`.
    pub fn rates(&self, y: &State) -> DVector<f64> {
        DVector::from_iterator(
            self.reactant_orders.len(),
            self.reactant_orders
                .iter()
                .zip(self.rate_constants.iter())
                .map(|(orders, k)| {
                    orders
                        .iter()
                        .fold(*k, |rate, &(j, exponent)| rate * y[j].powi(exponent))
                }),
        )
    }
}

impl System<Time, State> for MassActionSystem {
    /// Evaluates `dy = N^T * v(y)`.
    ///
    /// Stateless by construction: no memoization across calls, since the
    /// integrator probes intermediate states out of order during adaptive
    /// step-size control.
    fn system(&self, _t: Time, y: &State, dy: &mut State) {
        let rates = self.rates(y);
        dy.copy_from(&(&self.net_transpose * rates));
    }
}
