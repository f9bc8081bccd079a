//! Simulation result table.
//!
//! A [`SimulationResult`] is the tabular outcome of a simulation: one row per
//! requested time point in input order, one column per species in species
//! order, plus the non-fatal diagnostics collected while normalizing the
//! network. Values are the raw solver output; slightly negative
//! concentrations from numerical error are passed through unclamped.

use ndarray::Array2;
use serde_json::{json, Value};

use crate::validation::report::Diagnostic;

/// The concentration trajectory of a simulated network.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Time points, as requested, in input order.
    pub time: Vec<f64>,
    /// Species names, in network order; label the matrix columns.
    pub species: Vec<String>,
    /// Concentrations, one row per time point, one column per species.
    pub concentrations: Array2<f64>,
    /// Non-fatal findings from validation (repairs, dropped terms).
    pub diagnostics: Vec<Diagnostic>,
}

impl SimulationResult {
    /// Returns the concentration series of one species, or `None` if the
    /// species is not part of the network.
    pub fn species_series(&self, species: &str) -> Option<Vec<f64>> {
        let column = self.species.iter().position(|name| name == species)?;
        Some(self.concentrations.column(column).to_vec())
    }

    /// Renders the trajectory as a JSON table.
    ///
    /// The `columns` array holds `time` followed by the species names in
    /// network order; each entry of `rows` is one time point.
    pub fn to_json(&self) -> Value {
        let columns: Vec<&str> = std::iter::once("time")
            .chain(self.species.iter().map(String::as_str))
            .collect();
        let rows: Vec<Vec<f64>> = self
            .time
            .iter()
            .zip(self.concentrations.rows())
            .map(|(&t, row)| std::iter::once(t).chain(row.iter().copied()).collect())
            .collect();
        json!({ "columns": columns, "rows": rows })
    }
}
