//! The chemical reaction network aggregate.
//!
//! A [`ReactionNetwork`] bundles everything a simulation needs: the ordered
//! species list, their initial concentrations, the reaction strings with their
//! rate constants, and the time grid to report on. The species order fixes the
//! column order of all derived matrices and of the output trajectory; species
//! and concentrations, and reactions and rate constants, are paired by
//! position.
//!
//! The textual fields are user supplied and treated as immutable once
//! validated; validation may hand back rewritten reaction strings, and those
//! rewritten strings are what flows into the simulation.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A chemical reaction network.
///
/// # Examples
///
/// ```
/// use crnsim::prelude::*;
///
/// let network = ReactionNetworkBuilder::default()
///     .species(vec!["A".to_string(), "B".to_string(), "C".to_string()])
///     .initial_concentrations(vec![1.0, 1.0, 0.0])
///     .reactions(vec!["A + B -> C".to_string()])
///     .rate_constants(vec![1.0])
///     .times(vec![0.0, 1.0, 2.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(network.species.len(), network.initial_concentrations.len());
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct ReactionNetwork {
    /// Species identifiers, unique within the network. Their order defines
    /// the column order of all derived matrices and of the output trajectory.
    pub species: Vec<String>,
    /// Initial concentration of each species, paired by position.
    pub initial_concentrations: Vec<f64>,
    /// Reaction strings, e.g. `"A + B -> C"`.
    pub reactions: Vec<String>,
    /// Rate constant of each reaction, paired by position.
    pub rate_constants: Vec<f64>,
    /// Time points to report concentrations at, ascending.
    pub times: Vec<f64>,
}

impl ReactionNetwork {
    /// Concatenates several networks field-wise into one.
    ///
    /// Species, initial concentrations, reactions and rate constants are
    /// appended in input order, without deduplication or conflict detection;
    /// a species shared between inputs shows up as a duplicate and is caught
    /// when the combined network is validated. The time grid is taken from
    /// the first network.
    ///
    /// Returns `None` for an empty input slice.
    pub fn combine(networks: &[ReactionNetwork]) -> Option<ReactionNetwork> {
        let (first, rest) = networks.split_first()?;
        let mut combined = first.clone();
        for network in rest {
            combined.species.extend_from_slice(&network.species);
            combined
                .initial_concentrations
                .extend_from_slice(&network.initial_concentrations);
            combined.reactions.extend_from_slice(&network.reactions);
            combined
                .rate_constants
                .extend_from_slice(&network.rate_constants);
        }
        Some(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn degradation_network(species: &str, k: f64) -> ReactionNetwork {
        ReactionNetworkBuilder::default()
            .species(vec![species.to_string()])
            .initial_concentrations(vec![1.0])
            .reactions(vec![format!("{species} -> 0")])
            .rate_constants(vec![k])
            .times(vec![0.0, 1.0])
            .build()
            .unwrap()
    }

    #[test]
    fn test_combine_concatenates_fields() {
        let first = degradation_network("A", 0.1);
        let second = degradation_network("B", 0.2);

        let combined = ReactionNetwork::combine(&[first.clone(), second.clone()]).unwrap();

        assert_eq!(combined.species, vec!["A", "B"]);
        assert_eq!(combined.initial_concentrations, vec![1.0, 1.0]);
        assert_eq!(combined.reactions, vec!["A -> 0", "B -> 0"]);
        assert_eq!(combined.rate_constants, vec![0.1, 0.2]);
        assert_eq!(
            combined.species.len(),
            first.species.len() + second.species.len()
        );
        // the time grid comes from the first network
        assert_eq!(combined.times, first.times);
    }

    #[test]
    fn test_combine_keeps_duplicates() {
        let network = degradation_network("A", 0.1);
        let combined = ReactionNetwork::combine(&[network.clone(), network]).unwrap();
        assert_eq!(combined.species, vec!["A", "A"]);
    }

    #[test]
    fn test_combine_empty_input() {
        assert_eq!(ReactionNetwork::combine(&[]), None);
    }
}
