//! Validation and normalization of reaction networks.
//!
//! [`normalize`] runs once per network before simulation. Structural problems
//! (length mismatches, duplicate species, unparseable reactions, degenerate
//! reactions) are fatal and abort before any matrix construction. Textual
//! sloppiness (a stray `0` term next to real species, malformed tokens) is
//! repaired or dropped with a warning diagnostic, and the simulation proceeds
//! on the corrected reaction strings.

use itertools::Itertools;
use log::warn;
use thiserror::Error;

use crate::network::ReactionNetwork;
use crate::parser::{self, GrammarError, Term, NULL_SPECIES, RELATION};
use crate::validation::report::{Diagnostic, Report};

/// Fatal structural violations in a reaction network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
    #[error("'{left_field}' has {left} entries but '{right_field}' has {right}")]
    LengthMismatch {
        left_field: &'static str,
        left: usize,
        right_field: &'static str,
        right: usize,
    },
    #[error("duplicate species '{0}'")]
    DuplicateSpecies(String),
    #[error("field '{field}' contains a non-finite value at index {index}")]
    NonFinite { field: &'static str, index: usize },
    #[error("field '{field}' contains a negative value at index {index}")]
    Negative { field: &'static str, index: usize },
    #[error("reaction '{0}' has both sides empty or zero")]
    DegenerateReaction(String),
    #[error(
        "reaction '{reaction}' has left-side molecularity {molecularity}; \
         at most two reactant instances are supported"
    )]
    UnsupportedMolecularity { reaction: String, molecularity: u32 },
}

/// Validates a network and returns the normalized reaction strings.
///
/// Reactions that need no repair are returned byte-identical, so normalizing
/// an already-normalized network is the identity. Repaired reactions are
/// rewritten in canonical `left -> right` form and reported as warnings in
/// `report`; the rewritten string, not the original, must be used downstream.
///
/// # Errors
///
/// Returns the first fatal [`ValidationError`] encountered; no partial
/// simulation ever runs on invalid input.
pub fn normalize(
    network: &ReactionNetwork,
    report: &mut Report,
) -> Result<Vec<String>, ValidationError> {
    check_fields(network)?;

    network
        .reactions
        .iter()
        .map(|reaction| normalize_reaction(reaction, report))
        .collect()
}

fn check_fields(network: &ReactionNetwork) -> Result<(), ValidationError> {
    if network.species.is_empty() {
        return Err(ValidationError::EmptyField("species"));
    }
    if network.reactions.is_empty() {
        return Err(ValidationError::EmptyField("reactions"));
    }
    if network.times.is_empty() {
        return Err(ValidationError::EmptyField("times"));
    }

    if network.species.len() != network.initial_concentrations.len() {
        return Err(ValidationError::LengthMismatch {
            left_field: "species",
            left: network.species.len(),
            right_field: "initial_concentrations",
            right: network.initial_concentrations.len(),
        });
    }
    if network.reactions.len() != network.rate_constants.len() {
        return Err(ValidationError::LengthMismatch {
            left_field: "reactions",
            left: network.reactions.len(),
            right_field: "rate_constants",
            right: network.rate_constants.len(),
        });
    }

    if let Some(duplicate) = network.species.iter().duplicates().next() {
        return Err(ValidationError::DuplicateSpecies(duplicate.clone()));
    }

    check_values("initial_concentrations", &network.initial_concentrations, true)?;
    check_values("rate_constants", &network.rate_constants, true)?;
    check_values("times", &network.times, false)?;

    Ok(())
}

fn check_values(
    field: &'static str,
    values: &[f64],
    require_non_negative: bool,
) -> Result<(), ValidationError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { field, index });
        }
        if require_non_negative && value < 0.0 {
            return Err(ValidationError::Negative { field, index });
        }
    }
    Ok(())
}

fn normalize_reaction(reaction: &str, report: &mut Report) -> Result<String, ValidationError> {
    let (left, right) = parser::split_sides(reaction)?;

    // A side with no characters at all is a missing side, distinct from the
    // explicit `0` sentinel.
    if left.is_empty() || right.is_empty() {
        return Err(GrammarError::BlankSide(reaction.to_string()).into());
    }

    let (left_norm, left_repaired) = normalize_side(reaction, left, report);
    let (right_norm, right_repaired) = normalize_side(reaction, right, report);

    if parser::is_empty_or_zero(&left_norm) && parser::is_empty_or_zero(&right_norm) {
        return Err(ValidationError::DegenerateReaction(reaction.to_string()));
    }

    let molecularity = parser::part_stoichiometry(&left_norm);
    if molecularity > 2 {
        return Err(ValidationError::UnsupportedMolecularity {
            reaction: reaction.to_string(),
            molecularity,
        });
    }

    if left_repaired || right_repaired {
        let rewritten = format!("{left_norm} {RELATION} {right_norm}");
        warn!("reaction '{reaction}' auto-repaired to '{rewritten}'");
        report.add(Diagnostic::warning(
            format!("reaction '{reaction}'"),
            format!("stray '0' term stripped, rewritten as '{rewritten}'"),
        ));
        Ok(rewritten)
    } else {
        Ok(reaction.to_string())
    }
}

/// Repairs one side, returning its normalized text and whether it changed.
///
/// The `0` sentinel denotes "nothing" and is only meaningful as the sole
/// content of a side, so a `0` term coexisting with named terms is stripped,
/// and a side of several `0` terms collapses to a single `0`.
fn normalize_side(reaction: &str, side: &str, report: &mut Report) -> (String, bool) {
    let (terms, term_diagnostics) = parser::parse_terms(side);
    for diagnostic in term_diagnostics {
        warn!("reaction '{reaction}': {}", diagnostic.message);
        report.add(diagnostic.with_location(format!("reaction '{reaction}'")));
    }

    let null_count = terms.iter().filter(|term| term.species.is_null()).count();
    let named: Vec<&Term> = terms
        .iter()
        .filter(|term| !term.species.is_null())
        .collect();

    if null_count > 0 && !named.is_empty() {
        let rebuilt = named.iter().map(|term| term.to_string()).join(" + ");
        return (rebuilt, true);
    }
    if null_count > 1 && named.is_empty() {
        return (NULL_SPECIES.to_string(), true);
    }

    (side.to_string(), false)
}
