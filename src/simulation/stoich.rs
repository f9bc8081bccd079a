//! Stoichiometry matrix construction.
//!
//! For every (reaction, species) pair the builder counts how many instances
//! of the species are consumed and produced, yielding the reactant and
//! product matrices and their difference, the net-change matrix. Each matrix
//! has one row per reaction and one column per species, in input order.

use ndarray::Array2;

use crate::parser::{self, GrammarError};

/// The reactant, product and net-change matrices of a network.
///
/// `net` is `product - reactant` elementwise; its transpose, multiplied by
/// the instantaneous reaction-rate vector, yields the species derivatives.
#[derive(Debug, Clone, PartialEq)]
pub struct StoichiometryMatrices {
    pub reactant: Array2<f64>,
    pub product: Array2<f64>,
    pub net: Array2<f64>,
}

/// Builds the stoichiometry matrices for `reactions` over `species`.
///
/// A species named in a reaction but absent from `species` contributes to no
/// column and is silently ignored; a reaction consuming only unregistered
/// species degrades to an effective zero-order term with respect to the
/// registered species set. This is documented behavior, not an error.
///
/// # Errors
///
/// Returns a [`GrammarError`] if any reaction cannot be split into exactly
/// one left and one right part.
pub fn build_matrices(
    species: &[String],
    reactions: &[String],
) -> Result<StoichiometryMatrices, GrammarError> {
    let shape = (reactions.len(), species.len());
    let mut reactant = Array2::zeros(shape);
    let mut product = Array2::zeros(shape);

    for (i, reaction) in reactions.iter().enumerate() {
        let (left, right) = parser::split_sides(reaction)?;
        for (j, name) in species.iter().enumerate() {
            reactant[(i, j)] = f64::from(parser::stoichiometry_of(name, left));
            product[(i, j)] = f64::from(parser::stoichiometry_of(name, right));
        }
    }

    let net = &product - &reactant;
    Ok(StoichiometryMatrices {
        reactant,
        product,
        net,
    })
}
