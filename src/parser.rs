//! Reaction grammar parser.
//!
//! Reaction strings follow an informal text grammar: two `+`-separated term
//! lists joined by the relation operator `->`, e.g. `2A + B -> C`. A term is
//! an optional positive integer coefficient immediately followed by a species
//! identifier (`2A`). Species identifiers are case sensitive and start with a
//! letter; the literal `0` is a sentinel meaning "nothing" and is only valid
//! as the sole content of a side (`0 -> A` for formation, `A -> 0` for
//! degradation). Whitespace is insignificant.
//!
//! All functions in this module are pure. Tokens that cannot be read as a
//! term are dropped and reported through [`Diagnostic`] values rather than an
//! ambient warning channel, so callers can inspect exactly what was discarded.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::validation::report::Diagnostic;

/// The relation operator separating reactants from products.
pub const RELATION: &str = "->";

/// The textual sentinel denoting "no species".
pub const NULL_SPECIES: &str = "0";

/// Errors raised when a reaction string does not match the grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("reaction '{0}' is missing the relation operator '->'")]
    MissingOperator(String),
    #[error("reaction '{reaction}' contains {found} relation operators, expected exactly one")]
    MultipleOperators { reaction: String, found: usize },
    #[error(
        "reaction '{0}' has a blank side; write formation as '0 -> A' and degradation as 'A -> 0'"
    )]
    BlankSide(String),
}

/// A reference to a species inside a reaction part.
///
/// The `0` sentinel is modeled as its own value instead of being inferred by
/// numeric parsing, so "the species named nothing" and "a malformed numeric
/// token" stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpeciesRef {
    /// The `0` sentinel used in formation and degradation reactions.
    Null,
    /// A named species identifier.
    Named(String),
}

impl SpeciesRef {
    pub fn is_null(&self) -> bool {
        matches!(self, SpeciesRef::Null)
    }

    /// Returns the identifier for named species, `None` for the sentinel.
    pub fn name(&self) -> Option<&str> {
        match self {
            SpeciesRef::Null => None,
            SpeciesRef::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for SpeciesRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesRef::Null => f.write_str(NULL_SPECIES),
            SpeciesRef::Named(name) => f.write_str(name),
        }
    }
}

/// One parsed term of a reaction part: a coefficient and a species reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub coefficient: u32,
    pub species: SpeciesRef,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient == 1 {
            write!(f, "{}", self.species)
        } else {
            write!(f, "{}{}", self.coefficient, self.species)
        }
    }
}

/// Splits a reaction string on the single relation operator.
///
/// Both sides are returned trimmed. A side may be blank at this level; the
/// validator decides whether that is acceptable for the context.
///
/// # Errors
///
/// Returns a [`GrammarError`] if the operator occurs zero or multiple times.
pub fn split_sides(reaction: &str) -> Result<(&str, &str), GrammarError> {
    let parts: Vec<&str> = reaction.split(RELATION).collect();
    match parts.as_slice() {
        [left, right] => Ok((left.trim(), right.trim())),
        [_] => Err(GrammarError::MissingOperator(reaction.to_string())),
        _ => Err(GrammarError::MultipleOperators {
            reaction: reaction.to_string(),
            found: parts.len() - 1,
        }),
    }
}

/// True if the trimmed part is empty or is exactly the `0` sentinel.
pub fn is_empty_or_zero(part: &str) -> bool {
    let part = part.trim();
    part.is_empty() || part == NULL_SPECIES
}

/// Tokenizes a part by splitting on every character that is not a letter,
/// digit, or underscore, discarding empty tokens.
fn tokens(part: &str) -> impl Iterator<Item = &str> {
    part.split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
}

/// Parses a reaction part into terms.
///
/// Tokens that do not form a valid term (no letter-initial species name after
/// stripping the leading digit run, or an explicit zero coefficient) are
/// dropped, each with a warning diagnostic naming the offending token.
pub fn parse_terms(part: &str) -> (Vec<Term>, Vec<Diagnostic>) {
    let mut terms = Vec::new();
    let mut diagnostics = Vec::new();

    for token in tokens(part) {
        match parse_token(token) {
            Some(term) => terms.push(term),
            None => diagnostics.push(Diagnostic::warning(
                format!("part '{part}'"),
                format!("malformed term '{token}' dropped"),
            )),
        }
    }

    (terms, diagnostics)
}

/// Reads a single token as a term.
///
/// The leading run of digits is the coefficient (1 if absent). The remainder
/// must be a letter-initial identifier. The exact token `0` is the sentinel.
fn parse_token(token: &str) -> Option<Term> {
    if token == NULL_SPECIES {
        return Some(Term {
            coefficient: 1,
            species: SpeciesRef::Null,
        });
    }

    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, name) = token.split_at(digits_end);

    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    let coefficient = if digits.is_empty() {
        1
    } else {
        digits.parse().ok()?
    };
    if coefficient == 0 {
        return None;
    }

    Some(Term {
        coefficient,
        species: SpeciesRef::Named(name.to_string()),
    })
}

/// Sum of coefficients of all terms in `part` naming `species`.
///
/// The match is exact at token level, so species `A` never matches an
/// occurrence of `A2`. A species may appear in several terms of one part
/// (`A + A`), each contributing its coefficient.
pub fn stoichiometry_of(species: &str, part: &str) -> u32 {
    let (terms, _) = parse_terms(part);
    terms
        .iter()
        .filter(|term| term.species.name() == Some(species))
        .map(|term| term.coefficient)
        .sum()
}

/// Total molecularity of a part: the sum of all named-term coefficients.
///
/// The `0` sentinel carries no molecularity, so the left side of `0 -> A`
/// has stoichiometry zero.
pub fn part_stoichiometry(part: &str) -> u32 {
    let (terms, _) = parse_terms(part);
    terms
        .iter()
        .filter(|term| !term.species.is_null())
        .map(|term| term.coefficient)
        .sum()
}

/// Species consumed by a reaction, deduplicated, in order of first occurrence.
pub fn reactants_of(reaction: &str) -> Result<Vec<SpeciesRef>, GrammarError> {
    let (left, _) = split_sides(reaction)?;
    Ok(side_species(left))
}

/// Species produced by a reaction, deduplicated, in order of first occurrence.
///
/// For a pure degradation reaction (`A -> 0`) the sentinel itself is returned
/// as the product; it is a recognized species value, not an omission.
pub fn products_of(reaction: &str) -> Result<Vec<SpeciesRef>, GrammarError> {
    let (_, right) = split_sides(reaction)?;
    Ok(side_species(right))
}

fn side_species(part: &str) -> Vec<SpeciesRef> {
    let (terms, _) = parse_terms(part);
    terms.into_iter().map(|term| term.species).unique().collect()
}

/// True if the left side is empty or the `0` sentinel.
pub fn is_formation(reaction: &str) -> Result<bool, GrammarError> {
    let (left, _) = split_sides(reaction)?;
    Ok(is_empty_or_zero(left))
}

/// True if the right side is empty or the `0` sentinel.
pub fn is_degradation(reaction: &str) -> Result<bool, GrammarError> {
    let (_, right) = split_sides(reaction)?;
    Ok(is_empty_or_zero(right))
}

/// True if the left side has total stoichiometry 1.
pub fn is_unimolecular(reaction: &str) -> Result<bool, GrammarError> {
    let (left, _) = split_sides(reaction)?;
    Ok(part_stoichiometry(left) == 1)
}

/// True if the left side has total stoichiometry 2, either as `2A` or `A + B`.
pub fn is_bimolecular(reaction: &str) -> Result<bool, GrammarError> {
    let (left, _) = split_sides(reaction)?;
    Ok(part_stoichiometry(left) == 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> SpeciesRef {
        SpeciesRef::Named(name.to_string())
    }

    #[test]
    fn test_split_sides() {
        assert_eq!(split_sides("A + B -> C").unwrap(), ("A + B", "C"));
        assert_eq!(split_sides("A->B").unwrap(), ("A", "B"));
        assert_eq!(split_sides("-> A").unwrap(), ("", "A"));
    }

    #[test]
    fn test_split_sides_rejects_missing_operator() {
        assert_eq!(
            split_sides("A + B"),
            Err(GrammarError::MissingOperator("A + B".to_string()))
        );
    }

    #[test]
    fn test_split_sides_rejects_multiple_operators() {
        assert_eq!(
            split_sides("A -> B -> C"),
            Err(GrammarError::MultipleOperators {
                reaction: "A -> B -> C".to_string(),
                found: 2,
            })
        );
    }

    #[test]
    fn test_split_sides_round_trip() {
        for reaction in ["A + B -> C", "  2A+B ->C ", "0 -> A", "A -> 0"] {
            let (left, right) = split_sides(reaction).unwrap();
            let rebuilt = format!("{left} {RELATION} {right}");
            assert_eq!(split_sides(&rebuilt).unwrap(), (left, right));
        }
    }

    #[test]
    fn test_is_empty_or_zero() {
        assert!(is_empty_or_zero(""));
        assert!(is_empty_or_zero("   "));
        assert!(is_empty_or_zero(" 0 "));
        assert!(!is_empty_or_zero("A"));
        assert!(!is_empty_or_zero("00"));
    }

    #[test]
    fn test_parse_terms_coefficients() {
        let (terms, diagnostics) = parse_terms("2A + B + 10C_2");
        assert!(diagnostics.is_empty());
        assert_eq!(
            terms,
            vec![
                Term {
                    coefficient: 2,
                    species: named("A")
                },
                Term {
                    coefficient: 1,
                    species: named("B")
                },
                Term {
                    coefficient: 10,
                    species: named("C_2")
                },
            ]
        );
    }

    #[test]
    fn test_parse_terms_sentinel() {
        let (terms, diagnostics) = parse_terms("0");
        assert!(diagnostics.is_empty());
        assert_eq!(
            terms,
            vec![Term {
                coefficient: 1,
                species: SpeciesRef::Null
            }]
        );
    }

    #[test]
    fn test_parse_terms_drops_malformed_tokens() {
        // "25" strips to an empty species name, "_x" is not letter-initial,
        // "0A" has an explicit zero coefficient
        for part in ["A + 25", "A + _x", "A + 0A"] {
            let (terms, diagnostics) = parse_terms(part);
            assert_eq!(terms.len(), 1, "part {part:?}");
            assert_eq!(terms[0].species, named("A"));
            assert_eq!(diagnostics.len(), 1, "part {part:?}");
        }
    }

    #[test]
    fn test_part_stoichiometry() {
        assert_eq!(part_stoichiometry("A + B"), 2);
        assert_eq!(part_stoichiometry("2A"), 2);
        assert_eq!(part_stoichiometry(" C"), 1);
        assert_eq!(part_stoichiometry("0"), 0);
        assert_eq!(part_stoichiometry(""), 0);
    }

    #[test]
    fn test_stoichiometry_of() {
        let (left, right) = split_sides("A + B -> 2A").unwrap();
        assert_eq!(stoichiometry_of("A", left), 1);
        assert_eq!(stoichiometry_of("A", right), 2);

        let (left, right) = split_sides("B -> A + B").unwrap();
        assert_eq!(stoichiometry_of("A", left), 0);
        assert_eq!(stoichiometry_of("A", right), 1);
    }

    #[test]
    fn test_stoichiometry_of_repeated_species() {
        assert_eq!(stoichiometry_of("A", "A + A"), 2);
        assert_eq!(stoichiometry_of("A", "2A + A"), 3);
    }

    #[test]
    fn test_stoichiometry_of_exact_match() {
        // species "A" must not match occurrences of "A2"
        assert_eq!(stoichiometry_of("A", "A2 + B"), 0);
        assert_eq!(stoichiometry_of("A2", "A2 + B"), 1);
        assert_eq!(stoichiometry_of("A", "A2 + A"), 1);
    }

    #[test]
    fn test_reactants_and_products() {
        assert_eq!(
            reactants_of("A + B -> C").unwrap(),
            vec![named("A"), named("B")]
        );
        assert_eq!(reactants_of("A + A -> B").unwrap(), vec![named("A")]);
        assert_eq!(products_of("A -> 0").unwrap(), vec![SpeciesRef::Null]);
        assert_eq!(reactants_of("-> A").unwrap(), vec![]);
        assert_eq!(reactants_of("0 -> A").unwrap(), vec![SpeciesRef::Null]);
    }

    #[test]
    fn test_classification() {
        assert!(is_bimolecular("2A -> B").unwrap());
        assert!(is_bimolecular("A + B -> C").unwrap());
        assert!(!is_bimolecular("A -> B").unwrap());
        assert!(is_unimolecular("A -> B").unwrap());
        assert!(!is_unimolecular("0 -> A").unwrap());
        assert!(is_formation("-> A").unwrap());
        assert!(is_formation("0 -> A").unwrap());
        assert!(is_degradation("A -> 0").unwrap());
        assert!(!is_degradation("A -> B").unwrap());
    }

    #[test]
    fn test_term_display() {
        let (terms, _) = parse_terms("2A + B + 0");
        let rendered: Vec<String> = terms.iter().map(|term| term.to_string()).collect();
        assert_eq!(rendered, vec!["2A", "B", "0"]);
    }
}
