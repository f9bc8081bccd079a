//! crnsim - deterministic simulation of chemical reaction networks.
//!
//! This library turns a textual description of a chemical reaction network
//! (species, initial concentrations, reaction strings with rate constants and
//! a time grid) into its concentration trajectory under mass-action kinetics:
//! - Parsing reaction strings such as `2A + B -> C` into exact integer
//!   stoichiometries
//! - Validating networks and auto-repairing degenerate `0` terms
//! - Building reactant, product and net-change matrices
//! - Assembling the mass-action ODE right-hand side and driving an
//!   adaptive-step integrator over the requested time grid
//!
//! # Examples
//!
//! ```
//! use crnsim::prelude::*;
//!
//! let network = ReactionNetworkBuilder::default()
//!     .species(vec!["A".to_string(), "B".to_string(), "C".to_string()])
//!     .initial_concentrations(vec![1.0, 1.0, 0.0])
//!     .reactions(vec!["A + B -> C".to_string()])
//!     .rate_constants(vec![0.5])
//!     .times((0..=10).map(f64::from).collect::<Vec<_>>())
//!     .build()
//!     .unwrap();
//!
//! let result = simulate(&network, &SimulationSetup::default()).unwrap();
//! assert_eq!(result.time.len(), 11);
//! assert_eq!(result.species, vec!["A", "B", "C"]);
//! ```

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::io::*;
    pub use crate::network::{ReactionNetwork, ReactionNetworkBuilder};
    pub use crate::parser::{GrammarError, SpeciesRef, Term};
    pub use crate::simulation::error::SimulationError;
    pub use crate::simulation::result::SimulationResult;
    pub use crate::simulation::runner::simulate;
    pub use crate::simulation::setup::{SimulationSetup, SimulationSetupBuilder};
    pub use crate::simulation::stoich::{build_matrices, StoichiometryMatrices};
    pub use crate::simulation::system::MassActionSystem;
    pub use crate::validation::network::{normalize, ValidationError};
    pub use crate::validation::report::{Diagnostic, Report, Severity};
}

/// Reaction string grammar: tokenization, stoichiometry extraction and
/// reaction classification
pub mod parser;

/// The chemical reaction network aggregate and network combination
pub mod network;

/// Validation of reaction networks
pub mod validation {
    /// Structural checks and reaction normalization
    pub mod network;
    /// Diagnostic collection returned alongside results
    pub mod report;
}

/// Mass-action ODE simulation
pub mod simulation {
    /// Error types for simulation failures
    pub mod error;
    /// Resampling of solver output onto the requested time grid
    pub(crate) mod interpolation;
    /// Simulation result data structures
    pub mod result;
    /// Simulation entry point
    pub mod runner;
    /// Solver configuration
    pub mod setup;
    /// Stoichiometry matrix construction
    pub mod stoich;
    /// Mass-action ODE system assembly
    pub mod system;
}

/// IO functionality
pub mod io;
