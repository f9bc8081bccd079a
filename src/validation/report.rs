//! Structured diagnostic collection.
//!
//! Non-fatal findings (malformed terms, auto-repaired reactions) are collected
//! into a [`Report`] and handed back to the caller next to the primary result,
//! so they can be inspected or asserted on in tests. Fatal conditions are not
//! reported here; they surface as typed errors.

use serde::{Deserialize, Serialize};

/// Severity of a single diagnostic.
///
/// Only `Warning` diagnostics are produced by the current checks; `Error` is
/// part of the vocabulary for callers that fold fatal findings into a report
/// of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding.
///
/// `location` names the offending reaction or field, `message` describes the
/// finding and what was done about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub location: String,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a warning-level diagnostic.
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Returns the same diagnostic re-anchored to a new location.
    ///
    /// Used when a lower layer reports against a reaction part and the caller
    /// knows the full reaction string.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// An ordered collection of diagnostics gathered during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterates over the warning-level diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Warning)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the report, yielding the collected diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
