//! Violation list returned by the validation rules.

use crate::todo::domain::{TodoDomainError, TodoQueryError};
use std::fmt;
use thiserror::Error;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// A single failed input constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    /// A to-do field constraint failed.
    #[error(transparent)]
    Field(#[from] TodoDomainError),
    /// A list query parameter constraint failed.
    #[error(transparent)]
    Query(#[from] TodoQueryError),
    /// The request could not be decoded into an input shape.
    #[error("{0}")]
    Malformed(String),
}

/// Ordered, non-empty list of violations for one request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Wraps a single violation.
    #[must_use]
    pub fn single(violation: impl Into<Violation>) -> Self {
        Self {
            violations: vec![violation.into()],
        }
    }

    /// Builds a violation for an input that could not be decoded.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::single(Violation::Malformed(reason.into()))
    }

    /// Returns the violations in the order they were found.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the human-readable message of every violation.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

/// Accumulates violations while the rules inspect each field.
#[derive(Debug, Default)]
pub(crate) struct ViolationCollector {
    violations: Vec<Violation>,
}

impl ViolationCollector {
    /// Keeps the value on success, records the violation otherwise.
    pub(crate) fn check<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<Violation>,
    {
        result.map_err(|err| self.violations.push(err.into())).ok()
    }

    pub(crate) fn into_errors(self) -> ValidationErrors {
        ValidationErrors {
            violations: self.violations,
        }
    }
}
