//! error_handling::errors — structured domain error and Python bridge.
//!
//! Purpose
//! -------
//! Provide the error surfaced by the raising policy, [`DomainError`], the
//! crate-wide result alias [`DomainResult`], and the error returned when a
//! policy name cannot be parsed, [`UnknownPolicy`].
//!
//! Key behaviors
//! -------------
//! - [`DomainError`] carries the originating function name, the fully
//!   rendered message, and the offending value, plus the constraint,
//!   violation kind, and element index for programmatic inspection.
//! - `Display` follows `"Error in function <function>: <message>"`.
//! - With the `python-bindings` feature, both errors convert into
//!   `PyValueError` so Python callers see a `ValueError` with the same text.
//!
//! Invariants & assumptions
//! ------------------------
//! - A `DomainError` is only ever built from a [`Violation`]; its message
//!   is that violation's template rendered with its payload.
//! - Downstream code (e.g. density routines) propagates `DomainError` with
//!   `?` unmodified up to the library's top-level caller.
//!
//! Testing notes
//! -------------
//! - Unit tests check the rendered `Display` string and the accessors.
//!   The PyO3 conversion is left to Python-level tests.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};
use thiserror::Error;

use crate::error_handling::violation::{Constraint, Violation, ViolationKind};

/// Result alias for checker calls: `Ok(valid)` or the raised [`DomainError`].
pub type DomainResult<T> = Result<T, DomainError>;

/// DomainError — a constraint violation raised by the default policy.
///
/// Fields
/// ------
/// - `function`: name of the function whose argument failed validation.
/// - `message`: rendered message, payload already substituted.
/// - `value`: offending value (element count for empty input).
/// - `constraint`, `kind`, `index`: structured description of the violation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Error in function {function}: {message}")]
pub struct DomainError {
    function: String,
    message: String,
    value: f64,
    constraint: Constraint,
    kind: ViolationKind,
    index: Option<usize>,
}

impl DomainError {
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl From<&Violation<'_>> for DomainError {
    fn from(violation: &Violation<'_>) -> Self {
        DomainError {
            function: violation.function.to_owned(),
            message: violation.render(),
            value: violation.value,
            constraint: violation.constraint,
            kind: violation.kind,
            index: violation.index,
        }
    }
}

/// A policy name that does not match any built-in policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error policy '{0}'; expected one of: raise, nan, ignore, warn")]
pub struct UnknownPolicy(pub String);

#[cfg(feature = "python-bindings")]
impl From<DomainError> for PyErr {
    fn from(err: DomainError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<UnknownPolicy> for PyErr {
    fn from(err: UnknownPolicy) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::messages::MessageTemplate;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Conversion from a `Violation` into `DomainError`.
    // - The `Display` layout of both error types.
    //
    // They intentionally DO NOT cover:
    // - The `From<DomainError> for PyErr` conversion, which needs the Python
    //   C API and belongs to Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A DomainError built from a violation carries its fields and renders
    // the message with the payload substituted.
    //
    // Given
    // -----
    // - A SumOutOfTolerance violation on "theta" in "categorical_log"
    //   with payload 1.5.
    //
    // Expect
    // ------
    // - Accessors mirror the violation; Display is prefixed with the
    //   function name.
    fn domain_error_from_violation_preserves_fields() {
        // Arrange
        let violation = Violation::new(
            "categorical_log",
            "theta",
            Constraint::Simplex,
            ViolationKind::SumOutOfTolerance,
            1.5,
            MessageTemplate::invalid_aggregate(
                "theta",
                Constraint::Simplex,
                "The sum of the elements should be 1, but is ",
                "",
            ),
        );

        // Act
        let err = DomainError::from(&violation);

        // Assert
        assert_eq!(err.function(), "categorical_log");
        assert_eq!(err.value(), 1.5);
        assert_eq!(err.kind(), ViolationKind::SumOutOfTolerance);
        assert_eq!(err.constraint(), Constraint::Simplex);
        assert_eq!(err.index(), None);
        assert_eq!(
            err.to_string(),
            "Error in function categorical_log: theta is not a valid simplex. \
             The sum of the elements should be 1, but is 1.5"
        );
    }

    #[test]
    fn unknown_policy_lists_accepted_names() {
        let msg = UnknownPolicy("throw".to_string()).to_string();

        assert!(msg.contains("'throw'"), "Got: {msg}");
        assert!(msg.contains("raise, nan, ignore, warn"), "Got: {msg}");
    }
}
