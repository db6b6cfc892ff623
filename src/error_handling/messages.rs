//! messages — single-placeholder diagnostic templates.
//!
//! Purpose
//! -------
//! Build the human-readable, single-line message describing a violation,
//! leaving exactly one substitution point for the offending numeric value.
//! Checkers construct the template; the error policy renders it with the
//! payload. Neither side needs to know how the other works.
//!
//! Key behaviors
//! -------------
//! - [`MessageTemplate`] stores the text before and after the placeholder,
//!   so a template holds exactly one placeholder by construction (a subject
//!   name that happens to contain `{}` cannot create a second one).
//! - Helper constructors produce the standard phrasings used by the checker
//!   family: empty vector, invalid aggregate, invalid element, invalid
//!   scalar.
//! - [`MessageTemplate::render`] formats the payload with `f64`'s `Display`
//!   (`0.0` renders as `0`, NaN as `NaN`).
//!
//! Conventions
//! -----------
//! - Templates name the subject and the constraint; element templates also
//!   name the 0-based index.
//! - `Display` on a template shows the placeholder as `{}`.
use std::fmt;

use crate::error_handling::violation::Constraint;

/// MessageTemplate — diagnostic text with one placeholder for the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    head: String,
    tail: String,
}

impl MessageTemplate {
    /// Build a template from the text before and after the placeholder.
    pub fn new(head: impl Into<String>, tail: impl Into<String>) -> Self {
        MessageTemplate { head: head.into(), tail: tail.into() }
    }

    /// `"<name> is not a valid <noun>. {} elements in the vector."`
    ///
    /// The payload for this template is the element count.
    pub fn empty_vector(name: &str, constraint: Constraint) -> Self {
        Self::new(
            format!("{name} is not a valid {}. ", constraint.vector_noun()),
            " elements in the vector.",
        )
    }

    /// `"<name> is not a valid <noun>. <lead>{}<trail>"`, for conditions on a
    /// whole-vector aggregate such as a sum or a norm.
    pub fn invalid_aggregate(name: &str, constraint: Constraint, lead: &str, trail: &str) -> Self {
        Self::new(format!("{name} is not a valid {}. {lead}", constraint.vector_noun()), trail)
    }

    /// `"<name> is not a valid <noun>. The element at <index> is {}, but <requirement>"`
    pub fn invalid_element(
        name: &str, constraint: Constraint, index: usize, requirement: &str,
    ) -> Self {
        Self::new(
            format!("{name} is not a valid {}. The element at {index} is ", constraint.vector_noun()),
            format!(", but {requirement}"),
        )
    }

    /// `"<name> is {}, but <requirement>"`
    pub fn invalid_scalar(name: &str, requirement: &str) -> Self {
        Self::new(format!("{name} is "), format!(", but {requirement}"))
    }

    /// Substitute `value` into the placeholder.
    pub fn render(&self, value: f64) -> String {
        format!("{}{value}{}", self.head, self.tail)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{}}{}", self.head, self.tail)
    }
}
