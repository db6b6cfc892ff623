//! violation — the record a checker hands to its error policy.
//!
//! Purpose
//! -------
//! Describe a single detected constraint violation: which constraint, which
//! condition inside it, where (function, subject, element index), what the
//! offending value was, and the message template waiting for that value.
//!
//! Invariants & assumptions
//! ------------------------
//! - A [`Violation`] borrows the function and subject names from the failing
//!   call and never outlives it; policies consume it by reference.
//! - `value` is the numeric payload substituted into `template` at render
//!   time. For empty-input violations it is the element count (0), not a
//!   domain value.
//! - `index` is 0-based and present only for element-level conditions.
use std::fmt;

use crate::error_handling::messages::MessageTemplate;

/// Constraint — the named domain constraint a checker enforces.
///
/// Each checker embodies exactly one constraint. Adding a checker adds a
/// variant here; the shared reporting path does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    Simplex,
    NotNan,
    Finite,
    Positive,
    NonNegative,
    Bounded,
    Ordered,
    PositiveOrdered,
    UnitVector,
    NonzeroSize,
    ConsistentSize,
}

impl Constraint {
    /// Short machine-friendly name, used in logs and error accessors.
    pub fn name(self) -> &'static str {
        match self {
            Constraint::Simplex => "simplex",
            Constraint::NotNan => "not_nan",
            Constraint::Finite => "finite",
            Constraint::Positive => "positive",
            Constraint::NonNegative => "nonnegative",
            Constraint::Bounded => "bounded",
            Constraint::Ordered => "ordered",
            Constraint::PositiveOrdered => "positive_ordered",
            Constraint::UnitVector => "unit_vector",
            Constraint::NonzeroSize => "nonzero_size",
            Constraint::ConsistentSize => "consistent_size",
        }
    }

    /// Noun used in vector diagnostics ("theta is not a valid <noun>.").
    pub fn vector_noun(self) -> &'static str {
        match self {
            Constraint::Simplex => "simplex",
            Constraint::NotNan => "vector without NaN entries",
            Constraint::Finite => "finite vector",
            Constraint::Positive => "positive vector",
            Constraint::NonNegative => "non-negative vector",
            Constraint::Bounded => "bounded vector",
            Constraint::Ordered => "ordered vector",
            Constraint::PositiveOrdered => "positive ordered vector",
            Constraint::UnitVector => "unit vector",
            Constraint::NonzeroSize => "non-empty vector",
            Constraint::ConsistentSize => "size-consistent vector",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ViolationKind — which condition of a constraint failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    // ---- Shape ----
    /// The vector has no elements.
    EmptyInput,
    /// Two vectors that must agree in length do not.
    SizeMismatch,

    // ---- Aggregates ----
    /// A sum that must equal 1 is outside [`CONSTRAINT_TOLERANCE`](crate::error_handling::tolerance::CONSTRAINT_TOLERANCE).
    SumOutOfTolerance,
    /// A sum of squares that must equal 1 is outside tolerance (or NaN).
    NormOutOfTolerance,

    // ---- Elements / scalars ----
    /// A value that must be `>= 0` is not (NaN included).
    NegativeElement,
    /// A value that must be `> 0` is not (NaN included).
    NotPositive,
    /// A value is NaN.
    NotANumber,
    /// A value is NaN or ±∞.
    NonFinite,
    /// A value lies outside `[low, high]` (NaN included).
    OutOfBounds,
    /// An element is not strictly greater than its predecessor.
    NotAscending,
}

/// Violation — one detected violation, alive only for the failing call.
///
/// Fields
/// ------
/// - `function`: originating function name (e.g. `"categorical_log"`).
/// - `subject`: display name of the value under test (e.g. `"theta"`).
/// - `constraint` / `kind`: what was checked and which condition failed.
/// - `index`: offending element index, if element-level.
/// - `value`: numeric payload for the message placeholder.
/// - `template`: message with a single placeholder for `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation<'a> {
    pub function: &'a str,
    pub subject: &'a str,
    pub constraint: Constraint,
    pub kind: ViolationKind,
    pub index: Option<usize>,
    pub value: f64,
    pub template: MessageTemplate,
}

impl<'a> Violation<'a> {
    pub fn new(
        function: &'a str, subject: &'a str, constraint: Constraint, kind: ViolationKind,
        value: f64, template: MessageTemplate,
    ) -> Self {
        Violation { function, subject, constraint, kind, index: None, value, template }
    }

    /// Attach the offending element index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Render the template with this violation's payload.
    pub fn render(&self) -> String {
        self.template.render(self.value)
    }
}
