//! size — shape-only constraints.
//!
//! These checkers look at lengths only and never at element values.
//! `check_consistent_size` reports the length of the second vector as its
//! payload and names both vectors in the message.
use ndarray::ArrayView1;
use num_traits::Float;

use crate::error_handling::{
    checkers::{default_policy, report_violation},
    errors::DomainResult,
    messages::MessageTemplate,
    policy::ErrorPolicy,
    violation::{Constraint, Violation, ViolationKind},
};

/// Check that `y` has at least one element.
pub fn check_nonzero_size<'a>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str,
) -> DomainResult<bool> {
    check_nonzero_size_with(function, y, name, None::<&mut f64>, &default_policy())
}

pub fn check_nonzero_size_with<'a, R, P>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, result: Option<&mut R>,
    policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    let y = y.into();
    if !y.is_empty() {
        return Ok(true);
    }
    let constraint = Constraint::NonzeroSize;
    let violation = Violation::new(
        function,
        name,
        constraint,
        ViolationKind::EmptyInput,
        0.0,
        MessageTemplate::empty_vector(name, constraint),
    );
    report_violation(violation, result, policy)
}

/// Check that `y2` has the same length as `y1`.
///
/// ```rust
/// # use rust_constraints::error_handling::prelude::*;
/// let err = check_consistent_size("f", &[1.0, 2.0], "mu", &[1.0], "sigma").unwrap_err();
/// assert_eq!(err.kind(), ViolationKind::SizeMismatch);
/// assert_eq!(err.message(), "sigma has size 1, but must have the same size as mu (2)");
/// ```
pub fn check_consistent_size<'a, 'b>(
    function: &str, y1: impl Into<ArrayView1<'a, f64>>, name1: &str,
    y2: impl Into<ArrayView1<'b, f64>>, name2: &str,
) -> DomainResult<bool> {
    check_consistent_size_with(function, y1, name1, y2, name2, None::<&mut f64>, &default_policy())
}

pub fn check_consistent_size_with<'a, 'b, R, P>(
    function: &str, y1: impl Into<ArrayView1<'a, f64>>, name1: &str,
    y2: impl Into<ArrayView1<'b, f64>>, name2: &str, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    let expected = y1.into().len();
    let actual = y2.into().len();
    if expected == actual {
        return Ok(true);
    }
    let violation = Violation::new(
        function,
        name2,
        Constraint::ConsistentSize,
        ViolationKind::SizeMismatch,
        actual as f64,
        MessageTemplate::new(
            format!("{name2} has size "),
            format!(", but must have the same size as {name1} ({expected})"),
        ),
    );
    report_violation(violation, result, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::policy::IgnoreError;

    #[test]
    fn check_nonzero_size_rejects_only_empty() {
        let empty: Vec<f64> = vec![];

        assert_eq!(check_nonzero_size("f", &[f64::NAN], "y"), Ok(true));

        let err = check_nonzero_size("f", &empty, "y").unwrap_err();
        assert_eq!(err.kind(), ViolationKind::EmptyInput);
        assert_eq!(err.value(), 0.0);
        assert_eq!(err.message(), "y is not a valid non-empty vector. 0 elements in the vector.");
    }

    #[test]
    // Purpose
    // -------
    // Size mismatch is reported on the second vector with its length.
    fn check_consistent_size_reports_second_length() {
        // Arrange
        let mut slot = 0.0_f64;

        // Act
        let same = check_consistent_size("f", &[1.0, 2.0], "a", &[3.0, 4.0], "b");
        let out = check_consistent_size_with(
            "f",
            &[1.0, 2.0, 3.0],
            "a",
            &[1.0],
            "b",
            Some(&mut slot),
            &IgnoreError,
        );

        // Assert
        assert_eq!(same, Ok(true));
        assert_eq!(out, Ok(false));
        assert_eq!(slot, 1.0);
    }
}
