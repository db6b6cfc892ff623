//! vector — element-wise and norm constraints on real vectors.
//!
//! Element-wise checkers (finite, positive, non-negative, bounded) scan in
//! ascending index order and report the first failing element. An empty
//! vector satisfies them vacuously; callers that need a non-empty vector
//! pair them with [`check_nonzero_size`](super::check_nonzero_size).
//!
//! [`check_unit_vector`] is an aggregate constraint: non-empty, then
//! `sum(y_i^2)` within tolerance of 1. It has no element scan, so a NaN
//! sum of squares is rejected by the norm condition itself.
use ndarray::ArrayView1;
use num_traits::Float;

use crate::error_handling::{
    checkers::{default_policy, first_failing, report_violation},
    errors::DomainResult,
    messages::MessageTemplate,
    policy::ErrorPolicy,
    tolerance::within_tolerance,
    violation::{Constraint, Violation, ViolationKind},
};

/// Shared body of the element-wise checkers.
#[allow(clippy::too_many_arguments)]
fn check_elements<R, P, F>(
    function: &str, y: ArrayView1<'_, f64>, name: &str, holds: F, constraint: Constraint,
    kind: ViolationKind, requirement: &str, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
    F: Fn(f64) -> bool,
{
    match first_failing(y, holds) {
        None => Ok(true),
        Some((n, value)) => {
            let violation = Violation::new(
                function,
                name,
                constraint,
                kind,
                value,
                MessageTemplate::invalid_element(name, constraint, n, requirement),
            )
            .at_index(n);
            report_violation(violation, result, policy)
        }
    }
}

/// Check that every element of `y` is finite.
pub fn check_finite_vector<'a>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str,
) -> DomainResult<bool> {
    check_finite_vector_with(function, y, name, None::<&mut f64>, &default_policy())
}

pub fn check_finite_vector_with<'a, R, P>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, result: Option<&mut R>,
    policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_elements(
        function,
        y.into(),
        name,
        f64::is_finite,
        Constraint::Finite,
        ViolationKind::NonFinite,
        "should be finite",
        result,
        policy,
    )
}

/// Check that every element of `y` is `> 0`.
pub fn check_positive_vector<'a>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str,
) -> DomainResult<bool> {
    check_positive_vector_with(function, y, name, None::<&mut f64>, &default_policy())
}

pub fn check_positive_vector_with<'a, R, P>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, result: Option<&mut R>,
    policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_elements(
        function,
        y.into(),
        name,
        |x| x > 0.0,
        Constraint::Positive,
        ViolationKind::NotPositive,
        "should be greater than 0",
        result,
        policy,
    )
}

/// Check that every element of `y` is `>= 0`.
pub fn check_nonnegative_vector<'a>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str,
) -> DomainResult<bool> {
    check_nonnegative_vector_with(function, y, name, None::<&mut f64>, &default_policy())
}

pub fn check_nonnegative_vector_with<'a, R, P>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, result: Option<&mut R>,
    policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_elements(
        function,
        y.into(),
        name,
        |x| x >= 0.0,
        Constraint::NonNegative,
        ViolationKind::NegativeElement,
        "should be greater than or equal to 0",
        result,
        policy,
    )
}

/// Check that every element of `y` lies in `[low, high]`.
pub fn check_bounded_vector<'a>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, low: f64, high: f64,
) -> DomainResult<bool> {
    check_bounded_vector_with(function, y, name, low, high, None::<&mut f64>, &default_policy())
}

pub fn check_bounded_vector_with<'a, R, P>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, low: f64, high: f64,
    result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_elements(
        function,
        y.into(),
        name,
        |x| low <= x && x <= high,
        Constraint::Bounded,
        ViolationKind::OutOfBounds,
        &format!("should be in the interval [{low}, {high}]"),
        result,
        policy,
    )
}

/// Check that `y` is a unit vector: non-empty with `sum(y_i^2)` within
/// tolerance of 1.
///
/// ```rust
/// # use rust_constraints::error_handling::prelude::*;
/// let h = std::f64::consts::FRAC_1_SQRT_2;
/// assert_eq!(check_unit_vector("f", &[h, h], "u"), Ok(true));
/// assert!(check_unit_vector("f", &[1.0, 1.0], "u").is_err());
/// ```
pub fn check_unit_vector<'a>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str,
) -> DomainResult<bool> {
    check_unit_vector_with(function, y, name, None::<&mut f64>, &default_policy())
}

pub fn check_unit_vector_with<'a, R, P>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, result: Option<&mut R>,
    policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    let y = y.into();
    let constraint = Constraint::UnitVector;

    if y.is_empty() {
        let violation = Violation::new(
            function,
            name,
            constraint,
            ViolationKind::EmptyInput,
            0.0,
            MessageTemplate::empty_vector(name, constraint),
        );
        return report_violation(violation, result, policy);
    }

    let ssq = y.dot(&y);
    if !within_tolerance(1.0, ssq) {
        let violation = Violation::new(
            function,
            name,
            constraint,
            ViolationKind::NormOutOfTolerance,
            ssq,
            MessageTemplate::invalid_aggregate(
                name,
                constraint,
                "The sum of the squares of the elements should be 1, but is ",
                "",
            ),
        );
        return report_violation(violation, result, policy);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::policy::ReturnNaN;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - First-failing-index reporting for the element-wise checkers.
    // - Vacuous acceptance of empty vectors by element-wise checkers.
    // - Emptiness, norm and NaN handling of `check_unit_vector`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Element-wise checkers report the first failing index and its value.
    //
    // Given
    // -----
    // - y = [1.0, 0.0, -1.0].
    //
    // Expect
    // ------
    // - positive fails at index 1 (0.0), non-negative fails at index 2 (-1.0).
    fn element_checkers_report_first_failing_index() {
        // Arrange
        let y = array![1.0, 0.0, -1.0];

        // Act
        let pos = check_positive_vector("f", &y, "y").unwrap_err();
        let nonneg = check_nonnegative_vector("f", &y, "y").unwrap_err();

        // Assert
        assert_eq!((pos.index(), pos.value()), (Some(1), 0.0));
        assert_eq!(pos.kind(), ViolationKind::NotPositive);
        assert_eq!(
            pos.message(),
            "y is not a valid positive vector. The element at 1 is 0, but should be greater than 0"
        );
        assert_eq!((nonneg.index(), nonneg.value()), (Some(2), -1.0));
    }

    #[test]
    fn element_checkers_accept_empty_vector() {
        let empty: [f64; 0] = [];

        assert_eq!(check_finite_vector("f", &empty, "y"), Ok(true));
        assert_eq!(check_positive_vector("f", &empty, "y"), Ok(true));
        assert_eq!(check_nonnegative_vector("f", &empty, "y"), Ok(true));
        assert_eq!(check_bounded_vector("f", &empty, "y", 0.0, 1.0), Ok(true));
    }

    #[test]
    fn finite_and_bounded_vectors_reject_nan() {
        let y = [0.5, f64::NAN];

        let finite = check_finite_vector("f", &y, "y").unwrap_err();
        let bounded = check_bounded_vector("f", &y, "y", 0.0, 1.0).unwrap_err();

        assert_eq!(finite.index(), Some(1));
        assert_eq!(finite.kind(), ViolationKind::NonFinite);
        assert_eq!(bounded.index(), Some(1));
        assert_eq!(bounded.kind(), ViolationKind::OutOfBounds);
        assert!(bounded.message().ends_with("but should be in the interval [0, 1]"));
    }

    #[test]
    // Purpose
    // -------
    // `check_unit_vector` checks emptiness first, then the sum of squares.
    fn check_unit_vector_orders_conditions() {
        // Arrange
        let empty: Vec<f64> = Vec::new();

        // Act
        let empty_err = check_unit_vector("f", &empty, "u").unwrap_err();
        let norm_err = check_unit_vector("f", &[0.6, 0.6], "u").unwrap_err();

        // Assert
        assert_eq!(empty_err.kind(), ViolationKind::EmptyInput);
        assert_eq!(empty_err.message(), "u is not a valid unit vector. 0 elements in the vector.");
        assert_eq!(norm_err.kind(), ViolationKind::NormOutOfTolerance);
        approx::assert_relative_eq!(norm_err.value(), 0.72, epsilon = 1e-12);
        assert_eq!(check_unit_vector("f", &[0.6, 0.8], "u"), Ok(true));
    }

    #[test]
    fn check_unit_vector_rejects_nan_norm() {
        let mut slot = 0.0_f64;

        let out = check_unit_vector_with("f", &[f64::NAN, 1.0], "u", Some(&mut slot), &ReturnNaN);

        assert_eq!(out, Ok(false));
        assert!(slot.is_nan());
    }
}
