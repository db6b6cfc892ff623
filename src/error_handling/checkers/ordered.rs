//! ordered — strictly ascending vectors.
//!
//! Conditions, in order:
//!
//! - `check_ordered`: non-empty; `y[0]` is not NaN; for `n = 1..len`,
//!   `y[n] > y[n - 1]`.
//! - `check_positive_ordered`: non-empty; `y[0] >= 0`; then the same
//!   ascending scan.
//!
//! The ascending scan reports `NotAscending` at the first `n` where the
//! comparison fails, with payload `y[n]`; NaN on either side fails it.
use ndarray::ArrayView1;
use num_traits::Float;

use crate::error_handling::{
    checkers::{default_policy, report_violation},
    errors::DomainResult,
    messages::MessageTemplate,
    policy::ErrorPolicy,
    violation::{Constraint, Violation, ViolationKind},
};

/// First `n >= 1` with `!(y[n] > y[n - 1])`, as `(n, y[n - 1], y[n])`.
fn first_non_ascending(y: ArrayView1<'_, f64>) -> Option<(usize, f64, f64)> {
    y.windows(2)
        .into_iter()
        .enumerate()
        .find(|(_, w)| !(w[1] > w[0]))
        .map(|(i, w)| (i + 1, w[0], w[1]))
}

/// Shared body of both checkers after their leading-element condition.
fn check_ascending<R, P>(
    function: &str, y: ArrayView1<'_, f64>, name: &str, constraint: Constraint,
    result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    let Some((n, previous, value)) = first_non_ascending(y) else {
        return Ok(true);
    };
    let violation = Violation::new(
        function,
        name,
        constraint,
        ViolationKind::NotAscending,
        value,
        MessageTemplate::invalid_element(
            name,
            constraint,
            n,
            &format!("should be greater than the previous element, {previous}"),
        ),
    )
    .at_index(n);
    report_violation(violation, result, policy)
}

fn empty_violation<'a>(function: &'a str, name: &'a str, constraint: Constraint) -> Violation<'a> {
    Violation::new(
        function,
        name,
        constraint,
        ViolationKind::EmptyInput,
        0.0,
        MessageTemplate::empty_vector(name, constraint),
    )
}

/// Check that `y` is non-empty and strictly ascending.
///
/// ```rust
/// # use rust_constraints::error_handling::prelude::*;
/// assert_eq!(check_ordered("ordered_logistic_log", &[-1.0, 0.5, 2.0], "c"), Ok(true));
///
/// let err = check_ordered("ordered_logistic_log", &[-1.0, 0.5, 0.5], "c").unwrap_err();
/// assert_eq!(err.index(), Some(2));
/// assert_eq!(
///     err.message(),
///     "c is not a valid ordered vector. The element at 2 is 0.5, but should be greater than the previous element, 0.5"
/// );
/// ```
pub fn check_ordered<'a>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str,
) -> DomainResult<bool> {
    check_ordered_with(function, y, name, None::<&mut f64>, &default_policy())
}

pub fn check_ordered_with<'a, R, P>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, result: Option<&mut R>,
    policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    let y = y.into();
    let constraint = Constraint::Ordered;

    if y.is_empty() {
        return report_violation(empty_violation(function, name, constraint), result, policy);
    }

    // A lone NaN has no neighbour to fail against.
    if y[0].is_nan() {
        let violation = Violation::new(
            function,
            name,
            constraint,
            ViolationKind::NotANumber,
            y[0],
            MessageTemplate::invalid_element(name, constraint, 0, "should not be NaN"),
        )
        .at_index(0);
        return report_violation(violation, result, policy);
    }

    check_ascending(function, y, name, constraint, result, policy)
}

/// Check that `y` is non-empty, starts at or above 0, and is strictly
/// ascending.
pub fn check_positive_ordered<'a>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str,
) -> DomainResult<bool> {
    check_positive_ordered_with(function, y, name, None::<&mut f64>, &default_policy())
}

pub fn check_positive_ordered_with<'a, R, P>(
    function: &str, y: impl Into<ArrayView1<'a, f64>>, name: &str, result: Option<&mut R>,
    policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    let y = y.into();
    let constraint = Constraint::PositiveOrdered;

    if y.is_empty() {
        return report_violation(empty_violation(function, name, constraint), result, policy);
    }

    if !(y[0] >= 0.0) {
        let violation = Violation::new(
            function,
            name,
            constraint,
            ViolationKind::NegativeElement,
            y[0],
            MessageTemplate::invalid_element(
                name,
                constraint,
                0,
                "should be greater than or equal to 0",
            ),
        )
        .at_index(0);
        return report_violation(violation, result, policy);
    }

    check_ascending(function, y, name, constraint, result, policy)
}
