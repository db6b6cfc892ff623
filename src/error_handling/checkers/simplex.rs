//! simplex — probability-simplex constraint.
//!
//! A simplex is a non-empty vector of non-negative reals summing to 1
//! within [`CONSTRAINT_TOLERANCE`](crate::error_handling::tolerance::CONSTRAINT_TOLERANCE).
//! Conditions are checked in this order, stopping at the first failure:
//!
//! 1. non-empty (`EmptyInput`, payload = element count 0);
//! 2. `|1 - sum| <= CONSTRAINT_TOLERANCE` (`SumOutOfTolerance`, payload = sum);
//! 3. every element `>= 0`, ascending (`NegativeElement` at the first
//!    failing index, payload = that element).
//!
//! A NaN element makes the sum NaN, which does not fire condition 2, so the
//! element scan reports it at its own index.
use ndarray::ArrayView1;
use num_traits::Float;

use crate::error_handling::{
    checkers::{default_policy, first_failing, report_violation},
    errors::DomainResult,
    messages::MessageTemplate,
    policy::ErrorPolicy,
    tolerance::exceeds_tolerance,
    violation::{Constraint, Violation, ViolationKind},
};

/// Check that `theta` is a simplex, raising on failure.
///
/// Parameters
/// ----------
/// - `function`: name of the calling function, for the error message.
/// - `theta`: vector under test (`&[f64]`, `&Vec<f64>`, `&Array1<f64>`, or
///   an `ArrayView1<f64>`).
/// - `name`: display name of `theta` in the error message.
///
/// Returns
/// -------
/// `DomainResult<bool>`
///   - `Ok(true)` if `theta` is a simplex.
///   - `Err(DomainError)` describing the first violated condition.
///
/// Examples
/// --------
/// ```rust
/// # use rust_constraints::error_handling::prelude::*;
/// assert_eq!(check_simplex("f", &[0.2, 0.3, 0.5], "theta"), Ok(true));
///
/// let err = check_simplex("f", &[0.2, 0.3], "theta").unwrap_err();
/// assert_eq!(err.kind(), ViolationKind::SumOutOfTolerance);
/// assert_eq!(err.value(), 0.5);
/// ```
pub fn check_simplex<'a>(
    function: &str, theta: impl Into<ArrayView1<'a, f64>>, name: &str,
) -> DomainResult<bool> {
    check_simplex_with(function, theta, name, None::<&mut f64>, &default_policy())
}

/// Check that `theta` is a simplex under an explicit policy and output slot.
///
/// On a violation the policy is invoked once. If it produces a value, the
/// value is written to `result` (when present) and `Ok(false)` is returned.
/// If it raises, its error is returned and `result` is left untouched.
pub fn check_simplex_with<'a, R, P>(
    function: &str, theta: impl Into<ArrayView1<'a, f64>>, name: &str, result: Option<&mut R>,
    policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    let theta = theta.into();
    let constraint = Constraint::Simplex;

    if theta.is_empty() {
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

    let sum = theta.sum();
    if exceeds_tolerance(1.0, sum) {
        let violation = Violation::new(
            function,
            name,
            constraint,
            ViolationKind::SumOutOfTolerance,
            sum,
            MessageTemplate::invalid_aggregate(
                name,
                constraint,
                "The sum of the elements should be 1, but is ",
                "",
            ),
        );
        return report_violation(violation, result, policy);
    }

    if let Some((n, value)) = first_failing(theta, |x| x >= 0.0) {
        let violation = Violation::new(
            function,
            name,
            constraint,
            ViolationKind::NegativeElement,
            value,
            MessageTemplate::invalid_element(
                name,
                constraint,
                n,
                "should be greater than or equal to 0",
            ),
        )
        .at_index(n);
        return report_violation(violation, result, policy);
    }

    Ok(true)
}
