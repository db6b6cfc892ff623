//! scalar — constraints on a single real value.
//!
//! Each scalar checker has a single condition and reports it with the
//! template `"<name> is {}, but <requirement>"`. Conditions are written so
//! that NaN fails every one of them (`check_finite` included).
use num_traits::Float;

use crate::error_handling::{
    checkers::{default_policy, report_violation},
    errors::DomainResult,
    messages::MessageTemplate,
    policy::ErrorPolicy,
    violation::{Constraint, Violation, ViolationKind},
};

/// Shared body of the scalar checkers: report `kind` unless `holds`.
#[allow(clippy::too_many_arguments)]
fn check_scalar<R, P>(
    function: &str, x: f64, name: &str, holds: bool, constraint: Constraint,
    kind: ViolationKind, requirement: &str, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    if holds {
        return Ok(true);
    }
    let violation = Violation::new(
        function,
        name,
        constraint,
        kind,
        x,
        MessageTemplate::invalid_scalar(name, requirement),
    );
    report_violation(violation, result, policy)
}

/// Check that `x` is not NaN. Infinities pass.
pub fn check_not_nan(function: &str, x: f64, name: &str) -> DomainResult<bool> {
    check_not_nan_with(function, x, name, None::<&mut f64>, &default_policy())
}

pub fn check_not_nan_with<R, P>(
    function: &str, x: f64, name: &str, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_scalar(
        function,
        x,
        name,
        !x.is_nan(),
        Constraint::NotNan,
        ViolationKind::NotANumber,
        "must not be NaN",
        result,
        policy,
    )
}

/// Check that `x` is finite (neither NaN nor ±∞).
pub fn check_finite(function: &str, x: f64, name: &str) -> DomainResult<bool> {
    check_finite_with(function, x, name, None::<&mut f64>, &default_policy())
}

pub fn check_finite_with<R, P>(
    function: &str, x: f64, name: &str, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_scalar(
        function,
        x,
        name,
        x.is_finite(),
        Constraint::Finite,
        ViolationKind::NonFinite,
        "must be finite",
        result,
        policy,
    )
}

/// Check that `x > 0`.
pub fn check_positive(function: &str, x: f64, name: &str) -> DomainResult<bool> {
    check_positive_with(function, x, name, None::<&mut f64>, &default_policy())
}

pub fn check_positive_with<R, P>(
    function: &str, x: f64, name: &str, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_scalar(
        function,
        x,
        name,
        x > 0.0,
        Constraint::Positive,
        ViolationKind::NotPositive,
        "must be greater than 0",
        result,
        policy,
    )
}

/// Check that `x >= 0`.
pub fn check_nonnegative(function: &str, x: f64, name: &str) -> DomainResult<bool> {
    check_nonnegative_with(function, x, name, None::<&mut f64>, &default_policy())
}

pub fn check_nonnegative_with<R, P>(
    function: &str, x: f64, name: &str, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_scalar(
        function,
        x,
        name,
        x >= 0.0,
        Constraint::NonNegative,
        ViolationKind::NegativeElement,
        "must be greater than or equal to 0",
        result,
        policy,
    )
}

/// Check that `low <= x <= high`.
///
/// The interval is closed. A NaN `x` (or NaN bound) fails.
///
/// ```rust
/// # use rust_constraints::error_handling::prelude::*;
/// assert_eq!(check_bounded("beta_log", 0.5, "p", 0.0, 1.0), Ok(true));
/// let err = check_bounded("beta_log", 1.5, "p", 0.0, 1.0).unwrap_err();
/// assert_eq!(err.message(), "p is 1.5, but must be in the interval [0, 1]");
/// ```
pub fn check_bounded(
    function: &str, x: f64, name: &str, low: f64, high: f64,
) -> DomainResult<bool> {
    check_bounded_with(function, x, name, low, high, None::<&mut f64>, &default_policy())
}

pub fn check_bounded_with<R, P>(
    function: &str, x: f64, name: &str, low: f64, high: f64, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    check_scalar(
        function,
        x,
        name,
        low <= x && x <= high,
        Constraint::Bounded,
        ViolationKind::OutOfBounds,
        &format!("must be in the interval [{low}, {high}]"),
        result,
        policy,
    )
}
