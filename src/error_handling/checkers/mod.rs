//! checkers — one routine per domain constraint, one calling convention.
//!
//! Purpose
//! -------
//! Collect the constraint checkers and the plumbing they share. Every
//! checker evaluates an ordered list of sub-conditions, stops at the first
//! failure, routes that failure through [`report_violation`], and otherwise
//! returns `Ok(true)`.
//!
//! Key behaviors
//! -------------
//! - Each constraint exposes two entry points:
//!   - `check_<name>(function, value, name, ..)` using [`DefaultPolicy`] and
//!     no output slot;
//!   - `check_<name>_with(function, value, name, .., result, policy)` with
//!     an explicit output slot `Option<&mut R>` and policy `&P`.
//! - [`report_violation`] invokes the policy once, writes the slot once if
//!   present, and returns `Ok(false)`; a raising policy's `Err` is returned
//!   before the slot is touched.
//!
//! Invariants & assumptions
//! ------------------------
//! - Shape conditions (emptiness, matching lengths) are checked before any
//!   value condition.
//! - Element scans run in ascending index order and report the first
//!   failing index.
//! - Comparisons are written as "fails unless `cond`" (`!(x >= 0.0)`), so
//!   NaN never satisfies an ordering, positivity, or bound condition.
//! - Checkers never mutate the value under test and never log.
//!
//! Downstream usage
//! ----------------
//! - Statistical routines call the short form with `?` at their top:
//!
//!   ```rust
//!   # use rust_constraints::error_handling::prelude::*;
//!   fn categorical_log(n: usize, theta: &[f64]) -> DomainResult<f64> {
//!       check_simplex("categorical_log", theta, "theta")?;
//!       Ok(theta[n].ln())
//!   }
//!   assert!(categorical_log(0, &[0.25, 0.75]).is_ok());
//!   assert!(categorical_log(0, &[0.25, 0.25]).is_err());
//!   ```
//!
//! Testing notes
//! -------------
//! - Each checker module tests its own conditions, order, and messages.
//!   Cross-policy behavior and properties over random inputs live in
//!   `tests/`.
pub mod ordered;
pub mod scalar;
pub mod simplex;
pub mod size;
pub mod vector;

use ndarray::ArrayView1;
use num_traits::Float;

use crate::error_handling::{
    errors::DomainResult,
    policy::{DefaultPolicy, ErrorPolicy},
    violation::Violation,
};

pub use self::ordered::{
    check_ordered, check_ordered_with, check_positive_ordered, check_positive_ordered_with,
};
pub use self::scalar::{
    check_bounded, check_bounded_with, check_finite, check_finite_with, check_nonnegative,
    check_nonnegative_with, check_not_nan, check_not_nan_with, check_positive, check_positive_with,
};
pub use self::simplex::{check_simplex, check_simplex_with};
pub use self::size::{
    check_consistent_size, check_consistent_size_with, check_nonzero_size, check_nonzero_size_with,
};
pub use self::vector::{
    check_bounded_vector, check_bounded_vector_with, check_finite_vector,
    check_finite_vector_with, check_nonnegative_vector, check_nonnegative_vector_with,
    check_positive_vector, check_positive_vector_with, check_unit_vector, check_unit_vector_with,
};

/// Route a violation through `policy` and store the produced value.
///
/// Returns `Ok(false)` when the policy produced a value, or the policy's
/// error untouched when it raised. In the latter case `result` is never
/// written.
pub(crate) fn report_violation<R, P>(
    violation: Violation<'_>, result: Option<&mut R>, policy: &P,
) -> DomainResult<bool>
where
    R: Float,
    P: ErrorPolicy,
{
    let produced = policy.on_violation::<R>(&violation)?;
    if let Some(slot) = result {
        *slot = produced;
    }
    Ok(false)
}

/// First `(index, value)` in `values` for which `holds` is false.
pub(crate) fn first_failing<F>(values: ArrayView1<'_, f64>, holds: F) -> Option<(usize, f64)>
where
    F: Fn(f64) -> bool,
{
    values.iter().copied().enumerate().find(|&(_, x)| !holds(x))
}

/// Policy instance used by the short `check_*` forms.
#[inline]
pub(crate) fn default_policy() -> DefaultPolicy {
    DefaultPolicy::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{
        messages::MessageTemplate,
        policy::{RaiseDomainError, ReturnNaN},
        violation::{Constraint, ViolationKind},
    };
    use ndarray::array;

    fn sample_violation() -> Violation<'static> {
        Violation::new(
            "f",
            "x",
            Constraint::Positive,
            ViolationKind::NotPositive,
            -1.0,
            MessageTemplate::invalid_scalar("x", "must be greater than 0"),
        )
    }

    #[test]
    // Purpose
    // -------
    // A value-producing policy writes the slot and yields Ok(false).
    fn report_violation_writes_slot_for_value_policy() {
        // Arrange
        let mut slot = 0.0_f64;

        // Act
        let out = report_violation(sample_violation(), Some(&mut slot), &ReturnNaN);

        // Assert
        assert_eq!(out, Ok(false));
        assert!(slot.is_nan());
    }

    #[test]
    // Purpose
    // -------
    // A raising policy returns its error and leaves the slot untouched.
    fn report_violation_leaves_slot_when_raising() {
        // Arrange
        let mut slot = 7.0_f64;

        // Act
        let out = report_violation(sample_violation(), Some(&mut slot), &RaiseDomainError);

        // Assert
        assert!(out.is_err());
        assert_eq!(slot, 7.0);
    }

    #[test]
    fn report_violation_without_slot_is_not_an_error() {
        let out = report_violation::<f64, _>(sample_violation(), None, &ReturnNaN);

        assert_eq!(out, Ok(false));
    }

    #[test]
    fn first_failing_reports_lowest_index_and_nan() {
        let v = array![1.0, f64::NAN, -1.0];

        let (index, value) = first_failing(v.view(), |x| x >= 0.0).unwrap();

        assert_eq!(index, 1);
        assert!(value.is_nan());
        assert_eq!(first_failing(v.view(), |_| true), None);
    }
}
