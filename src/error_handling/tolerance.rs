//! tolerance — shared constraint tolerance and approximate comparisons.
//!
//! Purpose
//! -------
//! Hold the single tolerance used by every approximate equality test in the
//! constraint checkers, so that constraints which compose (a simplex check
//! here, a probabilities-sum-to-one check elsewhere) agree on what "close
//! enough" means.
//!
//! Key behaviors
//! -------------
//! - [`CONSTRAINT_TOLERANCE`] is a compile-time constant; it is not
//!   configurable per call.
//! - [`within_tolerance`] is the inclusive acceptance test
//!   `|a - b| <= CONSTRAINT_TOLERANCE`.
//! - [`exceeds_tolerance`] is the violation test `|a - b| > CONSTRAINT_TOLERANCE`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The two predicates are complements on finite inputs only. Both return
//!   `false` when either argument is NaN: a NaN aggregate is neither within
//!   nor beyond tolerance. Checkers that also scan elements use
//!   [`exceeds_tolerance`] so a NaN entry is reported at its index by the
//!   scan; checkers without an element scan use [`within_tolerance`] so a
//!   NaN aggregate is still rejected.
//!
//! Conventions
//! -----------
//! - Pure functions, no allocation, no logging.

/// Absolute tolerance for sum and norm constraints (e.g. a simplex must sum
/// to 1 within this amount).
pub const CONSTRAINT_TOLERANCE: f64 = 1e-8;

/// Return `true` iff `|a - b| <= CONSTRAINT_TOLERANCE`.
///
/// The bound is inclusive: a deviation of exactly [`CONSTRAINT_TOLERANCE`]
/// is accepted. NaN in either argument yields `false`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_constraints::error_handling::tolerance::{within_tolerance, CONSTRAINT_TOLERANCE};
/// assert!(within_tolerance(CONSTRAINT_TOLERANCE, 0.0));
/// assert!(!within_tolerance(2.0 * CONSTRAINT_TOLERANCE, 0.0));
/// assert!(!within_tolerance(f64::NAN, 0.0));
/// ```
#[inline]
pub fn within_tolerance(a: f64, b: f64) -> bool {
    (a - b).abs() <= CONSTRAINT_TOLERANCE
}

/// Return `true` iff `|a - b| > CONSTRAINT_TOLERANCE`.
///
/// NaN in either argument yields `false`.
#[inline]
pub fn exceeds_tolerance(a: f64, b: f64) -> bool {
    (a - b).abs() > CONSTRAINT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The inclusive boundary of `within_tolerance`.
    // - Agreement of both predicates on finite inputs and their NaN behavior.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A deviation of exactly CONSTRAINT_TOLERANCE is accepted.
    //
    // Given
    // -----
    // - a = CONSTRAINT_TOLERANCE, b = 0.0 (exact difference).
    //
    // Expect
    // ------
    // - `within_tolerance` is true and `exceeds_tolerance` is false.
    fn within_tolerance_boundary_is_inclusive() {
        // Arrange
        let a = CONSTRAINT_TOLERANCE;

        // Act / Assert
        assert!(within_tolerance(a, 0.0));
        assert!(!exceeds_tolerance(a, 0.0));
        assert!(within_tolerance(0.0, -a));
    }

    #[test]
    // Purpose
    // -------
    // Twice the tolerance is rejected by one predicate and flagged by the other.
    fn twice_tolerance_is_outside() {
        let a = 1.0 + 2.0 * CONSTRAINT_TOLERANCE;

        assert!(!within_tolerance(1.0, a));
        assert!(exceeds_tolerance(1.0, a));
    }

    #[test]
    // Purpose
    // -------
    // NaN is neither within nor beyond tolerance.
    fn nan_is_neither_within_nor_exceeding() {
        assert!(!within_tolerance(1.0, f64::NAN));
        assert!(!exceeds_tolerance(1.0, f64::NAN));
    }

    #[test]
    // Purpose
    // -------
    // Infinite differences are always beyond tolerance.
    fn infinity_exceeds_tolerance() {
        assert!(exceeds_tolerance(1.0, f64::INFINITY));
        assert!(!within_tolerance(1.0, f64::NEG_INFINITY));
    }
}
