//! Property-based tests for the constraint checkers.
//!
//! Uses proptest to verify the checker contracts across many random inputs:
//! valid simplexes pass without touching the policy, sums outside tolerance
//! and negative or NaN entries fire the expected violation, and the choice
//! of policy never changes detection.

use std::cell::RefCell;

use ndarray::Array1;
use proptest::prelude::*;
use rust_constraints::error_handling::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Random simplex with 1-20 strictly positive entries.
fn simplex() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01..10.0f64, 1..20).prop_map(|w| {
        let total: f64 = w.iter().sum();
        w.into_iter().map(|x| x / total).collect()
    })
}

/// Random simplex with at least two entries plus an index into it.
fn simplex_with_index() -> impl Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec(0.01..10.0f64, 2..20)
        .prop_map(|w| {
            let total: f64 = w.iter().sum();
            w.into_iter().map(|x| x / total).collect::<Vec<f64>>()
        })
        .prop_flat_map(|theta| {
            let n = theta.len();
            (Just(theta), 0..n)
        })
}

/// Arbitrary short vectors, occasionally containing NaN.
fn noisy_vector() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![8 => -1.0..1.0f64, 1 => Just(f64::NAN), 1 => Just(0.0)],
        0..8,
    )
}

/// (kind, index) reported by the default policy, if any.
fn raised(theta: &[f64]) -> Option<(ViolationKind, Option<usize>)> {
    check_simplex("f", theta, "theta").err().map(|e| (e.kind(), e.index()))
}

// ============================================================================
// Simplex properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_valid_simplex_passes_without_invoking_policy(theta in simplex()) {
        let calls = RefCell::new(0_usize);
        let policy = UserPolicy::new(|_: &Violation<'_>| {
            *calls.borrow_mut() += 1;
            0.0
        });

        prop_assert_eq!(check_simplex("f", &theta, "theta"), Ok(true));
        prop_assert_eq!(check_simplex_with::<f64, _>("f", &theta, "theta", None, &policy), Ok(true));
        prop_assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn prop_sum_outside_tolerance_reports_actual_sum(
        theta in simplex(),
        excess in 1e-6..1.0f64,
    ) {
        let scaled: Array1<f64> = theta.iter().map(|x| x * (1.0 + excess)).collect();

        let err = check_simplex("f", &scaled, "theta").unwrap_err();

        prop_assert_eq!(err.kind(), ViolationKind::SumOutOfTolerance);
        prop_assert_eq!(err.value(), scaled.sum());
        prop_assert_eq!(err.index(), None);
    }

    #[test]
    fn prop_negative_element_reported_at_its_index(
        (mut theta, i) in simplex_with_index(),
        depth in 1e-3..1.0f64,
    ) {
        // Move mass so the sum stays at 1 while theta[i] turns negative.
        let j = if i + 1 < theta.len() { i + 1 } else { 0 };
        theta[j] += theta[i] + depth;
        theta[i] = -depth;

        let err = check_simplex("f", &theta, "theta").unwrap_err();

        prop_assert_eq!(err.kind(), ViolationKind::NegativeElement);
        prop_assert_eq!(err.index(), Some(i));
        prop_assert_eq!(err.value(), -depth);
    }

    #[test]
    fn prop_nan_element_reported_as_negative_element((mut theta, i) in simplex_with_index()) {
        theta[i] = f64::NAN;

        let err = check_simplex("f", &theta, "theta").unwrap_err();

        prop_assert_eq!(err.kind(), ViolationKind::NegativeElement);
        prop_assert_eq!(err.index(), Some(i));
        prop_assert!(err.value().is_nan());
    }

    #[test]
    fn prop_policy_swap_preserves_detection(theta in noisy_vector()) {
        let seen = RefCell::new(None);
        let recorder = UserPolicy::new(|v: &Violation<'_>| {
            *seen.borrow_mut() = Some((v.kind, v.index));
            v.value
        });
        let mut slot = 0.0_f64;

        let out = check_simplex_with("f", &theta, "theta", Some(&mut slot), &recorder);

        let expected = raised(&theta);
        prop_assert_eq!(*seen.borrow(), expected);
        prop_assert_eq!(out, Ok(expected.is_none()));
    }
}

// ============================================================================
// Sibling checker properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_scalar_positive_matches_strict_comparison(x in prop::num::f64::ANY) {
        prop_assert_eq!(check_positive("f", x, "x").is_ok(), x > 0.0);
        prop_assert_eq!(check_nonnegative("f", x, "x").is_ok(), x >= 0.0);
        prop_assert_eq!(check_not_nan("f", x, "x").is_ok(), !x.is_nan());
    }

    #[test]
    fn prop_sorted_distinct_vectors_are_ordered(mut y in prop::collection::vec(-1e6..1e6f64, 1..20)) {
        y.sort_by(|a, b| a.partial_cmp(b).unwrap());
        y.dedup();

        prop_assert_eq!(check_ordered("f", &y, "y"), Ok(true));
    }

    #[test]
    fn prop_normalized_vectors_are_unit_vectors(y in prop::collection::vec(0.1..10.0f64, 1..20)) {
        let norm = y.iter().map(|x| x * x).sum::<f64>().sqrt();
        let u: Vec<f64> = y.iter().map(|x| x / norm).collect();

        prop_assert_eq!(check_unit_vector("f", &u, "u"), Ok(true));
    }
}
