//! error_handling — constraint checkers with injectable error policies.
//!
//! Purpose
//! -------
//! Decide whether arguments of statistical routines satisfy their domain
//! constraints (simplex, positivity, bounds, ordering, unit norm, sizes)
//! and delegate what happens on a violation to a caller-selected policy.
//!
//! Key behaviors
//! -------------
//! - [`tolerance`] holds [`CONSTRAINT_TOLERANCE`] and the approximate
//!   comparisons shared by every aggregate check.
//! - [`checkers`] holds one routine per constraint. Each evaluates its
//!   conditions in a fixed order and stops at the first failure.
//! - [`messages`] builds single-placeholder diagnostic templates;
//!   [`violation`] bundles the template with the payload and location.
//! - [`policy`] turns a [`Violation`] into either a [`DomainError`]
//!   ([`RaiseDomainError`], the default) or a substituted value
//!   ([`ReturnNaN`], [`IgnoreError`], [`UserPolicy`]), optionally logging
//!   through [`WarnOnError`].
//!
//! Invariants & assumptions
//! ------------------------
//! - A checker returns `Ok(true)` iff it detected no violation.
//! - The policy is invoked at most once per checker call. When it produces
//!   a value, the output slot (if any) is written exactly once and the
//!   checker returns `Ok(false)`.
//! - Swapping policies never changes which violation fires.
//! - Values under test are read-only; checkers hold no state and are safe
//!   to call from any thread.
//!
//! Conventions
//! -----------
//! - Indices in messages and errors are 0-based.
//! - Short forms `check_<name>` use [`DefaultPolicy`]; `_with` forms take
//!   `result: Option<&mut R>` (any `num_traits::Float`) and `policy: &P`.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the whole surface via the prelude:
//!
//!   ```rust
//!   use rust_constraints::error_handling::prelude::*;
//!
//!   fn dirichlet_log(theta: &[f64], alpha: &[f64]) -> DomainResult<f64> {
//!       check_simplex("dirichlet_log", theta, "theta")?;
//!       check_positive_vector("dirichlet_log", alpha, "alpha")?;
//!       check_consistent_size("dirichlet_log", theta, "theta", alpha, "alpha")?;
//!       Ok(theta.iter().zip(alpha).map(|(t, a)| (a - 1.0) * t.ln()).sum())
//!   }
//!
//!   assert!(dirichlet_log(&[0.5, 0.5], &[1.0, 1.0]).is_ok());
//!   assert!(dirichlet_log(&[0.5, 0.6], &[1.0, 1.0]).is_err());
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule.
//! - `tests/integration_checkers.rs` swaps policies over identical inputs;
//!   `tests/property_checkers.rs` covers the universally quantified
//!   properties with `proptest`.

pub mod checkers;
pub mod errors;
pub mod messages;
pub mod policy;
pub mod tolerance;
pub mod violation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{DomainError, DomainResult, UnknownPolicy};
pub use self::messages::MessageTemplate;
pub use self::policy::{
    DefaultPolicy, ErrorPolicy, IgnoreError, PolicyKind, RaiseDomainError, ReturnNaN, UserPolicy,
    WarnOnError,
};
pub use self::tolerance::{CONSTRAINT_TOLERANCE, exceeds_tolerance, within_tolerance};
pub use self::violation::{Constraint, Violation, ViolationKind};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_constraints::error_handling::prelude::*;
//
// to import checkers, policies and error types in a single line.

pub mod prelude {
    pub use super::checkers::*;
    pub use super::errors::{DomainError, DomainResult};
    pub use super::policy::{
        DefaultPolicy, ErrorPolicy, IgnoreError, PolicyKind, RaiseDomainError, ReturnNaN,
        UserPolicy, WarnOnError,
    };
    pub use super::tolerance::CONSTRAINT_TOLERANCE;
    pub use super::violation::{Constraint, Violation, ViolationKind};
}
