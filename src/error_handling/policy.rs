//! policy — pluggable reactions to a detected constraint violation.
//!
//! Purpose
//! -------
//! Decouple "a violation occurred" (decided by checkers) from "what happens
//! next" (decided here), so the same checkers serve callers that want an
//! error and callers that want a substituted value and to keep going.
//!
//! Key behaviors
//! -------------
//! - [`ErrorPolicy`] has one operation, [`ErrorPolicy::on_violation`], which
//!   renders the violation and either raises (returns `Err`) or produces a
//!   value of the caller's output type `R`.
//! - [`RaiseDomainError`] (alias [`DefaultPolicy`]) raises a [`DomainError`].
//!   Checkers propagate it with `?`, so their output slot is never written.
//! - [`ReturnNaN`], [`IgnoreError`], and [`UserPolicy`] produce a value
//!   (NaN, the offending payload, or a caller formula) and let the checker
//!   return `Ok(false)`.
//! - [`WarnOnError`] logs the rendered message at `warn` level and defers
//!   to an inner policy.
//! - [`PolicyKind`] selects one of the built-in policies at runtime from a
//!   name (`"raise"`, `"nan"`, `"ignore"`, `"warn"`).
//!
//! Invariants & assumptions
//! ------------------------
//! - A policy is invoked at most once per checker call and never inspects
//!   the value under test; it sees only the [`Violation`].
//! - Value-producing behavior is always an explicit opt-in; the default is
//!   to raise.
//! - Payloads that cannot be represented in `R` convert to `R::nan()`.
//!
//! Conventions
//! -----------
//! - Checkers never log. Logging of violations lives here, through
//!   `tracing`: `debug` when raising, `warn` in [`WarnOnError`].
use std::str::FromStr;

use num_traits::Float;

use crate::error_handling::{
    errors::{DomainError, DomainResult, UnknownPolicy},
    violation::Violation,
};

/// ErrorPolicy — strategy deciding how a violation is surfaced.
///
/// Implementors either return `Err(DomainError)` (interrupting the checker)
/// or `Ok(value)` (which the checker stores in its output slot before
/// returning `Ok(false)`).
pub trait ErrorPolicy {
    fn on_violation<R: Float>(&self, violation: &Violation<'_>) -> DomainResult<R>;
}

impl<P: ErrorPolicy> ErrorPolicy for &P {
    fn on_violation<R: Float>(&self, violation: &Violation<'_>) -> DomainResult<R> {
        (**self).on_violation(violation)
    }
}

/// Convert a payload into the caller's output type, NaN when unrepresentable.
fn payload_as<R: Float>(value: f64) -> R {
    num_traits::cast(value).unwrap_or_else(R::nan)
}

/// Raise a [`DomainError`] carrying the rendered message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaiseDomainError;

/// The policy used by checkers when the caller does not choose one.
pub type DefaultPolicy = RaiseDomainError;

impl ErrorPolicy for RaiseDomainError {
    fn on_violation<R: Float>(&self, violation: &Violation<'_>) -> DomainResult<R> {
        let err = DomainError::from(violation);
        tracing::debug!(
            function = violation.function,
            subject = violation.subject,
            constraint = %violation.constraint,
            index = ?violation.index,
            value = violation.value,
            "raising domain error: {}",
            err.message()
        );
        Err(err)
    }
}

/// Produce NaN, the "undefined" marker, and continue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReturnNaN;

impl ErrorPolicy for ReturnNaN {
    fn on_violation<R: Float>(&self, _violation: &Violation<'_>) -> DomainResult<R> {
        Ok(R::nan())
    }
}

/// Produce the offending payload unchanged and continue silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreError;

impl ErrorPolicy for IgnoreError {
    fn on_violation<R: Float>(&self, violation: &Violation<'_>) -> DomainResult<R> {
        Ok(payload_as(violation.value))
    }
}

/// Produce a value computed by a caller-supplied formula.
///
/// ```rust
/// # use rust_constraints::error_handling::prelude::*;
/// let clamp_to_zero = UserPolicy::new(|_: &Violation<'_>| 0.0);
/// let mut slot = 1.0_f64;
/// let ok = check_simplex_with("f", &[0.5, 0.6], "theta", Some(&mut slot), &clamp_to_zero);
/// assert_eq!(ok, Ok(false));
/// assert_eq!(slot, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UserPolicy<F> {
    formula: F,
}

impl<F> UserPolicy<F>
where
    F: Fn(&Violation<'_>) -> f64,
{
    pub fn new(formula: F) -> Self {
        UserPolicy { formula }
    }
}

impl<F> ErrorPolicy for UserPolicy<F>
where
    F: Fn(&Violation<'_>) -> f64,
{
    fn on_violation<R: Float>(&self, violation: &Violation<'_>) -> DomainResult<R> {
        Ok(payload_as((self.formula)(violation)))
    }
}

/// Log the violation at `warn` level, then defer to `P`.
///
/// The default inner policy is [`ReturnNaN`], i.e. "warn and continue".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarnOnError<P = ReturnNaN> {
    inner: P,
}

impl<P: ErrorPolicy> WarnOnError<P> {
    pub fn new(inner: P) -> Self {
        WarnOnError { inner }
    }
}

impl<P: ErrorPolicy> ErrorPolicy for WarnOnError<P> {
    fn on_violation<R: Float>(&self, violation: &Violation<'_>) -> DomainResult<R> {
        tracing::warn!(
            function = violation.function,
            subject = violation.subject,
            constraint = %violation.constraint,
            index = ?violation.index,
            value = violation.value,
            "{}",
            violation.render()
        );
        self.inner.on_violation(violation)
    }
}

/// PolicyKind — runtime choice among the built-in policies.
///
/// Used where the policy is only known as a name, e.g. at the Python
/// boundary. Parsing accepts `raise`, `nan`, `ignore`, and `warn`
/// (case-insensitive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolicyKind {
    #[default]
    Raise,
    Nan,
    Ignore,
    Warn,
}

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" => Ok(PolicyKind::Raise),
            "nan" => Ok(PolicyKind::Nan),
            "ignore" => Ok(PolicyKind::Ignore),
            "warn" => Ok(PolicyKind::Warn),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl ErrorPolicy for PolicyKind {
    fn on_violation<R: Float>(&self, violation: &Violation<'_>) -> DomainResult<R> {
        match self {
            PolicyKind::Raise => RaiseDomainError.on_violation(violation),
            PolicyKind::Nan => ReturnNaN.on_violation(violation),
            PolicyKind::Ignore => IgnoreError.on_violation(violation),
            PolicyKind::Warn => WarnOnError::<ReturnNaN>::default().on_violation(violation),
        }
    }
}
