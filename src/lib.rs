//! rust_constraints — domain-constraint checkers with pluggable error policies.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, with the `python-bindings`
//! feature, as the PyO3 bridge exposing the checkers to Python through the
//! `_rust_constraints` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the [`error_handling`] module: tolerance primitives,
//!   constraint checkers, diagnostic templates, and error policies.
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   `_rust_constraints`, registering a `checks` submodule so that
//!   `rust_constraints.checks` imports work from Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - All validation logic lives in [`error_handling`]; this file performs
//!   only argument conversion and result mapping.
//! - Python callers select a policy by name (`"raise"`, `"nan"`, `"ignore"`,
//!   `"warn"`). `"raise"` maps violations to `ValueError`; the others
//!   return `(False, value)` where `value` is what the policy produced.
//!
//! Conventions
//! -----------
//! - Each Python check returns `(True, None)` for a valid input.
//! - Indices in messages are 0-based, as in NumPy.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`error_handling`] (usually through its
//!   prelude) and can ignore the items guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Checker behavior is covered by unit tests in [`error_handling`] and by
//!   the integration and property tests under `tests/`. The PyO3 glue is
//!   exercised from Python.

pub mod error_handling;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    error_handling::{checkers, policy::PolicyKind},
    utils::{extract_f64_array, extract_policy},
};

/// Map a checker outcome to the Python `(valid, produced)` pair.
#[cfg(feature = "python-bindings")]
fn into_py_outcome(valid: bool, slot: f64) -> (bool, Option<f64>) {
    if valid { (true, None) } else { (false, Some(slot)) }
}

/// check_simplex(function, theta, name, policy="raise") -> (bool, float | None)
///
/// Validate that `theta` is a probability simplex. With `policy="raise"`
/// a violation raises `ValueError`; other policies return `(False, value)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_simplex", signature = (function, theta, name, policy=None))]
fn py_check_simplex<'py>(
    py: Python<'py>, function: &str, theta: &Bound<'py, PyAny>, name: &str,
    policy: Option<&str>,
) -> PyResult<(bool, Option<f64>)> {
    let theta = extract_f64_array(py, theta)?;
    let policy: PolicyKind = extract_policy(policy)?;
    let mut slot = f64::NAN;
    let valid =
        checkers::check_simplex_with(function, theta.as_array(), name, Some(&mut slot), &policy)?;
    Ok(into_py_outcome(valid, slot))
}

/// check_positive_vector(function, y, name, policy="raise") -> (bool, float | None)
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_positive_vector", signature = (function, y, name, policy=None))]
fn py_check_positive_vector<'py>(
    py: Python<'py>, function: &str, y: &Bound<'py, PyAny>, name: &str, policy: Option<&str>,
) -> PyResult<(bool, Option<f64>)> {
    let y = extract_f64_array(py, y)?;
    let policy = extract_policy(policy)?;
    let mut slot = f64::NAN;
    let valid =
        checkers::check_positive_vector_with(function, y.as_array(), name, Some(&mut slot), &policy)?;
    Ok(into_py_outcome(valid, slot))
}

/// check_ordered(function, y, name, policy="raise") -> (bool, float | None)
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_ordered", signature = (function, y, name, policy=None))]
fn py_check_ordered<'py>(
    py: Python<'py>, function: &str, y: &Bound<'py, PyAny>, name: &str, policy: Option<&str>,
) -> PyResult<(bool, Option<f64>)> {
    let y = extract_f64_array(py, y)?;
    let policy = extract_policy(policy)?;
    let mut slot = f64::NAN;
    let valid =
        checkers::check_ordered_with(function, y.as_array(), name, Some(&mut slot), &policy)?;
    Ok(into_py_outcome(valid, slot))
}

/// check_unit_vector(function, y, name, policy="raise") -> (bool, float | None)
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "check_unit_vector", signature = (function, y, name, policy=None))]
fn py_check_unit_vector<'py>(
    py: Python<'py>, function: &str, y: &Bound<'py, PyAny>, name: &str, policy: Option<&str>,
) -> PyResult<(bool, Option<f64>)> {
    let y = extract_f64_array(py, y)?;
    let policy = extract_policy(policy)?;
    let mut slot = f64::NAN;
    let valid =
        checkers::check_unit_vector_with(function, y.as_array(), name, Some(&mut slot), &policy)?;
    Ok(into_py_outcome(valid, slot))
}

/// _rust_constraints — PyO3 module initializer for the Python extension.
///
/// Creates the `checks` submodule, attaches it to the parent module, and
/// registers it in `sys.modules` so `rust_constraints.checks` is importable
/// with dot notation.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_constraints<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let checks_mod = PyModule::new(py, "checks")?;
    checks(py, m, &checks_mod)?;

    py.import("sys")?.getattr("modules")?.set_item("rust_constraints.checks", checks_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn checks<'py>(
    _py: Python, rust_constraints: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_check_simplex, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_positive_vector, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_ordered, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_unit_vector, m)?)?;
    m.add("CONSTRAINT_TOLERANCE", crate::error_handling::tolerance::CONSTRAINT_TOLERANCE)?;
    rust_constraints.add_submodule(m)?;
    Ok(())
}
