//! utils — argument extraction for the Python bridge.
//!
//! Only compiled with the `python-bindings` feature. Converts Python inputs
//! (NumPy arrays, pandas Series, sequences, policy names) into the Rust
//! types the checkers take.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::error_handling::policy::PolicyKind;

/// Borrow a contiguous `f64` view of a 1-D array-like.
///
/// Accepts a contiguous `numpy.ndarray[float64]` without copying, then
/// anything exposing `to_numpy()` (pandas Series), and finally any Python
/// sequence of floats, which is copied into a fresh array.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array<'py>(
    py: Python<'py>, obj: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    let contiguous = |candidate: &Bound<'py, PyAny>| {
        candidate.extract::<PyReadonlyArray1<'py, f64>>().ok().filter(|a| a.as_slice().is_ok())
    };

    if let Some(array) = contiguous(obj) {
        return Ok(array);
    }
    if let Some(array) = obj.call_method0("to_numpy").ok().as_ref().and_then(contiguous) {
        return Ok(array);
    }

    let values: Vec<f64> = obj.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float")
    })?;
    Ok(values.into_pyarray(py).readonly())
}

/// Parse an optional policy name, defaulting to raising.
#[cfg(feature = "python-bindings")]
pub fn extract_policy(policy: Option<&str>) -> PyResult<PolicyKind> {
    match policy {
        None => Ok(PolicyKind::default()),
        Some(name) => Ok(name.parse::<PolicyKind>()?),
    }
}
