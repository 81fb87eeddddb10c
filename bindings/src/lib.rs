//! Python extension module exposing init data parsing, haptic feedback
//! params and `safe_call`.

use miniapp::errors::SdkError;
use miniapp::safe_call::{safe_call, safe_try, SafeCallResult};
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

mod haptic;
mod init_data;

/// Call `func()` and return `{"result": value}` or `{"error": exception}`.
///
/// The exception object is returned as raised, never re-raised.
#[pyfunction(name = "safe_call", signature = (func, /))]
#[pyo3(text_signature = "(func, /)")]
fn safe_call_py<'py>(py: Python<'py>, func: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyDict>> {
    let out = PyDict::new(py);
    match safe_try(|| func.call0()) {
        SafeCallResult::Result(value) => out.set_item("result", value)?,
        SafeCallResult::Error(err) => out.set_item("error", err.value(py))?,
    }
    Ok(out)
}

/// Run `f`, turning a Rust panic into `RuntimeError`.
pub(crate) fn guard<F, T>(f: F) -> PyResult<T>
where
    F: FnOnce() -> PyResult<T>,
{
    match safe_call(f) {
        SafeCallResult::Result(result) => result,
        SafeCallResult::Error(_) => Err(PyRuntimeError::new_err("Rust panic occurred")),
    }
}

pub(crate) fn to_py_err(err: SdkError) -> PyErr {
    match err {
        SdkError::MissingField { field } => PyKeyError::new_err(field),
        other => PyValueError::new_err(other.to_string()),
    }
}

pub(crate) fn json_to_py<'py>(
    py: Python<'py>,
    value: &serde_json::Value,
) -> PyResult<Bound<'py, PyAny>> {
    let text = serde_json::to_string(value).map_err(|e| PyValueError::new_err(e.to_string()))?;
    py.import("json")?.call_method1("loads", (text,))
}

#[pymodule]
fn _miniapp(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // RUST_LOG controls output; a host that already installed a logger wins
    let _ = env_logger::try_init();

    m.add_function(wrap_pyfunction!(safe_call_py, m)?)?;
    init_data::register_module(m)?;
    haptic::register_module(m)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    log::debug!("miniapp extension {} loaded", env!("CARGO_PKG_VERSION"));
    Ok(())
}
