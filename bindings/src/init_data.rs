use miniapp::config::ParseOptions;
use miniapp::init_data::parse_query_with;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{guard, json_to_py, to_py_err};

/// Parse a launch query string into a camelCase dict.
///
/// Raises `KeyError` when `auth_date` or `hash` is missing and `ValueError`
/// for malformed values. `authDate` is epoch milliseconds.
#[pyfunction]
#[pyo3(signature = (query, /, strict=false))]
fn parse_init_data<'py>(py: Python<'py>, query: &str, strict: bool) -> PyResult<Bound<'py, PyAny>> {
    let options = if strict {
        ParseOptions::new().strict()
    } else {
        ParseOptions::default()
    };

    let value = guard(|| {
        let data = parse_query_with(query, &options).map_err(to_py_err)?;
        serde_json::to_value(&data).map_err(|e| PyValueError::new_err(e.to_string()))
    })?;

    json_to_py(py, &value)
}

pub fn register_module(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "init_data")?;
    m.add_function(wrap_pyfunction!(parse_init_data, &m)?)?;
    parent.add_function(wrap_pyfunction!(parse_init_data, parent)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
