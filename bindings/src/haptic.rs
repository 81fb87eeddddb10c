use miniapp::haptic::{HapticFeedback, HAPTIC_FEEDBACK_METHOD};
use pyo3::prelude::*;

use crate::{guard, json_to_py, to_py_err};

/// Params dict for a haptic event, e.g. `haptic_feedback("impact", "soft")`.
#[pyfunction]
#[pyo3(signature = (kind, value=None))]
fn haptic_feedback<'py>(
    py: Python<'py>,
    kind: &str,
    value: Option<&str>,
) -> PyResult<Bound<'py, PyAny>> {
    let params = guard(|| {
        HapticFeedback::from_parts(kind, value)
            .map(|event| event.event_params())
            .map_err(to_py_err)
    })?;
    json_to_py(py, &params)
}

pub fn register_module(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "haptic")?;
    m.add_function(wrap_pyfunction!(haptic_feedback, &m)?)?;
    m.add("METHOD", HAPTIC_FEEDBACK_METHOD)?;
    parent.add_submodule(&m)?;
    Ok(())
}
