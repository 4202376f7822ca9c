//! Python bindings for the Lévy distribution statistics.
//!
//! All of the numerics live in the `levy_stats` crate, this only handles conversion
//! to and from Python objects.
use pyo3::prelude::*;

pub mod stdev;
pub mod utils;

/// Python module definition.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(stdev::levy_stdev_py, m)?)?;
    Ok(())
}
