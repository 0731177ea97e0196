//! Python bindings (feature `python`)
//!
//! Vectors are accepted as any length-3 sequence, including 1-D numpy arrays.
//! Invalid input raises `ValueError` instead of returning NaN-driven results.

use crate::constraints::{ConstraintConfig, EclipseConfig};
use crate::eclipse;
use crate::utils::vector_math::{self, Vector3};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

/// Return True if the body is in Earth's umbra or penumbra.
///
/// `sun_pos` is negated before the umbra/penumbra test (Sun-to-Earth vector).
#[pyfunction]
fn check_eclipse(body_pos: Vector3, sun_pos: Vector3) -> PyResult<bool> {
    Ok(eclipse::try_check_eclipse(&body_pos, &sun_pos)?)
}

/// Return `(in_penumbra, in_umbra)` for an Earth-to-Sun vector `sun_pos`.
#[pyfunction]
fn check_umbra_penumbra(body_pos: Vector3, sun_pos: Vector3) -> PyResult<(bool, bool)> {
    Ok(eclipse::try_check_umbra_penumbra(&body_pos, &sun_pos)?.into())
}

#[pyfunction]
fn angle_between_vectors_deg(a: Vector3, b: Vector3) -> PyResult<f64> {
    if vector_math::norm(&a) == 0.0 || vector_math::norm(&b) == 0.0 {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "angle is undefined for a zero-length vector",
        ));
    }
    Ok(vector_math::angle_between_vectors_deg(&a, &b))
}

/// Evaluate an eclipse constraint given as JSON, e.g. `{"umbra_only": true}`.
#[pyfunction]
#[pyo3(signature = (config_json, body_pos, sun_pos))]
fn eclipse_constraint_violated(
    config_json: &str,
    body_pos: Vector3,
    sun_pos: Vector3,
) -> PyResult<bool> {
    let config = EclipseConfig::from_json(config_json).map_err(|e| {
        pyo3::exceptions::PyValueError::new_err(format!("Invalid eclipse config: {e}"))
    })?;
    eclipse::try_check_umbra_penumbra(&body_pos, &sun_pos)?;
    Ok(config.to_evaluator().is_violated(&body_pos, &sun_pos))
}

#[pymodule]
fn _earth_shadow(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(check_eclipse, m)?)?;
    m.add_function(wrap_pyfunction!(check_umbra_penumbra, m)?)?;
    m.add_function(wrap_pyfunction!(angle_between_vectors_deg, m)?)?;
    m.add_function(wrap_pyfunction!(eclipse_constraint_violated, m)?)?;
    Ok(())
}
