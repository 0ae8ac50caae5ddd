//! Parameter checks shared by the renderer's constructors.

use glint_math::DVec3;

use crate::error::{SceneError, SceneResult};

/// Reject vectors with NaN or infinite components.
pub fn finite(name: &'static str, value: DVec3) -> SceneResult<DVec3> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SceneError::NonFiniteVector { name, value })
    }
}

/// Validate and normalize a direction vector.
pub fn direction(name: &'static str, value: DVec3) -> SceneResult<DVec3> {
    finite(name, value)?
        .try_normalize()
        .ok_or(SceneError::ZeroLengthVector(name))
}

/// Check that a shading coefficient lies in `[0, 1]`.
pub fn coefficient(name: &'static str, value: f64) -> SceneResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SceneError::CoefficientOutOfRange { name, value })
    }
}
