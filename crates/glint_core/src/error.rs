//! Errors raised while building a scene.

use glint_math::DVec3;
use thiserror::Error;

/// Invalid construction parameters.
///
/// Every variant is detected before rendering starts; shading itself never
/// fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{name} must be finite, got {value}")]
    NonFiniteVector { name: &'static str, value: DVec3 },

    #[error("{0} must not be a zero-length vector")]
    ZeroLengthVector(&'static str),

    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("triangle vertices {a}, {b}, {c} are collinear")]
    DegenerateTriangle { a: DVec3, b: DVec3, c: DVec3 },

    #[error("{name} must lie in [0, 1], got {value}")]
    CoefficientOutOfRange { name: &'static str, value: f64 },

    #[error("checker cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),

    #[error("field of view must lie in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("camera up vector {0} is parallel to the view direction")]
    ParallelUpVector(DVec3),

    #[error("image must be at least 2x2 pixels, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("worker pool needs at least one worker")]
    NoWorkers,

    #[error("bucket size must be at least 1 pixel")]
    InvalidBucketSize,
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;
