//! Pinhole camera for primary ray generation.

use glint_core::{validate, CameraDesc, SceneError, SceneResult};
use glint_math::{DVec3, Ray};

/// Pinhole perspective camera.
///
/// All derived values are computed once in [`Camera::new`]; the camera is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // Image settings
    width: u32,
    height: u32,

    // Camera positioning
    eye: DVec3,
    field_of_view: f64, // Full field of view in degrees

    // Orthonormal basis
    forward: DVec3,
    right: DVec3,
    true_up: DVec3,

    // Image plane extents at unit distance, and per-pixel steps
    half_width: f64,
    half_height: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl Camera {
    /// Create a camera looking from `eye` towards `look_at`.
    ///
    /// `field_of_view` is in degrees and must lie in `(0, 180)`. Both image
    /// dimensions must be at least 2, since the pixel step spans
    /// `dimension - 1` intervals.
    pub fn new(
        eye: DVec3,
        up: DVec3,
        look_at: DVec3,
        field_of_view: f64,
        width: u32,
        height: u32,
    ) -> SceneResult<Self> {
        if width < 2 || height < 2 {
            return Err(SceneError::InvalidDimensions { width, height });
        }
        if !(field_of_view > 0.0 && field_of_view < 180.0) {
            return Err(SceneError::InvalidFieldOfView(field_of_view));
        }

        let eye = validate::finite("camera eye", eye)?;
        let look_at = validate::finite("camera look-at point", look_at)?;
        let up = validate::direction("camera up vector", up)?;

        // Camera basis
        let forward = validate::direction("view direction", look_at - eye)?;
        let right = forward
            .cross(up)
            .try_normalize()
            .ok_or(SceneError::ParallelUpVector(up))?;
        let true_up = right.cross(forward);

        // Image plane dimensions
        let half_height = (field_of_view.to_radians() / 2.0).tan();
        let half_width = (width as f64 / height as f64) * half_height;
        let pixel_width = half_width / (width - 1) as f64 * 2.0;
        let pixel_height = half_height / (height - 1) as f64 * 2.0;

        Ok(Self {
            width,
            height,
            eye,
            field_of_view,
            forward,
            right,
            true_up,
            half_width,
            half_height,
            pixel_width,
            pixel_height,
        })
    }

    /// Create a camera from its description and the output size.
    pub fn from_desc(desc: &CameraDesc, width: u32, height: u32) -> SceneResult<Self> {
        Self::new(desc.eye, desc.up, desc.look_at, desc.field_of_view, width, height)
    }

    /// Generate the primary ray through pixel (x, y).
    ///
    /// Pixel (0, 0) maps to the lower-left corner of the image plane; `y`
    /// grows along the camera's up vector.
    pub fn build_ray(&self, x: u32, y: u32) -> Ray {
        let x_offset = self.right * (x as f64 * self.pixel_width - self.half_width);
        let y_offset = self.true_up * (y as f64 * self.pixel_height - self.half_height);
        Ray::new(self.eye, self.forward + x_offset + y_offset)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    /// Full field of view in degrees.
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Unit view direction.
    pub fn forward(&self) -> DVec3 {
        self.forward
    }
}
