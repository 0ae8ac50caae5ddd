//! Sphere primitive for ray tracing.

use glint_core::{validate, SceneError, SceneResult};
use glint_math::{DVec3, Ray};

use crate::Material;

/// A sphere primitive.
#[derive(Debug)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Box<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: DVec3, radius: f64, material: Box<dyn Material>) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center: validate::finite("sphere center", center)?,
            radius,
            material,
        })
    }

    /// Get the sphere's center.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Get the sphere's radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance along the ray to the near root of the ray-sphere quadratic.
    ///
    /// Only the near root is returned. For a ray starting inside the sphere
    /// that root lies behind the origin, so the distance is negative.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let co = self.center - ray.origin();
        let b = co.dot(ray.direction());
        let discriminant = b * b - co.length_squared() + self.radius * self.radius;

        if discriminant < 0.0 {
            return None;
        }

        Some(b - discriminant.sqrt())
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.center).normalize_or_zero()
    }

    pub fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}
