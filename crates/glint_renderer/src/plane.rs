//! Infinite plane primitive.

use glint_core::{validate, SceneResult};
use glint_math::{DVec3, Ray};

use crate::Material;

/// An infinite plane through `point` with a fixed unit normal.
#[derive(Debug)]
pub struct Plane {
    point: DVec3,
    normal: DVec3,
    material: Box<dyn Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: DVec3, normal: DVec3, material: Box<dyn Material>) -> SceneResult<Self> {
        Ok(Self {
            point: validate::finite("plane point", point)?,
            normal: validate::direction("plane normal", normal)?,
            material,
        })
    }

    /// Signed distance along the ray to the plane, `None` when parallel.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let a = (ray.origin() - self.point).dot(self.normal);
        let b = ray.direction().dot(self.normal);

        if b == 0.0 {
            return None;
        }

        Some(-a / b)
    }

    /// The plane's normal, the same everywhere.
    pub fn normal_at(&self, _point: DVec3) -> DVec3 {
        self.normal
    }

    pub fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}
