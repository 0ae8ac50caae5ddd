//! Triangle primitive for ray tracing.
//!
//! Uses a Möller-Trumbore style test for ray-triangle intersection.

use glint_core::{validate, SceneError, SceneResult};
use glint_math::{DVec3, Ray};

use crate::Material;

/// A triangle primitive.
#[derive(Debug)]
pub struct Triangle {
    /// Vertices
    a: DVec3,
    b: DVec3,
    c: DVec3,
    /// Edges a->b and a->c
    u: DVec3,
    v: DVec3,
    /// Pre-computed face normal (unit length)
    normal: DVec3,
    material: Box<dyn Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Fails if the vertices are collinear, since such a triangle has no
    /// plane and no normal.
    pub fn new(a: DVec3, b: DVec3, c: DVec3, material: Box<dyn Material>) -> SceneResult<Self> {
        let a = validate::finite("triangle vertex a", a)?;
        let b = validate::finite("triangle vertex b", b)?;
        let c = validate::finite("triangle vertex c", c)?;

        let u = b - a;
        let v = c - a;

        // Face normal points against u x v
        let normal = -u
            .cross(v)
            .try_normalize()
            .ok_or(SceneError::DegenerateTriangle { a, b, c })?;

        Ok(Self {
            a,
            b,
            c,
            u,
            v,
            normal,
            material,
        })
    }

    /// Get the triangle's vertices.
    pub fn vertices(&self) -> [DVec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Distance along the ray to the triangle, `None` when the ray is
    /// parallel to its plane or passes outside the edges.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let direction = ray.direction();
        let w = ray.origin() - self.a;

        let dv = direction.cross(self.v);
        let denominator = dv.dot(self.u);
        if denominator == 0.0 {
            return None;
        }

        let wu = w.cross(self.u);
        let r = dv.dot(w) / denominator;
        let s = wu.dot(direction) / denominator;

        if (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s) && r + s <= 1.0 {
            Some(wu.dot(self.v) / denominator)
        } else {
            None
        }
    }

    /// The face normal; independent of the hit point.
    pub fn normal_at(&self, _point: DVec3) -> DVec3 {
        self.normal
    }

    pub fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}
