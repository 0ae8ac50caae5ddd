//! The closed set of renderable primitives and the hit record.

use glint_core::{PrimitiveDesc, SceneResult};
use glint_math::{DVec3, Ray};

use crate::material::material_from_desc;
use crate::{Material, Plane, Sphere, Triangle};

/// A renderable shape.
#[derive(Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Primitive {
    /// Build a primitive and its material from a description.
    pub fn from_desc(desc: &PrimitiveDesc) -> SceneResult<Self> {
        Ok(match desc {
            PrimitiveDesc::Sphere {
                center,
                radius,
                material,
            } => Sphere::new(*center, *radius, material_from_desc(material)?)?.into(),
            PrimitiveDesc::Plane {
                point,
                normal,
                material,
            } => Plane::new(*point, *normal, material_from_desc(material)?)?.into(),
            PrimitiveDesc::Triangle { a, b, c, material } => {
                Triangle::new(*a, *b, *c, material_from_desc(material)?)?.into()
            }
        })
    }

    /// Distance along the ray to the surface.
    ///
    /// Degenerate configurations report `None`. A returned distance may be
    /// zero or negative; callers decide what counts as a hit.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Self::Sphere(sphere) => sphere.intersect(ray),
            Self::Plane(plane) => plane.intersect(ray),
            Self::Triangle(triangle) => triangle.intersect(ray),
        }
    }

    /// Unit surface normal at a point on the primitive.
    #[inline]
    pub fn normal_at(&self, point: DVec3) -> DVec3 {
        match self {
            Self::Sphere(sphere) => sphere.normal_at(point),
            Self::Plane(plane) => plane.normal_at(point),
            Self::Triangle(triangle) => triangle.normal_at(point),
        }
    }

    /// Material of the surface.
    #[inline]
    pub fn material(&self) -> &dyn Material {
        match self {
            Self::Sphere(sphere) => sphere.material(),
            Self::Plane(plane) => plane.material(),
            Self::Triangle(triangle) => triangle.material(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Self::Plane(plane)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Self::Triangle(triangle)
    }
}

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive that was hit
    pub primitive: &'a Primitive,
    /// Parameter t where the intersection occurs (always positive)
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{MaterialDesc, SceneError};

    #[test]
    fn test_from_desc_dispatches() {
        let desc = PrimitiveDesc::Sphere {
            center: DVec3::new(0.0, 0.0, -5.0),
            radius: 1.0,
            material: MaterialDesc::solid(DVec3::new(255.0, 0.0, 0.0)),
        };
        let primitive = Primitive::from_desc(&desc).unwrap();
        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);

        assert!(matches!(primitive, Primitive::Sphere(_)));
        assert!((primitive.intersect(&ray).unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(primitive.normal_at(DVec3::new(0.0, 0.0, -4.0)), DVec3::Z);
        assert_eq!(
            primitive.material().color_at(DVec3::ZERO),
            DVec3::new(255.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_from_desc_propagates_material_errors() {
        let desc = PrimitiveDesc::Plane {
            point: DVec3::ZERO,
            normal: DVec3::Y,
            material: MaterialDesc::Checkerboard {
                base_color: DVec3::ONE,
                other_color: DVec3::ZERO,
                shading: Default::default(),
                cell_size: -1.0,
            },
        };
        assert_eq!(
            Primitive::from_desc(&desc).unwrap_err(),
            SceneError::InvalidCellSize(-1.0)
        );
    }
}
