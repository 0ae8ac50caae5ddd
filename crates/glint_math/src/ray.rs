use crate::DVec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction. A zero-length direction
/// stays zero, and every primitive treats such a ray as a miss.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the unit direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Mirror `direction` about the surface normal `normal`.
///
/// The normal is re-normalized first, so the result has the same length
/// as `direction`.
pub fn reflect(direction: DVec3, normal: DVec3) -> DVec3 {
    let n = normal.normalize_or_zero();
    direction - 2.0 * direction.dot(n) * n
}
