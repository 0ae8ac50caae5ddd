//! Render-ready scene: primitives, lights and camera.

use glint_core::{validate, SceneDescription, SceneResult, Visibility};
use glint_math::{DVec3, Ray};

use crate::{Camera, Hit, Primitive};

/// A point light. It has no color or intensity; brightness comes entirely
/// from the shading coefficients of the surface it lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: DVec3,
}

impl Light {
    pub fn new(position: DVec3) -> SceneResult<Self> {
        Ok(Self {
            position: validate::finite("light position", position)?,
        })
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }
}

/// A complete scene. Built once, then shared read-only by all render
/// workers.
#[derive(Debug)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    camera: Camera,
    visibility: Visibility,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            camera,
            visibility: Visibility::FirstHit,
        }
    }

    /// Build a scene from its description, validating every parameter.
    pub fn from_description(desc: &SceneDescription) -> SceneResult<Self> {
        let camera = Camera::from_desc(&desc.camera, desc.width, desc.height)?;
        let mut scene = Self::new(camera).with_visibility(desc.visibility);

        for primitive in &desc.primitives {
            scene.add_primitive(Primitive::from_desc(primitive)?);
        }
        for &position in &desc.lights {
            scene.add_light(Light::new(position)?);
        }

        log::debug!(
            "Built scene: {}x{}, {} primitives, {} lights, {:?} visibility",
            scene.width(),
            scene.height(),
            scene.primitives.len(),
            scene.lights.len(),
            scene.visibility
        );
        if scene.lights.is_empty() {
            log::warn!("Scene has no lights; only ambient shading will be visible");
        }

        Ok(scene)
    }

    /// Set the visibility policy.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Add a primitive. Order matters under first-hit visibility.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Find the primitive a ray hits, by the scene's visibility policy.
    ///
    /// Only strictly positive distances count as hits.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut hits = self.primitives.iter().filter_map(|primitive| {
            primitive
                .intersect(ray)
                .filter(|&distance| distance > 0.0)
                .map(|distance| Hit {
                    primitive,
                    distance,
                })
        });

        match self.visibility {
            Visibility::FirstHit => hits.next(),
            Visibility::Nearest => hits.min_by(|a, b| a.distance.total_cmp(&b.distance)),
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Output width in pixels.
    pub fn width(&self) -> u32 {
        self.camera.width()
    }

    /// Output height in pixels.
    pub fn height(&self) -> u32 {
        self.camera.height()
    }

    /// Get total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}
