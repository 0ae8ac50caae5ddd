//! Scene description types for Glint.
//!
//! These are the plain-data inputs the renderer consumes. They map one to one
//! onto the renderer's primitives, materials and camera, but carry no derived
//! state and perform no math. Validation happens when the renderer builds its
//! own types from them.

use glint_math::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Shading coefficients of a material, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shading {
    /// Share of the material color applied regardless of lights
    pub ambient: f64,

    /// Weight of the mirror-reflected color
    pub specular: f64,

    /// Weight of the Lambertian (diffuse) term
    pub lambert: f64,
}

impl Shading {
    /// Create shading coefficients.
    pub fn new(ambient: f64, specular: f64, lambert: f64) -> Self {
        Self {
            ambient,
            specular,
            lambert,
        }
    }

    /// Defaults for solid materials: a fairly shiny surface.
    pub fn solid_default() -> Self {
        Self::new(0.2, 0.5, 0.8)
    }

    /// Defaults for checkerboards: matte with a strong ambient term.
    pub fn checkerboard_default() -> Self {
        Self::new(0.5, 0.0, 0.8)
    }
}

impl Default for Shading {
    fn default() -> Self {
        Self::solid_default()
    }
}

/// Surface appearance of a primitive.
///
/// Colors use a 0-255 scale per channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDesc {
    /// A single fixed color.
    Solid {
        color: DVec3,
        #[serde(default = "Shading::solid_default")]
        shading: Shading,
    },

    /// A 3-D lattice checkerboard alternating between two colors.
    Checkerboard {
        #[serde(default = "default_checker_base")]
        base_color: DVec3,
        #[serde(default = "default_checker_other")]
        other_color: DVec3,
        #[serde(default = "Shading::checkerboard_default")]
        shading: Shading,
        #[serde(default = "default_cell_size")]
        cell_size: f64,
    },
}

fn default_checker_base() -> DVec3 {
    DVec3::splat(200.0)
}

fn default_checker_other() -> DVec3 {
    DVec3::ZERO
}

fn default_cell_size() -> f64 {
    1.0
}

impl MaterialDesc {
    /// Solid material with default shading.
    pub fn solid(color: DVec3) -> Self {
        Self::Solid {
            color,
            shading: Shading::solid_default(),
        }
    }

    /// Grey/black checkerboard with unit cells and default shading.
    pub fn checkerboard() -> Self {
        Self::Checkerboard {
            base_color: default_checker_base(),
            other_color: default_checker_other(),
            shading: Shading::checkerboard_default(),
            cell_size: default_cell_size(),
        }
    }

    /// Replace the shading coefficients.
    pub fn with_shading(mut self, new_shading: Shading) -> Self {
        match &mut self {
            Self::Solid { shading, .. } | Self::Checkerboard { shading, .. } => {
                *shading = new_shading
            }
        }
        self
    }
}

/// A renderable shape with its material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDesc {
    Sphere {
        center: DVec3,
        radius: f64,
        material: MaterialDesc,
    },
    Plane {
        point: DVec3,
        normal: DVec3,
        material: MaterialDesc,
    },
    Triangle {
        a: DVec3,
        b: DVec3,
        c: DVec3,
        material: MaterialDesc,
    },
}

impl PrimitiveDesc {
    /// Short name of the primitive kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Plane { .. } => "plane",
            Self::Triangle { .. } => "triangle",
        }
    }
}

/// Pinhole camera parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    /// Position of the eye point
    pub eye: DVec3,

    /// Approximate up direction
    pub up: DVec3,

    /// Point the camera looks at
    pub look_at: DVec3,

    /// Full field of view in degrees
    pub field_of_view: f64,
}

/// How a ray picks the primitive it hits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// First primitive in list order with a positive distance.
    #[default]
    FirstHit,

    /// Primitive with the smallest positive distance.
    Nearest,
}

/// Render-time configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Number of worker threads in the render pool
    pub workers: usize,

    /// Maximum recursion depth for reflected rays
    pub max_depth: u32,

    /// Edge length of the square tiles handed to workers
    pub bucket_size: u32,
}

/// Default number of render workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Default reflection depth.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            max_depth: DEFAULT_MAX_DEPTH,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderSettings {
    /// Set the worker pool size.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the maximum reflection depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the bucket size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Check that the settings describe a usable worker pool.
    pub fn validate(&self) -> SceneResult<()> {
        if self.workers == 0 {
            return Err(SceneError::NoWorkers);
        }
        if self.bucket_size == 0 {
            return Err(SceneError::InvalidBucketSize);
        }
        Ok(())
    }
}

/// A complete scene ready to be handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Primitives in visibility order
    pub primitives: Vec<PrimitiveDesc>,

    /// Point light positions
    pub lights: Vec<DVec3>,

    /// Camera parameters
    pub camera: CameraDesc,

    /// Visibility policy for primary, shadow and reflected rays
    #[serde(default)]
    pub visibility: Visibility,

    /// Render configuration
    #[serde(default)]
    pub settings: RenderSettings,
}

impl SceneDescription {
    /// Create an empty description with the given output size and camera.
    pub fn new(width: u32, height: u32, camera: CameraDesc) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
            lights: Vec::new(),
            camera,
            visibility: Visibility::FirstHit,
            settings: RenderSettings::default(),
        }
    }

    /// Append a primitive. Order matters under first-hit visibility.
    pub fn with_primitive(mut self, primitive: PrimitiveDesc) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Append a point light.
    pub fn with_light(mut self, position: DVec3) -> Self {
        self.lights.push(position);
        self
    }

    /// Set the visibility policy.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Replace the render settings.
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraDesc {
        CameraDesc {
            eye: DVec3::ZERO,
            up: DVec3::Y,
            look_at: DVec3::NEG_Z,
            field_of_view: 45.0,
        }
    }

    #[test]
    fn test_render_settings_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.workers, 4);
        assert_eq!(settings.max_depth, 2);
        assert_eq!(settings.bucket_size, 64);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_render_settings_validation() {
        let settings = RenderSettings::default().with_workers(0);
        assert_eq!(settings.validate(), Err(SceneError::NoWorkers));

        let settings = RenderSettings::default().with_bucket_size(0);
        assert_eq!(settings.validate(), Err(SceneError::InvalidBucketSize));
    }

    #[test]
    fn test_builder_keeps_order() {
        let description = SceneDescription::new(10, 20, camera())
            .with_primitive(PrimitiveDesc::Plane {
                point: DVec3::ZERO,
                normal: DVec3::Y,
                material: MaterialDesc::checkerboard(),
            })
            .with_primitive(PrimitiveDesc::Sphere {
                center: DVec3::NEG_Z,
                radius: 0.5,
                material: MaterialDesc::solid(DVec3::new(255.0, 0.0, 0.0)),
            })
            .with_light(DVec3::splat(10.0));

        let kinds: Vec<_> = description.primitives.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, ["plane", "sphere"]);
        assert_eq!(description.lights, vec![DVec3::splat(10.0)]);
        assert_eq!(description.visibility, Visibility::FirstHit);
        assert_eq!(description.pixel_count(), 200);
    }

    #[test]
    fn test_with_shading_replaces_coefficients() {
        let material = MaterialDesc::checkerboard().with_shading(Shading::new(1.0, 0.0, 0.0));
        match material {
            MaterialDesc::Checkerboard { shading, cell_size, .. } => {
                assert_eq!(shading, Shading::new(1.0, 0.0, 0.0));
                assert_eq!(cell_size, 1.0);
            }
            other => panic!("unexpected material: {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_applies_material_defaults() {
        let json = r#"{
            "width": 40,
            "height": 30,
            "primitives": [
                { "type": "sphere", "center": [0.0, 0.0, -5.0], "radius": 1.0,
                  "material": { "type": "solid", "color": [255.0, 0.0, 0.0] } },
                { "type": "plane", "point": [0.0, 0.0, 0.0], "normal": [0.0, 1.0, 0.0],
                  "material": { "type": "checkerboard" } }
            ],
            "lights": [[30.0, 30.0, 10.0]],
            "camera": { "eye": [0.0, 0.0, 0.0], "up": [0.0, 1.0, 0.0],
                        "look_at": [0.0, 0.0, -1.0], "field_of_view": 45.0 },
            "visibility": "nearest",
            "settings": { "workers": 2 }
        }"#;

        let description: SceneDescription = serde_json::from_str(json).unwrap();

        assert_eq!(description.settings.workers, 2);
        assert_eq!(description.settings.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(description.visibility, Visibility::Nearest);
        assert_eq!(
            description.primitives[0],
            PrimitiveDesc::Sphere {
                center: DVec3::new(0.0, 0.0, -5.0),
                radius: 1.0,
                material: MaterialDesc::solid(DVec3::new(255.0, 0.0, 0.0)),
            }
        );
        match &description.primitives[1] {
            PrimitiveDesc::Plane { material, .. } => {
                assert_eq!(*material, MaterialDesc::checkerboard())
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }
}
