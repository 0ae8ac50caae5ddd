//! Glint Renderer - Recursive CPU ray tracing
//!
//! A Whitted-style ray tracer: pinhole camera, spheres, planes and
//! triangles, point lights with hard shadows, and mirror reflections traced
//! to a fixed depth. Pixels are rendered in buckets on a rayon pool.

mod bucket;
mod camera;
mod error;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render, render_bucket, Bucket, BucketResult};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use material::{material_from_desc, Checkerboard, Color, Material, Solid};
pub use plane::Plane;
pub use primitive::{Hit, Primitive};
pub use renderer::{
    color_to_rgb, color_to_rgb8, render_pixel, render_sequential, shoot_ray, ImageBuffer,
    SURFACE_EPSILON,
};
pub use scene::{Light, Scene};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the math and scene description types used in the public API
pub use glint_core::{RenderSettings, SceneDescription, SceneError, Shading, Visibility};
pub use glint_math::{reflect, DVec3, Ray};
