//! Core recursive ray tracer.
//!
//! Implements Whitted-style shading with:
//! - Ambient term on primary hits
//! - Lambertian diffuse term with hard shadows per point light
//! - Mirror reflection traced recursively up to a fixed depth

use glint_math::{reflect, Ray};

use crate::error::{RenderError, RenderResult};
use crate::{Color, Scene};

/// Offset applied along the surface normal before casting shadow and
/// reflection rays, so they don't hit the surface they start on.
pub const SURFACE_EPSILON: f64 = 1e-5;

/// Compute the color seen by a ray.
///
/// `depth` counts reflections so far; tracing stops at `max_depth`.
pub fn shoot_ray(scene: &Scene, ray: &Ray, depth: u32, max_depth: u32) -> Color {
    // Past max depth, no more light is gathered
    if depth >= max_depth {
        return Color::ZERO;
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return Color::ZERO;
    };

    let surface_point = ray.at(hit.distance);
    let normal = hit.primitive.normal_at(surface_point);
    let point = surface_point + SURFACE_EPSILON * normal;

    let material = hit.primitive.material();
    let shading = material.shading();
    let material_color = material.color_at(point);

    let mut color = Color::ZERO;

    // Ambient: added on the primary hit, multiplied in on reflections.
    let ambient = material_color * shading.ambient;
    if depth == 0 {
        color += ambient;
    } else {
        color *= ambient;
    }

    // Lambert shading
    for light in scene.lights() {
        let to_light = (light.position() - point).normalize_or_zero();
        let shadow_ray = Ray::new(point, to_light);

        if scene.nearest_hit(&shadow_ray).is_none() {
            let intensity = normal.dot(to_light);
            if intensity > 0.0 {
                color += material_color * shading.lambert * intensity;
            }
        }
    }

    // Specular reflection
    let reflected = Ray::new(point, reflect(ray.direction(), normal));
    color + shoot_ray(scene, &reflected, depth + 1, max_depth) * shading.specular
}

/// Render the pixel with row-major index `index`.
pub fn render_pixel(scene: &Scene, index: usize, max_depth: u32) -> RenderResult<Color> {
    let width = scene.width() as usize;
    let x = (index % width) as u32;
    let y = (index / width) as u32;

    let ray = scene.camera().build_ray(x, y);
    let color = shoot_ray(scene, &ray, 0, max_depth);

    if color.is_finite() {
        Ok(color)
    } else {
        Err(RenderError::NonFiniteColor { x, y, color })
    }
}

/// Truncate a color to integer channels without clamping.
///
/// Accumulated shading can exceed 255; those values are kept as is.
pub fn color_to_rgb(color: Color) -> [i64; 3] {
    [color.x as i64, color.y as i64, color.z as i64]
}

/// Clamp a color to `[0, 255]` and convert to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = color.clamp(Color::ZERO, Color::splat(255.0));
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Simple image buffer for storing render output.
///
/// Pixels are stored row-major by pixel index. Row 0 is the bottom row of
/// the picture, matching [`Camera::build_ray`](crate::Camera::build_ray).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to clamped RGB bytes, top row first (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                bytes.extend_from_slice(&color_to_rgb8(self.get(x, y)));
            }
        }
        bytes
    }
}

/// Render the entire scene on the calling thread.
///
/// Produces the same pixels as the parallel [`render`](crate::render).
pub fn render_sequential(scene: &Scene, max_depth: u32) -> RenderResult<ImageBuffer> {
    let mut image = ImageBuffer::new(scene.width(), scene.height());

    for (index, pixel) in image.pixels.iter_mut().enumerate() {
        *pixel = render_pixel(scene, index, max_depth)?;
    }

    Ok(image)
}
