//! Bucket-based parallel rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! on a fixed-size rayon pool, then assembled by pixel index.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use glint_core::RenderSettings;
use rayon::prelude::*;

use crate::error::{RenderError, RenderResult};
use crate::renderer::{render_pixel, ImageBuffer};
use crate::{Color, Scene};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's lower-left corner
    pub x: u32,
    /// Y coordinate of bucket's lower-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major image indices of the bucket's pixels.
    pub fn pixel_indices(&self, image_width: u32) -> impl Iterator<Item = usize> + '_ {
        let image_width = image_width as usize;
        (self.y..self.y + self.height).flat_map(move |y| {
            (self.x..self.x + self.width).map(move |x| y as usize * image_width + x as usize)
        })
    }
}

/// Generate buckets covering the image in row-major order.
///
/// Edge buckets are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order within the bucket
    pub pixels: Vec<Color>,
}

/// Render a single bucket.
///
/// Fails on the first pixel that can't be shaded.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, max_depth: u32) -> RenderResult<BucketResult> {
    let pixels = bucket
        .pixel_indices(scene.width())
        .map(|index| render_pixel(scene, index, max_depth))
        .collect::<RenderResult<Vec<_>>>()?;

    log::trace!("Bucket {} done ({} pixels)", bucket.index, pixels.len());
    Ok(BucketResult {
        bucket: *bucket,
        pixels,
    })
}

/// Render the entire scene on a pool of `settings.workers` threads.
///
/// All buckets are joined before the image is assembled, so the output is
/// independent of completion order. Any failing bucket fails the render.
pub fn render(scene: &Scene, settings: &RenderSettings) -> RenderResult<ImageBuffer> {
    settings.validate()?;

    let width = scene.width();
    let height = scene.height();
    let buckets = generate_buckets(width, height, settings.bucket_size);

    log::info!(
        "Rendering {}x{} with {} workers, {} buckets, max depth {}",
        width,
        height,
        settings.workers,
        buckets.len(),
        settings.max_depth
    );
    let start = Instant::now();

    let results = run_on_pool(settings.workers, || {
        buckets
            .par_iter()
            .map(|bucket| render_bucket(bucket, scene, settings.max_depth))
            .collect::<RenderResult<Vec<_>>>()
    })??;

    let mut image = ImageBuffer::new(width, height);
    for result in results {
        for (index, color) in result.bucket.pixel_indices(width).zip(result.pixels) {
            image.pixels[index] = color;
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Run `job` inside a dedicated pool, turning a worker panic into an error.
fn run_on_pool<T, F>(workers: usize, job: F) -> RenderResult<T>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("glint-worker-{}", i))
        .build()?;

    panic::catch_unwind(AssertUnwindSafe(|| pool.install(job)))
        .map_err(|payload| RenderError::WorkerPanicked(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render_sequential;
    use crate::{Camera, Light, Solid, Sphere};
    use glint_core::{demo_scene, SceneDescription, SceneError, Shading, Visibility};
    use glint_math::DVec3;

    fn small_demo(width: u32, height: u32) -> SceneDescription {
        let mut description = demo_scene();
        description.width = width;
        description.height = height;
        description
    }

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: usize = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets
        assert_eq!(buckets[3], Bucket::new(64, 64, 36, 6, 3));

        let total_pixels: usize = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);
    }

    #[test]
    fn test_pixel_count_does_not_overflow() {
        let bucket = Bucket::new(0, 0, 70_000, 70_000, 0);
        assert_eq!(bucket.pixel_count(), 4_900_000_000);
    }

    #[test]
    fn test_buckets_cover_every_pixel_once() {
        let (width, height) = (37, 23);
        let mut seen = vec![0u32; (width * height) as usize];

        for bucket in generate_buckets(width, height, 8) {
            for index in bucket.pixel_indices(width) {
                seen[index] += 1;
            }
        }

        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let description = small_demo(48, 36);
        let scene = Scene::from_description(&description).unwrap();

        let sequential = render_sequential(&scene, description.settings.max_depth).unwrap();
        for (workers, bucket_size) in [(1, 64), (4, 7), (3, 1)] {
            let settings = description
                .settings
                .clone()
                .with_workers(workers)
                .with_bucket_size(bucket_size);
            let parallel = render(&scene, &settings).unwrap();
            assert_eq!(parallel, sequential, "workers={workers} bucket={bucket_size}");
        }
    }

    #[test]
    fn test_demo_render_sees_geometry() {
        let description = small_demo(32, 32);
        let scene = Scene::from_description(&description).unwrap();
        let image = render(&scene, &description.settings).unwrap();

        assert_eq!(image.pixels.len(), 32 * 32);
        assert!(image.pixels.iter().any(|c| c.x > 0.0));
        assert!(image.pixels.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_nearest_visibility_renders_deterministically() {
        let description = small_demo(24, 24);
        let scene = Scene::from_description(&description)
            .unwrap()
            .with_visibility(Visibility::Nearest);
        let settings = description.settings.clone().with_bucket_size(5);

        assert_eq!(
            render(&scene, &settings).unwrap(),
            render_sequential(&scene, settings.max_depth).unwrap()
        );
    }

    #[test]
    fn test_description_visibility_reaches_render() {
        let first_hit = small_demo(48, 36);
        let nearest = first_hit.clone().with_visibility(Visibility::Nearest);

        let scene = Scene::from_description(&nearest).unwrap();
        assert_eq!(scene.visibility(), Visibility::Nearest);
        let expected = render_sequential(
            &Scene::from_description(&first_hit)
                .unwrap()
                .with_visibility(Visibility::Nearest),
            nearest.settings.max_depth,
        )
        .unwrap();
        let image = render(&scene, &nearest.settings).unwrap();
        assert_eq!(image, expected);

        // A few demo pixels depend on the policy
        let first_hit_scene = Scene::from_description(&first_hit).unwrap();
        assert_ne!(image, render(&first_hit_scene, &first_hit.settings).unwrap());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let scene = Scene::from_description(&small_demo(8, 8)).unwrap();
        let settings = RenderSettings::default().with_workers(0);

        assert!(matches!(
            render(&scene, &settings),
            Err(RenderError::Settings(SceneError::NoWorkers))
        ));
    }

    #[test]
    fn test_non_finite_pixel_fails_whole_render() {
        let camera = Camera::new(DVec3::ZERO, DVec3::Y, DVec3::NEG_Z, 45.0, 5, 5).unwrap();
        let mut scene = Scene::new(camera);
        let material = Solid::new(DVec3::splat(f64::MAX), Shading::new(1.0, 0.0, 1.0)).unwrap();
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0, Box::new(material)).unwrap();
        scene.add_primitive(sphere);
        scene.add_light(Light::new(DVec3::ZERO).unwrap());

        assert!(matches!(
            render(&scene, &RenderSettings::default()),
            Err(RenderError::NonFiniteColor { x: 2, y: 2, .. })
        ));
        assert!(matches!(
            render_sequential(&scene, 2),
            Err(RenderError::NonFiniteColor { x: 2, y: 2, .. })
        ));
    }

    #[test]
    fn test_worker_panic_becomes_error() {
        let result: RenderResult<()> = run_on_pool(2, || {
            (0..8).into_par_iter().for_each(|i| {
                if i == 5 {
                    panic!("bucket exploded");
                }
            })
        });

        match result {
            Err(RenderError::WorkerPanicked(message)) => assert_eq!(message, "bucket exploded"),
            other => panic!("expected worker panic, got {:?}", other),
        }
    }
}
