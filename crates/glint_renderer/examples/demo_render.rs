//! Demo render.
//!
//! Renders the stock demo scene on the worker pool and saves it as a PNG.
//! Set `RUST_LOG=debug` for scene details, `trace` for per-bucket progress.

use anyhow::{Context, Result};
use glint_core::demo_scene;
use glint_renderer::{render, Scene};
use image::RgbImage;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Build the scene
    let description = demo_scene();
    let scene = Scene::from_description(&description).context("invalid demo scene")?;
    log::info!(
        "Scene: {} primitives, {} lights",
        scene.primitives().len(),
        scene.lights().len()
    );

    // Render
    let image = render(&scene, &description.settings)?;

    // Save as PNG
    let filename = "glint_demo.png";
    let buffer = RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("image buffer size mismatch")?;
    buffer
        .save(filename)
        .with_context(|| format!("failed to save {}", filename))?;
    log::info!("Saved to {}", filename);

    Ok(())
}
