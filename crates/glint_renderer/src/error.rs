//! Errors that abort a render.

use glint_core::SceneError;
use thiserror::Error;

use crate::Color;

/// A render either produces every pixel or fails as a whole.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render settings: {0}")]
    Settings(#[from] SceneError),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Pixel ({x}, {y}) shaded to a non-finite color {color}")]
    NonFiniteColor { x: u32, y: u32, color: Color },

    #[error("Render worker panicked: {0}")]
    WorkerPanicked(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
