//! Glint Core - Scene description and validation for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `PrimitiveDesc`,
//!   `MaterialDesc`, `CameraDesc`, `RenderSettings`
//! - **Validation**: `SceneError` and the checks renderer constructors run
//!   before any ray is traced
//!
//! The description is renderer-agnostic plain data. Loading it from disk is
//! left to the caller; the types derive `serde` traits for that purpose.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::demo_scene;
//! use glint_renderer::{render, Scene};
//!
//! let description = demo_scene();
//! let scene = Scene::from_description(&description)?;
//! let image = render(&scene, &description.settings)?;
//! ```

pub mod demo;
pub mod error;
pub mod scene;
pub mod validate;

// Re-export commonly used types
pub use demo::demo_scene;
pub use error::{SceneError, SceneResult};
pub use scene::{
    CameraDesc, MaterialDesc, PrimitiveDesc, RenderSettings, SceneDescription, Shading, Visibility,
};
