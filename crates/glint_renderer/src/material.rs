//! Material trait for surface color and shading coefficients.

use std::fmt;

use glint_core::{validate, MaterialDesc, SceneError, SceneResult, Shading};
use glint_math::DVec3;

/// Color type alias (RGB, 0-255 per channel, unclamped while shading)
pub type Color = DVec3;

/// Trait for materials that describe how a surface is lit.
pub trait Material: Send + Sync + fmt::Debug {
    /// Surface color at a world-space point.
    fn color_at(&self, point: DVec3) -> Color;

    /// Ambient, specular and Lambert coefficients.
    fn shading(&self) -> Shading;
}

fn check_shading(shading: Shading) -> SceneResult<Shading> {
    validate::coefficient("ambient", shading.ambient)?;
    validate::coefficient("specular", shading.specular)?;
    validate::coefficient("lambert", shading.lambert)?;
    Ok(shading)
}

/// A single fixed color.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    color: Color,
    shading: Shading,
}

impl Solid {
    /// Create a new solid material.
    pub fn new(color: Color, shading: Shading) -> SceneResult<Self> {
        Ok(Self {
            color: validate::finite("color", color)?,
            shading: check_shading(shading)?,
        })
    }
}

impl Material for Solid {
    fn color_at(&self, _point: DVec3) -> Color {
        self.color
    }

    fn shading(&self) -> Shading {
        self.shading
    }
}

/// Procedural 3-D lattice checkerboard.
///
/// The cell is picked from the whole point, not from surface coordinates,
/// so every face cutting through the lattice shows the same pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkerboard {
    base_color: Color,
    other_color: Color,
    shading: Shading,
    cell_size: f64,
}

impl Checkerboard {
    /// Create a new checkerboard.
    ///
    /// - `base_color`: color of the cell containing the origin
    /// - `cell_size`: edge length of one cell, must be positive
    pub fn new(
        base_color: Color,
        other_color: Color,
        shading: Shading,
        cell_size: f64,
    ) -> SceneResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SceneError::InvalidCellSize(cell_size));
        }

        Ok(Self {
            base_color: validate::finite("base color", base_color)?,
            other_color: validate::finite("other color", other_color)?,
            shading: check_shading(shading)?,
            cell_size,
        })
    }
}

impl Material for Checkerboard {
    fn color_at(&self, point: DVec3) -> Color {
        let cells = (point.abs() / self.cell_size + DVec3::splat(0.5)).floor();
        if cells.element_sum() as i64 % 2 == 1 {
            self.other_color
        } else {
            self.base_color
        }
    }

    fn shading(&self) -> Shading {
        self.shading
    }
}

/// Build a material from its description.
pub fn material_from_desc(desc: &MaterialDesc) -> SceneResult<Box<dyn Material>> {
    Ok(match *desc {
        MaterialDesc::Solid { color, shading } => Box::new(Solid::new(color, shading)?),
        MaterialDesc::Checkerboard {
            base_color,
            other_color,
            shading,
            cell_size,
        } => Box::new(Checkerboard::new(base_color, other_color, shading, cell_size)?),
    })
}
