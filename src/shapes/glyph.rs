//! Finder ("eye") and pupil glyphs built from separated pixel cells
//!
//! Both glyphs live in a fixed 90x90 local frame split into 9x9 cells at a
//! 10-unit pitch. Each cell is a 9x9 square, so neighboring cells are
//! separated by a one-unit gap. Only the four outer corners of a glyph are
//! rounded.

use kurbo::{BezPath, Rect};

use super::rounded::{CornerRadii, append_rounded_rect};
use crate::config;
use crate::error::ShapeError;

/// Side of the glyph frame in local units.
pub const GLYPH_FRAME: f64 = 90.0;

/// Distance between neighboring glyph cells.
pub const GLYPH_PITCH: f64 = 10.0;

/// Drawn side of a glyph cell.
pub const GLYPH_CELL: f64 = 9.0;

/// Local radius produced by a fraction of `1.0`.
pub const RADIUS_SCALE: f64 = 5.0;

/// Corner rounding for glyph builders, nominally in `[0, 1]`.
///
/// Values are not validated or clamped: `2.0` doubles the radius and a
/// negative fraction bends the outer corners inward. Callers that need a
/// bounded range must enforce it themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRadiusFraction(pub f64);

impl CornerRadiusFraction {
    /// Absolute radius in glyph-local units
    pub fn radius(self) -> f64 {
        self.0 * RADIUS_SCALE
    }
}

impl Default for CornerRadiusFraction {
    fn default() -> Self {
        Self(config::default_corner_radius_fraction())
    }
}

impl From<f64> for CornerRadiusFraction {
    fn from(fraction: f64) -> Self {
        Self(fraction)
    }
}

/// Pixel-style glyphs with configurable outer corner rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CorneredPixels {
    /// Outer corner rounding
    pub corner_radius_fraction: CornerRadiusFraction,
}

impl CorneredPixels {
    /// Builder with the given rounding fraction
    pub fn new(corner_radius_fraction: impl Into<CornerRadiusFraction>) -> Self {
        Self {
            corner_radius_fraction: corner_radius_fraction.into(),
        }
    }

    /// Outer corner radius in local units
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius_fraction.radius()
    }

    /// 7x7 ring with an open center, cells (1, 1) through (7, 7)
    pub fn eye_path(&self) -> BezPath {
        cell_block(1, 7, true, self.corner_radius())
    }

    /// Solid 3x3 block centered in the frame, cells (3, 3) through (5, 5)
    pub fn pupil_path(&self) -> BezPath {
        cell_block(3, 3, false, self.corner_radius())
    }
}

/// Square block of glyph cells starting at cell `(first, first)`.
fn cell_block(first: usize, span: usize, hollow: bool, radius: f64) -> BezPath {
    let last = first + span - 1;
    let mut path = BezPath::new();
    for row in first..=last {
        for col in first..=last {
            let edge = row == first || row == last || col == first || col == last;
            if hollow && !edge {
                continue;
            }
            let radii = match (row == first, row == last, col == first, col == last) {
                (true, _, true, _) => CornerRadii::top_left(radius),
                (true, _, _, true) => CornerRadii::top_right(radius),
                (_, true, true, _) => CornerRadii::bottom_left(radius),
                (_, true, _, true) => CornerRadii::bottom_right(radius),
                _ => CornerRadii::SQUARE,
            };
            let x = col as f64 * GLYPH_PITCH;
            let y = row as f64 * GLYPH_PITCH;
            append_rounded_rect(
                &mut path,
                Rect::new(x, y, x + GLYPH_CELL, y + GLYPH_CELL),
                radii,
            );
        }
    }
    path
}

/// Eye shapes offered by this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EyeShape {
    /// Separated pixel cells with rounded outer corners
    CorneredPixels(CorneredPixels),
}

impl EyeShape {
    /// Build a named eye shape.
    ///
    /// Without a fraction the configured default rounding is used.
    pub fn from_name(
        name: &str,
        corner_radius_fraction: Option<f64>,
    ) -> Result<Self, ShapeError> {
        match name {
            CORNERED_PIXELS => Ok(EyeShape::CorneredPixels(cornered(corner_radius_fraction)?)),
            _ => Err(ShapeError::UnknownShape(name.to_string())),
        }
    }

    /// Registered name of this shape
    pub fn name(&self) -> &'static str {
        match self {
            EyeShape::CorneredPixels(_) => CORNERED_PIXELS,
        }
    }

    /// Eye geometry in the 90x90 frame
    pub fn path(&self) -> BezPath {
        match self {
            EyeShape::CorneredPixels(pixels) => pixels.eye_path(),
        }
    }

    /// Pupil styled to match this eye
    pub fn default_pupil(&self) -> PupilShape {
        match *self {
            EyeShape::CorneredPixels(pixels) => PupilShape::CorneredPixels(pixels),
        }
    }
}

impl Default for EyeShape {
    fn default() -> Self {
        EyeShape::CorneredPixels(CorneredPixels::default())
    }
}

/// Pupil shapes offered by this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PupilShape {
    /// Separated pixel cells with rounded outer corners
    CorneredPixels(CorneredPixels),
}

impl PupilShape {
    /// Build a named pupil shape.
    ///
    /// Without a fraction the configured default rounding is used.
    pub fn from_name(
        name: &str,
        corner_radius_fraction: Option<f64>,
    ) -> Result<Self, ShapeError> {
        match name {
            CORNERED_PIXELS => Ok(PupilShape::CorneredPixels(cornered(corner_radius_fraction)?)),
            _ => Err(ShapeError::UnknownShape(name.to_string())),
        }
    }

    /// Registered name of this shape
    pub fn name(&self) -> &'static str {
        match self {
            PupilShape::CorneredPixels(_) => CORNERED_PIXELS,
        }
    }

    /// Pupil geometry in the 90x90 frame
    pub fn path(&self) -> BezPath {
        match self {
            PupilShape::CorneredPixels(pixels) => pixels.pupil_path(),
        }
    }

    /// Eye styled to match this pupil
    pub fn default_eye(&self) -> EyeShape {
        match *self {
            PupilShape::CorneredPixels(pixels) => EyeShape::CorneredPixels(pixels),
        }
    }
}

impl Default for PupilShape {
    fn default() -> Self {
        PupilShape::CorneredPixels(CorneredPixels::default())
    }
}

/// Name under which the pixel-style glyphs are registered.
pub const CORNERED_PIXELS: &str = "corneredPixels";

fn cornered(fraction: Option<f64>) -> Result<CorneredPixels, ShapeError> {
    let fraction = fraction.map_or_else(CornerRadiusFraction::default, CornerRadiusFraction);
    if !fraction.0.is_finite() {
        return Err(ShapeError::NonFiniteFraction(fraction.0));
    }
    Ok(CorneredPixels::new(fraction))
}
