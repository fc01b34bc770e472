//! Rounded module paths and eye/pupil glyphs
//!
//! - `templates`: the shared unit templates (square, full round, sides, corners)
//! - `neighbors` / `selector`: neighbor pattern to template choice
//! - `assembler`: scales and places templates over a whole grid
//! - `glyph`: finder eye and pupil builders

pub mod assembler;
pub mod glyph;
pub mod neighbors;
pub mod rounded;
pub mod selector;
pub mod templates;

pub use assembler::{CellLayout, PathAssembler, Polarity, Stamp};
pub use glyph::{CornerRadiusFraction, CorneredPixels, EyeShape, PupilShape};
pub use neighbors::NeighborPattern;
pub use templates::{TemplateId, templates};
