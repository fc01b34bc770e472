//! qr_pixel_path - rounded vector paths for QR code module grids
//!
//! Turns a finished QR module grid into a single vector path per polarity.
//! Every interior module is stamped with one of ten prebuilt unit templates,
//! chosen from the on/off state of its four orthogonal neighbors, so connected
//! runs of modules read as smooth blobs. Finder ("eye") regions are left out of
//! that pass and drawn by dedicated eye and pupil glyph builders instead.
//!
//! Paths are [`kurbo::BezPath`] values in device coordinates (y down).
//!
//! ```
//! use kurbo::Size;
//! use qr_pixel_path::{FinderEyes, ModuleGrid, on_path};
//!
//! let grid = ModuleGrid::parse(
//!     ".....
//!      .#...
//!      .##..
//!      .....
//!      .....",
//! )
//! .unwrap();
//! let path = on_path(Size::new(50.0, 50.0), &grid, &FinderEyes::for_grid(&grid, 1));
//! assert!(!path.elements().is_empty());
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// Error types
pub mod error;
/// Core data structures (ModuleGrid, eye regions)
pub mod models;
/// Templates, selection, path assembly and glyph builders
pub mod shapes;
/// Rasterization, SVG output and path statistics
pub mod tools;

pub use error::ShapeError;
pub use models::{EyeRegion, FinderEyes, GridError, ModuleGrid, NoEyes};
pub use shapes::{
    CellLayout, CornerRadiusFraction, CorneredPixels, EyeShape, NeighborPattern, PathAssembler,
    Polarity, PupilShape, Stamp, TemplateId,
};

use kurbo::{BezPath, Size};

/// Rounded path covering the dark modules of `grid`, drawn into `size`.
///
/// Modules on the outermost ring of the grid and modules inside `eyes` are
/// not drawn.
pub fn on_path<E: EyeRegion + ?Sized>(size: Size, grid: &ModuleGrid, eyes: &E) -> BezPath {
    PathAssembler::new().generate_path(size, grid, eyes, Polarity::On)
}

/// Rounded path covering the light modules of `grid`, drawn into `size`.
pub fn off_path<E: EyeRegion + ?Sized>(size: Size, grid: &ModuleGrid, eyes: &E) -> BezPath {
    PathAssembler::new().generate_path(size, grid, eyes, Polarity::Off)
}
