//! Module grid pass: classify, select, stamp

use kurbo::{Affine, BezPath, Size};
use rayon::prelude::*;

use super::neighbors::{is_eye_cell, neighbor_pattern};
use super::selector::select;
use super::templates::{TEMPLATE_SIZE, TemplateId, templates};
use crate::config;
use crate::models::{EyeRegion, ModuleGrid};

/// Which modules a pass renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Dark modules
    On,
    /// Light modules
    Off,
}

impl Polarity {
    /// Whether a module with state `dark` belongs to this pass
    pub fn matches(self, dark: bool) -> bool {
        dark == (self == Polarity::On)
    }
}

impl From<bool> for Polarity {
    fn from(is_on: bool) -> Self {
        if is_on { Polarity::On } else { Polarity::Off }
    }
}

/// Mapping from grid cells to device space for one output size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    /// Device units per module (square modules)
    pub module: f64,
    /// Template-local to device scale
    pub scale: f64,
    /// Horizontal centering offset
    pub x_offset: f64,
    /// Vertical centering offset
    pub y_offset: f64,
}

impl CellLayout {
    /// Layout for an `n`-module grid drawn into `size`.
    ///
    /// Returns `None` when there is nothing drawable: no modules, or an output
    /// width or height that is zero, negative or not finite.
    pub fn new(size: Size, n: usize) -> Option<Self> {
        let drawable = |extent: f64| extent.is_finite() && extent > 0.0;
        if n == 0 || !drawable(size.width) || !drawable(size.height) {
            return None;
        }
        let count = n as f64;
        let module = (size.width / count).min(size.height / count);
        if !module.is_finite() || module <= 0.0 {
            return None;
        }
        Some(Self {
            module,
            scale: module / TEMPLATE_SIZE,
            x_offset: (size.width - count * module) / 2.0,
            y_offset: (size.height - count * module) / 2.0,
        })
    }

    /// Template-local to device transform for the cell at (row, col)
    pub fn transform(&self, row: usize, col: usize) -> Affine {
        let tx = col as f64 * self.module + self.x_offset;
        let ty = row as f64 * self.module + self.y_offset;
        Affine::translate((tx, ty)) * Affine::scale(self.scale)
    }
}

/// One template placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Selected template
    pub template: TemplateId,
}

/// Builds the rounded module path for one polarity.
#[derive(Debug, Clone, Copy)]
pub struct PathAssembler {
    parallel_min_cells: usize,
}

impl Default for PathAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PathAssembler {
    /// Assembler using the configured parallelism threshold
    pub fn new() -> Self {
        Self::with_parallel_min_cells(config::parallel_min_cells())
    }

    /// Classify rows in parallel once the interior has at least this many cells
    pub fn with_parallel_min_cells(parallel_min_cells: usize) -> Self {
        Self { parallel_min_cells }
    }

    /// Template selections for every eligible interior cell, row-major.
    ///
    /// The outer ring is never visited and eye cells are skipped.
    pub fn stamps<E: EyeRegion + ?Sized>(
        &self,
        grid: &ModuleGrid,
        eyes: &E,
        polarity: Polarity,
    ) -> Vec<Stamp> {
        let n = grid.size();
        if n < 3 {
            return Vec::new();
        }
        let interior = (n - 2) * (n - 2);
        let rows = 1..n - 1;

        if interior >= self.parallel_min_cells {
            // Indexed collect keeps row order
            rows.into_par_iter()
                .map(|row| row_stamps(grid, eyes, polarity, row))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            rows.flat_map(|row| row_stamps(grid, eyes, polarity, row))
                .collect()
        }
    }

    /// Composite path for one polarity drawn into `size`.
    ///
    /// Always returns a path; it is empty when the grid has no interior or the
    /// size is degenerate.
    pub fn generate_path<E: EyeRegion + ?Sized>(
        &self,
        size: Size,
        grid: &ModuleGrid,
        eyes: &E,
        polarity: Polarity,
    ) -> BezPath {
        let mut path = BezPath::new();
        let Some(layout) = CellLayout::new(size, grid.size()) else {
            log::debug!(
                "degenerate layout for {}x{} grid in {:?}, returning empty path",
                grid.size(),
                grid.size(),
                size
            );
            return path;
        };

        let stamps = self.stamps(grid, eyes, polarity);
        let library = templates();
        for stamp in &stamps {
            let transform = layout.transform(stamp.row, stamp.col);
            for &el in library.get(stamp.template).elements() {
                path.push(transform * el);
            }
        }

        log::debug!(
            "{:?} pass: {} stamps, module={:.3}, offset=({:.3}, {:.3})",
            polarity,
            stamps.len(),
            layout.module,
            layout.x_offset,
            layout.y_offset
        );
        if config::template_histogram_enabled() {
            log::debug!("{:?} pass templates: {:?}", polarity, template_histogram(&stamps));
        }

        path
    }
}

fn row_stamps<E: EyeRegion + ?Sized>(
    grid: &ModuleGrid,
    eyes: &E,
    polarity: Polarity,
    row: usize,
) -> Vec<Stamp> {
    let n = grid.size();
    (1..n - 1)
        .filter(|&col| polarity.matches(grid.get(row, col)) && !is_eye_cell(eyes, row, col))
        .map(|col| Stamp {
            row,
            col,
            template: select(neighbor_pattern(grid, row, col)),
        })
        .collect()
}

/// Count of stamps per template, in library order
pub fn template_histogram(stamps: &[Stamp]) -> Vec<(TemplateId, usize)> {
    let mut counts = [0usize; TemplateId::ALL.len()];
    for stamp in stamps {
        counts[stamp.template.index()] += 1;
    }
    TemplateId::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&id, count)| (id, count))
        .collect()
}
