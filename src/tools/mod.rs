//! Inspection helpers for generated paths: raster previews, SVG output and
//! summary statistics.

use image::{GrayImage, Luma};
use kurbo::{BezPath, PathEl, Point, Rect, Shape, Size};
use std::path::Path;

/// Rasterize a path at one sample per pixel center.
///
/// Pixels inside the path (nonzero winding) are black, all others white.
pub fn rasterize(path: &BezPath, width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::new(width, height);
    let bounds = path.bounding_box();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
        let inside = bounds.contains(center) && path.winding(center) != 0;
        *pixel = if inside { Luma([0u8]) } else { Luma([255u8]) };
    }
    img
}

/// Rasterize a path and save it as a PNG, creating parent directories.
pub fn save_png<P: AsRef<Path>>(
    path: &BezPath,
    width: u32,
    height: u32,
    file: P,
) -> Result<(), image::ImageError> {
    let file = file.as_ref();
    if let Some(parent) = file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    log::debug!("writing {}x{} preview to {}", width, height, file.display());
    rasterize(path, width, height).save(file)
}

/// SVG document filling `on` in black over a white background of `size`.
pub fn svg_document(on: &BezPath, size: Size) -> String {
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\"";
    result += &format!(
        " viewBox=\"0 0 {} {}\" stroke=\"none\">\n",
        size.width, size.height
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += &format!("\t<path d=\"{}\" fill=\"#000000\"/>\n", on.to_svg());
    result += "</svg>\n";
    result
}

/// Summary statistics for a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStats {
    /// Number of closed or open subpaths
    pub subpaths: usize,
    /// Straight segments
    pub lines: usize,
    /// Cubic segments
    pub curves: usize,
    /// Tight bounds, `Rect::ZERO` for an empty path
    pub bounds: Rect,
}

/// Count segments and measure bounds.
pub fn path_stats(path: &BezPath) -> PathStats {
    let mut stats = PathStats {
        subpaths: 0,
        lines: 0,
        curves: 0,
        bounds: Rect::ZERO,
    };
    for el in path.elements() {
        match el {
            PathEl::MoveTo(_) => stats.subpaths += 1,
            PathEl::LineTo(_) => stats.lines += 1,
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => stats.curves += 1,
            PathEl::ClosePath => {}
        }
    }
    if !path.elements().is_empty() {
        stats.bounds = path.bounding_box();
    }
    stats
}

/// Radius of every quarter-arc corner in the path, in drawing order.
///
/// Each cubic segment is taken to be an axis-aligned quarter arc, whose
/// radius equals its horizontal extent.
pub fn corner_radii(path: &BezPath) -> Vec<f64> {
    let mut current = Point::ZERO;
    let mut radii = Vec::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) => current = p,
            PathEl::CurveTo(_, _, p) => {
                radii.push((p.x - current.x).abs());
                current = p;
            }
            PathEl::ClosePath => {}
        }
    }
    radii
}

/// Compare rectangles allowing for rounding in curve extrema.
#[cfg(test)]
pub(crate) fn assert_rect_near(actual: Rect, expected: Rect) {
    let near = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert!(
        near(actual.x0, expected.x0)
            && near(actual.y0, expected.y0)
            && near(actual.x1, expected.x1)
            && near(actual.y1, expected.y1),
        "{actual:?} != {expected:?}"
    );
}
