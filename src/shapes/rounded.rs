//! Rectangles with independently rounded corners
//!
//! Corners are cubic quarter arcs. Radii are used exactly as given: nothing is
//! clamped to the rectangle's size, a negative radius bends the arc inward, and
//! a zero radius leaves a plain square corner with no curve segment.

use kurbo::{BezPath, Point, Rect};

/// Control point distance for a cubic approximating a quarter circle.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Per-corner radii in y-down coordinates (top = smaller y).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    /// Radius at (x0, y0)
    pub top_left: f64,
    /// Radius at (x1, y0)
    pub top_right: f64,
    /// Radius at (x1, y1)
    pub bottom_right: f64,
    /// Radius at (x0, y1)
    pub bottom_left: f64,
}

impl CornerRadii {
    /// No rounding
    pub const SQUARE: Self = Self::uniform(0.0);

    /// Same radius on every corner
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Radius on the top-left corner only
    pub const fn top_left(radius: f64) -> Self {
        Self {
            top_left: radius,
            ..Self::SQUARE
        }
    }

    /// Radius on the top-right corner only
    pub const fn top_right(radius: f64) -> Self {
        Self {
            top_right: radius,
            ..Self::SQUARE
        }
    }

    /// Radius on the bottom-right corner only
    pub const fn bottom_right(radius: f64) -> Self {
        Self {
            bottom_right: radius,
            ..Self::SQUARE
        }
    }

    /// Radius on the bottom-left corner only
    pub const fn bottom_left(radius: f64) -> Self {
        Self {
            bottom_left: radius,
            ..Self::SQUARE
        }
    }

    /// Combine two sets of radii, taking each corner from whichever is non-zero
    pub fn or(self, other: Self) -> Self {
        let pick = |a: f64, b: f64| if a != 0.0 { a } else { b };
        Self {
            top_left: pick(self.top_left, other.top_left),
            top_right: pick(self.top_right, other.top_right),
            bottom_right: pick(self.bottom_right, other.bottom_right),
            bottom_left: pick(self.bottom_left, other.bottom_left),
        }
    }
}

/// Build a closed rounded-rectangle path
pub fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> BezPath {
    let mut path = BezPath::new();
    append_rounded_rect(&mut path, rect, radii);
    path
}

/// Append a closed rounded rectangle to `path`, clockwise on screen.
pub fn append_rounded_rect(path: &mut BezPath, rect: Rect, radii: CornerRadii) {
    let Rect { x0, y0, x1, y1 } = rect;
    let CornerRadii {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    } = radii;

    path.move_to((x0 + top_left, y0));
    path.line_to((x1 - top_right, y0));
    corner(path, (x1 - top_right, y0), (x1, y0), (x1, y0 + top_right), top_right);
    path.line_to((x1, y1 - bottom_right));
    corner(path, (x1, y1 - bottom_right), (x1, y1), (x1 - bottom_right, y1), bottom_right);
    path.line_to((x0 + bottom_left, y1));
    corner(path, (x0 + bottom_left, y1), (x0, y1), (x0, y1 - bottom_left), bottom_left);
    if top_left != 0.0 {
        path.line_to((x0, y0 + top_left));
        corner(path, (x0, y0 + top_left), (x0, y0), (x0 + top_left, y0), top_left);
    }
    path.close_path();
}

/// Quarter arc from `from` to `to` bulging toward `vertex`; nothing for radius 0.
fn corner(path: &mut BezPath, from: (f64, f64), vertex: (f64, f64), to: (f64, f64), radius: f64) {
    if radius == 0.0 {
        return;
    }
    let (from, vertex, to) = (Point::from(from), Point::from(vertex), Point::from(to));
    path.curve_to(from.lerp(vertex, KAPPA), to.lerp(vertex, KAPPA), to);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::assert_rect_near;
    use kurbo::{PathEl, Shape};

    fn count_curves(path: &BezPath) -> usize {
        path.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::CurveTo(..)))
            .count()
    }

    #[test]
    fn test_square_corners_have_no_curves() {
        let path = rounded_rect_path(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::SQUARE);
        assert_eq!(count_curves(&path), 0);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
                PathEl::LineTo(Point::new(0.0, 10.0)),
                PathEl::ClosePath,
            ]
        );
        assert!((path.area().abs() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_corner() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let path = rounded_rect_path(rect, CornerRadii::bottom_right(3.0));
        assert_eq!(count_curves(&path), 1);
        assert_rect_near(path.bounding_box(), rect);
        // The bottom-right pixel center sits outside the arc
        assert_eq!(path.winding(Point::new(9.9, 9.9)), 0);
        assert_ne!(path.winding(Point::new(0.1, 9.9)), 0);
    }

    #[test]
    fn test_uniform_radius_area() {
        let r = 3.0;
        let path = rounded_rect_path(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::uniform(r));
        assert_eq!(count_curves(&path), 4);
        let expected = 100.0 - (4.0 - std::f64::consts::PI) * r * r;
        assert!((path.area().abs() - expected).abs() < 0.05);
    }

    #[test]
    fn test_radius_is_not_clamped() {
        // A radius larger than half the side is applied verbatim
        let path = rounded_rect_path(Rect::new(0.0, 0.0, 9.0, 9.0), CornerRadii::top_left(5.0));
        assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_or() {
        let radii = CornerRadii::top_left(2.0).or(CornerRadii::bottom_right(4.0));
        assert_eq!(radii.top_left, 2.0);
        assert_eq!(radii.bottom_right, 4.0);
        assert_eq!(radii.top_right, 0.0);
    }
}
