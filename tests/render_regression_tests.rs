//! Integration tests for rounded module paths over real QR symbols
//!
//! Symbols come from the `qrcode` encoder so the grid pass is exercised on
//! realistic module layouts, including the three finder patterns.

use kurbo::{Affine, BezPath, PathEl, Point, Rect, Shape, Size};
use qr_pixel_path::shapes::glyph::{GLYPH_FRAME, RADIUS_SCALE};
use qr_pixel_path::tools::{corner_radii, path_stats, rasterize};
use qr_pixel_path::{
    CorneredPixels, EyeRegion, EyeShape, FinderEyes, ModuleGrid, NoEyes, PathAssembler, Polarity,
    TemplateId, off_path, on_path,
};

const QUIET_ZONE: usize = 1;

fn encode(text: &str) -> ModuleGrid {
    let code = qrcode::QrCode::new(text.as_bytes()).expect("failed to encode test symbol");
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark);
    ModuleGrid::from_modules(code.width(), modules).expect("encoder returned a square symbol")
}

fn points(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .flat_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
            PathEl::QuadTo(a, b) => vec![a, b],
            PathEl::CurveTo(a, b, c) => vec![a, b, c],
            PathEl::ClosePath => vec![],
        })
        .collect()
}

#[test]
fn test_finder_modules_are_never_stamped() {
    let symbol = encode("HELLO WORLD");
    let grid = symbol.with_quiet_zone(QUIET_ZONE);
    let eyes = FinderEyes::for_grid(&grid, QUIET_ZONE);
    let assembler = PathAssembler::new();

    let on = assembler.stamps(&grid, &eyes, Polarity::On);
    let off = assembler.stamps(&grid, &eyes, Polarity::Off);
    assert!(on.iter().chain(&off).all(|s| !eyes.contains(s.row, s.col)));

    // A finder holds 33 dark and 16 light modules; everything else in the
    // symbol is interior to the padded grid and gets exactly one stamp.
    assert_eq!(on.len(), symbol.dark_count() - 3 * 33);
    assert_eq!(off.len(), symbol.count(false) - 3 * 16);
}

#[test]
fn test_real_symbol_uses_rounded_templates() {
    let grid = encode("https://example.com/rounded").with_quiet_zone(QUIET_ZONE);
    let eyes = FinderEyes::for_grid(&grid, QUIET_ZONE);
    let stamps = PathAssembler::new().stamps(&grid, &eyes, Polarity::On);
    assert!(stamps.iter().any(|s| s.template == TemplateId::Square));
    assert!(stamps.iter().any(|s| s.template != TemplateId::Square));
}

#[test]
fn test_doubling_size_doubles_every_point() {
    let grid = encode("SCALE").with_quiet_zone(QUIET_ZONE);
    let eyes = FinderEyes::for_grid(&grid, QUIET_ZONE);
    let small = on_path(Size::new(210.0, 170.0), &grid, &eyes);
    let large = on_path(Size::new(420.0, 340.0), &grid, &eyes);

    let (small, large) = (points(&small), points(&large));
    assert!(!small.is_empty());
    assert_eq!(small.len(), large.len());
    for (s, l) in small.iter().zip(&large) {
        assert!((l.x - 2.0 * s.x).abs() < 1e-9, "{s:?} vs {l:?}");
        assert!((l.y - 2.0 * s.y).abs() < 1e-9, "{s:?} vs {l:?}");
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let grid = encode("same input, same path").with_quiet_zone(QUIET_ZONE);
    let eyes = FinderEyes::for_grid(&grid, QUIET_ZONE);
    let size = Size::new(300.0, 300.0);
    assert_eq!(on_path(size, &grid, &eyes), on_path(size, &grid, &eyes));
    assert_eq!(off_path(size, &grid, &eyes), off_path(size, &grid, &eyes));
}

#[test]
fn test_wide_output_is_letterboxed() {
    let grid = encode("WIDE").with_quiet_zone(QUIET_ZONE);
    let n = grid.size() as f64;
    let path = on_path(Size::new(n * 20.0, n * 10.0), &grid, &NoEyes);
    let bounds = path_stats(&path).bounds;
    // Modules are 10 units square, centered horizontally with n * 5 on each side
    let frame = Rect::new(n * 5.0, 0.0, n * 15.0, n * 10.0);
    assert!(bounds.x0 >= frame.x0 - 1e-9 && bounds.x1 <= frame.x1 + 1e-9);
    assert!(bounds.y0 >= frame.y0 - 1e-9 && bounds.y1 <= frame.y1 + 1e-9);
}

#[test]
fn test_isolated_module_rasterizes_as_rounded_blob() {
    let grid = ModuleGrid::parse(
        ".....
         .....
         ..#..
         .....
         .....",
    )
    .unwrap();
    let path = on_path(Size::new(50.0, 50.0), &grid, &NoEyes);
    let img = rasterize(&path, 50, 50);
    // Cell (2, 2) covers 20..30 on both axes with corner radius 3
    assert_eq!(img.get_pixel(25, 25)[0], 0);
    assert_eq!(img.get_pixel(25, 20)[0], 0);
    assert_eq!(img.get_pixel(20, 20)[0], 255);
    assert_eq!(img.get_pixel(29, 29)[0], 255);
    assert_eq!(img.get_pixel(15, 25)[0], 255);
}

#[test]
fn test_closure_eye_region_excludes_cells() {
    let grid = ModuleGrid::from_modules(6, vec![true; 36]).unwrap();
    let left_half = |_row: usize, col: usize| col < 3;
    let stamps = PathAssembler::new().stamps(&grid, &left_half, Polarity::On);
    // Interior is rows 1..=4, cols 1..=4; cols 1 and 2 are excluded
    assert_eq!(stamps.len(), 8);
    assert!(stamps.iter().all(|s| s.col >= 3));
}

#[test]
fn test_eye_and_pupil_share_radius_scale() {
    let fraction = 0.6;
    let eye = EyeShape::CorneredPixels(CorneredPixels::new(fraction));
    let pupil = eye.default_pupil();

    let eye_radii = corner_radii(&eye.path());
    let pupil_radii = corner_radii(&pupil.path());
    assert_eq!(eye_radii.len(), 4);
    assert_eq!(pupil_radii.len(), 4);
    for r in eye_radii.iter().chain(&pupil_radii) {
        assert!((r - fraction * RADIUS_SCALE).abs() < 1e-12);
    }
}

#[test]
fn test_pupil_sits_in_the_eye_opening() {
    let pixels = CorneredPixels::new(1.0);
    let eye = pixels.eye_path();
    let pupil = pixels.pupil_path();
    let opening = Rect::new(20.0, 20.0, 70.0, 70.0);
    assert!(opening.contains(pupil.bounding_box().origin()));
    for p in points(&pupil) {
        assert_eq!(eye.winding(p), 0, "pupil point {p:?} overlaps the eye ring");
    }
}

#[test]
fn test_eye_glyph_maps_onto_finder_area() {
    // The glyph frame spans nine modules: the 7x7 finder plus one module
    // of margin on each side.
    let grid = encode("EYE").with_quiet_zone(QUIET_ZONE);
    let module = 10.0;
    let origin = (QUIET_ZONE as f64 - 1.0) * module;
    let scale = 9.0 * module / GLYPH_FRAME;
    let eye = Affine::translate((origin, origin))
        * Affine::scale(scale)
        * CorneredPixels::new(0.0).eye_path();

    let eyes = FinderEyes::for_grid(&grid, QUIET_ZONE);
    let bounds = eye.bounding_box();
    let inside_finder = |p: Point| eyes.contains((p.y / module) as usize, (p.x / module) as usize);
    assert!(inside_finder(Point::new(bounds.x0 + 1.0, bounds.y0 + 1.0)));
    assert!(inside_finder(Point::new(bounds.x1 - 1.0, bounds.y1 - 1.0)));
    assert!(!inside_finder(Point::new(bounds.x1 + 15.0, bounds.y1 + 15.0)));
}
