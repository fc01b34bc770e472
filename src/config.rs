//! Process-wide defaults read once from the environment
//!
//! - `QR_CORNER_RADIUS_FRACTION`: default eye/pupil rounding (1.0)
//! - `QR_PARALLEL_MIN_CELLS`: interior cells before rows are classified in
//!   parallel (4096)
//! - `QR_DEBUG`: log a template histogram after every grid pass (off)

use std::sync::OnceLock;

fn parse_env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Default corner radius fraction for glyph builders.
pub const DEFAULT_CORNER_RADIUS_FRACTION: f64 = 1.0;

/// Default interior cell count at which grid passes go parallel.
pub const DEFAULT_PARALLEL_MIN_CELLS: usize = 4096;

static CORNER_RADIUS_FRACTION: OnceLock<f64> = OnceLock::new();

/// Corner radius fraction used when a glyph is built without one
pub fn default_corner_radius_fraction() -> f64 {
    *CORNER_RADIUS_FRACTION.get_or_init(|| {
        parse_env_f64("QR_CORNER_RADIUS_FRACTION", DEFAULT_CORNER_RADIUS_FRACTION)
    })
}

static PARALLEL_MIN_CELLS: OnceLock<usize> = OnceLock::new();

/// Interior cell count at which the grid pass classifies rows in parallel
pub fn parallel_min_cells() -> usize {
    *PARALLEL_MIN_CELLS
        .get_or_init(|| parse_env_usize("QR_PARALLEL_MIN_CELLS", DEFAULT_PARALLEL_MIN_CELLS))
}

static TEMPLATE_HISTOGRAM: OnceLock<bool> = OnceLock::new();

/// Whether grid passes log how often each template was stamped
pub fn template_histogram_enabled() -> bool {
    *TEMPLATE_HISTOGRAM.get_or_init(|| std::env::var_os("QR_DEBUG").is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_fallbacks() {
        assert_eq!(parse_env_f64("QR_TEST_UNSET_F64_VAR", 0.5), 0.5);
        assert_eq!(parse_env_usize("QR_TEST_UNSET_USIZE_VAR", 7), 7);
    }

    #[test]
    fn test_defaults_are_stable() {
        assert_eq!(default_corner_radius_fraction(), default_corner_radius_fraction());
        assert_eq!(parallel_min_cells(), parallel_min_cells());
    }
}
