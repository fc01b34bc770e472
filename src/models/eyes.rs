use super::ModuleGrid;

/// Side length of a finder pattern in modules.
pub const FINDER_SIZE: usize = 7;

/// Reports whether a module belongs to one of the finder ("eye") regions.
///
/// Eye modules are never stamped by the main grid pass; they are drawn by the
/// dedicated eye/pupil glyph builders instead. Implementations must be `Sync`
/// because rows may be classified in parallel.
pub trait EyeRegion: Sync {
    /// `true` if `(row, col)` lies inside an eye
    fn contains(&self, row: usize, col: usize) -> bool;
}

impl<F> EyeRegion for F
where
    F: Fn(usize, usize) -> bool + Sync,
{
    fn contains(&self, row: usize, col: usize) -> bool {
        self(row, col)
    }
}

/// A grid without any eye regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEyes;

impl EyeRegion for NoEyes {
    fn contains(&self, _row: usize, _col: usize) -> bool {
        false
    }
}

/// The three standard 7x7 finder squares of a QR symbol.
///
/// `quiet_zone` is the number of light modules padding the symbol inside the
/// grid, so the finders sit at `quiet_zone` from the top-left, top-right and
/// bottom-left edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderEyes {
    origins: Option<[(usize, usize); 3]>,
}

impl FinderEyes {
    /// Finder layout for a grid of `grid_size` modules padded by `quiet_zone`
    pub fn new(grid_size: usize, quiet_zone: usize) -> Self {
        let symbol = grid_size.saturating_sub(2 * quiet_zone);
        let origins = (symbol >= FINDER_SIZE).then(|| {
            let near = quiet_zone;
            let far = quiet_zone + symbol - FINDER_SIZE;
            [(near, near), (near, far), (far, near)]
        });
        Self { origins }
    }

    /// Finder layout matching an existing grid
    pub fn for_grid(grid: &ModuleGrid, quiet_zone: usize) -> Self {
        Self::new(grid.size(), quiet_zone)
    }

    /// Top-left module `(row, col)` of each finder, or empty if the symbol is
    /// too small to hold three separate finders.
    pub fn origins(&self) -> &[(usize, usize)] {
        match &self.origins {
            Some(origins) => origins,
            None => &[],
        }
    }
}

impl EyeRegion for FinderEyes {
    fn contains(&self, row: usize, col: usize) -> bool {
        self.origins().iter().any(|&(r, c)| {
            (r..r + FINDER_SIZE).contains(&row) && (c..c + FINDER_SIZE).contains(&col)
        })
    }
}
