use crate::models::{EyeRegion, ModuleGrid};

/// Occupancy of a module's four orthogonal neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborPattern {
    /// Module at `(row, col - 1)` is set
    pub left: bool,
    /// Module at `(row, col + 1)` is set
    pub right: bool,
    /// Module at `(row - 1, col)` is set
    pub top: bool,
    /// Module at `(row + 1, col)` is set
    pub bottom: bool,
}

impl NeighborPattern {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 1 << 1;
    const TOP: u8 = 1 << 2;
    const BOTTOM: u8 = 1 << 3;

    /// Create a pattern from explicit flags
    pub const fn new(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Pack as `left | right << 1 | top << 2 | bottom << 3`
    pub fn bits(self) -> u8 {
        let mut bits = 0;
        if self.left {
            bits |= Self::LEFT;
        }
        if self.right {
            bits |= Self::RIGHT;
        }
        if self.top {
            bits |= Self::TOP;
        }
        if self.bottom {
            bits |= Self::BOTTOM;
        }
        bits
    }

    /// Unpack the low four bits
    pub fn from_bits(bits: u8) -> Self {
        Self {
            left: bits & Self::LEFT != 0,
            right: bits & Self::RIGHT != 0,
            top: bits & Self::TOP != 0,
            bottom: bits & Self::BOTTOM != 0,
        }
    }

    /// Number of occupied neighbors
    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }

    /// The pattern seen after turning the grid a quarter turn clockwise
    pub fn rotate_cw(self) -> Self {
        Self {
            top: self.left,
            right: self.top,
            bottom: self.right,
            left: self.bottom,
        }
    }

    /// Every possible pattern, ordered by bit value
    pub fn all() -> impl Iterator<Item = NeighborPattern> {
        (0u8..16).map(Self::from_bits)
    }
}

/// Neighbor occupancy of an interior cell.
///
/// Callers only pass `1 <= row, col <= size - 2`; the outer ring never has a
/// pattern computed for it.
pub fn neighbor_pattern(grid: &ModuleGrid, row: usize, col: usize) -> NeighborPattern {
    debug_assert!(row >= 1 && col >= 1 && row + 1 < grid.size() && col + 1 < grid.size());
    NeighborPattern {
        left: grid.get(row, col - 1),
        right: grid.get(row, col + 1),
        top: grid.get(row - 1, col),
        bottom: grid.get(row + 1, col),
    }
}

/// Whether the cell belongs to an eye and must be left to the glyph builders
pub fn is_eye_cell<E: EyeRegion + ?Sized>(eyes: &E, row: usize, col: usize) -> bool {
    eyes.contains(row, col)
}
