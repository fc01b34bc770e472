use thiserror::Error;

/// Errors raised while building a [`ModuleGrid`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The number of supplied modules is not `size * size`.
    #[error("expected {expected} modules for a {size}x{size} grid, got {actual}")]
    LengthMismatch {
        /// Side length requested
        size: usize,
        /// Modules required
        expected: usize,
        /// Modules supplied
        actual: usize,
    },
    /// A row's length differs from the number of rows.
    #[error("row {row} has {len} modules, grid is {size} rows tall")]
    NotSquare {
        /// Offending row index
        row: usize,
        /// Length of that row
        len: usize,
        /// Number of rows
        size: usize,
    },
    /// Text input contained a character that is not a module.
    #[error("unexpected character {ch:?} in grid text")]
    InvalidChar {
        /// The rejected character
        ch: char,
    },
}

/// Compact square matrix of QR modules, `true` = dark ("on").
///
/// Indexed as `(row, col)`. Reads outside the grid return `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    data: Vec<u8>,
}

impl ModuleGrid {
    /// Create an all-light grid with the given side length
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a grid from `size * size` modules in row-major order
    pub fn from_modules<I>(size: usize, modules: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut grid = Self::new(size);
        let mut actual = 0usize;
        for (index, dark) in modules.into_iter().enumerate() {
            actual += 1;
            if actual > size * size {
                continue;
            }
            if dark {
                grid.set(index / size, index % size, true);
            }
        }
        if actual != size * size {
            return Err(GridError::LengthMismatch {
                size,
                expected: size * size,
                actual,
            });
        }
        Ok(grid)
    }

    /// Build a grid from a slice of equal-length rows
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let size = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GridError::NotSquare {
                row,
                len: r.len(),
                size,
            });
        }
        Self::from_modules(size, rows.iter().flatten().copied())
    }

    /// Parse a text picture of the grid.
    ///
    /// Each non-empty line is a row; `#` or `1` is dark, `.` or `0` is light.
    /// Spaces and tabs inside a line are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let mut row = Vec::new();
            for ch in line.chars() {
                match ch {
                    '#' | '1' => row.push(true),
                    '.' | '0' => row.push(false),
                    ' ' | '\t' => {}
                    _ => return Err(GridError::InvalidChar { ch }),
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (row, col)
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let index = row * self.size + col;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set module at (row, col)
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        let index = row * self.size + col;
        let bit = 1 << (index % 8);
        if dark {
            self.data[index / 8] |= bit;
        } else {
            self.data[index / 8] &= !bit;
        }
    }

    /// Copy of this grid surrounded by `width` light modules on every side
    pub fn with_quiet_zone(&self, width: usize) -> Self {
        let mut padded = Self::new(self.size + 2 * width);
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col) {
                    padded.set(row + width, col + width, true);
                }
            }
        }
        padded
    }

    /// Number of modules whose state equals `dark`
    pub fn count(&self, dark: bool) -> usize {
        let dark_count = self.dark_count();
        if dark {
            dark_count
        } else {
            self.size * self.size - dark_count
        }
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        // Padding bits past size*size are never set.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl Default for ModuleGrid {
    fn default() -> Self {
        Self::new(0)
    }
}
