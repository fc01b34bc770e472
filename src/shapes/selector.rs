//! Neighbor pattern to template lookup
//!
//! Rounding cuts the outward-facing corners of isolated or lightly connected
//! modules so connected runs read as smooth blobs, while modules with two
//! opposite, three or four neighbors stay square.

use super::neighbors::NeighborPattern;
use super::templates::TemplateId;

use TemplateId::*;

/// Indexed by [`NeighborPattern::bits`]: `left | right << 1 | top << 2 | bottom << 3`.
const SELECTION: [TemplateId; 16] = [
    FullRound,   // 0b0000 none
    RoundRight,  // 0b0001 left
    RoundLeft,   // 0b0010 right
    Square,      // 0b0011 left + right
    RoundBottom, // 0b0100 top
    BottomRight, // 0b0101 left + top
    BottomLeft,  // 0b0110 right + top
    Square,      // 0b0111
    RoundTop,    // 0b1000 bottom
    TopRight,    // 0b1001 left + bottom
    TopLeft,     // 0b1010 right + bottom
    Square,      // 0b1011
    Square,      // 0b1100 top + bottom
    Square,      // 0b1101
    Square,      // 0b1110
    Square,      // 0b1111
];

/// Template for a module with the given neighbors
pub fn select(pattern: NeighborPattern) -> TemplateId {
    SELECTION[pattern.bits() as usize]
}
