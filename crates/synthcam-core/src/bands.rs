//! Four-way split of a frame into vertical colour bars.

use std::ops::Range;

/// Band edges `[0, w/4, w/2, 3w/4, w]` in some horizontal unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    edges: [usize; 5],
}

impl BandLayout {
    /// Number of bands.
    pub const COUNT: usize = 4;

    /// Split `width` pixels into four bands.
    pub fn new(width: usize) -> Self {
        Self {
            edges: [0, width / 4, width / 2, width * 3 / 4, width],
        }
    }

    /// The same bands counted in units of `div` pixels (chroma samples,
    /// macro-pixels). Inner edges round down, the outer edge rounds up so the
    /// last partial unit is still painted.
    pub fn subsampled(&self, div: usize) -> Self {
        let div = div.max(1);
        let e = &self.edges;
        Self {
            edges: [
                e[0] / div,
                e[1] / div,
                e[2] / div,
                e[3] / div,
                e[4].div_ceil(div),
            ],
        }
    }

    /// Edges including both ends.
    #[inline]
    pub fn edges(&self) -> [usize; 5] {
        self.edges
    }

    /// Total width covered.
    #[inline]
    pub fn width(&self) -> usize {
        self.edges[4]
    }

    pub fn bands(&self) -> [Range<usize>; 4] {
        let e = &self.edges;
        [e[0]..e[1], e[1]..e[2], e[2]..e[3], e[3]..e[4]]
    }

    pub fn widths(&self) -> [usize; 4] {
        let e = &self.edges;
        [e[1] - e[0], e[2] - e[1], e[3] - e[2], e[4] - e[3]]
    }
}
