//! Strided views over caller-owned frame memory.
//!
//! A [`Surface`] maps logical image rows to byte offsets. Besides plain
//! top-down planes it covers DIB bottom-up planes (negative pitch) and
//! paired layouts where even and odd rows live in two separate regions.

/// Row mapping of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rows {
    /// `origin + y * pitch`, pitch may be negative.
    Linear { origin: usize, pitch: isize },
    /// Even rows at `first + (y / 2) * pitch`, odd rows at `second + (y / 2) * pitch`.
    Paired {
        first: usize,
        second: usize,
        pitch: usize,
    },
}

/// A mutable, row-addressed view of a byte buffer.
#[derive(Debug)]
pub struct Surface<'a> {
    data: &'a mut [u8],
    rows: Rows,
}

impl<'a> Surface<'a> {
    /// Rows top-down from the start of `data`.
    pub fn top_down(data: &'a mut [u8], pitch: usize) -> Self {
        Self::at(data, 0, pitch)
    }

    /// Rows top-down from byte `origin`.
    pub fn at(data: &'a mut [u8], origin: usize, pitch: usize) -> Self {
        Self {
            data,
            rows: Rows::Linear {
                origin,
                pitch: pitch as isize,
            },
        }
    }

    /// Image row 0 is the last of `height` rows in memory.
    pub fn bottom_up(data: &'a mut [u8], pitch: usize, height: usize) -> Self {
        Self {
            data,
            rows: Rows::Linear {
                origin: height.saturating_sub(1) * pitch,
                pitch: -(pitch as isize),
            },
        }
    }

    /// Even rows start at `first`, odd rows at `second`, both advancing by
    /// `pitch` every two image rows.
    pub fn paired(data: &'a mut [u8], first: usize, second: usize, pitch: usize) -> Self {
        Self {
            data,
            rows: Rows::Paired {
                first,
                second,
                pitch,
            },
        }
    }

    /// Byte offset of image row `y`.
    #[inline]
    pub fn row_offset(&self, y: usize) -> usize {
        match self.rows {
            Rows::Linear { origin, pitch } => (origin as isize + y as isize * pitch) as usize,
            Rows::Paired {
                first,
                second,
                pitch,
            } => {
                let base = if y & 1 == 0 { first } else { second };
                base + (y >> 1) * pitch
            }
        }
    }

    /// `len` bytes of row `y` starting `start` bytes into the row.
    #[inline]
    pub fn bytes_mut(&mut self, y: usize, start: usize, len: usize) -> &mut [u8] {
        let offset = self.row_offset(y) + start;
        &mut self.data[offset..offset + len]
    }

    /// Whole underlying buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}
