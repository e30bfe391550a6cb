//! Row stride and buffer size rules.
//!
//! All arithmetic is integer ceiling division followed by round-up to an
//! alignment; nothing here divides by a caller-supplied value.

use crate::error::{Result, SynthError};
use crate::format::{PixelFormat, RowOrder};
use smallvec::SmallVec;

/// Smallest accepted frame width or height.
pub const MIN_DIMENSION: u32 = 20;
/// Largest accepted frame width or height.
pub const MAX_DIMENSION: u32 = 65536;

/// Round `value` up to a multiple of `align` (`align` of 0 or 1 is a no-op).
#[inline]
pub const fn align_up(value: usize, align: usize) -> usize {
    if align <= 1 {
        value
    } else {
        value.div_ceil(align) * align
    }
}

/// Row stride of plane 0: `align_up(ceil(width / pixels) * bytes, align)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchRule {
    /// Pixels per storage group.
    pub pixels: u32,
    /// Bytes per storage group.
    pub bytes: u32,
    /// Byte alignment of the finished stride.
    pub align: u32,
}

impl PitchRule {
    pub const fn new(pixels: u32, bytes: u32, align: u32) -> Self {
        Self {
            pixels,
            bytes,
            align,
        }
    }

    /// Stride in bytes for `width` pixels.
    #[inline]
    pub const fn stride(&self, width: u32) -> usize {
        let groups = (width as usize).div_ceil(self.pixels as usize);
        align_up(groups * self.bytes as usize, self.align as usize)
    }
}

/// Stride of a secondary plane relative to plane 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchScale {
    Same,
    Half,
    Quarter,
    Double,
}

impl PitchScale {
    #[inline]
    pub const fn apply(self, pitch: usize) -> usize {
        match self {
            Self::Same => pitch,
            Self::Half => pitch / 2,
            Self::Quarter => pitch / 4,
            Self::Double => pitch * 2,
        }
    }
}

/// Shape of one plane in terms of the frame's pitch and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneRule {
    pub pitch: PitchScale,
    /// Vertical subsampling divisor.
    pub vertical: u32,
    /// Row count is padded to a multiple of this.
    pub row_align: u32,
}

impl PlaneRule {
    /// Full pitch, full height.
    pub const LUMA: Self = Self::new(PitchScale::Same, 1, 1);

    pub const fn new(pitch: PitchScale, vertical: u32, row_align: u32) -> Self {
        Self {
            pitch,
            vertical,
            row_align,
        }
    }

    /// Rows this plane occupies for a frame `height` rows tall.
    #[inline]
    pub const fn rows(&self, height: u32) -> usize {
        let rows = (height as usize).div_ceil(self.vertical as usize);
        align_up(rows, self.row_align as usize)
    }
}

/// Position and shape of one plane inside a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaneLayout {
    pub offset: usize,
    pub pitch: usize,
    pub rows: usize,
}

impl PlaneLayout {
    /// Bytes covered by this plane.
    #[inline]
    pub fn len(&self) -> usize {
        self.pitch * self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range of this plane in the frame buffer.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len()
    }
}

/// Row stride in bytes of plane 0 of `format` at `width` pixels.
pub fn pitch(format: PixelFormat, width: u32) -> usize {
    format.descriptor().pitch.stride(width)
}

/// Planes of `format` laid end to end, starting at offset 0.
pub fn plane_layouts(format: PixelFormat, pitch: usize, height: u32) -> SmallVec<[PlaneLayout; 3]> {
    let mut offset = 0;
    format
        .descriptor()
        .planes
        .iter()
        .map(|rule| {
            let plane = PlaneLayout {
                offset,
                pitch: rule.pitch.apply(pitch),
                rows: rule.rows(height),
            };
            offset += plane.len();
            plane
        })
        .collect()
}

/// Total buffer size across all planes of `format`.
pub fn frame_size(format: PixelFormat, pitch: usize, height: u32) -> usize {
    format
        .descriptor()
        .planes
        .iter()
        .map(|rule| rule.pitch.apply(pitch) * rule.rows(height))
        .sum()
}

/// Pitch, size and plane positions of one format at one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGeometry {
    pub format: PixelFormat,
    pub width: u32,
    /// Signed; for DIB formats a positive height means bottom-up rows.
    pub height: i32,
    pub pitch: usize,
    pub image_size: usize,
    pub planes: SmallVec<[PlaneLayout; 3]>,
}

impl FrameGeometry {
    /// Compute the geometry without range checks.
    pub fn new(format: PixelFormat, width: u32, height: i32) -> Self {
        let rows = height.unsigned_abs();
        let pitch = pitch(format, width);
        let planes = plane_layouts(format, pitch, rows);
        let image_size = planes.iter().map(PlaneLayout::len).sum();
        Self {
            format,
            width,
            height,
            pitch,
            image_size,
            planes,
        }
    }

    /// Compute the geometry, rejecting dimensions a capture pin would refuse.
    pub fn validated(format: PixelFormat, width: u32, height: i32) -> Result<Self> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&width) || !range.contains(&height.unsigned_abs()) {
            return Err(SynthError::InvalidDimensions { width, height });
        }
        Ok(Self::new(format, width, height))
    }

    /// Row count regardless of row order.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Whether row 0 of the image is the last row in memory.
    pub fn is_bottom_up(&self) -> bool {
        self.format.descriptor().row_order == RowOrder::Dib && self.height > 0
    }

    /// Layout of plane `index`.
    #[inline]
    pub fn plane(&self, index: usize) -> &PlaneLayout {
        &self.planes[index]
    }

    /// Fail unless `len` bytes can hold one frame.
    pub fn check_buffer(&self, len: usize) -> Result<()> {
        if len < self.image_size {
            return Err(SynthError::BufferTooSmall {
                needed: self.image_size,
                got: len,
            });
        }
        Ok(())
    }
}
