//! Primitive fill routines.
//!
//! Every routine paints one rectangular band whose rows step through a
//! vertical gradient: row `y` of a band `height` rows tall gets
//! `base + (count * y / height) * add`, so the band brightens towards the
//! bottom and is constant along each row. Only the partial-word edges of the
//! bit-packed layouts read the destination.

use crate::store::{
    Store, StoreKind, U16Be, U16Le, U24Le, U32Be, U32Le, U48Be, U48Le, U64Be, U64Le, U8,
    U8Stride2,
};
use crate::surface::Surface;
use std::ops::Range;

/// A colour ramp: starting value, per-step increment and number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    pub base: u64,
    pub add: u64,
    pub count: u64,
}

impl Ramp {
    pub const fn new(base: u64, add: u64, count: u64) -> Self {
        Self { base, add, count }
    }
}

/// Step index of row `y` in a ramp of `count` steps over `height` rows.
#[inline]
fn ramp_step(count: u64, y: usize, height: usize) -> u64 {
    if height == 0 {
        0
    } else {
        count.wrapping_mul(y as u64) / height as u64
    }
}

/// One gradient fill job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    /// First column, in store units (pixels, macro-pixels or chroma pairs).
    pub x: usize,
    /// Columns to paint.
    pub width: usize,
    /// Rows to paint, starting at surface row 0.
    pub height: usize,
    pub base: u64,
    pub add: u64,
    pub count: u64,
}

impl ColorBand {
    /// Band covering `columns` painted with `ramp`.
    pub fn new(columns: Range<usize>, height: usize, ramp: Ramp) -> Self {
        Self {
            x: columns.start,
            width: columns.len(),
            height,
            base: ramp.base,
            add: ramp.add,
            count: ramp.count,
        }
    }

    /// Pixel value of row `y`.
    #[inline]
    pub fn value_at(&self, y: usize) -> u64 {
        ramp_step(self.count, y, self.height)
            .wrapping_mul(self.add)
            .wrapping_add(self.base)
    }
}

/// Paint `band` with one `S` store per column.
pub fn fill<S: Store>(surface: &mut Surface<'_>, band: &ColorBand) {
    if band.width == 0 {
        return;
    }
    let start = band.x * S::STRIDE;
    let span = (band.width - 1) * S::STRIDE + S::BYTES;
    for y in 0..band.height {
        let value = band.value_at(y);
        for unit in surface.bytes_mut(y, start, span).chunks_mut(S::STRIDE) {
            S::write(unit, value);
        }
    }
}

pub fn fill_8(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U8>(surface, band)
}

pub fn fill_16(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U16Le>(surface, band)
}

pub fn fill_24(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U24Le>(surface, band)
}

pub fn fill_32(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U32Le>(surface, band)
}

pub fn fill_48(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U48Le>(surface, band)
}

pub fn fill_64(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U64Le>(surface, band)
}

pub fn fill_16_swap(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U16Be>(surface, band)
}

pub fn fill_32_swap(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U32Be>(surface, band)
}

pub fn fill_48_swap(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U48Be>(surface, band)
}

pub fn fill_64_swap(surface: &mut Surface<'_>, band: &ColorBand) {
    fill::<U64Be>(surface, band)
}

impl StoreKind {
    /// Paint `band` with this store.
    pub fn fill(self, surface: &mut Surface<'_>, band: &ColorBand) {
        match self {
            Self::U8 => fill_8(surface, band),
            Self::U16Le => fill_16(surface, band),
            Self::U16Be => fill_16_swap(surface, band),
            Self::U24Le => fill_24(surface, band),
            Self::U32Le => fill_32(surface, band),
            Self::U32Be => fill_32_swap(surface, band),
            Self::U48Le => fill_48(surface, band),
            Self::U48Be => fill_48_swap(surface, band),
            Self::U64Le => fill_64(surface, band),
            Self::U64Be => fill_64_swap(surface, band),
            Self::U8Stride2 => fill::<U8Stride2>(surface, band),
        }
    }
}

#[inline]
pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(word)
}

#[inline]
pub(crate) fn write_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Replace the bits of `mask` in the word at `offset`.
#[inline]
pub(crate) fn merge_u32(data: &mut [u8], offset: usize, value: u32, mask: u32) {
    let word = read_u32(data, offset);
    write_u32(data, offset, (word & !mask) | (value & mask));
}

// ── v210 ──

/// Bits of a v210 word that carry samples.
pub const V210_SAMPLE_BITS: u32 = 0x3FFF_FFFF;

const V210_FIRST_WORD: [usize; 6] = [0, 1, 1, 2, 2, 3];
const V210_LAST_WORD: [usize; 6] = [0, 1, 2, 2, 3, 3];
const V210_FIRST_MASK: [u32; 6] = [
    0x3FFF_FFFF,
    0x3FFF_FFFF,
    0x3FFF_FC00,
    0x3FFF_FC00,
    0x3FF0_0000,
    0x3FF0_0000,
];
const V210_LAST_MASK: [u32; 6] = [
    0x3FFF_FFFF,
    0x0000_03FF,
    0x0000_03FF,
    0x000F_FFFF,
    0x000F_FFFF,
    0x3FFF_FFFF,
];

/// Spread one `Cr << 20 | Y << 10 | Cb` triple over the four words of a
/// six-pixel v210 group.
pub fn v210_words(value: u32) -> [u32; 4] {
    [
        value,
        (value << 10) | ((value >> 10) & 0x3FF),
        (value & 0x000F_FC00) | (value << 20) | (value >> 20),
        (value >> 10) | ((value << 10) & 0x3FF0_0000),
    ]
    .map(|word| word & V210_SAMPLE_BITS)
}

/// Paint a v210 band; `band.x` and `band.width` are in pixels.
pub fn fill_v210(surface: &mut Surface<'_>, band: &ColorBand) {
    if band.width == 0 {
        return;
    }
    let first = band.x;
    let last = band.x + band.width - 1;
    let first_word = V210_FIRST_WORD[first % 6] + first / 6 * 4;
    let first_mask = V210_FIRST_MASK[first % 6];
    let last_word = V210_LAST_WORD[last % 6] + last / 6 * 4;
    let mut last_mask = V210_LAST_MASK[last % 6];
    if first_word == last_word {
        last_mask &= first_mask;
    }

    for y in 0..band.height {
        let words = v210_words(band.value_at(y) as u32);
        let row = surface.row_offset(y);
        let data = surface.data_mut();
        if first_word < last_word {
            merge_u32(data, row + first_word * 4, words[first_word & 3], first_mask);
            for x in first_word + 1..last_word {
                write_u32(data, row + x * 4, words[x & 3]);
            }
        }
        merge_u32(data, row + last_word * 4, words[last_word & 3], last_mask);
    }
}

/// Overwrite 10-bit sample `index` of a v210 row (samples run Cb Y Cr Y ...).
#[inline]
pub(crate) fn write_v210_sample(data: &mut [u8], row: usize, index: usize, value: u32) {
    let shift = (index % 3) * 10;
    merge_u32(data, row + index / 3 * 4, value, 0x3FF << shift);
}

// ── Byte-grouped 4:1:1 ──

/// Byte positions inside one repeating group of a packed 4:1:1 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLayout {
    /// Pixels per group.
    pub pixels: usize,
    /// Bytes per group.
    pub bytes: usize,
    /// Luma byte of each pixel.
    pub luma: &'static [usize],
    /// `(U, V)` bytes, each pair shared by `pixels / chroma.len()` pixels.
    pub chroma: &'static [(usize, usize)],
}

impl GroupLayout {
    /// Byte offset of pixel `x`'s luma within a row.
    #[inline]
    pub fn luma_offset(&self, x: usize) -> usize {
        x / self.pixels * self.bytes + self.luma[x % self.pixels]
    }

    /// Byte offsets of the chroma pair covering pixel `x`.
    #[inline]
    pub fn chroma_offsets(&self, x: usize) -> (usize, usize) {
        let group = x / self.pixels * self.bytes;
        let span = self.pixels / self.chroma.len();
        let (u, v) = self.chroma[x % self.pixels / span];
        (group + u, group + v)
    }
}

/// Y41P: `U0 Y0 V0 Y1 U4 Y2 V4 Y3 Y4 Y5 Y6 Y7`.
pub const Y41P: GroupLayout = GroupLayout {
    pixels: 8,
    bytes: 12,
    luma: &[1, 3, 5, 7, 8, 9, 10, 11],
    chroma: &[(0, 2), (4, 6)],
};

/// IYU1: `U Y0 Y1 V Y2 Y3`.
pub const IYU1: GroupLayout = GroupLayout {
    pixels: 4,
    bytes: 6,
    luma: &[1, 2, 4, 5],
    chroma: &[(0, 3)],
};

/// Paint a byte-grouped band. Band values are `V << 16 | U << 8 | Y`.
pub fn fill_grouped(surface: &mut Surface<'_>, layout: &GroupLayout, band: &ColorBand) {
    for y in 0..band.height {
        let value = band.value_at(y);
        let [luma, u, v, ..] = value.to_le_bytes();
        let row = surface.row_offset(y);
        let data = surface.data_mut();
        for x in band.x..band.x + band.width {
            data[row + layout.luma_offset(x)] = luma;
            let (u_at, v_at) = layout.chroma_offsets(x);
            data[row + u_at] = u;
            data[row + v_at] = v;
        }
    }
}

// ── CLJR ──

/// V (bits 0-5) and U (bits 6-11) of a CLJR word.
const CLJR_CHROMA: u32 = 0x0000_0FFF;

/// Five-bit luma field of pixel `i` (0..4) in a CLJR word; Y3 is the top field.
#[inline]
pub(crate) const fn cljr_luma_mask(i: usize) -> u32 {
    0x1F << (12 + 5 * i)
}

/// Pack `V << 16 | U << 8 | Y` into a CLJR word with all four luma fields set.
pub fn cljr_word(value: u64) -> u32 {
    let [luma, u, v, ..] = value.to_le_bytes();
    let luma = u32::from(luma >> 3);
    let chroma = u32::from(v >> 2) | u32::from(u >> 2) << 6;
    (0..4).fold(chroma, |word, i| word | luma << (12 + 5 * i))
}

/// Paint a CLJR band; `band.x` and `band.width` are in pixels.
pub fn fill_cljr(surface: &mut Surface<'_>, band: &ColorBand) {
    if band.width == 0 {
        return;
    }
    let end = band.x + band.width;
    let first_word = band.x / 4;
    let last_word = (end - 1) / 4;
    for y in 0..band.height {
        let word = cljr_word(band.value_at(y));
        let row = surface.row_offset(y);
        let data = surface.data_mut();
        for w in first_word..=last_word {
            let lo = band.x.max(w * 4) - w * 4;
            let hi = end.min(w * 4 + 4) - w * 4;
            if lo == 0 && hi == 4 {
                write_u32(data, row + w * 4, word);
            } else {
                let mask = (lo..hi).fold(CLJR_CHROMA, |m, i| m | cljr_luma_mask(i));
                merge_u32(data, row + w * 4, word, mask);
            }
        }
    }
}

// ── Bayer ──

/// Colour channel of a Bayer site.
pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;

/// 2×2 mosaic arrangement, named by its first two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BayerPattern {
    Bggr,
    Gbrg,
    Grbg,
    Rggb,
}

impl BayerPattern {
    /// Channel sampled at (`row`, `col`).
    #[inline]
    pub const fn channel(self, row: usize, col: usize) -> usize {
        let sites = match self {
            Self::Bggr => [BLUE, GREEN, GREEN, RED],
            Self::Gbrg => [GREEN, BLUE, RED, GREEN],
            Self::Grbg => [GREEN, RED, BLUE, GREEN],
            Self::Rggb => [RED, GREEN, GREEN, BLUE],
        };
        sites[(row & 1) * 2 + (col & 1)]
    }
}

/// A band painted through a Bayer mosaic; one ramp per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BayerBand {
    pub pattern: BayerPattern,
    /// First column in pixels; site parity uses the absolute column.
    pub x: usize,
    pub width: usize,
    pub height: usize,
    pub count: u64,
    /// Indexed by [`RED`], [`GREEN`], [`BLUE`].
    pub base: [u64; 3],
    pub add: [u64; 3],
}

/// Paint a Bayer band with one `S` store per pixel.
pub fn fill_bayer<S: Store>(surface: &mut Surface<'_>, band: &BayerBand) {
    if band.width == 0 {
        return;
    }
    let start = band.x * S::STRIDE;
    let span = (band.width - 1) * S::STRIDE + S::BYTES;
    for y in 0..band.height {
        let step = ramp_step(band.count, y, band.height);
        let values: [u64; 3] =
            std::array::from_fn(|c| step.wrapping_mul(band.add[c]).wrapping_add(band.base[c]));
        let row = surface.bytes_mut(y, start, span);
        for (i, unit) in row.chunks_mut(S::STRIDE).enumerate() {
            S::write(unit, values[band.pattern.channel(y, band.x + i)]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(x: usize, width: usize, height: usize, base: u64, add: u64, count: u64) -> ColorBand {
        ColorBand {
            x,
            width,
            height,
            base,
            add,
            count,
        }
    }

    #[test]
    fn test_value_at_gradient() {
        let b = band(0, 1, 4, 0x10, 2, 256);
        assert_eq!(b.value_at(0), 0x10);
        assert_eq!(b.value_at(1), 0x10 + 64 * 2);
        assert_eq!(b.value_at(3), 0x10 + 192 * 2);
    }

    #[test]
    fn test_zero_height_is_noop() {
        let mut buf = [0u8; 16];
        fill_32(&mut Surface::top_down(&mut buf, 16), &band(0, 4, 0, 1, 1, 256));
        assert_eq!(buf, [0; 16]);
    }

    #[test]
    fn test_fill_32_stays_in_band() {
        let mut buf = vec![0u8; 16 * 2];
        fill_32(&mut Surface::top_down(&mut buf, 16), &band(1, 2, 2, 0xAABBCCDD, 0, 1));
        assert_eq!(&buf[0..4], &[0; 4]);
        assert_eq!(&buf[4..8], &[0xDD, 0xCC, 0xBB, 0xAA]);
        assert_eq!(&buf[12..16], &[0; 4]);
        assert_eq!(&buf[20..24], &[0xDD, 0xCC, 0xBB, 0xAA]);
    }

    #[test]
    fn test_fill_swap() {
        let mut buf = [0u8; 4];
        fill_32_swap(&mut Surface::top_down(&mut buf, 4), &band(0, 1, 1, 0xC000_0001, 0, 1));
        assert_eq!(buf, [0xC0, 0, 0, 0x01]);
    }

    #[test]
    fn test_fill_bottom_up() {
        let mut buf = [0u8; 4];
        fill_8(&mut Surface::bottom_up(&mut buf, 1, 4), &band(0, 1, 4, 0, 1, 4));
        assert_eq!(buf, [3, 2, 1, 0]);
    }

    #[test]
    fn test_fill_stride2_leaves_gaps() {
        let mut buf = [0u8; 6];
        fill::<U8Stride2>(&mut Surface::at(&mut buf, 1, 6), &band(0, 3, 1, 9, 0, 1));
        assert_eq!(buf, [0, 9, 0, 9, 0, 9]);
    }

    #[test]
    fn test_v210_words_unpack() {
        let value = 0x2008_0000u32 | 5;
        let words = v210_words(value);
        let sample = |n: usize| (words[n / 3] >> ((n % 3) * 10)) & 0x3FF;
        for pixel_pair in 0..3 {
            assert_eq!(sample(pixel_pair * 4), 5, "Cb");
            assert_eq!(sample(pixel_pair * 4 + 2), 0x200, "Cr");
        }
        for luma in 0..6 {
            assert_eq!(sample(luma * 2 + 1), 0x200, "Y{luma}");
        }
        assert!(words.iter().all(|w| w & !V210_SAMPLE_BITS == 0));
    }

    #[test]
    fn test_v210_partial_group_preserves_neighbours() {
        let mut buf = vec![0xFFu8; 16];
        fill_v210(&mut Surface::top_down(&mut buf, 16), &band(2, 2, 1, 0, 0, 1));
        // Pixels 2 and 3 own the top two samples of word 1 and the bottom two of word 2.
        assert_eq!(read_u32(&buf, 0), 0xFFFF_FFFF);
        assert_eq!(read_u32(&buf, 4), 0xC000_03FF);
        assert_eq!(read_u32(&buf, 8), 0xFFF0_0000);
        assert_eq!(read_u32(&buf, 12), 0xFFFF_FFFF);
    }

    #[test]
    fn test_v210_single_word() {
        let mut buf = vec![0u8; 16];
        fill_v210(&mut Surface::top_down(&mut buf, 16), &band(0, 1, 1, 0x3FFF_FFFF, 0, 1));
        assert_eq!(read_u32(&buf, 0), 0x3FFF_FFFF);
        assert_eq!(read_u32(&buf, 4), 0);
    }

    #[test]
    fn test_v210_zero_width() {
        let mut buf = vec![0u8; 16];
        fill_v210(&mut Surface::top_down(&mut buf, 16), &band(6, 0, 1, 1, 0, 1));
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_grouped_y41p() {
        let mut buf = vec![0u8; 12];
        fill_grouped(
            &mut Surface::top_down(&mut buf, 12),
            &Y41P,
            &band(0, 8, 1, 0x30_2010, 0, 1),
        );
        assert_eq!(
            buf,
            [0x20, 0x10, 0x30, 0x10, 0x20, 0x10, 0x30, 0x10, 0x10, 0x10, 0x10, 0x10]
        );
    }

    #[test]
    fn test_grouped_iyu1_offsets() {
        assert_eq!(IYU1.luma_offset(5), 6 + 2);
        assert_eq!(IYU1.chroma_offsets(7), (6, 9));
        assert_eq!(Y41P.chroma_offsets(5), (4, 6));
    }

    #[test]
    fn test_cljr_full_and_partial_words() {
        let word = cljr_word(0x80_40_F8);
        assert_eq!(word & 0x3F, 0x80 >> 2, "V");
        assert_eq!((word >> 6) & 0x3F, 0x40 >> 2, "U");
        assert_eq!((word >> 27) & 0x1F, 0xF8 >> 3);

        let mut buf = vec![0u8; 8];
        fill_cljr(&mut Surface::top_down(&mut buf, 8), &band(3, 2, 1, 0x00_00_F8, 0, 1));
        assert_eq!(read_u32(&buf, 0), 0x1F << 27);
        assert_eq!(read_u32(&buf, 4), 0x1F << 12);
    }

    #[test]
    fn test_cljr_word_fields() {
        let fields = |word: u32| {
            let luma: Vec<u32> = (0..4)
                .map(|i| (word & cljr_luma_mask(i)) >> (12 + 5 * i))
                .collect();
            (luma, (word >> 6) & 0x3F, word & 0x3F)
        };
        let word = cljr_word(0xF0_90_40);
        assert_eq!(fields(word), (vec![8; 4], 0x24, 0x3C));

        let mut buf = vec![0u8; 4];
        let mut surface = Surface::top_down(&mut buf, 4);
        fill_cljr(&mut surface, &band(0, 4, 1, 0xF0_90_40, 0, 1));
        fill_cljr(&mut surface, &band(3, 1, 1, 0xF0_90_F8, 0, 1));
        assert_eq!(fields(read_u32(&buf, 0)), (vec![8, 8, 8, 0x1F], 0x24, 0x3C));
        assert_eq!(read_u32(&buf, 0) >> 27, 0x1F, "Y3 is the top field");
    }

    #[test]
    fn test_bayer_sites() {
        assert_eq!(BayerPattern::Bggr.channel(0, 0), BLUE);
        assert_eq!(BayerPattern::Bggr.channel(1, 1), RED);
        assert_eq!(BayerPattern::Rggb.channel(0, 0), RED);
        assert_eq!(BayerPattern::Gbrg.channel(1, 0), RED);
        assert_eq!(BayerPattern::Grbg.channel(0, 1), RED);
    }

    #[test]
    fn test_fill_bayer_uses_absolute_column() {
        let mut buf = vec![0u8; 8];
        let b = BayerBand {
            pattern: BayerPattern::Rggb,
            x: 1,
            width: 3,
            height: 2,
            count: 1,
            base: [10, 20, 30],
            add: [0; 3],
        };
        fill_bayer::<U8>(&mut Surface::top_down(&mut buf, 4), &b);
        assert_eq!(buf, [0, 20, 10, 20, 0, 30, 20, 30]);
    }

    #[test]
    fn test_fill_deterministic() {
        let b = band(3, 17, 9, 0x1234, 0x0101, 256);
        let mut first = vec![0u8; 64 * 9];
        let mut second = vec![0u8; 64 * 9];
        fill_24(&mut Surface::top_down(&mut first, 64), &b);
        fill_24(&mut Surface::top_down(&mut second, 64), &b);
        assert_eq!(first, second);
    }
}
