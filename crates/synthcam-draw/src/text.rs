//! Bitmap text overlay.
//!
//! Glyph rows are expanded into pixel values without branching: shifting
//! bit `i` of the row into the sign position and arithmetic-shifting it back
//! yields all ones for a lit pixel and zero otherwise, which is then masked
//! and biased into the destination format's on/off values.

use crate::fill::{cljr_luma_mask, merge_u32, write_v210_sample, GroupLayout};
use crate::glyph::GlyphSheet;
use crate::store::StoreKind;
use crate::surface::Surface;

/// Glyph width and height in pixels.
pub const GLYPH_SIZE: usize = 8;

/// How one glyph pixel is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    /// One whole store per pixel, byte addressed.
    Store(StoreKind),
    /// Luma samples of a v210 row.
    V210,
    /// Luma bytes of a byte-grouped 4:1:1 row.
    Grouped(&'static GroupLayout),
    /// Five-bit luma fields of a CLJR row.
    Cljr,
}

impl GlyphKind {
    /// Bytes advanced per glyph pixel, 0 for sub-byte layouts.
    pub const fn unit_bytes(self) -> usize {
        match self {
            Self::Store(store) => store.stride(),
            _ => 0,
        }
    }
}

/// Per-call drawing state.
#[derive(Debug)]
pub struct DrawCharContext<'a> {
    pub sheet: &'a GlyphSheet,
    /// Bits set for a lit pixel.
    pub mask: u64,
    /// Value of an unlit pixel, added to lit ones.
    pub add: u64,
    /// Bytes per pixel unit; 0 for layouts addressed through `x`.
    pub unit_bytes: usize,
    /// Pixel cursor for layouts that are not byte addressed.
    pub x: usize,
}

/// On/off value of pixel `i` (0 = leftmost) of a glyph row.
#[inline(always)]
pub fn glyph_pixel(row: u8, i: usize, mask: u64, add: u64) -> u64 {
    let lit = ((row as i8) << i) >> 7;
    (lit as i64 as u64 & mask).wrapping_add(add)
}

/// Draw one character with its top-left corner at byte `offset` of row `y`.
///
/// Returns the bytes to advance for byte-addressed kinds; other kinds return
/// 0 and move `ctx.x` forward one glyph instead.
pub fn draw_char(
    kind: GlyphKind,
    ctx: &mut DrawCharContext<'_>,
    surface: &mut Surface<'_>,
    offset: usize,
    y: usize,
    c: u8,
) -> usize {
    for r in 0..GLYPH_SIZE {
        let bits = ctx.sheet.glyph_row(c, r);
        match kind {
            GlyphKind::Store(store) => {
                let stride = store.stride();
                let span = (GLYPH_SIZE - 1) * stride + store.bytes();
                let row = surface.bytes_mut(y + r, offset, span);
                for (i, unit) in row.chunks_mut(stride).enumerate() {
                    store.write(unit, glyph_pixel(bits, i, ctx.mask, ctx.add));
                }
            }
            GlyphKind::V210 => {
                let row = surface.row_offset(y + r);
                let data = surface.data_mut();
                for i in 0..GLYPH_SIZE {
                    let value = glyph_pixel(bits, i, ctx.mask, ctx.add) as u32;
                    write_v210_sample(data, row, (ctx.x + i) * 2 + 1, value);
                }
            }
            GlyphKind::Grouped(layout) => {
                let row = surface.row_offset(y + r);
                let data = surface.data_mut();
                for i in 0..GLYPH_SIZE {
                    let value = glyph_pixel(bits, i, ctx.mask, ctx.add) as u8;
                    data[row + layout.luma_offset(ctx.x + i)] = value;
                }
            }
            GlyphKind::Cljr => {
                let row = surface.row_offset(y + r);
                let data = surface.data_mut();
                for i in 0..GLYPH_SIZE {
                    let x = ctx.x + i;
                    let luma = (glyph_pixel(bits, i, ctx.mask, ctx.add) as u32 & 0xFF) >> 3;
                    let shift = 12 + 5 * (x % 4);
                    merge_u32(data, row + x / 4 * 4, luma << shift, cljr_luma_mask(x % 4));
                }
            }
        }
    }

    match kind {
        GlyphKind::Store(_) => GLYPH_SIZE * ctx.unit_bytes,
        _ => {
            ctx.x += GLYPH_SIZE;
            0
        }
    }
}

/// Draw `text` along row `y`, starting at pixel `ctx.x`. Returns the bytes
/// advanced past the start.
pub fn draw_text(
    kind: GlyphKind,
    ctx: &mut DrawCharContext<'_>,
    surface: &mut Surface<'_>,
    y: usize,
    text: &str,
) -> usize {
    let start = ctx.x * ctx.unit_bytes;
    let mut offset = start;
    for c in text.bytes() {
        offset += draw_char(kind, ctx, surface, offset, y, c);
    }
    offset - start
}

/// Triangle wave over `0..=span`, one full period every `2 * span` ticks.
pub fn bounce(counter: u64, span: u64) -> u64 {
    if span == 0 {
        return 0;
    }
    let t = counter % (span * 2);
    if t > span {
        span * 2 - t
    } else {
        t
    }
}
