//! Per-format drawing recipes.
//!
//! A recipe says which fill routine paints a format and with which colour
//! constants. Every format draws the same four bars: for RGB a blue, green,
//! red and grey ramp; for YUV a U ramp, a U+V ramp, a V ramp and a luma ramp
//! over neutral chroma. Component positions inside a store unit are given as
//! multipliers (`1 << shift`), so one helper builds the constants for every
//! packing of the same components.

use crate::fill::{BayerPattern, GroupLayout, Ramp, IYU1, Y41P};
use crate::store::StoreKind;
use crate::text::GlyphKind;
use synthcam_core::PixelFormat;

/// Sample precision and the container it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDepth {
    /// Mid-range value (neutral chroma, mid grey).
    pub neutral: u64,
    /// Increment of one gradient step.
    pub step: u64,
    /// Number of gradient steps.
    pub count: u64,
    /// Largest sample value.
    pub max: u64,
}

impl SampleDepth {
    pub const BITS4: Self = Self::new(0x8, 1, 16, 0xF);
    pub const BITS8: Self = Self::new(0x80, 1, 256, 0xFF);
    pub const BITS10: Self = Self::new(0x200, 1, 1024, 0x3FF);
    /// 10-bit samples in the top of a 16-bit container.
    pub const BITS10_MSB: Self = Self::new(0x8000, 0x40, 1024, 0xFFC0);
    pub const BITS16: Self = Self::new(0x8000, 1, 65536, 0xFFFF);

    pub const fn new(neutral: u64, step: u64, count: u64, max: u64) -> Self {
        Self {
            neutral,
            step,
            count,
            max,
        }
    }

    /// Whether samples need a 16-bit container.
    pub const fn is_wide(self) -> bool {
        self.max > 0xFF
    }

    /// Store for one sample.
    pub const fn sample_store(self) -> StoreKind {
        if self.is_wide() {
            StoreKind::U16Le
        } else {
            StoreKind::U8
        }
    }

    /// Store for an interleaved chroma pair and the shift of its second sample.
    pub const fn pair_store(self) -> (StoreKind, u32) {
        if self.is_wide() {
            (StoreKind::U32Le, 16)
        } else {
            (StoreKind::U16Le, 8)
        }
    }
}

/// Alpha handling of a packed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alpha {
    None,
    /// Opaque everywhere.
    Fixed(u64),
    /// Opaque in the colour bars, ramps with the grey/luma bar.
    Ramp(u64),
}

impl Alpha {
    const fn opaque(self, at: u64) -> u64 {
        match self {
            Self::None => 0,
            Self::Fixed(max) | Self::Ramp(max) => at * max,
        }
    }
}

/// How glyph pixels are written for a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub kind: GlyphKind,
    /// Bits set for a lit pixel.
    pub mask: u64,
    /// Unlit value, added to lit pixels.
    pub add: u64,
}

impl TextStyle {
    /// White on black, every bit of the unit.
    pub const fn plain(store: StoreKind) -> Self {
        Self {
            kind: GlyphKind::Store(store),
            mask: u64::MAX,
            add: 0,
        }
    }
}

/// Drawing recipe of one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// One store per unit of `unit_pixels` pixels.
    Packed {
        store: StoreKind,
        unit_pixels: usize,
        bands: [Ramp; 4],
        text: TextStyle,
    },
    /// v210 six-pixel groups. Band values are `Cr << 20 | Y << 10 | Cb`.
    V210 { bands: [Ramp; 4] },
    /// Byte-grouped 4:1:1. Band values are `V << 16 | U << 8 | Y`.
    Grouped {
        layout: &'static GroupLayout,
        bands: [Ramp; 4],
    },
    /// CLJR words. Band values are `V << 16 | U << 8 | Y`.
    Cljr { bands: [Ramp; 4] },
    /// 8-bit luma plane plus separate chroma planes.
    Planar {
        /// V plane precedes U.
        swap: bool,
        /// Both chroma halves share one plane, side by side.
        shared: bool,
    },
    /// Luma plane plus one interleaved chroma plane.
    SemiPlanar { depth: SampleDepth, swap: bool },
    /// Single-plane colour mosaic.
    Bayer {
        pattern: BayerPattern,
        depth: SampleDepth,
    },
}

impl Recipe {
    /// Text overlay style; glyphs go to the luma (or only) plane.
    pub fn text(&self) -> TextStyle {
        match *self {
            Self::Packed { text, .. } => text,
            Self::V210 { .. } => TextStyle {
                kind: GlyphKind::V210,
                mask: u64::MAX,
                add: 0,
            },
            Self::Grouped { layout, .. } => TextStyle {
                kind: GlyphKind::Grouped(layout),
                mask: 0xFF,
                add: 0,
            },
            Self::Cljr { .. } => TextStyle {
                kind: GlyphKind::Cljr,
                mask: 0xFF,
                add: 0,
            },
            Self::Planar { .. } => TextStyle::plain(StoreKind::U8),
            Self::SemiPlanar { depth, .. } | Self::Bayer { depth, .. } => TextStyle {
                kind: GlyphKind::Store(depth.sample_store()),
                mask: depth.max,
                add: 0,
            },
        }
    }
}

// ── Band constants ──

const fn rgb_bands(r: u64, g: u64, b: u64, a: u64, alpha: Alpha, d: SampleDepth) -> [Ramp; 4] {
    let opaque = alpha.opaque(a);
    let (s, c) = (d.step, d.count);
    let grey = match alpha {
        Alpha::Ramp(_) => Ramp::new(0, (r + g + b + a) * s, c),
        _ => Ramp::new(opaque, (r + g + b) * s, c),
    };
    [
        Ramp::new(opaque, b * s, c),
        Ramp::new(opaque, g * s, c),
        Ramp::new(opaque, r * s, c),
        grey,
    ]
}

const fn yuv_bands(u: u64, v: u64, y: u64, a: u64, alpha: Alpha, d: SampleDepth) -> [Ramp; 4] {
    let opaque = alpha.opaque(a);
    let (n, s, c) = (d.neutral, d.step, d.count);
    let luma = match alpha {
        Alpha::Ramp(_) => Ramp::new((u + v) * n, (y + a) * s, c),
        _ => Ramp::new((u + v) * n + opaque, y * s, c),
    };
    [
        Ramp::new((v + y) * n + opaque, u * s, c),
        Ramp::new(y * n + opaque, (u + v) * s, c),
        Ramp::new((u + y) * n + opaque, v * s, c),
        luma,
    ]
}

/// Four stacked quarters of the sample range, each ramping by one step.
const fn quarter_bands(d: SampleDepth) -> [Ramp; 4] {
    let quarter = d.count / 4;
    let step = d.step;
    [
        Ramp::new(0, step, quarter),
        Ramp::new(quarter * step, step, quarter),
        Ramp::new(2 * quarter * step, step, quarter),
        Ramp::new(3 * quarter * step, step, quarter),
    ]
}

/// Luma plane of a planar or semi-planar format.
pub const fn luma_bands(d: SampleDepth) -> [Ramp; 4] {
    let mid = Ramp::new(d.neutral, 0, d.count);
    [mid, mid, mid, Ramp::new(0, d.step, d.count)]
}

/// U plane of a planar format.
pub const fn chroma_u_bands(d: SampleDepth) -> [Ramp; 4] {
    let mid = Ramp::new(d.neutral, 0, d.count);
    let ramp = Ramp::new(0, d.step, d.count);
    [ramp, ramp, mid, mid]
}

/// V plane of a planar format.
pub const fn chroma_v_bands(d: SampleDepth) -> [Ramp; 4] {
    let mid = Ramp::new(d.neutral, 0, d.count);
    let ramp = Ramp::new(0, d.step, d.count);
    [mid, ramp, ramp, mid]
}

/// Interleaved chroma plane; `swap` puts V in the first sample.
pub const fn chroma_pair_bands(d: SampleDepth, swap: bool) -> [Ramp; 4] {
    let (_, shift) = d.pair_store();
    let (u, v) = if swap { (1 << shift, 1) } else { (1, 1 << shift) };
    let (n, s, c) = (d.neutral, d.step, d.count);
    [
        Ramp::new(v * n, u * s, c),
        Ramp::new(0, (u + v) * s, c),
        Ramp::new(u * n, v * s, c),
        Ramp::new((u + v) * n, 0, c),
    ]
}

const RGB565_BANDS: [Ramp; 4] = [
    Ramp::new(0x0000, 0x0001, 32),
    Ramp::new(0x0000, 0x0020, 64),
    Ramp::new(0x0000, 0x0800, 32),
    Ramp::new(0x0200, 0x0821, 32),
];

const RGB555_BANDS: [Ramp; 4] = [
    Ramp::new(0x8000, 0x0001, 32),
    Ramp::new(0x8000, 0x0020, 32),
    Ramp::new(0x8000, 0x0400, 32),
    Ramp::new(0x8000, 0x8421, 32),
];

const R210_BANDS: [Ramp; 4] = [
    Ramp::new(0xC000_0000, 0x0000_0001, 1024),
    Ramp::new(0xC000_0000, 0x0000_0400, 1024),
    Ramp::new(0xC000_0000, 0x0010_0000, 1024),
    Ramp::new(0xC000_0000, 0x8010_0401, 1024),
];

const GROUPED_BANDS: [Ramp; 4] = yuv_bands(0x100, 0x10000, 1, 0, Alpha::None, SampleDepth::BITS8);

// ── Recipe builders ──

const fn packed(store: StoreKind, bands: [Ramp; 4]) -> Recipe {
    Recipe::Packed {
        store,
        unit_pixels: 1,
        bands,
        text: TextStyle::plain(store),
    }
}

const fn rgb(store: StoreKind, r: u64, g: u64, b: u64, a: u64, alpha: Alpha, d: SampleDepth) -> Recipe {
    packed(store, rgb_bands(r, g, b, a, alpha, d))
}

const fn gray(store: StoreKind, d: SampleDepth) -> Recipe {
    packed(store, quarter_bands(d))
}

const fn yuv444(
    store: StoreKind,
    u: u64,
    v: u64,
    y: u64,
    a: u64,
    alpha: Alpha,
    d: SampleDepth,
) -> Recipe {
    Recipe::Packed {
        store,
        unit_pixels: 1,
        bands: yuv_bands(u, v, y, a, alpha, d),
        text: TextStyle {
            kind: GlyphKind::Store(store),
            mask: y * d.max,
            add: (u + v) * d.neutral + alpha.opaque(a),
        },
    }
}

/// Two-pixel macro units; text is written one half unit (one pixel) at a
/// time, which truncates the constants to the first luma and chroma sample.
const fn yuv422(store: StoreKind, half: StoreKind, u: u64, v: u64, y: u64, d: SampleDepth) -> Recipe {
    Recipe::Packed {
        store,
        unit_pixels: 2,
        bands: yuv_bands(u, v, y, 0, Alpha::None, d),
        text: TextStyle {
            kind: GlyphKind::Store(half),
            mask: y * d.max,
            add: (u + v) * d.neutral,
        },
    }
}

const fn planar(swap: bool, shared: bool) -> Recipe {
    Recipe::Planar { swap, shared }
}

const fn semi(depth: SampleDepth, swap: bool) -> Recipe {
    Recipe::SemiPlanar { depth, swap }
}

const fn bayer(pattern: BayerPattern, depth: SampleDepth) -> Recipe {
    Recipe::Bayer { pattern, depth }
}

use Alpha::{Fixed, Ramp as RampAlpha};
use SampleDepth as D;
use StoreKind as S;

const YUY2: Recipe = yuv422(S::U32Le, S::U16Le, 0x100, 0x0100_0000, 0x0001_0001, D::BITS8);
const UYVY: Recipe = yuv422(S::U32Le, S::U16Le, 0x1, 0x0001_0000, 0x0100_0100, D::BITS8);
const ARGB8: (u64, u64, u64, u64) = (0x1_0000, 0x100, 0x1, 0x100_0000);

static RECIPES: [Recipe; PixelFormat::COUNT] = [
    // RGB32, ARGB32, RGB24
    rgb(S::U32Le, ARGB8.0, ARGB8.1, ARGB8.2, ARGB8.3, RampAlpha(0xFF), D::BITS8),
    rgb(S::U32Le, ARGB8.0, ARGB8.1, ARGB8.2, ARGB8.3, RampAlpha(0xFF), D::BITS8),
    rgb(S::U24Le, ARGB8.0, ARGB8.1, ARGB8.2, ARGB8.3, RampAlpha(0xFF), D::BITS8),
    // RGB565, RGB555, ARGB1555
    packed(S::U16Le, RGB565_BANDS),
    packed(S::U16Le, RGB555_BANDS),
    packed(S::U16Le, RGB555_BANDS),
    // ARGB4444
    rgb(S::U16Le, 0x100, 0x10, 0x1, 0x1000, RampAlpha(0xF), D::BITS4),
    // RGB8 (palette indices)
    gray(S::U8, D::BITS8),
    // A2R10G10B10, A2B10G10R10
    rgb(S::U32Le, 0x10_0000, 0x400, 0x1, 0x4000_0000, Fixed(3), D::BITS10),
    rgb(S::U32Le, 0x1, 0x400, 0x10_0000, 0x4000_0000, Fixed(3), D::BITS10),
    // r210, R10k
    packed(S::U32Be, R210_BANDS),
    rgb(S::U32Be, 0x40_0000, 0x1000, 0x4, 0, Alpha::None, D::BITS10),
    // RGB48, RGBA64
    rgb(S::U48Le, 1, 1 << 16, 1 << 32, 0, Alpha::None, D::BITS16),
    rgb(S::U64Le, 1, 1 << 16, 1 << 32, 1 << 48, RampAlpha(0xFFFF), D::BITS16),
    // b48r, b64a
    rgb(S::U48Be, 1 << 32, 1 << 16, 1, 0, Alpha::None, D::BITS16),
    rgb(S::U64Be, 1 << 32, 1 << 16, 1, 1 << 48, RampAlpha(0xFFFF), D::BITS16),
    // Y800, Y16, b16g
    gray(S::U8, D::BITS8),
    gray(S::U16Le, D::BITS16),
    gray(S::U16Be, D::BITS16),
    // AYUV
    yuv444(S::U32Le, 0x100, 0x1, 0x1_0000, 0x100_0000, RampAlpha(0xFF), D::BITS8),
    // YUY2, UYVY, YVYU, VYUY, HDYC
    YUY2,
    UYVY,
    yuv422(S::U32Le, S::U16Le, 0x0100_0000, 0x100, 0x0001_0001, D::BITS8),
    yuv422(S::U32Le, S::U16Le, 0x0001_0000, 0x1, 0x0100_0100, D::BITS8),
    UYVY,
    // IYU1, IYU2, Y41P, CLJR
    Recipe::Grouped {
        layout: &IYU1,
        bands: GROUPED_BANDS,
    },
    yuv444(S::U24Le, 0x1, 0x1_0000, 0x100, 0, Alpha::None, D::BITS8),
    Recipe::Grouped {
        layout: &Y41P,
        bands: GROUPED_BANDS,
    },
    Recipe::Cljr {
        bands: GROUPED_BANDS,
    },
    // v308, v408
    yuv444(S::U24Le, 0x1_0000, 0x1, 0x100, 0, Alpha::None, D::BITS8),
    yuv444(S::U32Le, 0x1, 0x1_0000, 0x100, 0x100_0000, RampAlpha(0xFF), D::BITS8),
    // v210
    Recipe::V210 {
        bands: yuv_bands(0x1, 0x10_0000, 0x400, 0, Alpha::None, D::BITS10),
    },
    // v410, Y410
    yuv444(S::U32Le, 0x4, 0x40_0000, 0x1000, 0, Alpha::None, D::BITS10),
    yuv444(S::U32Le, 0x1, 0x10_0000, 0x400, 0x4000_0000, Fixed(3), D::BITS10),
    // Y210, Y216, v216
    yuv422(S::U64Le, S::U32Le, 1 << 16, 1 << 48, 1 | 1 << 32, D::BITS10_MSB),
    yuv422(S::U64Le, S::U32Le, 1 << 16, 1 << 48, 1 | 1 << 32, D::BITS16),
    yuv422(S::U64Le, S::U32Le, 1, 1 << 32, 1 << 16 | 1 << 48, D::BITS16),
    // Y416
    yuv444(S::U64Le, 1, 1 << 32, 1 << 16, 1 << 48, RampAlpha(0xFFFF), D::BITS16),
    // I420, YV12, I422, YV16, I444, YV24
    planar(false, false),
    planar(true, false),
    planar(false, false),
    planar(true, false),
    planar(false, false),
    planar(true, false),
    // YVU9, YUV9, Y41B
    planar(true, false),
    planar(false, false),
    planar(false, false),
    // IMC1, IMC2, IMC3, IMC4
    planar(true, false),
    planar(true, true),
    planar(false, false),
    planar(false, true),
    // NV12, NV21, NV16, NV61, NV24, NV42
    semi(D::BITS8, false),
    semi(D::BITS8, true),
    semi(D::BITS8, false),
    semi(D::BITS8, true),
    semi(D::BITS8, false),
    semi(D::BITS8, true),
    // P010, P016, P210, P216
    semi(D::BITS10_MSB, false),
    semi(D::BITS16, false),
    semi(D::BITS10_MSB, false),
    semi(D::BITS16, false),
    // Bayer, 8 bit
    bayer(BayerPattern::Bggr, D::BITS8),
    bayer(BayerPattern::Gbrg, D::BITS8),
    bayer(BayerPattern::Grbg, D::BITS8),
    bayer(BayerPattern::Rggb, D::BITS8),
    // Bayer, 16 bit
    bayer(BayerPattern::Bggr, D::BITS16),
    bayer(BayerPattern::Gbrg, D::BITS16),
    bayer(BayerPattern::Grbg, D::BITS16),
    bayer(BayerPattern::Rggb, D::BITS16),
    // YUY2 fields, vertically paired Y8
    YUY2,
    gray(S::U8Stride2, D::BITS8),
];

/// The recipe of `format`.
#[inline]
pub fn recipe(format: PixelFormat) -> &'static Recipe {
    &RECIPES[format as usize]
}

/// Palette for RGB8 frames, one `[blue, green, red, 0]` quad per index.
pub fn rgb8_palette() -> [[u8; 4]; 256] {
    std::array::from_fn(|i| {
        // Red in the low byte, blue in the high byte; stored as B, G, R, reserved.
        let color = (i as u32 * 0x0001_0101) ^ 0x00FF_0000;
        [(color >> 16) as u8, (color >> 8) as u8, color as u8, 0]
    })
}
