//! Pixel format catalog.
//!
//! Every supported layout has exactly one static [`FormatDescriptor`], indexed
//! by the enum discriminant. Pitch, frame size and drawing dispatch all read
//! from this table rather than switching on the format at each call site.

use crate::error::{Result, SynthError};
use crate::fourcc::{subtype, FourCc, Guid};
use crate::layout::{PitchRule, PitchScale, PlaneRule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixel format enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PixelFormat {
    // Uncompressed RGB (DIB row order)
    Rgb32,
    Argb32,
    Rgb24,
    Rgb565,
    Rgb555,
    Argb1555,
    Argb4444,
    Rgb8,
    A2r10g10b10,
    A2b10g10r10,
    // Other RGB
    R210,
    R10k,
    Rgb48,
    Rgba64,
    B48r,
    B64a,
    // Luma only
    Y800,
    Y16,
    B16g,
    // Packed YUV, 8 bit
    Ayuv,
    Yuy2,
    Uyvy,
    Yvyu,
    Vyuy,
    Hdyc,
    Iyu1,
    Iyu2,
    Y41p,
    Cljr,
    V308,
    V408,
    // Packed YUV, more than 8 bit
    V210,
    V410,
    Y410,
    Y210,
    Y216,
    V216,
    Y416,
    // Planar YUV
    I420,
    Yv12,
    I422,
    Yv16,
    I444,
    Yv24,
    Yvu9,
    Yuv9,
    Y41b,
    Imc1,
    Imc2,
    Imc3,
    Imc4,
    // Semi-planar YUV
    Nv12,
    Nv21,
    Nv16,
    Nv61,
    Nv24,
    Nv42,
    P010,
    P016,
    P210,
    P216,
    // Bayer mosaics
    Bggr8,
    Gbrg8,
    Grbg8,
    Rggb8,
    Bggr16,
    Gbrg16,
    Grbg16,
    Rggb16,
    // Paired-plane layouts
    Yuy2Fields,
    Y8Pairs,
}

/// Broad colour model of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Rgb,
    Gray,
    Yuv,
    Bayer,
}

/// Byte order of multi-byte samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

/// Row order convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowOrder {
    /// Bottom-up when the height is positive, top-down when negative.
    Dib,
    /// Always top-down; the sign of the height is ignored.
    TopDown,
}

/// Chroma subsampling divisors relative to luma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subsampling {
    pub horizontal: u8,
    pub vertical: u8,
}

impl Subsampling {
    pub const S444: Self = Self::new(1, 1);
    pub const S422: Self = Self::new(2, 1);
    pub const S420: Self = Self::new(2, 2);
    pub const S411: Self = Self::new(4, 1);
    pub const S410: Self = Self::new(4, 4);

    pub const fn new(horizontal: u8, vertical: u8) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Static description of one pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub format: PixelFormat,
    /// Display name, also used as the watermark text.
    pub name: &'static str,
    /// FOURCC, absent for BI_RGB / BI_BITFIELDS layouts.
    pub fourcc: Option<FourCc>,
    /// Media subtype GUID.
    pub subtype: Guid,
    pub family: Family,
    /// Components per pixel (1 for luma-only and mosaic formats).
    pub components: u8,
    pub bits_per_sample: u8,
    /// Bit count advertised in the media type.
    pub bits_per_pixel: u16,
    pub byte_order: ByteOrder,
    pub subsampling: Subsampling,
    pub pitch: PitchRule,
    /// Plane 0 is luma (or the only plane); the rest follow in memory order.
    pub planes: &'static [PlaneRule],
    pub row_order: RowOrder,
}

const PACKED: &[PlaneRule] = &[PlaneRule::LUMA];
const YUV420: &[PlaneRule] = &[
    PlaneRule::LUMA,
    PlaneRule::new(PitchScale::Half, 2, 1),
    PlaneRule::new(PitchScale::Half, 2, 1),
];
const YUV422: &[PlaneRule] = &[
    PlaneRule::LUMA,
    PlaneRule::new(PitchScale::Half, 1, 1),
    PlaneRule::new(PitchScale::Half, 1, 1),
];
const YUV444: &[PlaneRule] = &[PlaneRule::LUMA, PlaneRule::LUMA, PlaneRule::LUMA];
const YUV410: &[PlaneRule] = &[
    PlaneRule::LUMA,
    PlaneRule::new(PitchScale::Quarter, 4, 1),
    PlaneRule::new(PitchScale::Quarter, 4, 1),
];
const YUV411: &[PlaneRule] = &[
    PlaneRule::LUMA,
    PlaneRule::new(PitchScale::Quarter, 1, 1),
    PlaneRule::new(PitchScale::Quarter, 1, 1),
];
// IMC chroma planes start on 16-row boundaries.
const IMC_SEPARATE: &[PlaneRule] = &[
    PlaneRule::LUMA,
    PlaneRule::new(PitchScale::Same, 2, 16),
    PlaneRule::new(PitchScale::Same, 2, 16),
];
const IMC_SHARED: &[PlaneRule] = &[PlaneRule::LUMA, PlaneRule::new(PitchScale::Same, 2, 16)];
const SEMI420: &[PlaneRule] = &[PlaneRule::LUMA, PlaneRule::new(PitchScale::Same, 2, 1)];
const SEMI422: &[PlaneRule] = &[PlaneRule::LUMA, PlaneRule::new(PitchScale::Same, 1, 1)];
const SEMI444: &[PlaneRule] = &[PlaneRule::LUMA, PlaneRule::new(PitchScale::Double, 1, 1)];
const FIELDS: &[PlaneRule] = &[
    PlaneRule::new(PitchScale::Same, 2, 1),
    PlaneRule::new(PitchScale::Same, 2, 1),
];
const LINE_PAIRS: &[PlaneRule] = &[PlaneRule::new(PitchScale::Double, 2, 1)];

const BASE: FormatDescriptor = FormatDescriptor {
    format: PixelFormat::Rgb32,
    name: "",
    fourcc: None,
    subtype: subtype::RGB32,
    family: Family::Yuv,
    components: 3,
    bits_per_sample: 8,
    bits_per_pixel: 0,
    byte_order: ByteOrder::Little,
    subsampling: Subsampling::S444,
    pitch: PitchRule::new(1, 1, 1),
    planes: PACKED,
    row_order: RowOrder::TopDown,
};

const fn dib(
    format: PixelFormat,
    name: &'static str,
    subtype: Guid,
    bits_per_pixel: u16,
    pitch: PitchRule,
) -> FormatDescriptor {
    FormatDescriptor {
        format,
        name,
        subtype,
        family: Family::Rgb,
        bits_per_pixel,
        pitch,
        row_order: RowOrder::Dib,
        ..BASE
    }
}

const fn tagged(
    format: PixelFormat,
    name: &'static str,
    code: [u8; 4],
    family: Family,
    bits_per_pixel: u16,
    pitch: PitchRule,
) -> FormatDescriptor {
    let fourcc = FourCc::new(code);
    FormatDescriptor {
        format,
        name,
        fourcc: Some(fourcc),
        subtype: Guid::from_fourcc(fourcc),
        family,
        bits_per_pixel,
        pitch,
        ..BASE
    }
}

use Family::{Bayer, Gray, Rgb, Yuv};
use PixelFormat as F;

const BE: ByteOrder = ByteOrder::Big;

static DESCRIPTORS: [FormatDescriptor; PixelFormat::COUNT] = [
    dib(F::Rgb32, "RGB32", subtype::RGB32, 32, PitchRule::new(1, 4, 4)),
    FormatDescriptor {
        components: 4,
        ..dib(F::Argb32, "ARGB32", subtype::ARGB32, 32, PitchRule::new(1, 4, 4))
    },
    dib(F::Rgb24, "RGB24", subtype::RGB24, 24, PitchRule::new(1, 3, 4)),
    FormatDescriptor {
        bits_per_sample: 5,
        ..dib(F::Rgb565, "RGB565", subtype::RGB565, 16, PitchRule::new(1, 2, 4))
    },
    FormatDescriptor {
        bits_per_sample: 5,
        ..dib(F::Rgb555, "RGB555", subtype::RGB555, 16, PitchRule::new(1, 2, 4))
    },
    FormatDescriptor {
        components: 4,
        bits_per_sample: 5,
        ..dib(F::Argb1555, "ARGB1555", subtype::ARGB1555, 16, PitchRule::new(1, 2, 4))
    },
    FormatDescriptor {
        components: 4,
        bits_per_sample: 4,
        ..dib(F::Argb4444, "ARGB4444", subtype::ARGB4444, 16, PitchRule::new(1, 2, 4))
    },
    dib(F::Rgb8, "RGB8", subtype::RGB8, 8, PitchRule::new(1, 1, 4)),
    FormatDescriptor {
        components: 4,
        bits_per_sample: 10,
        ..dib(F::A2r10g10b10, "A2R10G10B10", subtype::A2R10G10B10, 32, PitchRule::new(1, 4, 4))
    },
    FormatDescriptor {
        components: 4,
        bits_per_sample: 10,
        ..dib(F::A2b10g10r10, "A2B10G10R10", subtype::A2B10G10R10, 32, PitchRule::new(1, 4, 4))
    },
    FormatDescriptor {
        bits_per_sample: 10,
        byte_order: BE,
        ..tagged(F::R210, "r210", *b"r210", Rgb, 32, PitchRule::new(64, 256, 256))
    },
    FormatDescriptor {
        bits_per_sample: 10,
        byte_order: BE,
        ..tagged(F::R10k, "R10k", *b"R10k", Rgb, 32, PitchRule::new(1, 4, 4))
    },
    FormatDescriptor {
        bits_per_sample: 16,
        ..tagged(F::Rgb48, "RGB48", *b"RGB0", Rgb, 48, PitchRule::new(1, 6, 4))
    },
    FormatDescriptor {
        components: 4,
        bits_per_sample: 16,
        ..tagged(F::Rgba64, "RGBA64", *b"RBA@", Rgb, 64, PitchRule::new(1, 8, 8))
    },
    FormatDescriptor {
        bits_per_sample: 16,
        byte_order: BE,
        ..tagged(F::B48r, "b48r", *b"b48r", Rgb, 48, PitchRule::new(1, 6, 4))
    },
    FormatDescriptor {
        components: 4,
        bits_per_sample: 16,
        byte_order: BE,
        ..tagged(F::B64a, "b64a", *b"b64a", Rgb, 64, PitchRule::new(1, 8, 8))
    },
    FormatDescriptor {
        components: 1,
        ..tagged(F::Y800, "Y800", *b"Y800", Gray, 8, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        components: 1,
        bits_per_sample: 16,
        ..tagged(F::Y16, "Y16", *b"Y16 ", Gray, 16, PitchRule::new(1, 2, 2))
    },
    FormatDescriptor {
        components: 1,
        bits_per_sample: 16,
        byte_order: BE,
        ..tagged(F::B16g, "b16g", *b"b16g", Gray, 16, PitchRule::new(1, 2, 2))
    },
    FormatDescriptor {
        components: 4,
        ..tagged(F::Ayuv, "AYUV", *b"AYUV", Yuv, 32, PitchRule::new(1, 4, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        ..tagged(F::Yuy2, "YUY2", *b"YUY2", Yuv, 16, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        ..tagged(F::Uyvy, "UYVY", *b"UYVY", Yuv, 16, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        ..tagged(F::Yvyu, "YVYU", *b"YVYU", Yuv, 16, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        ..tagged(F::Vyuy, "VYUY", *b"VYUY", Yuv, 16, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        ..tagged(F::Hdyc, "HDYC", *b"HDYC", Yuv, 16, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S411,
        ..tagged(F::Iyu1, "IYU1", *b"IYU1", Yuv, 12, PitchRule::new(4, 6, 4))
    },
    tagged(F::Iyu2, "IYU2", *b"IYU2", Yuv, 24, PitchRule::new(1, 3, 4)),
    FormatDescriptor {
        subsampling: Subsampling::S411,
        ..tagged(F::Y41p, "Y41P", *b"Y41P", Yuv, 12, PitchRule::new(8, 12, 4))
    },
    FormatDescriptor {
        bits_per_sample: 5,
        subsampling: Subsampling::S411,
        ..tagged(F::Cljr, "CLJR", *b"CLJR", Yuv, 8, PitchRule::new(4, 4, 4))
    },
    tagged(F::V308, "v308", *b"v308", Yuv, 24, PitchRule::new(1, 3, 4)),
    FormatDescriptor {
        components: 4,
        ..tagged(F::V408, "v408", *b"v408", Yuv, 32, PitchRule::new(1, 4, 4))
    },
    FormatDescriptor {
        bits_per_sample: 10,
        subsampling: Subsampling::S422,
        ..tagged(F::V210, "v210", *b"v210", Yuv, 22, PitchRule::new(48, 128, 128))
    },
    FormatDescriptor {
        bits_per_sample: 10,
        ..tagged(F::V410, "v410", *b"v410", Yuv, 32, PitchRule::new(1, 4, 4))
    },
    FormatDescriptor {
        components: 4,
        bits_per_sample: 10,
        ..tagged(F::Y410, "Y410", *b"Y410", Yuv, 32, PitchRule::new(1, 4, 4))
    },
    FormatDescriptor {
        bits_per_sample: 10,
        subsampling: Subsampling::S422,
        ..tagged(F::Y210, "Y210", *b"Y210", Yuv, 32, PitchRule::new(2, 8, 8))
    },
    FormatDescriptor {
        bits_per_sample: 16,
        subsampling: Subsampling::S422,
        ..tagged(F::Y216, "Y216", *b"Y216", Yuv, 32, PitchRule::new(2, 8, 8))
    },
    FormatDescriptor {
        bits_per_sample: 16,
        subsampling: Subsampling::S422,
        ..tagged(F::V216, "v216", *b"v216", Yuv, 32, PitchRule::new(2, 8, 8))
    },
    FormatDescriptor {
        components: 4,
        bits_per_sample: 16,
        ..tagged(F::Y416, "Y416", *b"Y416", Yuv, 64, PitchRule::new(1, 8, 8))
    },
    FormatDescriptor {
        subsampling: Subsampling::S420,
        planes: YUV420,
        ..tagged(F::I420, "I420", *b"I420", Yuv, 12, PitchRule::new(2, 2, 2))
    },
    FormatDescriptor {
        subsampling: Subsampling::S420,
        planes: YUV420,
        ..tagged(F::Yv12, "YV12", *b"YV12", Yuv, 12, PitchRule::new(2, 2, 2))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        planes: YUV422,
        ..tagged(F::I422, "I422", *b"I422", Yuv, 16, PitchRule::new(2, 2, 2))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        planes: YUV422,
        ..tagged(F::Yv16, "YV16", *b"YV16", Yuv, 16, PitchRule::new(2, 2, 2))
    },
    FormatDescriptor {
        planes: YUV444,
        ..tagged(F::I444, "I444", *b"I444", Yuv, 24, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        planes: YUV444,
        ..tagged(F::Yv24, "YV24", *b"YV24", Yuv, 24, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        subsampling: Subsampling::S410,
        planes: YUV410,
        ..tagged(F::Yvu9, "YVU9", *b"YVU9", Yuv, 9, PitchRule::new(1, 1, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S410,
        planes: YUV410,
        ..tagged(F::Yuv9, "YUV9", *b"YUV9", Yuv, 9, PitchRule::new(1, 1, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S411,
        planes: YUV411,
        ..tagged(F::Y41b, "Y41B", *b"Y41B", Yuv, 12, PitchRule::new(1, 1, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S420,
        planes: IMC_SEPARATE,
        ..tagged(F::Imc1, "IMC1", *b"IMC1", Yuv, 12, PitchRule::new(1, 1, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S420,
        planes: IMC_SHARED,
        ..tagged(F::Imc2, "IMC2", *b"IMC2", Yuv, 12, PitchRule::new(1, 1, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S420,
        planes: IMC_SEPARATE,
        ..tagged(F::Imc3, "IMC3", *b"IMC3", Yuv, 12, PitchRule::new(1, 1, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S420,
        planes: IMC_SHARED,
        ..tagged(F::Imc4, "IMC4", *b"IMC4", Yuv, 12, PitchRule::new(1, 1, 4))
    },
    FormatDescriptor {
        subsampling: Subsampling::S420,
        planes: SEMI420,
        ..tagged(F::Nv12, "NV12", *b"NV12", Yuv, 12, PitchRule::new(2, 2, 2))
    },
    FormatDescriptor {
        subsampling: Subsampling::S420,
        planes: SEMI420,
        ..tagged(F::Nv21, "NV21", *b"NV21", Yuv, 12, PitchRule::new(2, 2, 2))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        planes: SEMI422,
        ..tagged(F::Nv16, "NV16", *b"NV16", Yuv, 16, PitchRule::new(2, 2, 2))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        planes: SEMI422,
        ..tagged(F::Nv61, "NV61", *b"NV61", Yuv, 16, PitchRule::new(2, 2, 2))
    },
    FormatDescriptor {
        planes: SEMI444,
        ..tagged(F::Nv24, "NV24", *b"NV24", Yuv, 24, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        planes: SEMI444,
        ..tagged(F::Nv42, "NV42", *b"NV42", Yuv, 24, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        bits_per_sample: 10,
        subsampling: Subsampling::S420,
        planes: SEMI420,
        ..tagged(F::P010, "P010", *b"P010", Yuv, 24, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        bits_per_sample: 16,
        subsampling: Subsampling::S420,
        planes: SEMI420,
        ..tagged(F::P016, "P016", *b"P016", Yuv, 24, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        bits_per_sample: 10,
        subsampling: Subsampling::S422,
        planes: SEMI422,
        ..tagged(F::P210, "P210", *b"P210", Yuv, 32, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        bits_per_sample: 16,
        subsampling: Subsampling::S422,
        planes: SEMI422,
        ..tagged(F::P216, "P216", *b"P216", Yuv, 32, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        components: 1,
        ..tagged(F::Bggr8, "BGGR8", *b"BA81", Bayer, 8, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        components: 1,
        ..tagged(F::Gbrg8, "GBRG8", *b"GBRG", Bayer, 8, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        components: 1,
        ..tagged(F::Grbg8, "GRBG8", *b"GRBG", Bayer, 8, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        components: 1,
        ..tagged(F::Rggb8, "RGGB8", *b"RGGB", Bayer, 8, PitchRule::new(1, 1, 1))
    },
    FormatDescriptor {
        components: 1,
        bits_per_sample: 16,
        ..tagged(F::Bggr16, "BGGR16", *b"BYR2", Bayer, 16, PitchRule::new(1, 2, 2))
    },
    FormatDescriptor {
        components: 1,
        bits_per_sample: 16,
        ..tagged(F::Gbrg16, "GBRG16", *b"GB16", Bayer, 16, PitchRule::new(1, 2, 2))
    },
    FormatDescriptor {
        components: 1,
        bits_per_sample: 16,
        ..tagged(F::Grbg16, "GRBG16", *b"GR16", Bayer, 16, PitchRule::new(1, 2, 2))
    },
    FormatDescriptor {
        components: 1,
        bits_per_sample: 16,
        ..tagged(F::Rggb16, "RGGB16", *b"RG16", Bayer, 16, PitchRule::new(1, 2, 2))
    },
    FormatDescriptor {
        subsampling: Subsampling::S422,
        planes: FIELDS,
        ..tagged(F::Yuy2Fields, "YUY2F", *b"YUFS", Yuv, 16, PitchRule::new(2, 4, 4))
    },
    FormatDescriptor {
        components: 1,
        planes: LINE_PAIRS,
        ..tagged(F::Y8Pairs, "Y8VP", *b"Y8VP", Gray, 8, PitchRule::new(1, 1, 4))
    },
];

/// Alternative FOURCCs that describe an already catalogued layout.
const ALIASES: &[([u8; 4], PixelFormat)] = &[
    (*b"IYUV", F::I420),
    (*b"YUYV", F::Yuy2),
    (*b"YUNV", F::Yuy2),
    (*b"V422", F::Yuy2),
    (*b"UYNV", F::Uyvy),
    (*b"Y422", F::Uyvy),
    (*b"2vuy", F::Uyvy),
    (*b"GREY", F::Y800),
    (*b"Y8  ", F::Y800),
    (*b"411P", F::Y41b),
];

impl PixelFormat {
    /// Number of catalogued formats.
    pub const COUNT: usize = 71;

    /// Every format, in catalog order.
    pub const ALL: [PixelFormat; PixelFormat::COUNT] = [
        F::Rgb32,
        F::Argb32,
        F::Rgb24,
        F::Rgb565,
        F::Rgb555,
        F::Argb1555,
        F::Argb4444,
        F::Rgb8,
        F::A2r10g10b10,
        F::A2b10g10r10,
        F::R210,
        F::R10k,
        F::Rgb48,
        F::Rgba64,
        F::B48r,
        F::B64a,
        F::Y800,
        F::Y16,
        F::B16g,
        F::Ayuv,
        F::Yuy2,
        F::Uyvy,
        F::Yvyu,
        F::Vyuy,
        F::Hdyc,
        F::Iyu1,
        F::Iyu2,
        F::Y41p,
        F::Cljr,
        F::V308,
        F::V408,
        F::V210,
        F::V410,
        F::Y410,
        F::Y210,
        F::Y216,
        F::V216,
        F::Y416,
        F::I420,
        F::Yv12,
        F::I422,
        F::Yv16,
        F::I444,
        F::Yv24,
        F::Yvu9,
        F::Yuv9,
        F::Y41b,
        F::Imc1,
        F::Imc2,
        F::Imc3,
        F::Imc4,
        F::Nv12,
        F::Nv21,
        F::Nv16,
        F::Nv61,
        F::Nv24,
        F::Nv42,
        F::P010,
        F::P016,
        F::P210,
        F::P216,
        F::Bggr8,
        F::Gbrg8,
        F::Grbg8,
        F::Rggb8,
        F::Bggr16,
        F::Gbrg16,
        F::Grbg16,
        F::Rggb16,
        F::Yuy2Fields,
        F::Y8Pairs,
    ];

    /// The static descriptor for this format.
    #[inline]
    pub fn descriptor(self) -> &'static FormatDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Human-readable name.
    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Number of memory planes.
    #[inline]
    pub fn plane_count(self) -> usize {
        self.descriptor().planes.len()
    }

    /// Whether luma and chroma live in separate planes.
    pub fn is_planar(self) -> bool {
        let planes = self.descriptor().planes;
        planes.len() > 1 && planes[0] == PlaneRule::LUMA
    }

    /// Bit count advertised in the media type.
    #[inline]
    pub fn bits_per_pixel(self) -> u16 {
        self.descriptor().bits_per_pixel
    }

    /// Look a format up by FOURCC, including aliases.
    pub fn from_fourcc(code: FourCc) -> Option<Self> {
        DESCRIPTORS
            .iter()
            .find(|d| d.fourcc == Some(code))
            .map(|d| d.format)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| FourCc::new(*alias) == code)
                    .map(|&(_, format)| format)
            })
    }

    /// Look a format up by media subtype GUID.
    pub fn from_subtype(guid: &Guid) -> Option<Self> {
        match guid.fourcc() {
            Some(code) => Self::from_fourcc(code),
            None => DESCRIPTORS
                .iter()
                .find(|d| d.fourcc.is_none() && d.subtype == *guid)
                .map(|d| d.format),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = SynthError;

    /// Accepts a display name (any case) or an exact FOURCC.
    fn from_str(s: &str) -> Result<Self> {
        DESCRIPTORS
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(s))
            .map(|d| d.format)
            .or_else(|| FourCc::parse(s).and_then(Self::from_fourcc))
            .ok_or_else(|| SynthError::UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for PixelFormat {
    type Error = SynthError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PixelFormat> for String {
    fn from(format: PixelFormat) -> Self {
        format.name().to_string()
    }
}
