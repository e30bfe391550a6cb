//! The 8×8 bitmap font.
//!
//! The font is a 128×128 one-bit bitmap (a 16×16 grid of glyphs) stored as a
//! bottom-up BMP. Only the pixel array is used: 2048 bytes starting right
//! after the 62-byte header.

use std::fs;
use std::path::{Path, PathBuf};
use synthcam_core::{Result, SynthError};
use tracing::{info, warn};

/// File name searched for next to the running program.
pub const GLYPH_FILE: &str = "8X8.BMP";
/// Offset of the pixel array inside [`GLYPH_FILE`].
pub const GLYPH_OFFSET: usize = 0x3E;
/// Size of the pixel array.
pub const GLYPH_BYTES: usize = 2048;

/// Bytes per bitmap row (128 pixels, one bit each).
const SHEET_STRIDE: usize = 16;

/// A loaded glyph sheet. A blank sheet draws every glyph unlit.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphSheet {
    bits: Box<[u8; GLYPH_BYTES]>,
}

impl std::fmt::Debug for GlyphSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphSheet")
            .field("blank", &self.is_blank())
            .finish()
    }
}

impl Default for GlyphSheet {
    fn default() -> Self {
        Self::blank()
    }
}

impl GlyphSheet {
    /// A sheet with no lit pixels.
    pub fn blank() -> Self {
        Self {
            bits: Box::new([0; GLYPH_BYTES]),
        }
    }

    /// Use the first [`GLYPH_BYTES`] of an already extracted pixel array.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pixels = bytes.get(..GLYPH_BYTES).ok_or(SynthError::GlyphSheet {
            expected: GLYPH_BYTES,
            got: bytes.len(),
        })?;
        let mut bits = Box::new([0; GLYPH_BYTES]);
        bits.copy_from_slice(pixels);
        Ok(Self { bits })
    }

    /// Read the pixel array out of a BMP file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::read(path)?;
        let pixels = file.get(GLYPH_OFFSET..).unwrap_or_default();
        let sheet = Self::from_bytes(pixels).map_err(|_| SynthError::GlyphSheet {
            expected: GLYPH_OFFSET + GLYPH_BYTES,
            got: file.len(),
        })?;
        info!(path = %path.display(), "Loaded glyph sheet");
        Ok(sheet)
    }

    /// Find [`GLYPH_FILE`] in `start` or the closest ancestor directory.
    pub fn locate(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(GLYPH_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load `path`, falling back to a blank sheet when it is missing or short.
    pub fn load_or_blank(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            warn!("No {GLYPH_FILE} found, text overlay will be blank");
            return Self::blank();
        };
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Failed to load glyph sheet, text overlay will be blank");
            Self::blank()
        })
    }

    /// Whether every pixel is unlit.
    pub fn is_blank(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Row `r` (0 = top) of the glyph for character `c`, MSB = leftmost pixel.
    #[inline]
    pub fn glyph_row(&self, c: u8, r: usize) -> u8 {
        let top = GLYPH_BYTES - SHEET_STRIDE - usize::from(c >> 4) * SHEET_STRIDE * 8
            + usize::from(c & 15);
        self.bits[top - r * SHEET_STRIDE]
    }

    /// Set row `r` of character `c`'s glyph.
    pub fn set_glyph_row(&mut self, c: u8, r: usize, bits: u8) {
        let top = GLYPH_BYTES - SHEET_STRIDE - usize::from(c >> 4) * SHEET_STRIDE * 8
            + usize::from(c & 15);
        self.bits[top - r * SHEET_STRIDE] = bits;
    }
}
