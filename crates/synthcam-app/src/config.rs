//! Source configuration, read from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use synthcam_core::{defaults, FrameGeometry, PixelFormat, Result, SynthError};
use synthcam_draw::GlyphSheet;

/// What the source produces and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Format name or FOURCC, e.g. `"RGB32"`, `"NV12"`, `"YUFS"`.
    pub format: PixelFormat,
    pub width: u32,
    /// Negative for top-down DIB frames.
    pub height: i32,
    /// Frames to render.
    pub frames: u64,
    /// Raw output file, frames back to back.
    pub output: PathBuf,
    /// Glyph bitmap; searched next to the executable when absent.
    pub glyph_file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            format: PixelFormat::Rgb32,
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            frames: 1,
            output: PathBuf::from("synthcam.raw"),
            glyph_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl SourceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SynthError::Config(format!("Failed to parse source config: {e}")))
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Frame geometry, rejecting sizes outside the supported range.
    pub fn geometry(&self) -> Result<FrameGeometry> {
        FrameGeometry::validated(self.format, self.width, self.height)
    }

    /// Configured glyph file, else the closest one above `search_from`.
    pub fn glyph_path(&self, search_from: Option<&Path>) -> Option<PathBuf> {
        self.glyph_file
            .clone()
            .or_else(|| search_from.and_then(GlyphSheet::locate))
    }

    /// Where the RGB8 palette is written next to the frames.
    pub fn palette_path(&self) -> PathBuf {
        self.output.with_extension("pal")
    }
}
