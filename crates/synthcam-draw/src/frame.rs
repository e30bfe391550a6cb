//! Per-stream frame renderer: colour bars plus a bouncing format name.

use crate::compose::{main_surface, render_pattern};
use crate::glyph::GlyphSheet;
use crate::recipe::recipe;
use crate::text::{bounce, draw_text, DrawCharContext, GLYPH_SIZE};
use synthcam_core::{FrameGeometry, PixelFormat, Result};
use tracing::{debug, trace};

/// Draw the format name of `geometry` at the position for frame `counter`.
///
/// Returns `false` when the frame is too small to hold the text.
pub fn draw_watermark(
    sheet: &GlyphSheet,
    geometry: &FrameGeometry,
    data: &mut [u8],
    counter: u64,
) -> bool {
    let name = geometry.format.name();
    let text_width = name.len() * GLYPH_SIZE;
    let width = geometry.width as usize;
    let height = geometry.rows() as usize;
    if width <= text_width || height <= GLYPH_SIZE {
        return false;
    }

    let x = bounce(counter, (width - text_width) as u64) as usize;
    let y = bounce(counter, (height - GLYPH_SIZE) as u64) as usize;
    let style = recipe(geometry.format).text();
    let mut ctx = DrawCharContext {
        sheet,
        mask: style.mask,
        add: style.add,
        unit_bytes: style.kind.unit_bytes(),
        x,
    };
    draw_text(style.kind, &mut ctx, &mut main_surface(geometry, data), y, name);
    true
}

/// Renders successive frames of one stream.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    sheet: GlyphSheet,
    frame_count: u64,
    last: Option<(PixelFormat, u32, i32)>,
}

impl FrameRenderer {
    pub fn new(sheet: GlyphSheet) -> Self {
        Self {
            sheet,
            frame_count: 0,
            last: None,
        }
    }

    /// Frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn sheet(&self) -> &GlyphSheet {
        &self.sheet
    }

    /// Paint the next frame into `data`.
    pub fn render(&mut self, geometry: &FrameGeometry, data: &mut [u8]) -> Result<()> {
        let key = (geometry.format, geometry.width, geometry.height);
        if self.last != Some(key) {
            debug!(
                format = %geometry.format,
                width = geometry.width,
                height = geometry.height,
                pitch = geometry.pitch,
                image_size = geometry.image_size,
                "Frame geometry changed"
            );
            self.last = Some(key);
        }

        render_pattern(geometry, data)?;
        self.frame_count += 1;
        let text = draw_watermark(&self.sheet, geometry, data, self.frame_count);
        trace!(frame = self.frame_count, text, "Rendered frame");
        Ok(())
    }
}
