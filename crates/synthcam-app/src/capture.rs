//! Frame loop: renders frames into one reusable buffer and streams them out.

use std::io::Write;
use synthcam_core::{FrameGeometry, Result};
use synthcam_draw::{rgb8_palette, FrameRenderer};
use tracing::info;

/// Render `frames` frames of `geometry` and write them to `out` back to back.
///
/// Returns the number of bytes written.
pub fn write_frames<W: Write>(
    renderer: &mut FrameRenderer,
    geometry: &FrameGeometry,
    frames: u64,
    out: &mut W,
) -> Result<u64> {
    let mut buffer = vec![0u8; geometry.image_size];
    let mut written = 0u64;
    for _ in 0..frames {
        renderer.render(geometry, &mut buffer)?;
        out.write_all(&buffer)?;
        written += buffer.len() as u64;
    }
    out.flush()?;
    info!(
        format = %geometry.format,
        frames,
        bytes = written,
        "Frames written"
    );
    Ok(written)
}

/// Write the 256-entry palette RGB8 frames index into, four bytes per entry.
pub fn write_palette<W: Write>(out: &mut W) -> Result<()> {
    for entry in rgb8_palette() {
        out.write_all(&entry)?;
    }
    out.flush()?;
    Ok(())
}
