//! synthcam - Synthetic test pattern source
//!
//! Renders colour-bar frames with a bouncing format name in any of the
//! supported pixel formats and writes them to a raw file.
//!
//! Usage: `synthcam [config.json]`

mod capture;
mod config;

use anyhow::{Context, Result};
use config::SourceConfig;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use synthcam_core::PixelFormat;
use synthcam_draw::{FrameRenderer, GlyphSheet};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SourceConfig::load(Path::new(&path))
            .with_context(|| format!("Failed to load config {path}"))?,
        None => SourceConfig::default(),
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("synthcam starting...");

    let geometry = config.geometry()?;
    info!(
        format = %geometry.format,
        width = geometry.width,
        height = geometry.height,
        pitch = geometry.pitch,
        image_size = geometry.image_size,
        "Source geometry"
    );

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let glyph = config.glyph_path(exe_dir.as_deref());
    let mut renderer = FrameRenderer::new(GlyphSheet::load_or_blank(glyph.as_deref()));

    let file = File::create(&config.output)
        .with_context(|| format!("Failed to create {}", config.output.display()))?;
    capture::write_frames(
        &mut renderer,
        &geometry,
        config.frames,
        &mut BufWriter::new(file),
    )?;

    if geometry.format == PixelFormat::Rgb8 {
        let palette_path = config.palette_path();
        let file = File::create(&palette_path)
            .with_context(|| format!("Failed to create {}", palette_path.display()))?;
        capture::write_palette(&mut BufWriter::new(file))?;
        info!(path = %palette_path.display(), "Palette written");
    }

    info!(output = %config.output.display(), "Done");
    Ok(())
}
