//! Integration tests for the format-name overlay.

use synthcam_core::{FrameGeometry, PixelFormat};
use synthcam_draw::{draw_watermark, render_pattern, FrameRenderer, GlyphSheet, GLYPH_SIZE};

// ── Helpers ────────────────────────────────────────────────────

/// Every glyph lit in its leftmost column and top row only.
fn corner_sheet() -> GlyphSheet {
    let mut sheet = GlyphSheet::blank();
    for c in 0..=255u8 {
        sheet.set_glyph_row(c, 0, 0xFF);
        for r in 1..GLYPH_SIZE {
            sheet.set_glyph_row(c, r, 0x80);
        }
    }
    sheet
}

fn solid_sheet() -> GlyphSheet {
    let mut sheet = GlyphSheet::blank();
    for c in 0..=255u8 {
        for r in 0..GLYPH_SIZE {
            sheet.set_glyph_row(c, r, 0xFF);
        }
    }
    sheet
}

fn pattern(geometry: &FrameGeometry) -> Vec<u8> {
    let mut data = vec![0u8; geometry.image_size];
    render_pattern(geometry, &mut data).unwrap();
    data
}

// ── RGB32 overlay ──────────────────────────────────────────────

#[test]
fn rgb32_overlay_touches_only_the_text_box() {
    let geometry = FrameGeometry::new(PixelFormat::Rgb32, 128, 64);
    let background = pattern(&geometry);
    let mut frame = background.clone();
    assert!(draw_watermark(&corner_sheet(), &geometry, &mut frame, 0));

    // Bottom-up: image row y is memory row 63 - y.
    let pixel = |data: &[u8], x: usize, y: usize| {
        let at = (63 - y) * geometry.pitch + x * 4;
        u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
    };
    let text_width = "RGB32".len() * GLYPH_SIZE;
    for y in 0..64 {
        for x in 0..128 {
            let inside = x < text_width && y < GLYPH_SIZE;
            if !inside {
                assert_eq!(pixel(&frame, x, y), pixel(&background, x, y), "({x}, {y})");
                continue;
            }
            let lit = y == 0 || x % GLYPH_SIZE == 0;
            let expected = if lit { 0xFFFF_FFFF } else { 0 };
            assert_eq!(pixel(&frame, x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn renderer_moves_text_each_frame() {
    let geometry = FrameGeometry::new(PixelFormat::Rgb32, 128, -64);
    let mut renderer = FrameRenderer::new(solid_sheet());
    let mut frame = vec![0u8; geometry.image_size];
    let lit = 0xFFu8;

    renderer.render(&geometry, &mut frame).unwrap();
    // Frame 1: text at (1, 1).
    let row = geometry.pitch;
    assert_ne!(frame[row], lit);
    assert_eq!(frame[row + 4], lit);

    renderer.render(&geometry, &mut frame).unwrap();
    // Frame 2: text at (2, 2), the old box is repainted.
    let row = 2 * geometry.pitch;
    assert_ne!(frame[geometry.pitch + 4], lit);
    assert_ne!(frame[row + 4], lit);
    assert_eq!(frame[row + 8], lit);
}

#[test]
fn blank_sheet_draws_unlit_box() {
    let geometry = FrameGeometry::new(PixelFormat::Yuy2, 64, 32);
    let mut frame = pattern(&geometry);
    assert!(draw_watermark(&GlyphSheet::blank(), &geometry, &mut frame, 0));
    // Unlit YUY2 pixels are black with neutral chroma.
    assert!(frame[..64].chunks_exact(2).all(|px| px == [0x00, 0x80]));
    assert_ne!(&frame[64..68], &[0x00, 0x80, 0x00, 0x80]);
}

// ── Other packings ─────────────────────────────────────────────

#[test]
fn yuy2_text_writes_luma_with_neutral_chroma() {
    let geometry = FrameGeometry::new(PixelFormat::Yuy2, 64, 32);
    let mut frame = pattern(&geometry);
    draw_watermark(&solid_sheet(), &geometry, &mut frame, 0);
    assert!(frame[..64].chunks_exact(2).all(|px| px == [0xFF, 0x80]));
}

#[test]
fn planar_text_stays_in_luma_plane() {
    let geometry = FrameGeometry::new(PixelFormat::Nv12, 64, 32);
    let background = pattern(&geometry);
    let mut frame = background.clone();
    draw_watermark(&solid_sheet(), &geometry, &mut frame, 0);
    let chroma = geometry.plane(1).range();
    assert_eq!(frame[chroma.clone()], background[chroma]);
    assert!(frame[..32].iter().all(|&b| b == 0xFF));
}

#[test]
fn high_depth_text_uses_sample_range() {
    let geometry = FrameGeometry::new(PixelFormat::P010, 64, 32);
    let mut frame = pattern(&geometry);
    draw_watermark(&solid_sheet(), &geometry, &mut frame, 0);
    assert_eq!(&frame[..4], &[0xC0, 0xFF, 0xC0, 0xFF]);
}

#[test]
fn every_format_accepts_text_at_minimum_size() {
    let sheet = solid_sheet();
    for format in PixelFormat::ALL {
        let geometry = FrameGeometry::new(format, 20, 20);
        let mut frame = pattern(&geometry);
        // Names wider than 20 pixels are skipped.
        let drawn = draw_watermark(&sheet, &geometry, &mut frame, 3);
        assert_eq!(drawn, format.name().len() * GLYPH_SIZE < 20, "{format}");
    }
}
