//! Integration tests for colour-bar rendering across formats.

use synthcam_core::{BandLayout, FrameGeometry, PixelFormat};
use synthcam_draw::render_pattern;

// ── Helpers ────────────────────────────────────────────────────

fn render(format: PixelFormat, width: u32, height: i32) -> (FrameGeometry, Vec<u8>) {
    render_over(format, width, height, 0)
}

fn render_over(format: PixelFormat, width: u32, height: i32, fill: u8) -> (FrameGeometry, Vec<u8>) {
    let geometry = FrameGeometry::new(format, width, height);
    let mut data = vec![fill; geometry.image_size];
    render_pattern(&geometry, &mut data).unwrap();
    (geometry, data)
}

/// Unpack one v210 row into per-pixel `(Y, Cb, Cr)`.
fn unpack_v210(row: &[u8], width: usize) -> Vec<(u32, u32, u32)> {
    let samples: Vec<u32> = row
        .chunks_exact(4)
        .flat_map(|w| {
            let word = u32::from_le_bytes([w[0], w[1], w[2], w[3]]);
            [word & 0x3FF, (word >> 10) & 0x3FF, (word >> 20) & 0x3FF]
        })
        .collect();
    (0..width)
        .map(|p| {
            let group = p / 6 * 12;
            let pair = group + (p % 6) / 2 * 4;
            (
                samples[group + (p % 6) * 2 + 1],
                samples[pair],
                samples[pair + 2],
            )
        })
        .collect()
}

// ── Planar round trip ──────────────────────────────────────────

#[test]
fn i420_luma_reads_back_at_corners() {
    let (geometry, data) = render(PixelFormat::I420, 64, 32);
    assert_eq!(geometry.image_size, 64 * 32 * 3 / 2);
    let luma = |x: usize, y: usize| data[y * geometry.pitch + x];
    assert_eq!(luma(0, 0), 0x80);
    assert_eq!(luma(47, 31), 0x80);
    assert_eq!(luma(48, 0), 0);
    assert_eq!(luma(63, 31), 248);
}

#[test]
fn i420_chroma_bars() {
    let (geometry, data) = render(PixelFormat::I420, 64, 32);
    let (u, v) = (geometry.plane(1), geometry.plane(2));
    let at = |offset: usize, pitch: usize, x: usize, y: usize| data[offset + y * pitch + x];
    // Bars of the 32-sample chroma rows: U, U+V, V, none.
    for (x, u_ramps, v_ramps) in [(0, true, false), (8, true, true), (16, false, true), (24, false, false)] {
        // Row 4 of 16 chroma rows.
        let expect = |ramps: bool| if ramps { 64 } else { 0x80 };
        assert_eq!(at(u.offset, u.pitch, x, 4), expect(u_ramps), "U at {x}");
        assert_eq!(at(v.offset, v.pitch, x, 4), expect(v_ramps), "V at {x}");
    }
    assert_eq!(at(u.offset, u.pitch, 0, 15), 240);
}

#[test]
fn swapped_planar_formats_mirror_chroma() {
    for (plain, swapped) in [
        (PixelFormat::I420, PixelFormat::Yv12),
        (PixelFormat::I422, PixelFormat::Yv16),
        (PixelFormat::I444, PixelFormat::Yv24),
        (PixelFormat::Yuv9, PixelFormat::Yvu9),
        (PixelFormat::Nv12, PixelFormat::Nv21),
    ] {
        let (geometry, a) = render(plain, 64, 32);
        let (_, b) = render(swapped, 64, 32);
        let luma = geometry.plane(0).range();
        assert_eq!(a[luma.clone()], b[luma], "{plain}/{swapped}");
        assert_ne!(a, b, "{plain}/{swapped}");
    }
}

// ── v210 ───────────────────────────────────────────────────────

#[test]
fn v210_width_48_unpacks_to_bars() {
    let (geometry, data) = render(PixelFormat::V210, 48, 32);
    assert_eq!(geometry.pitch, 128);
    let row = &data[8 * 128..9 * 128];
    let pixels = unpack_v210(row, 48);
    // Row 8 of 32: ramps sit at 1024 * 8 / 32.
    let (ramp, mid) = (256, 0x200);
    assert_eq!(pixels[0], (mid, ramp, mid));
    assert_eq!(pixels[12], (mid, ramp, ramp));
    assert_eq!(pixels[24], (mid, mid, ramp));
    assert_eq!(pixels[36], (ramp, mid, mid));
    assert_eq!(pixels[47], (ramp, mid, mid));

    for word in row.chunks_exact(4) {
        assert_eq!(word[3] & 0xC0, 0);
    }
}

#[test]
fn v210_single_row_first_group() {
    let (geometry, data) = render(PixelFormat::V210, 48, 1);
    assert_eq!(geometry.image_size, 128);
    // First four words: six pixels of the U bar at row 0.
    let pixels = unpack_v210(&data[..16], 6);
    assert!(pixels.iter().all(|&p| p == (0x200, 0, 0x200)), "{pixels:?}");
}

#[test]
fn v210_partial_group_keeps_neighbours() {
    // 50 pixels end in word 33; the padding after it stays untouched.
    let (geometry, data) = render_over(PixelFormat::V210, 50, 20, 0xEE);
    assert_eq!(geometry.pitch, 256);
    let row = &data[..geometry.pitch];
    assert!(row[34 * 4..].iter().all(|&b| b == 0xEE));
    let pixels = unpack_v210(row, 50);
    assert_eq!(pixels[49].0, 0);
}

// ── Determinism & coverage ─────────────────────────────────────

#[test]
fn rendering_is_deterministic_for_every_format() {
    for format in PixelFormat::ALL {
        let (_, first) = render(format, 83, 37);
        let (_, second) = render(format, 83, 37);
        assert_eq!(first, second, "{format}");
    }
}

#[test]
fn bands_cover_every_byte_of_tight_formats() {
    for format in [
        PixelFormat::Rgb32,
        PixelFormat::Rgb24,
        PixelFormat::Yuy2,
        PixelFormat::Uyvy,
        PixelFormat::Y41p,
        PixelFormat::Cljr,
        PixelFormat::I420,
        PixelFormat::Nv12,
        PixelFormat::P010,
        PixelFormat::Rggb16,
    ] {
        let (_, zeros) = render_over(format, 96, 32, 0x00);
        let (_, ones) = render_over(format, 96, 32, 0xFF);
        assert_eq!(zeros, ones, "{format}");
    }
}

#[test]
fn grey_bar_grows_down_the_frame() {
    let (geometry, data) = render(PixelFormat::Rgb32, 64, -32);
    let x = BandLayout::new(64).bands()[3].start;
    let mut last = 0;
    for y in 0..32 {
        let at = y * geometry.pitch + x * 4;
        let grey = data[at];
        assert!(grey >= last, "row {y}");
        assert_eq!(&data[at..at + 3], &[grey; 3]);
        last = grey;
    }
    assert_eq!(last, 248);
}

/// Decoded samples of one column of a packed format, top row first.
fn column_samples(
    format: PixelFormat,
    width: u32,
    height: i32,
    sample: impl Fn(&[u8]) -> u32,
) -> Vec<u32> {
    let (geometry, data) = render(format, width, -height);
    data.chunks_exact(geometry.pitch)
        .take(height as usize)
        .map(sample)
        .collect()
}

fn u16_at(row: &[u8], offset: usize) -> u32 {
    u32::from(u16::from_le_bytes([row[offset], row[offset + 1]]))
}

fn u32_at(row: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([row[offset], row[offset + 1], row[offset + 2], row[offset + 3]])
}

#[test]
fn ramps_never_decrease_down_a_column() {
    type Decode = fn(&[u8]) -> u32;
    // (format, width, decoder, largest sample); luma from the grey bar,
    // chroma from the U bar.
    let cases: [(PixelFormat, u32, Decode, u32); 8] = [
        (PixelFormat::Yuy2, 64, |r| u32::from(r[56 * 2]), 0xFF),
        (PixelFormat::Yuy2, 64, |r| u32::from(r[2 * 4 + 1]), 0xFF),
        (PixelFormat::V210, 48, |r| unpack_v210(r, 48)[40].0, 0x3FF),
        (PixelFormat::V210, 48, |r| unpack_v210(r, 48)[2].1, 0x3FF),
        (PixelFormat::Y416, 64, |r| u16_at(r, 56 * 8 + 2), 0xFFFF),
        (PixelFormat::Y416, 64, |r| u16_at(r, 4 * 8), 0xFFFF),
        (PixelFormat::Cljr, 64, |r| (u32_at(r, 56) >> 12) & 0x1F, 0x1F),
        (PixelFormat::Cljr, 64, |r| (u32_at(r, 4) >> 6) & 0x3F, 0x3F),
    ];
    // 600 rows is taller than every 8-bit ramp, so steps repeat.
    for height in [32, 600] {
        for (n, &(format, width, decode, max)) in cases.iter().enumerate() {
            let samples = column_samples(format, width, height, decode);
            assert_eq!(samples[0], 0, "{format} case {n} at {height} rows");
            assert!(
                samples.windows(2).all(|w| w[0] <= w[1]),
                "{format} case {n} at {height} rows: {samples:?}"
            );
            let last = samples[samples.len() - 1];
            assert!((max / 10 * 9..=max).contains(&last), "{format} case {n}: {last}");
        }
    }
}

#[test]
fn dib_positive_height_is_bottom_up() {
    let (_, bottom_up) = render(PixelFormat::Rgb565, 64, 32);
    let (geometry, top_down) = render(PixelFormat::Rgb565, 64, -32);
    let pitch = geometry.pitch;
    for y in 0..32 {
        let flipped = (31 - y) * pitch;
        assert_eq!(
            &bottom_up[flipped..flipped + pitch],
            &top_down[y * pitch..(y + 1) * pitch],
            "row {y}"
        );
    }
}

#[test]
fn fourcc_formats_ignore_height_sign() {
    let (_, positive) = render(PixelFormat::Nv12, 64, 32);
    let (_, negative) = render(PixelFormat::Nv12, 64, -32);
    assert_eq!(positive, negative);
}
