//! Integration tests for format lookup and buffer layout.

use proptest::prelude::*;
use synthcam_core::{
    frame_size, pitch, FourCc, FrameGeometry, PixelFormat, SynthError, MAX_DIMENSION,
    MIN_DIMENSION,
};

// ── Lookup ─────────────────────────────────────────────────────

#[test]
fn every_name_and_fourcc_resolves_back() {
    for format in PixelFormat::ALL {
        assert_eq!(format.name().parse::<PixelFormat>().unwrap(), format);
        if let Some(code) = format.descriptor().fourcc {
            assert_eq!(PixelFormat::from_fourcc(code), Some(format), "{code}");
        }
        assert_eq!(PixelFormat::from_subtype(&format.descriptor().subtype), Some(format));
    }
}

#[test]
fn unknown_code_is_not_a_format() {
    assert_eq!(PixelFormat::from_fourcc(FourCc::new(*b"ZZZZ")), None);
    assert!(matches!(
        "not-a-format".parse::<PixelFormat>(),
        Err(SynthError::UnknownFormat(_))
    ));
}

// ── Pitch & size ───────────────────────────────────────────────

#[test]
fn legacy_frame_sizes_at_default_resolution() {
    let size = |format| {
        let geometry = FrameGeometry::new(format, 2048, 1024);
        geometry.image_size
    };
    assert_eq!(size(PixelFormat::Rgb32), 2048 * 4 * 1024);
    assert_eq!(size(PixelFormat::Yuy2), 2048 * 2 * 1024);
    assert_eq!(size(PixelFormat::I420), 2048 * 1024 * 3 / 2);
    assert_eq!(size(PixelFormat::Yvu9), 2048 * 1024 + 2 * 512 * 256);
    assert_eq!(size(PixelFormat::V210), 5504 * 1024);
    assert_eq!(size(PixelFormat::Nv24), 2048 * 1024 * 3);
}

#[test]
fn v210_pitch_rounds_to_48_pixel_blocks() {
    assert_eq!(pitch(PixelFormat::V210, 48), 128);
    assert_eq!(pitch(PixelFormat::V210, 49), 256);
    assert_eq!(pitch(PixelFormat::V210, 1920), 5120);
}

#[test]
fn geometry_rejects_out_of_range_sizes() {
    assert!(FrameGeometry::validated(PixelFormat::Nv12, MIN_DIMENSION, 20).is_ok());
    assert!(FrameGeometry::validated(PixelFormat::Nv12, MIN_DIMENSION - 1, 20).is_err());
    assert!(FrameGeometry::validated(PixelFormat::Nv12, MAX_DIMENSION + 1, 20).is_err());
    assert!(FrameGeometry::validated(PixelFormat::Rgb32, 64, -64).is_ok());
}

#[test]
fn planes_tile_the_frame() {
    for format in PixelFormat::ALL {
        let geometry = FrameGeometry::new(format, 97, 41);
        let mut end = 0;
        for plane in &geometry.planes {
            assert_eq!(plane.offset, end, "{format}");
            end = plane.range().end;
        }
        assert_eq!(end, geometry.image_size, "{format}");
    }
}

proptest! {
    #[test]
    fn pitch_is_monotonic(index in 0..PixelFormat::COUNT, width in 0u32..5000) {
        let format = PixelFormat::ALL[index];
        prop_assert!(pitch(format, width) <= pitch(format, width + 1));
    }

    #[test]
    fn pitch_holds_one_row(index in 0..PixelFormat::COUNT, width in 1u32..5000) {
        let format = PixelFormat::ALL[index];
        let rule = format.descriptor().pitch;
        let p = pitch(format, width);
        prop_assert_eq!(p % rule.align as usize, 0);
        prop_assert!(p * rule.pixels as usize >= width as usize * rule.bytes as usize);
    }

    #[test]
    fn frame_size_is_sum_of_planes(
        index in 0..PixelFormat::COUNT,
        width in 0u32..1000,
        height in 0u32..1000,
    ) {
        let format = PixelFormat::ALL[index];
        let p = pitch(format, width);
        let geometry = FrameGeometry::new(format, width, height as i32);
        let planes: usize = geometry.planes.iter().map(|plane| plane.len()).sum();
        prop_assert_eq!(frame_size(format, p, height), planes);
        prop_assert_eq!(geometry.image_size, planes);
    }
}
