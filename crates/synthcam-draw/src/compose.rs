//! Test pattern composition.
//!
//! Splits the frame into four vertical bars and paints each plane of the
//! format through its recipe. Luma and chroma planes use the same band
//! geometry, scaled by the chroma subsampling.

use crate::fill::{
    fill_bayer, fill_cljr, fill_grouped, fill_v210, BayerBand, ColorBand, Ramp, BLUE, GREEN, RED,
};
use crate::recipe::{
    chroma_pair_bands, chroma_u_bands, chroma_v_bands, luma_bands, recipe, Recipe, SampleDepth,
};
use crate::store::{StoreKind, U16Le, U8};
use crate::surface::Surface;
use synthcam_core::{BandLayout, FrameGeometry, PixelFormat, Result};

/// Surface over plane 0 with the format's row mapping applied.
pub fn main_surface<'a>(geometry: &FrameGeometry, data: &'a mut [u8]) -> Surface<'a> {
    let plane = *geometry.plane(0);
    match geometry.format {
        PixelFormat::Yuy2Fields => {
            Surface::paired(data, plane.offset, geometry.plane(1).offset, plane.pitch)
        }
        PixelFormat::Y8Pairs => Surface::paired(data, plane.offset, plane.offset + 1, plane.pitch),
        _ if geometry.is_bottom_up() => {
            Surface::bottom_up(data, plane.pitch, geometry.rows() as usize)
        }
        _ => Surface::at(data, plane.offset, plane.pitch),
    }
}

/// Paint four ramps, one per band of `columns`.
fn paint(
    surface: &mut Surface<'_>,
    store: StoreKind,
    columns: &BandLayout,
    height: usize,
    ramps: &[Ramp; 4],
) {
    for (cols, ramp) in columns.bands().into_iter().zip(ramps) {
        store.fill(surface, &ColorBand::new(cols, height, *ramp));
    }
}

/// Paint the colour-bar pattern of `geometry.format` into `data`.
pub fn render_pattern(geometry: &FrameGeometry, data: &mut [u8]) -> Result<()> {
    geometry.check_buffer(data.len())?;
    let height = geometry.rows() as usize;
    let columns = BandLayout::new(geometry.width as usize);

    match *recipe(geometry.format) {
        Recipe::Packed {
            store,
            unit_pixels,
            bands,
            ..
        } => {
            let mut surface = main_surface(geometry, data);
            paint(&mut surface, store, &columns.subsampled(unit_pixels), height, &bands);
        }
        Recipe::V210 { bands } => {
            let mut surface = main_surface(geometry, data);
            for (cols, ramp) in columns.bands().into_iter().zip(bands) {
                fill_v210(&mut surface, &ColorBand::new(cols, height, ramp));
            }
        }
        Recipe::Grouped { layout, bands } => {
            let mut surface = main_surface(geometry, data);
            for (cols, ramp) in columns.bands().into_iter().zip(bands) {
                fill_grouped(&mut surface, layout, &ColorBand::new(cols, height, ramp));
            }
        }
        Recipe::Cljr { bands } => {
            let mut surface = main_surface(geometry, data);
            for (cols, ramp) in columns.bands().into_iter().zip(bands) {
                fill_cljr(&mut surface, &ColorBand::new(cols, height, ramp));
            }
        }
        Recipe::Planar { swap, shared } => paint_planar(geometry, data, &columns, swap, shared),
        Recipe::SemiPlanar { depth, swap } => {
            paint_semi_planar(geometry, data, &columns, depth, swap)
        }
        Recipe::Bayer { pattern, depth } => {
            let mut surface = main_surface(geometry, data);
            let s = depth.step;
            let mut adds = [[0; 3]; 4];
            adds[0][BLUE] = s;
            adds[1][GREEN] = s;
            adds[2][RED] = s;
            adds[3] = [s; 3];
            for (cols, add) in columns.bands().into_iter().zip(adds) {
                let band = BayerBand {
                    pattern,
                    x: cols.start,
                    width: cols.len(),
                    height,
                    count: depth.count,
                    base: [0; 3],
                    add,
                };
                if depth.is_wide() {
                    fill_bayer::<U16Le>(&mut surface, &band);
                } else {
                    fill_bayer::<U8>(&mut surface, &band);
                }
            }
        }
    }
    Ok(())
}

fn paint_planar(
    geometry: &FrameGeometry,
    data: &mut [u8],
    columns: &BandLayout,
    swap: bool,
    shared: bool,
) {
    let depth = SampleDepth::BITS8;
    let subsampling = geometry.format.descriptor().subsampling;
    let height = geometry.rows() as usize;

    let luma = geometry.plane(0);
    paint(
        &mut Surface::at(data, luma.offset, luma.pitch),
        StoreKind::U8,
        columns,
        height,
        &luma_bands(depth),
    );

    // (origin, pitch) of the first and second chroma plane in memory order.
    let (first, second) = if shared {
        let plane = geometry.plane(1);
        (
            (plane.offset, plane.pitch),
            (plane.offset + plane.pitch / 2, plane.pitch),
        )
    } else {
        let (a, b) = (geometry.plane(1), geometry.plane(2));
        ((a.offset, a.pitch), (b.offset, b.pitch))
    };
    let (u, v) = if swap { (second, first) } else { (first, second) };

    let chroma_columns = columns.subsampled(subsampling.horizontal as usize);
    let chroma_rows = height.div_ceil(subsampling.vertical as usize);
    paint(
        &mut Surface::at(data, u.0, u.1),
        StoreKind::U8,
        &chroma_columns,
        chroma_rows,
        &chroma_u_bands(depth),
    );
    paint(
        &mut Surface::at(data, v.0, v.1),
        StoreKind::U8,
        &chroma_columns,
        chroma_rows,
        &chroma_v_bands(depth),
    );
}

fn paint_semi_planar(
    geometry: &FrameGeometry,
    data: &mut [u8],
    columns: &BandLayout,
    depth: SampleDepth,
    swap: bool,
) {
    let subsampling = geometry.format.descriptor().subsampling;
    let height = geometry.rows() as usize;

    let luma = geometry.plane(0);
    paint(
        &mut Surface::at(data, luma.offset, luma.pitch),
        depth.sample_store(),
        columns,
        height,
        &luma_bands(depth),
    );

    let chroma = geometry.plane(1);
    let (pair, _) = depth.pair_store();
    paint(
        &mut Surface::at(data, chroma.offset, chroma.pitch),
        pair,
        &columns.subsampled(subsampling.horizontal as usize),
        height.div_ceil(subsampling.vertical as usize),
        &chroma_pair_bands(depth, swap),
    );
}
