//! Synthcam Draw - Test pattern and text rendering
//!
//! Paints the four-bar colour pattern of every supported pixel format into a
//! caller-owned buffer and overlays the format name in an 8×8 bitmap font.
//! Pixel packing is expressed through [`store::Store`] so one fill loop
//! serves every container width and byte order.

pub mod compose;
pub mod fill;
pub mod frame;
pub mod glyph;
pub mod recipe;
pub mod store;
pub mod surface;
pub mod text;

pub use compose::{main_surface, render_pattern};
pub use fill::{BayerBand, BayerPattern, ColorBand, GroupLayout, Ramp};
pub use frame::{draw_watermark, FrameRenderer};
pub use glyph::{GlyphSheet, GLYPH_FILE};
pub use recipe::{recipe, rgb8_palette, Recipe, SampleDepth, TextStyle};
pub use store::{Store, StoreKind};
pub use surface::Surface;
pub use text::{bounce, draw_char, draw_text, DrawCharContext, GlyphKind, GLYPH_SIZE};
