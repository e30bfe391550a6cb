//! Synthcam Core - Pixel format catalog and frame layout
//!
//! This crate provides the format-independent foundation of synthcam:
//! - FOURCC and media subtype identifiers
//! - The closed table of supported pixel formats
//! - Pitch and frame size rules, plane positions
//! - The four-band split shared by every test pattern

pub mod bands;
pub mod error;
pub mod format;
pub mod fourcc;
pub mod layout;

pub use bands::BandLayout;
pub use error::{Result, SynthError};
pub use format::{ByteOrder, Family, FormatDescriptor, PixelFormat, RowOrder, Subsampling};
pub use fourcc::{subtype, FourCc, Guid};
pub use layout::{
    align_up, frame_size, pitch, plane_layouts, FrameGeometry, PitchRule, PitchScale,
    PlaneLayout, PlaneRule, MAX_DIMENSION, MIN_DIMENSION,
};

/// Defaults of the virtual capture pin.
pub mod defaults {
    /// Default frame width.
    pub const WIDTH: u32 = 2048;

    /// Default frame height.
    pub const HEIGHT: i32 = 1024;
}
