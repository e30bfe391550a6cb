//! Error types for synthcam.

use thiserror::Error;

/// Main error type for synthcam operations.
#[derive(Error, Debug)]
pub enum SynthError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown pixel format: {0}")]
    UnknownFormat(String),

    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: i32 },

    #[error("Buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    #[error("Glyph sheet truncated: expected {expected} bytes, got {got}")]
    GlyphSheet { expected: usize, got: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for synthcam operations.
pub type Result<T> = std::result::Result<T, SynthError>;
