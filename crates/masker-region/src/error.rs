//! Error types for masker-region

use masker_core::{Channel, PixelFormat};
use thiserror::Error;

/// Errors that can occur during selection operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] masker_core::Error),

    /// The threshold reads a channel the source format does not carry
    #[error("invalid format: {format:?} pixels have no {channel:?} channel")]
    InvalidFormat {
        format: PixelFormat,
        channel: Channel,
    },

    /// Pixel buffer length does not match width × height
    #[error("dimension mismatch: {width}x{height} needs {expected} pixels, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Coordinates outside the canvas
    #[error("point ({x}, {y}) outside {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Result type for selection operations
pub type RegionResult<T> = Result<T, RegionError>;
