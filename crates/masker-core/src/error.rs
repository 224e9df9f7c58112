//! Error types for masker-core
//!
//! Provides a unified error type for the core data structures.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::color::{Channel, PixelFormat};
use thiserror::Error;

/// Masker core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the declared dimensions
    #[error("dimension mismatch: expected {expected} pixels, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Channel not present in the pixel format
    #[error("channel {channel:?} not present in {format:?} pixels")]
    MissingChannel {
        channel: Channel,
        format: PixelFormat,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
