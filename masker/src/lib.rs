//! Masker - Magic wand region selection for Rust
//!
//! # Overview
//!
//! Masker grows a selection mask from seed points over a 32-bit pixel
//! buffer. Pixels join the selection when a channel threshold accepts
//! them and they are 4-connected to the seed. Repeated seeds accumulate
//! into one mask, and a dirty rectangle tracks the area that changed.
//!
//! # Example
//!
//! ```
//! use masker::{PixelFormat, Rect, SourceImage};
//! use masker::region::{Masker, ThresholdConfig, magic_wand};
//!
//! // Bright left half, dark right half
//! let image = SourceImage::from_fn(4, 4, PixelFormat::Rgba, |x, _| {
//!     if x < 2 { 0xffffffff } else { 0x000000ff }
//! })
//! .unwrap();
//!
//! let mut masker = Masker::new(image.clone()).unwrap();
//! assert_eq!(masker.mask(0, 0).unwrap(), 8);
//! assert_eq!(masker.dirty_rect(), Rect::new(0, 0, 2, 4).unwrap());
//!
//! let selection = magic_wand(image, 1, 3, &ThresholdConfig::default()).unwrap();
//! assert_eq!(selection.pixel_count, 8);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use masker_core::*;

// Re-export the engine as a module to avoid name conflicts
pub use masker_region as region;
