//! masker-region - Region selection for masker
//!
//! This crate provides the magic wand engine:
//!
//! - **Thresholds** - Predicates deciding which pixels are fillable
//! - **Mask state** - Coverage mask, visit flags and dirty rectangle
//! - **Scanline fill** - Iterative span-based flood fill with accumulation
//! - **Read-out** - Cropping the dirty region and compositing overlays
//!
//! # Examples
//!
//! ## Accumulating a selection
//!
//! ```
//! use masker_core::{PixelFormat, Rect, SourceImage};
//! use masker_region::Masker;
//!
//! // Two bright 2x2 blobs on a dark 6x2 canvas
//! let image = SourceImage::from_fn(6, 2, PixelFormat::Rgba, |x, _| {
//!     if x < 2 || x >= 4 { 0xffffffff } else { 0x000000ff }
//! })
//! .unwrap();
//! let mut masker = Masker::new(image).unwrap();
//!
//! assert_eq!(masker.mask(0, 0).unwrap(), 4);
//! assert_eq!(masker.mask(5, 1).unwrap(), 4);
//! assert_eq!(masker.masked_count(), 8);
//! assert_eq!(masker.dirty_rect(), Rect::full(6, 2));
//!
//! masker.reset();
//! assert_eq!(masker.masked_count(), 0);
//! ```
//!
//! ## Choosing the threshold
//!
//! ```
//! use masker_core::{Channel, PixelFormat, SourceImage};
//! use masker_region::{Masker, ThresholdConfig};
//!
//! let image = SourceImage::filled(3, 3, 0x80_00_00_ff, PixelFormat::Rgba).unwrap();
//! let config = ThresholdConfig::at_least(Channel::Red, 0x80);
//! let mut masker = Masker::with_config(image, config).unwrap();
//! assert_eq!(masker.mask(1, 1).unwrap(), 9);
//! ```

pub mod error;
pub mod grid;
pub mod mask;
pub mod render;
pub mod span;
pub mod threshold;
pub mod wand;

// Re-export core types
pub use masker_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use grid::BitGrid;
pub use mask::{MASKED, MaskState, UNMASKED};
pub use render::{crop_mask, overlay};
pub use span::{Span, SpanWorklist};
pub use threshold::{ChannelThreshold, ColorThreshold, ThresholdConfig, ThresholdPolicy};
pub use wand::{Masker, WandSelection, magic_wand};
