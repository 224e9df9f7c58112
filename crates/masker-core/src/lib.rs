//! Masker Core - Basic data structures for region selection
//!
//! This crate provides the fundamental data structures used throughout
//! the masker selection engine:
//!
//! - [`SourceImage`] - Immutable grid of packed 32-bit pixels
//! - [`PixelFormat`] / [`Channel`] / [`ChannelExtractor`] - Pixel layouts
//!   and single-channel extraction
//! - [`Rect`] - Pixel rectangles with exclusive right/bottom edges
//!
//! # Example
//!
//! ```
//! use masker_core::{Channel, ChannelExtractor, PixelFormat, Rect, SourceImage};
//!
//! let image = SourceImage::filled(8, 8, 0x000000ff, PixelFormat::Argb).unwrap();
//! let blue = ChannelExtractor::new(Channel::Blue, image.format()).unwrap();
//! assert_eq!(blue.extract(image.get_pixel(0, 0).unwrap()), 0xff);
//! assert_eq!(Rect::full(image.width(), image.height()).area(), 64);
//! ```

pub mod color;
pub mod error;
pub mod image;
pub mod rect;

pub use color::{Channel, ChannelExtractor, PixelFormat};
pub use error::{Error, Result};
pub use image::SourceImage;
pub use rect::Rect;
