//! SourceImage - The immutable pixel grid a selection reads from
//!
//! # Pixel layout
//!
//! - One packed 32-bit word per pixel, channel order given by [`PixelFormat`]
//! - Rows are stored top to bottom with no padding
//! - Pixel `(x, y)` lives at index `y * width + x`
//!
//! # Ownership model
//!
//! `SourceImage` owns its pixels outright. Constructing one from a slice
//! copies the slice, so the caller may reuse or free its buffer immediately.
//! There is no mutable access after construction.

use crate::color::{ChannelExtractor, PixelFormat};
use crate::error::{Error, Result};

/// Immutable `width × height` grid of packed pixels.
///
/// # Examples
///
/// ```
/// use masker_core::{PixelFormat, SourceImage};
///
/// let image = SourceImage::filled(4, 3, 0xffffffff, PixelFormat::Rgba).unwrap();
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.height(), 3);
/// assert_eq!(image.get_pixel(3, 2), Some(0xffffffff));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u32>,
}

impl SourceImage {
    /// Create an image by taking ownership of a pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn new(width: u32, height: u32, format: PixelFormat, data: Vec<u32>) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Create an image from a borrowed pixel slice.
    ///
    /// The slice is copied; the image never aliases caller memory.
    pub fn from_pixels(pixels: &[u32], width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        // Validate before copying so a bad call never allocates
        let expected = Self::checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Self::new(width, height, format, pixels.to_vec())
    }

    /// Create an image with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: u32, format: PixelFormat) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Self::new(width, height, format, vec![value; len])
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, format: PixelFormat, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u32,
    {
        let len = Self::checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(width, height, format, data)
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Get raw access to the pixel data, row-major.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Total pixel count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; zero-sized images cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether `(x, y)` lies inside the image.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[self.index(x, y)]
    }

    /// Get a pixel by its row-major index.
    #[inline]
    pub fn pixel_at(&self, index: usize) -> u32 {
        self.data[index]
    }

    /// Row-major index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Extract one channel of every pixel as an 8-bit plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingChannel`] if the format lacks the channel.
    pub fn channel_plane(&self, channel: crate::Channel) -> Result<Vec<u8>> {
        let extractor = ChannelExtractor::new(channel, self.format)?;
        Ok(self.data.iter().map(|&p| extractor.extract(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Channel;

    #[test]
    fn test_new_validates_length() {
        assert!(SourceImage::new(2, 2, PixelFormat::Rgba, vec![0; 4]).is_ok());
        assert_eq!(
            SourceImage::new(2, 2, PixelFormat::Rgba, vec![0; 5]),
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            SourceImage::from_pixels(&[], 0, 3, PixelFormat::Rgba),
            Err(Error::InvalidDimension {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_from_pixels_copies() {
        let mut buf = vec![1u32, 2, 3, 4, 5, 6];
        let image = SourceImage::from_pixels(&buf, 3, 2, PixelFormat::Argb).unwrap();
        buf[0] = 99;
        assert_eq!(image.get_pixel(0, 0), Some(1));
        assert_eq!(image.row_data(1), &[4, 5, 6]);
        assert_eq!(image.get_pixel(3, 0), None);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let image = SourceImage::from_fn(3, 2, PixelFormat::Rgba, |x, y| y * 10 + x).unwrap();
        assert_eq!(image.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(image.index(2, 1), 5);
        assert!(image.contains(2, 1));
        assert!(!image.contains(-1, 0));
        assert!(!image.contains(0, 2));
    }

    #[test]
    fn test_channel_plane() {
        let image = SourceImage::filled(2, 1, 0x11223344, PixelFormat::Rgba).unwrap();
        assert_eq!(image.channel_plane(Channel::Blue).unwrap(), vec![0x33, 0x33]);
        let alpha_only = SourceImage::filled(2, 1, 0x80, PixelFormat::Alpha).unwrap();
        assert!(alpha_only.channel_plane(Channel::Red).is_err());
    }
}
