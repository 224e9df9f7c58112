//! Color channels and packed pixel layouts
//!
//! Source pixels are stored as packed 32-bit words. A [`PixelFormat`]
//! records where each 8-bit channel lives inside the word, so that a
//! single [`Channel`] can be pulled out with one shift and mask.
//!
//! # Pixel formats
//!
//! | Format  | Word layout  | Notes                                         |
//! |---------|--------------|-----------------------------------------------|
//! | `Rgba`  | `0xRRGGBBAA` | red in MSB, the library's native layout       |
//! | `Argb`  | `0xAARRGGBB` | common for packed-int bitmaps                 |
//! | `Abgr`  | `0xAABBGGRR` | an RGBA byte buffer read as little-endian u32 |
//! | `Rgbx`  | `0xRRGGBBxx` | no alpha channel                              |
//! | `Alpha` | `0x000000AA` | coverage only, no color channels              |

use crate::error::{Error, Result};

/// A single 8-bit color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
    /// Alpha channel
    Alpha,
}

/// Layout of a packed 32-bit source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// `0xRRGGBBAA`
    #[default]
    Rgba,
    /// `0xAARRGGBB`
    Argb,
    /// `0xAABBGGRR`
    Abgr,
    /// `0xRRGGBBxx`, low byte ignored
    Rgbx,
    /// `0x000000AA`
    Alpha,
}

impl PixelFormat {
    /// Bit offset of `channel` within a pixel word, or `None` if the
    /// format does not carry that channel.
    pub fn shift(self, channel: Channel) -> Option<u32> {
        use Channel::*;
        match (self, channel) {
            (PixelFormat::Rgba, Red) => Some(24),
            (PixelFormat::Rgba, Green) => Some(16),
            (PixelFormat::Rgba, Blue) => Some(8),
            (PixelFormat::Rgba, Alpha) => Some(0),

            (PixelFormat::Argb, Alpha) => Some(24),
            (PixelFormat::Argb, Red) => Some(16),
            (PixelFormat::Argb, Green) => Some(8),
            (PixelFormat::Argb, Blue) => Some(0),

            (PixelFormat::Abgr, Alpha) => Some(24),
            (PixelFormat::Abgr, Blue) => Some(16),
            (PixelFormat::Abgr, Green) => Some(8),
            (PixelFormat::Abgr, Red) => Some(0),

            (PixelFormat::Rgbx, Red) => Some(24),
            (PixelFormat::Rgbx, Green) => Some(16),
            (PixelFormat::Rgbx, Blue) => Some(8),
            (PixelFormat::Rgbx, Alpha) => None,

            (PixelFormat::Alpha, Alpha) => Some(0),
            (PixelFormat::Alpha, _) => None,
        }
    }

    /// Check whether the format carries `channel`.
    #[inline]
    pub fn has_channel(self, channel: Channel) -> bool {
        self.shift(channel).is_some()
    }

    /// Pack RGBA components into a word of this format.
    ///
    /// Channels the format does not carry are dropped.
    pub fn compose(self, r: u8, g: u8, b: u8, a: u8) -> u32 {
        [
            (Channel::Red, r),
            (Channel::Green, g),
            (Channel::Blue, b),
            (Channel::Alpha, a),
        ]
        .into_iter()
        .filter_map(|(channel, v)| self.shift(channel).map(|s| (v as u32) << s))
        .fold(0, |acc, v| acc | v)
    }
}

/// Extracts one channel from pixels of a fixed format.
///
/// Construction resolves the channel's shift once, so extraction is a
/// shift and a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelExtractor {
    channel: Channel,
    shift: u32,
}

impl ChannelExtractor {
    /// Create an extractor for `channel` in pixels of `format`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingChannel`] if `format` has no such channel.
    pub fn new(channel: Channel, format: PixelFormat) -> Result<Self> {
        let shift = format
            .shift(channel)
            .ok_or(Error::MissingChannel { channel, format })?;
        Ok(Self { channel, shift })
    }

    /// The channel this extractor reads.
    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Extract the channel value from a packed pixel.
    #[inline]
    pub fn extract(&self, pixel: u32) -> u8 {
        ((pixel >> self.shift) & 0xff) as u8
    }
}
