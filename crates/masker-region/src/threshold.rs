//! Fillable-pixel predicates
//!
//! The flood fill asks one question of every pixel it reaches: does this
//! pixel belong to the region? That question is answered by a
//! [`ColorThreshold`], kept separate from the traversal so the policy can
//! change without touching the fill.
//!
//! The stock policy reads a single 8-bit channel and compares it against
//! inclusive bounds ([`ThresholdConfig`] / [`ChannelThreshold`]). Any
//! `Fn(u32) -> bool` closure is also a valid predicate.

use crate::error::{RegionError, RegionResult};
use masker_core::{Channel, ChannelExtractor, Error, PixelFormat};

/// Decides whether a packed source pixel is fillable.
///
/// Implementations must be pure and O(1).
pub trait ColorThreshold {
    /// Returns true if `pixel` belongs to the fillable region.
    fn fillable(&self, pixel: u32) -> bool;
}

impl<F> ColorThreshold for F
where
    F: Fn(u32) -> bool,
{
    #[inline]
    fn fillable(&self, pixel: u32) -> bool {
        self(pixel)
    }
}

/// Comparison applied to the extracted channel value.
///
/// Both bounds are inclusive: a value equal to a bound is fillable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdPolicy {
    /// `lo <= value <= hi`
    Range { lo: u8, hi: u8 },
    /// `value >= min`
    AtLeast(u8),
}

impl ThresholdPolicy {
    /// Apply the policy to a channel value.
    #[inline]
    pub fn accepts(self, value: u8) -> bool {
        match self {
            ThresholdPolicy::Range { lo, hi } => lo <= value && value <= hi,
            ThresholdPolicy::AtLeast(min) => value >= min,
        }
    }
}

/// Configuration for the single-channel threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// Channel the policy reads
    pub channel: Channel,
    /// Comparison applied to the channel value
    pub policy: ThresholdPolicy,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            channel: Channel::Blue,
            policy: ThresholdPolicy::Range { lo: 200, hi: 255 },
        }
    }
}

impl ThresholdConfig {
    /// Create a config for an inclusive range on `channel`
    pub fn range(channel: Channel, lo: u8, hi: u8) -> Self {
        Self {
            channel,
            policy: ThresholdPolicy::Range { lo, hi },
        }
    }

    /// Create a config for an inclusive lower bound on `channel`
    pub fn at_least(channel: Channel, min: u8) -> Self {
        Self {
            channel,
            policy: ThresholdPolicy::AtLeast(min),
        }
    }

    /// Set the channel
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    /// Set the policy
    pub fn with_policy(mut self, policy: ThresholdPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the config against a pixel format.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidFormat`] if `format` does not carry
    /// the configured channel.
    pub fn bind(self, format: PixelFormat) -> RegionResult<ChannelThreshold> {
        let extractor = ChannelExtractor::new(self.channel, format).map_err(|e| match e {
            Error::MissingChannel { channel, format } => {
                RegionError::InvalidFormat { format, channel }
            }
            other => RegionError::Core(other),
        })?;
        Ok(ChannelThreshold {
            extractor,
            policy: self.policy,
        })
    }
}

/// A [`ThresholdConfig`] bound to a concrete pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelThreshold {
    extractor: ChannelExtractor,
    policy: ThresholdPolicy,
}

impl ChannelThreshold {
    /// The channel being tested.
    pub fn channel(&self) -> Channel {
        self.extractor.channel()
    }

    /// The comparison being applied.
    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }
}

impl ColorThreshold for ChannelThreshold {
    #[inline]
    fn fillable(&self, pixel: u32) -> bool {
        self.policy.accepts(self.extractor.extract(pixel))
    }
}
