//! Magic wand selection
//!
//! [`Masker`] grows a selection from seed pixels with an iterative
//! scanline flood fill. Each seed adds the 4-connected region of
//! fillable pixels around it to the session's mask; masks accumulate
//! until [`Masker::reset`] is called.
//!
//! # Algorithm
//!
//! 1. Fill the seed's row left and right as far as pixels are fillable and
//!    unvisited, marking each one, and push the resulting span.
//! 2. Pop a span. For every column under it, if the pixel directly above
//!    (or below) is fillable and unvisited, fill that row the same way and
//!    push its span.
//! 3. Repeat until the stack is empty.
//!
//! Every pixel is marked visited the moment it is masked, so no pixel is
//! filled twice, the fill runs in time proportional to the pixels it
//! masks, and later seeds never rescan an earlier selection.

use crate::error::{RegionError, RegionResult};
use crate::mask::MaskState;
use crate::render;
use crate::span::{Span, SpanWorklist};
use crate::threshold::{ChannelThreshold, ColorThreshold, ThresholdConfig};
use log::{debug, trace};
use masker_core::{PixelFormat, Rect, SourceImage};

/// Selection session over one source image.
///
/// The engine owns a copy of the source pixels, its [`MaskState`] and a
/// reusable span stack. Operations take `&mut self`, so calls on one
/// session are serialized by the borrow checker. [`Masker::finish`]
/// consumes the session; no call can follow it.
///
/// # Examples
///
/// ```
/// use masker_core::{PixelFormat, Rect};
/// use masker_region::Masker;
///
/// // 5x5 canvas, column 2 is dark and splits the bright halves
/// let pixels: Vec<u32> = (0..25)
///     .map(|i| if i % 5 == 2 { 0x000000ff } else { 0xffffffff })
///     .collect();
/// let mut masker = Masker::from_pixels(&pixels, 5, 5, PixelFormat::Rgba).unwrap();
///
/// assert_eq!(masker.mask(0, 0).unwrap(), 10);
/// assert_eq!(masker.dirty_rect(), Rect::new_unchecked(0, 0, 2, 5));
///
/// assert_eq!(masker.mask(4, 4).unwrap(), 10);
/// assert_eq!(masker.dirty_rect(), Rect::full(5, 5));
/// ```
#[derive(Debug, Clone)]
pub struct Masker<T = ChannelThreshold> {
    image: SourceImage,
    threshold: T,
    state: MaskState,
    worklist: SpanWorklist,
}

impl Masker<ChannelThreshold> {
    /// Create a session with the default threshold (blue in `200..=255`).
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidFormat`] if the image's format has no
    /// blue channel.
    pub fn new(image: SourceImage) -> RegionResult<Self> {
        Self::with_config(image, ThresholdConfig::default())
    }

    /// Create a session with a single-channel threshold.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidFormat`] if the image's format lacks
    /// the configured channel.
    pub fn with_config(image: SourceImage, config: ThresholdConfig) -> RegionResult<Self> {
        let threshold = config.bind(image.format())?;
        Ok(Self::with_threshold(image, threshold))
    }

    /// Create a session from a borrowed pixel buffer with the default
    /// threshold.
    ///
    /// The buffer is copied, so the caller may mutate or release it as
    /// soon as this returns.
    ///
    /// # Errors
    ///
    /// - [`RegionError::DimensionMismatch`] if `pixels.len() != width * height`
    /// - [`RegionError::InvalidFormat`] if `format` has no blue channel
    /// - [`RegionError::Core`] if width or height is zero
    pub fn from_pixels(
        pixels: &[u32],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> RegionResult<Self> {
        Self::from_pixels_with_config(pixels, width, height, format, ThresholdConfig::default())
    }

    /// Create a session from a borrowed pixel buffer with a threshold config.
    pub fn from_pixels_with_config(
        pixels: &[u32],
        width: u32,
        height: u32,
        format: PixelFormat,
        config: ThresholdConfig,
    ) -> RegionResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RegionError::DimensionMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        // Check the format before paying for the copy
        let threshold = config.bind(format)?;
        let image = SourceImage::from_pixels(pixels, width, height, format)?;
        Ok(Self::with_threshold(image, threshold))
    }
}

impl<T: ColorThreshold> Masker<T> {
    /// Create a session with an arbitrary predicate.
    ///
    /// The predicate sees raw packed pixels; it is responsible for
    /// interpreting the image's format.
    pub fn with_threshold(image: SourceImage, threshold: T) -> Self {
        let state = MaskState::new(image.width(), image.height());
        debug!(
            "masker: {}x{} {:?} source",
            image.width(),
            image.height(),
            image.format()
        );
        Self {
            image,
            threshold,
            state,
            worklist: SpanWorklist::new(),
        }
    }

    /// Canvas width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The source image.
    pub fn image(&self) -> &SourceImage {
        &self.image
    }

    /// The fill predicate.
    pub fn threshold(&self) -> &T {
        &self.threshold
    }

    /// The selection state.
    pub fn state(&self) -> &MaskState {
        &self.state
    }

    /// Add the region around `(x, y)` to the selection.
    ///
    /// Returns the number of pixels this call newly masked. A seed that is
    /// not fillable, or that an earlier call already masked, returns 0 and
    /// leaves the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfBounds`] if `(x, y)` is outside the
    /// canvas; the state is unchanged.
    pub fn mask(&mut self, x: i32, y: i32) -> RegionResult<usize> {
        let (sx, sy) = self.check_point(x, y)?;
        if !self.can_fill(sx, sy) {
            debug!("mask ({}, {}): seed not fillable or already masked", x, y);
            return Ok(0);
        }

        let mut filled = self.linear_fill(sx, sy);
        let height = self.height();

        while let Some(span) = self.worklist.pop() {
            let up = span.y.checked_sub(1);
            let down = Some(span.y + 1).filter(|&row| row < height);

            for i in span.start_x..=span.end_x {
                if let Some(row) = up {
                    if self.can_fill(i, row) {
                        filled += self.linear_fill(i, row);
                    }
                }
                if let Some(row) = down {
                    if self.can_fill(i, row) {
                        filled += self.linear_fill(i, row);
                    }
                }
            }
        }

        let peak = self.worklist.take_peak();
        debug!(
            "mask ({}, {}): {} new pixels, {} total, dirty {}, peak stack {}",
            x,
            y,
            filled,
            self.state.masked_count(),
            self.state.dirty_rect(),
            peak
        );
        Ok(filled)
    }

    /// Replace the selection with the region around `(x, y)`.
    ///
    /// Equivalent to [`reset`](Self::reset) followed by [`mask`](Self::mask),
    /// except that an out-of-range seed leaves the current selection intact.
    pub fn select(&mut self, x: i32, y: i32) -> RegionResult<usize> {
        self.check_point(x, y)?;
        self.reset();
        self.mask(x, y)
    }

    /// Clear the selection and start a new accumulation epoch.
    pub fn reset(&mut self) {
        self.state.reset();
        self.worklist.clear();
        debug!("reset: {}x{}", self.width(), self.height());
    }

    /// The coverage mask, row-major, `width * height` bytes of 0 or 0xFF.
    #[inline]
    pub fn mask_buffer(&self) -> &[u8] {
        self.state.mask()
    }

    /// The dirty rectangle (left/top inclusive, right/bottom exclusive).
    ///
    /// The full canvas after construction or [`reset`](Self::reset), then
    /// the exact bounding box of the masked pixels.
    #[inline]
    pub fn dirty_rect(&self) -> Rect {
        self.state.dirty_rect()
    }

    /// Bounding box of the masked pixels, or `None` if nothing is masked.
    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.state.bounds()
    }

    /// Total pixels masked since the last reset.
    #[inline]
    pub fn masked_count(&self) -> usize {
        self.state.masked_count()
    }

    /// Check whether `(x, y)` is selected.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfBounds`] if `(x, y)` is outside the canvas.
    pub fn is_masked(&self, x: i32, y: i32) -> RegionResult<bool> {
        let (x, y) = self.check_point(x, y)?;
        Ok(self.state.is_masked(x, y))
    }

    /// Copy the mask inside the dirty rectangle.
    ///
    /// Returns the rectangle and its rows packed tightly, `rect.width()`
    /// bytes each. Suited to uploading only the changed part of a texture.
    pub fn crop_dirty(&self) -> (Rect, Vec<u8>) {
        let rect = self.dirty_rect();
        (rect, render::crop_mask(&self.state, rect))
    }

    /// Composite `color` over the source wherever the mask is set.
    ///
    /// `color` is a packed pixel in the source's format.
    pub fn overlay(&self, color: u32) -> Vec<u32> {
        render::overlay(&self.image, &self.state, color)
    }

    /// End the session and take the mask.
    pub fn finish(self) -> Vec<u8> {
        debug!("finish: {} pixels masked", self.state.masked_count());
        self.state.into_mask()
    }

    fn check_point(&self, x: i32, y: i32) -> RegionResult<(u32, u32)> {
        if !self.image.contains(x, y) {
            return Err(RegionError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok((x as u32, y as u32))
    }

    #[inline]
    fn can_fill(&self, x: u32, y: u32) -> bool {
        !self.state.is_visited(x, y)
            && self
                .threshold
                .fillable(self.image.get_pixel_unchecked(x, y))
    }

    #[inline]
    fn fill_pixel(&mut self, x: u32, y: u32) {
        self.state.set_masked(x, y);
        self.state.mark_visited(x, y);
    }

    /// Fill the maximal run through `(x, y)` and push it.
    ///
    /// `(x, y)` must be fillable and unvisited. Returns the run length.
    fn linear_fill(&mut self, x: u32, y: u32) -> usize {
        self.fill_pixel(x, y);

        let mut left = x;
        while left > 0 && self.can_fill(left - 1, y) {
            left -= 1;
            self.fill_pixel(left, y);
        }

        let last = self.width() - 1;
        let mut right = x;
        while right < last && self.can_fill(right + 1, y) {
            right += 1;
            self.fill_pixel(right, y);
        }

        self.state.expand_dirty_span(left, right, y);
        let span = Span::new(left, right, y);
        trace!("span {:?}", span);
        self.worklist.push(span);
        span.len() as usize
    }
}

/// Result of a one-shot selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WandSelection {
    /// Coverage mask (0xFF = selected, 0 = not selected)
    pub mask: Vec<u8>,
    /// Bounds of the selected region, `None` if nothing was selected
    pub bounds: Option<Rect>,
    /// Number of selected pixels
    pub pixel_count: usize,
}

/// Select the region around `(x, y)` without keeping a session.
///
/// Takes the image by value; clone it first to keep using it.
///
/// # Errors
///
/// Returns [`RegionError::InvalidFormat`] if the image's format lacks the
/// configured channel, or [`RegionError::OutOfBounds`] for a bad seed.
pub fn magic_wand(
    image: SourceImage,
    x: i32,
    y: i32,
    config: &ThresholdConfig,
) -> RegionResult<WandSelection> {
    let mut masker = Masker::with_config(image, *config)?;
    let pixel_count = masker.mask(x, y)?;
    let bounds = masker.bounds();
    Ok(WandSelection {
        mask: masker.finish(),
        bounds,
        pixel_count,
    })
}
