//! Selection mask and visit state
//!
//! [`MaskState`] holds everything a selection session mutates:
//!
//! - an 8-bit coverage mask, `0` for unselected and [`MASKED`] for selected
//! - a 1-bit "visited" grid recording which pixels the fill has already
//!   evaluated in the current accumulation epoch
//! - the dirty rectangle bounding every pixel masked in the epoch
//!
//! All per-pixel accessors index row-major (`y * width + x`) and trust
//! their coordinates. Bounds are checked by the engine's public entry
//! points, never here.
//!
//! # Dirty rectangle
//!
//! The rectangle uses [`Rect`]'s convention: left/top inclusive,
//! right/bottom exclusive. After [`reset`](MaskState::reset) it is the
//! full canvas `{0, 0, width, height}`. The first pixel masked afterwards
//! narrows it to that pixel, and every later pixel grows it by union, so
//! once anything is masked it is exactly the bounding box of the mask.

use crate::grid::BitGrid;
use masker_core::Rect;

/// Coverage value of a selected pixel.
pub const MASKED: u8 = 0xff;

/// Coverage value of an unselected pixel.
pub const UNMASKED: u8 = 0x00;

/// Per-session selection state.
#[derive(Debug, Clone)]
pub struct MaskState {
    width: u32,
    height: u32,
    mask: Vec<u8>,
    visited: BitGrid,
    /// Tight bounds of the masked pixels; `None` until the first pixel
    /// of an epoch is masked
    bounds: Option<Rect>,
    masked: usize,
}

impl MaskState {
    /// Create a cleared state for a `width × height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mask: vec![UNMASKED; width as usize * height as usize],
            visited: BitGrid::new(width, height),
            bounds: None,
            masked: 0,
        }
    }

    /// Canvas width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Clear the mask and visit flags and restore the full-canvas dirty rect.
    ///
    /// Runs in O(width × height).
    pub fn reset(&mut self) {
        self.mask.fill(UNMASKED);
        self.visited.clear_all();
        self.bounds = None;
        self.masked = 0;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check whether the fill has evaluated `(x, y)` this epoch.
    #[inline]
    pub fn is_visited(&self, x: u32, y: u32) -> bool {
        self.visited.get(self.index(x, y))
    }

    /// Record that the fill has evaluated `(x, y)`.
    #[inline]
    pub fn mark_visited(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.visited.set(i);
    }

    /// Check whether `(x, y)` is selected.
    #[inline]
    pub fn is_masked(&self, x: u32, y: u32) -> bool {
        self.mask[self.index(x, y)] == MASKED
    }

    /// Select `(x, y)`.
    #[inline]
    pub fn set_masked(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        if self.mask[i] != MASKED {
            self.mask[i] = MASKED;
            self.masked += 1;
        }
    }

    /// Grow the dirty rect to cover `(x, y)`.
    #[inline]
    pub fn expand_dirty_rect(&mut self, x: u32, y: u32) {
        let (x, y) = (x as i32, y as i32);
        match &mut self.bounds {
            Some(rect) => rect.include_point(x, y),
            None => self.bounds = Some(Rect::from_point(x, y)),
        }
    }

    /// Grow the dirty rect to cover the run `start_x..=end_x` on row `y`.
    ///
    /// Equivalent to calling [`expand_dirty_rect`](Self::expand_dirty_rect)
    /// on both ends of the run.
    #[inline]
    pub fn expand_dirty_span(&mut self, start_x: u32, end_x: u32, y: u32) {
        self.expand_dirty_rect(start_x, y);
        self.expand_dirty_rect(end_x, y);
    }

    /// The dirty rectangle.
    ///
    /// Full canvas until something is masked, then the exact bounding box
    /// of the mask.
    pub fn dirty_rect(&self) -> Rect {
        self.bounds
            .unwrap_or_else(|| Rect::full(self.width, self.height))
    }

    /// Tight bounds of the mask, or `None` if nothing is masked.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The coverage mask, row-major, one byte per pixel.
    #[inline]
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// Number of selected pixels in this epoch.
    #[inline]
    pub fn masked_count(&self) -> usize {
        self.masked
    }

    /// Number of visited pixels in this epoch.
    pub fn visited_count(&self) -> usize {
        self.visited.count_ones()
    }

    /// Take the coverage mask, consuming the state.
    pub fn into_mask(self) -> Vec<u8> {
        self.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_clear() {
        let state = MaskState::new(4, 3);
        assert_eq!(state.mask().len(), 12);
        assert!(state.mask().iter().all(|&v| v == UNMASKED));
        assert_eq!(state.visited_count(), 0);
        assert_eq!(state.dirty_rect(), Rect::full(4, 3));
        assert_eq!(state.bounds(), None);
    }

    #[test]
    fn test_row_major_indexing() {
        let mut state = MaskState::new(4, 3);
        state.set_masked(1, 2);
        assert_eq!(state.mask()[2 * 4 + 1], MASKED);
        assert!(state.is_masked(1, 2));
        assert!(!state.is_masked(2, 1));

        state.mark_visited(3, 0);
        assert!(state.is_visited(3, 0));
        assert!(!state.is_visited(0, 1));
    }

    #[test]
    fn test_set_masked_counts_once() {
        let mut state = MaskState::new(2, 2);
        state.set_masked(0, 0);
        state.set_masked(0, 0);
        assert_eq!(state.masked_count(), 1);
    }

    #[test]
    fn test_dirty_rect_narrows_then_grows() {
        let mut state = MaskState::new(10, 10);
        state.expand_dirty_rect(4, 5);
        assert_eq!(state.dirty_rect(), Rect::from_point(4, 5));

        state.expand_dirty_rect(2, 7);
        assert_eq!(state.dirty_rect(), Rect::new_unchecked(2, 5, 5, 8));

        state.expand_dirty_span(1, 8, 6);
        assert_eq!(state.dirty_rect(), Rect::new_unchecked(1, 5, 9, 8));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = MaskState::new(3, 3);
        for y in 0..3 {
            state.set_masked(1, y);
            state.mark_visited(1, y);
            state.expand_dirty_rect(1, y);
        }
        assert_eq!(state.dirty_rect(), Rect::new_unchecked(1, 0, 2, 3));

        state.reset();
        assert!(state.mask().iter().all(|&v| v == UNMASKED));
        assert_eq!(state.visited_count(), 0);
        assert_eq!(state.masked_count(), 0);
        assert_eq!(state.dirty_rect(), Rect::full(3, 3));
    }
}
