//! Mask read-out helpers
//!
//! Turn a [`MaskState`] into buffers a host can display or upload:
//! a tightly packed crop of the mask, or the source image with a solid
//! color composited over the selection.

use crate::mask::{MASKED, MaskState};
use masker_core::{Rect, SourceImage};

/// Copy the part of the mask inside `rect`.
///
/// `rect` is clipped to the canvas first. Rows are packed with no
/// padding, so the result holds `clipped.width() * clipped.height()`
/// bytes. A rect entirely outside the canvas yields an empty vector.
pub fn crop_mask(state: &MaskState, rect: Rect) -> Vec<u8> {
    let canvas = Rect::full(state.width(), state.height());
    let Some(clip) = rect.intersect(&canvas) else {
        return Vec::new();
    };

    let stride = state.width() as usize;
    let mask = state.mask();
    let mut out = Vec::with_capacity(clip.area() as usize);
    for y in clip.top..clip.bottom {
        let start = y as usize * stride + clip.left as usize;
        out.extend_from_slice(&mask[start..start + clip.width() as usize]);
    }
    out
}

/// Replace every masked pixel of `image` with `color`.
///
/// Only the rows inside the mask's bounds are inspected; everything else
/// is copied straight from the source.
pub fn overlay(image: &SourceImage, state: &MaskState, color: u32) -> Vec<u32> {
    let mut out = image.data().to_vec();
    let Some(bounds) = state.bounds() else {
        return out;
    };

    let stride = image.width() as usize;
    let mask = state.mask();
    for y in bounds.top..bounds.bottom {
        let row = y as usize * stride;
        for x in bounds.left..bounds.right {
            let i = row + x as usize;
            if mask[i] == MASKED {
                out[i] = color;
            }
        }
    }
    out
}
