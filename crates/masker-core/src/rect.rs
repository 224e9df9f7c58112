//! Rect - Axis-aligned pixel rectangles
//!
//! Rectangles use edge coordinates: `left` and `top` are the first
//! column and row inside the rectangle, `right` and `bottom` are one past
//! the last. A rectangle covering pixels `x0..=x1` × `y0..=y1` is
//! therefore `{ left: x0, top: y0, right: x1 + 1, bottom: y1 + 1 }`, and a
//! rectangle covering a whole `w × h` canvas is `{ 0, 0, w, h }`.

use crate::error::{Error, Result};

/// A rectangle with inclusive left/top and exclusive right/bottom edges.
///
/// This is a small `Copy` type; it is passed and returned by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// First column inside the rectangle
    pub left: i32,
    /// First row inside the rectangle
    pub top: i32,
    /// One past the last column
    pub right: i32,
    /// One past the last row
    pub bottom: i32,
}

impl Rect {
    /// Create a new rect
    ///
    /// # Errors
    ///
    /// Returns an error if `right < left` or `bottom < top`.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        if right < left || bottom < top {
            return Err(Error::InvalidDimension {
                width: right.saturating_sub(left).max(0) as u32,
                height: bottom.saturating_sub(top).max(0) as u32,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Create a rect without validation
    pub const fn new_unchecked(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The 1×1 rect covering pixel `(x, y)`.
    #[inline]
    pub const fn from_point(x: i32, y: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        }
    }

    /// The rect covering a whole `width × height` canvas.
    #[inline]
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        }
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Check if the rect is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Check if a pixel is inside the rect
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check if this rect contains another rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Grow the rect in place so that it covers pixel `(x, y)`.
    #[inline]
    pub fn include_point(&mut self, x: i32, y: i32) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x + 1);
        self.bottom = self.bottom.max(y + 1);
    }

    /// Compute the union (bounding rect) of two rects
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Compute the intersection of two rects
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let r = Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        if r.is_empty() { None } else { Some(r) }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {} - {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rect::new(10, 20, 40, 60).unwrap();
        assert_eq!(r.width(), 30);
        assert_eq!(r.height(), 40);
        assert_eq!(r.area(), 1200);

        assert!(Rect::new(10, 0, 5, 5).is_err());
    }

    #[test]
    fn test_point_rect_is_one_pixel() {
        let r = Rect::from_point(3, 4);
        assert_eq!(r.area(), 1);
        assert!(r.contains_point(3, 4));
        assert!(!r.contains_point(4, 4));
        assert!(!r.contains_point(3, 5));
    }

    #[test]
    fn test_include_point() {
        let mut r = Rect::from_point(2, 2);
        r.include_point(0, 3);
        assert_eq!(r, Rect::new_unchecked(0, 2, 3, 4));

        // Points already inside leave the rect unchanged
        r.include_point(1, 2);
        assert_eq!(r, Rect::new_unchecked(0, 2, 3, 4));
    }

    #[test]
    fn test_union_and_intersect() {
        let a = Rect::new_unchecked(0, 0, 2, 5);
        let b = Rect::new_unchecked(3, 0, 5, 5);
        assert_eq!(a.union(&b), Rect::full(5, 5));
        assert_eq!(a.intersect(&b), None);

        let c = Rect::new_unchecked(1, 1, 4, 4);
        assert_eq!(a.intersect(&c), Some(Rect::new_unchecked(1, 1, 2, 4)));
        assert!(Rect::full(5, 5).contains_rect(&c));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::full(5, 5).to_string(), "Rect(0, 0 - 5, 5)");
    }
}
