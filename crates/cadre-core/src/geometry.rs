#![forbid(unsafe_code)]

//! Geometric primitives in terminal cell coordinates.
//!
//! All coordinates are 0-indexed with the origin at the top-left of the
//! screen. Arithmetic saturates rather than wrapping, so degenerate inputs
//! (huge margins, rects near `u16::MAX`) collapse to empty rects instead of
//! panicking.

/// An axis-aligned rectangle of terminal cells.
///
/// `(x, y)` is the top-left corner. A rect with zero width or height is
/// valid and renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> u16 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> u16 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Size of the rectangle, discarding the origin.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check whether the rectangle covers zero cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check whether a cell lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink the rectangle by a margin on each side.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(margin.left),
            y: self.y.saturating_add(margin.top),
            width: self
                .width
                .saturating_sub(margin.left)
                .saturating_sub(margin.right),
            height: self
                .height
                .saturating_sub(margin.top)
                .saturating_sub(margin.bottom),
        }
    }

    /// Intersection with another rectangle, empty if they do not overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Intersection with another rectangle, `None` if they do not overlap.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }
}

/// A width/height pair in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Clamp both dimensions to be at most `max`.
    #[inline]
    pub const fn clamp_max(&self, max: Size) -> Size {
        Size {
            width: if self.width < max.width {
                self.width
            } else {
                max.width
            },
            height: if self.height < max.height {
                self.height
            } else {
                max.height
            },
        }
    }

    /// Clamp both dimensions to be at least `min`.
    #[inline]
    pub const fn clamp_min(&self, min: Size) -> Size {
        Size {
            width: if self.width > min.width {
                self.width
            } else {
                min.width
            },
            height: if self.height > min.height {
                self.height
            } else {
                min.height
            },
        }
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

/// Per-side cell counts for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Equal value on all four sides.
    pub const fn all(val: u16) -> Self {
        Self::new(val, val, val, val)
    }

    /// Left and right only.
    pub const fn horizontal(val: u16) -> Self {
        Self::new(0, val, 0, val)
    }

    /// Top and bottom only.
    pub const fn vertical(val: u16) -> Self {
        Self::new(val, 0, val, 0)
    }

    /// Explicit values in CSS order (top, right, bottom, left).
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<u16> for Sides {
    fn from(val: u16) -> Self {
        Self::all(val)
    }
}

impl From<(u16, u16)> for Sides {
    fn from((vertical, horizontal): (u16, u16)) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Sides, Size};

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.size(), Size::new(30, 40));
    }

    #[test]
    fn rect_edges_saturate_near_max() {
        let r = Rect::new(u16::MAX - 3, u16::MAX - 1, 50, 50);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.bottom(), u16::MAX);
    }

    #[test]
    fn rect_area_and_empty() {
        assert_eq!(Rect::new(0, 0, 10, 20).area(), 200);
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(Rect::new(5, 5, 10, 0).is_empty());
        assert!(!Rect::from_size(1, 1).is_empty());
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(5, 5, 0, 0);
        assert!(!r.contains(5, 5));
    }

    #[test]
    fn rect_inner_applies_margin() {
        let inner = Rect::from_size(10, 10).inner(Sides::new(1, 2, 3, 4));
        assert_eq!(inner, Rect::new(4, 1, 4, 6));
    }

    #[test]
    fn rect_inner_oversized_margin_collapses() {
        let inner = Rect::from_size(10, 10).inner(Sides::all(20));
        assert!(inner.is_empty());
    }

    #[test]
    fn rect_intersection_and_union() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(3, 3, 5, 5);
        assert_eq!(a.intersection(&b), Rect::new(3, 3, 2, 2));
        assert_eq!(a.union(&b), Rect::new(0, 0, 8, 8));
    }

    #[test]
    fn adjacent_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(5, 0, 5, 5);
        assert_eq!(a.intersection_opt(&b), None);
    }

    #[test]
    fn size_clamping() {
        let s = Size::new(10, 30);
        assert_eq!(s.clamp_max(Size::new(8, 40)), Size::new(8, 30));
        assert_eq!(s.clamp_min(Size::new(12, 20)), Size::new(12, 30));
    }

    #[test]
    fn sides_constructors() {
        assert_eq!(Sides::all(3), Sides::from(3));
        assert_eq!(Sides::horizontal(2), Sides::new(0, 2, 0, 2));
        assert_eq!(Sides::vertical(4), Sides::new(4, 0, 4, 0));
        assert_eq!(Sides::from((1, 2)), Sides::new(1, 2, 1, 2));
    }

    #[test]
    fn sides_sums_saturate() {
        let s = Sides::new(u16::MAX, 1, u16::MAX, 1);
        assert_eq!(s.vertical_sum(), u16::MAX);
        assert_eq!(s.horizontal_sum(), 2);
    }
}
