#![forbid(unsafe_code)]

//! Edge-docked layout.
//!
//! A [`Dock`] pins optional fixed-size regions to the four edges of an area
//! and yields whatever remains as the center. Top and bottom spans run the
//! full width; left and right sit between them.

use cadre_core::geometry::Rect;

use crate::{Axis, Constraint, split};

/// A container with `Length`-pinned edges around a flexible center.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dock {
    top: Option<u16>,
    bottom: Option<u16>,
    left: Option<u16>,
    right: Option<u16>,
}

/// Resolved dock regions. Absent edges resolve to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockLayout {
    pub top: Option<Rect>,
    pub bottom: Option<Rect>,
    pub left: Option<Rect>,
    pub right: Option<Rect>,
    pub center: Rect,
}

impl Dock {
    /// Create a dock with no edges; the center takes everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a region of the given height to the top edge.
    pub fn top(mut self, height: u16) -> Self {
        self.top = Some(height);
        self
    }

    /// Pin a region of the given height to the bottom edge.
    pub fn bottom(mut self, height: u16) -> Self {
        self.bottom = Some(height);
        self
    }

    /// Pin a region of the given width to the left edge.
    pub fn left(mut self, width: u16) -> Self {
        self.left = Some(width);
        self
    }

    /// Pin a region of the given width to the right edge.
    pub fn right(mut self, width: u16) -> Self {
        self.right = Some(width);
        self
    }

    /// Resolve the dock against an area.
    ///
    /// Two nested 1D splits: rows first (top / middle / bottom), then the
    /// middle row into columns (left / center / right). When the area is
    /// too small, edges shrink by the solver's overflow rules.
    pub fn resolve(&self, area: Rect) -> DockLayout {
        let rows = split(
            area,
            Axis::Vertical,
            &[
                Constraint::Length(self.top.unwrap_or(0)),
                Constraint::Fill(1),
                Constraint::Length(self.bottom.unwrap_or(0)),
            ],
            0,
        );
        let columns = split(
            rows[1],
            Axis::Horizontal,
            &[
                Constraint::Length(self.left.unwrap_or(0)),
                Constraint::Fill(1),
                Constraint::Length(self.right.unwrap_or(0)),
            ],
            0,
        );

        DockLayout {
            top: self.top.map(|_| rows[0]),
            bottom: self.bottom.map(|_| rows[2]),
            left: self.left.map(|_| columns[0]),
            right: self.right.map(|_| columns[2]),
            center: columns[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_edges() {
        let layout = Dock::new()
            .top(2)
            .bottom(1)
            .left(10)
            .right(5)
            .resolve(Rect::from_size(80, 24));

        assert_eq!(layout.top, Some(Rect::new(0, 0, 80, 2)));
        assert_eq!(layout.bottom, Some(Rect::new(0, 23, 80, 1)));
        assert_eq!(layout.left, Some(Rect::new(0, 2, 10, 21)));
        assert_eq!(layout.right, Some(Rect::new(75, 2, 5, 21)));
        assert_eq!(layout.center, Rect::new(10, 2, 65, 21));
    }

    #[test]
    fn no_edges_center_takes_everything() {
        let area = Rect::from_size(40, 10);
        let layout = Dock::new().resolve(area);
        assert_eq!(layout.center, area);
        assert_eq!(layout.top, None);
        assert_eq!(layout.bottom, None);
        assert_eq!(layout.left, None);
        assert_eq!(layout.right, None);
    }

    #[test]
    fn top_and_bottom_span_full_width() {
        let layout = Dock::new()
            .top(1)
            .left(20)
            .resolve(Rect::from_size(60, 20));
        assert_eq!(layout.top.unwrap().width, 60);
        assert_eq!(layout.left.unwrap().height, 19);
    }

    #[test]
    fn oversized_edges_shrink_into_the_area() {
        let layout = Dock::new().top(30).bottom(30).resolve(Rect::from_size(10, 20));
        let top = layout.top.unwrap();
        let bottom = layout.bottom.unwrap();
        assert_eq!(top.height + bottom.height + layout.center.height, 20);
        assert!(layout.center.is_empty());
    }

    #[test]
    fn regions_do_not_overlap() {
        let layout = Dock::new()
            .top(3)
            .bottom(3)
            .left(8)
            .right(8)
            .resolve(Rect::from_size(30, 12));
        let rects = [
            layout.top.unwrap(),
            layout.bottom.unwrap(),
            layout.left.unwrap(),
            layout.right.unwrap(),
            layout.center,
        ];
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                assert!(a.intersection_opt(b).is_none(), "{a:?} overlaps {b:?}");
            }
        }
    }
}
