#![forbid(unsafe_code)]

//! Wrapping flow layout.
//!
//! [`Flow`] lays measured items left to right, wrapping to a new row when
//! the next item would run past the right edge. A single greedy pass, no
//! backtracking: rows are as tall as their tallest item and stack downward.

use cadre_core::geometry::{Rect, Size};

/// A greedy row-wrapping container.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flow {
    horizontal_spacing: u16,
    vertical_spacing: u16,
}

impl Flow {
    /// Create a flow with no spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap between items within a row.
    pub fn horizontal_spacing(mut self, spacing: u16) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the gap between rows.
    pub fn vertical_spacing(mut self, spacing: u16) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Place one rect per item size, wrapping within `area`'s width.
    ///
    /// Items wider than the area are clamped to its width and get a row of
    /// their own. Rows may extend past the bottom edge; clipping is the
    /// caller's concern.
    pub fn wrap(&self, area: Rect, items: &[Size]) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(items.len());
        let mut x = area.x;
        let mut y = area.y;
        let mut row_height = 0u16;

        for &item in items {
            let width = item.width.min(area.width);
            let used = x - area.x;
            if used > 0 && used as u32 + width as u32 > area.width as u32 {
                x = area.x;
                y = y.saturating_add(row_height).saturating_add(self.vertical_spacing);
                row_height = 0;
            }
            rects.push(Rect::new(x, y, width, item.height));
            x = x
                .saturating_add(width)
                .saturating_add(self.horizontal_spacing);
            row_height = row_height.max(item.height);
        }
        rects
    }
}
