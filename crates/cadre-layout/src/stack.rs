#![forbid(unsafe_code)]

//! Overlay stacking.
//!
//! A [`Stack`] gives every layer the identical input rectangle; stacking is
//! purely a rendering-order concern for callers. The [`Anchor`] only
//! positions sized content *within* a layer, it never changes layer
//! geometry.

use cadre_core::geometry::{Rect, Size};

/// Which point of the area a sized content rect is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Position a rect of the given size inside `area`.
    ///
    /// The size is clamped to the area first, so the result always fits.
    pub fn position(self, area: Rect, size: Size) -> Rect {
        let size = size.clamp_max(area.size());
        let slack_x = area.width - size.width;
        let slack_y = area.height - size.height;

        let x = match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => 0,
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => slack_x / 2,
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => slack_x,
        };
        let y = match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => 0,
            Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => slack_y / 2,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => slack_y,
        };

        Rect::new(
            area.x.saturating_add(x),
            area.y.saturating_add(y),
            size.width,
            size.height,
        )
    }
}

/// A container whose children all occupy the same area.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stack {
    anchor: Anchor,
}

impl Stack {
    /// Create a stack with the default (top-left) anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content anchor.
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// One rect per layer, every one identical to `area`.
    pub fn split(&self, area: Rect, layers: usize) -> Vec<Rect> {
        vec![area; layers]
    }

    /// Anchor a sized content rect within the area.
    pub fn place(&self, area: Rect, size: Size) -> Rect {
        self.anchor.position(area, size)
    }
}
