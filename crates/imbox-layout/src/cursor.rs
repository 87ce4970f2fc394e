#![forbid(unsafe_code)]

//! The caller's layout cursor.
//!
//! Widgets read the current slot right before drawing; the box stack writes
//! it in [`BoxStack::next`](crate::BoxStack::next) and restores/advances it in
//! [`BoxStack::end`](crate::BoxStack::end). Passing it by `&mut` keeps that
//! hand-off explicit instead of living in global state.

use imbox_core::geometry::Rect;

/// How the enclosing window lays out its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    /// Content stacks top to bottom inside a finite window.
    #[default]
    Normal,
    /// Content scrolls; there is no finite remaining height.
    Scroll,
    /// Content is placed into grid cells of the current slot size.
    Grid,
}

/// Layout state of one window for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    slot: Rect,
    bounds: Rect,
    spacing: f32,
    flow: Flow,
    content_min_width: f32,
}

impl LayoutCursor {
    /// Height of a fresh top-level row.
    pub const DEFAULT_ROW_HEIGHT: f32 = 32.0;
    /// Vertical spacing between consecutive top-level elements.
    pub const DEFAULT_SPACING: f32 = 8.0;

    /// Start a cursor at the top-left of the window's content `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            slot: Rect::new(bounds.x, bounds.y, bounds.width, Self::DEFAULT_ROW_HEIGHT),
            bounds,
            spacing: Self::DEFAULT_SPACING,
            flow: Flow::Normal,
            content_min_width: 0.0,
        }
    }

    /// Set the height of the current slot (the row height).
    pub fn with_row_height(mut self, height: f32) -> Self {
        self.slot.height = height.max(0.0);
        self
    }

    /// Set the spacing added after each row container.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    /// The current layout rectangle.
    #[inline]
    #[must_use]
    pub fn slot(&self) -> Rect {
        self.slot
    }

    /// Publish a new current layout rectangle.
    #[inline]
    pub fn set_slot(&mut self, slot: Rect) {
        self.slot = slot;
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    #[must_use]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Height left in the window below the current slot's top edge.
    #[must_use]
    pub fn remaining_height(&self) -> f32 {
        (self.bounds.bottom() - self.slot.y).max(0.0)
    }

    /// Move the slot down by `dy`. The cursor never moves backwards.
    pub fn advance(&mut self, dy: f32) {
        if dy.is_finite() && dy > 0.0 {
            self.slot.y += dy;
        }
    }

    /// Widest content requirement reported this frame.
    #[inline]
    #[must_use]
    pub fn content_min_width(&self) -> f32 {
        self.content_min_width
    }

    /// Report that some content needs at least `width` pixels.
    pub fn require_min_width(&mut self, width: f32) {
        if width.is_finite() {
            self.content_min_width = self.content_min_width.max(width);
        }
    }

    /// Clear the min-width accumulator, typically at the start of a frame.
    pub fn reset_min_width(&mut self) {
        self.content_min_width = 0.0;
    }
}
