#![forbid(unsafe_code)]

//! Container declarations: direction, cross-axis alignment, and the
//! [`BoxConfig`] builder.

use crate::sizing::SizeSpec;
use imbox_core::geometry::{Rect, Sides};
use imbox_core::grid;

/// The axis children are placed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Left to right; the main axis is horizontal.
    Row,
    /// Top to bottom; the main axis is vertical.
    #[default]
    Column,
}

impl Direction {
    /// Position of `rect` along the main axis.
    #[inline]
    pub fn main_origin(self, rect: &Rect) -> f32 {
        match self {
            Direction::Row => rect.x,
            Direction::Column => rect.y,
        }
    }

    /// Extent of `rect` along the main axis.
    #[inline]
    pub fn main_extent(self, rect: &Rect) -> f32 {
        match self {
            Direction::Row => rect.width,
            Direction::Column => rect.height,
        }
    }

    /// Position of `rect` along the cross axis.
    #[inline]
    pub fn cross_origin(self, rect: &Rect) -> f32 {
        match self {
            Direction::Row => rect.y,
            Direction::Column => rect.x,
        }
    }

    /// Extent of `rect` along the cross axis.
    #[inline]
    pub fn cross_extent(self, rect: &Rect) -> f32 {
        match self {
            Direction::Row => rect.height,
            Direction::Column => rect.width,
        }
    }

    /// Build a rectangle from main-axis and cross-axis spans.
    #[inline]
    pub fn rect(self, main_pos: f32, main_len: f32, cross_pos: f32, cross_len: f32) -> Rect {
        match self {
            Direction::Row => Rect::new(main_pos, cross_pos, main_len, cross_len),
            Direction::Column => Rect::new(cross_pos, main_pos, cross_len, main_len),
        }
    }
}

/// How a child is placed across the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Top (rows) or left (columns) edge.
    Start,
    /// Centered.
    Center,
    /// Bottom (rows) or right (columns) edge.
    End,
    /// Fill the whole cross extent.
    #[default]
    Stretch,
}

/// One container's declaration.
///
/// Built fresh every frame, so it borrows the caller's size specs instead of
/// copying them.
///
/// ```
/// use imbox_layout::{Align, BoxConfig, SizeSpec};
///
/// let specs = [SizeSpec::fixed(120.0), SizeSpec::grow(1.0)];
/// let config = BoxConfig::row(2)
///     .sizes(&specs)
///     .gap(8.0)
///     .padding(4.0)
///     .align(Align::Center);
/// assert_eq!(config.child_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxConfig<'a> {
    direction: Direction,
    child_count: usize,
    sizes: Option<&'a [SizeSpec]>,
    gap: f32,
    padding: Sides,
    cross: f32,
    align: Align,
}

impl<'a> BoxConfig<'a> {
    /// A container of `child_count` children laid out along `direction`.
    pub fn new(direction: Direction, child_count: usize) -> Self {
        Self {
            direction,
            child_count,
            ..Default::default()
        }
    }

    /// A horizontal container.
    pub fn row(child_count: usize) -> Self {
        Self::new(Direction::Row, child_count)
    }

    /// A vertical container.
    pub fn column(child_count: usize) -> Self {
        Self::new(Direction::Column, child_count)
    }

    /// Per-child size specs. Missing trailing entries default to `Grow(1)`.
    pub fn sizes(mut self, sizes: &'a [SizeSpec]) -> Self {
        self.sizes = Some(sizes);
        self
    }

    /// Space between adjacent children, snapped to the spacing grid on use.
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Inner padding, each side snapped to the spacing grid on use.
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Explicit cross-axis extent; `0.0` inherits from the enclosing layout.
    pub fn cross(mut self, cross: f32) -> Self {
        self.cross = cross;
        self
    }

    /// Cross-axis alignment applied to every child.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    #[must_use]
    pub fn size_specs(&self) -> Option<&'a [SizeSpec]> {
        self.sizes
    }

    #[must_use]
    pub fn alignment(&self) -> Align {
        self.align
    }

    /// The explicit cross extent, if one was set.
    #[must_use]
    pub fn explicit_cross(&self) -> Option<f32> {
        (self.cross.is_finite() && self.cross > 0.0).then_some(self.cross)
    }

    /// The gap as applied: snapped to the spacing grid, never negative.
    #[must_use]
    pub fn snapped_gap(&self) -> f32 {
        grid::snap(self.gap)
    }

    /// The padding as applied: every side snapped to the spacing grid.
    #[must_use]
    pub fn snapped_padding(&self) -> Sides {
        self.padding.snapped()
    }
}
