#![forbid(unsafe_code)]

//! The box stack: `begin` / `next` / `end` over nested containers.
//!
//! Each open container is a frame stored by value in a fixed-capacity
//! stack, so a whole frame of layout runs without touching the heap. Frames
//! are strictly LIFO and never referenced after `end`.

use crate::align::cross_span;
use crate::config::{Align, BoxConfig, Direction};
use crate::cursor::{Flow, LayoutCursor};
use crate::error::LayoutError;
use crate::sizing::{ResolvedSizes, check_child_count, min_content_extent, resolve_sizes};
use crate::MAX_DEPTH;
use imbox_core::geometry::{Rect, Sides};

/// Runtime state of one open container.
#[derive(Debug, Clone)]
struct Frame {
    direction: Direction,
    child_count: usize,
    gap: f32,
    padding: Sides,
    align: Align,
    /// Next child to place; only ever increases.
    child_index: usize,
    /// The caller's slot at `begin`, restored by `end`.
    saved: Rect,
    /// Container rectangle minus padding.
    content: Rect,
    sizes: ResolvedSizes,
    /// Main-axis position of the next child.
    next_pos: f32,
    /// Outer cross extent actually used, advanced past by `end` for rows.
    cross: f32,
}

impl Frame {
    /// Main-axis space taken by the children placed so far, without the
    /// trailing gap.
    fn consumed_main(&self) -> f32 {
        let placed = &self.sizes[..self.child_index];
        let gaps = placed.len().saturating_sub(1) as f32 * self.gap;
        placed.iter().sum::<f32>() + gaps
    }
}

/// Read-only snapshot of the active container, for debug overlays and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub direction: Direction,
    pub child_index: usize,
    pub child_count: usize,
    /// Container rectangle minus padding.
    pub content: Rect,
    /// Outer cross-axis extent of the container.
    pub cross: f32,
}

/// Stack of open box containers for one window.
///
/// ```
/// use imbox_core::geometry::Rect;
/// use imbox_layout::{BoxConfig, BoxStack, LayoutCursor, SizeSpec};
///
/// let mut cursor = LayoutCursor::new(Rect::from_size(400.0, 300.0)).with_row_height(40.0);
/// let mut stack = BoxStack::new();
///
/// let specs = [SizeSpec::fixed(100.0), SizeSpec::grow(1.0)];
/// stack.begin(&mut cursor, &BoxConfig::row(2).sizes(&specs));
/// let label = stack.next(&mut cursor);
/// let field = stack.next(&mut cursor);
/// stack.end(&mut cursor);
///
/// assert_eq!(label, Rect::new(0.0, 0.0, 100.0, 40.0));
/// assert_eq!(field, Rect::new(100.0, 0.0, 300.0, 40.0));
/// assert_eq!(cursor.slot().y, 40.0 + LayoutCursor::DEFAULT_SPACING);
/// ```
#[derive(Debug, Default)]
pub struct BoxStack {
    frames: heapless::Vec<Frame, MAX_DEPTH>,
}

impl BoxStack {
    pub const fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
        }
    }

    /// Number of open containers.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True when no container is open.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Open a container at the cursor's current slot.
    ///
    /// Returns the container's outer rectangle, or [`Rect::ZERO`] without
    /// pushing anything when the child count or nesting depth is out of
    /// range.
    pub fn begin(&mut self, cursor: &mut LayoutCursor, config: &BoxConfig<'_>) -> Rect {
        match self.try_begin(cursor, config) {
            Ok(outer) => outer,
            Err(_err) => {
                imbox_core::debug!(error = %_err, depth = self.depth(), "box refused");
                Rect::ZERO
            }
        }
    }

    /// Like [`begin`](Self::begin), but says why a container was refused.
    ///
    /// On error the stack and the cursor are left untouched.
    pub fn try_begin(
        &mut self,
        cursor: &mut LayoutCursor,
        config: &BoxConfig<'_>,
    ) -> Result<Rect, LayoutError> {
        check_child_count(config.child_count())?;
        if self.frames.is_full() {
            return Err(LayoutError::DepthExceeded { max: MAX_DEPTH });
        }

        let direction = config.direction();
        let gap = config.snapped_gap();
        let padding = config.snapped_padding();
        let caller = cursor.slot();
        let outer = self.outer_rect(cursor, config);
        let content = outer.inner(padding);

        let sizes = resolve_sizes(
            direction.main_extent(&content),
            gap,
            config.size_specs(),
            config.child_count(),
        )?;

        let frame = Frame {
            direction,
            child_count: config.child_count(),
            gap,
            padding,
            align: config.alignment(),
            child_index: 0,
            saved: caller,
            content,
            sizes,
            next_pos: direction.main_origin(&content),
            cross: direction.cross_extent(&outer),
        };
        self.frames
            .push(frame)
            .map_err(|_| LayoutError::DepthExceeded { max: MAX_DEPTH })?;

        if direction == Direction::Row {
            cursor.require_min_width(min_content_extent(
                config.size_specs(),
                config.child_count(),
                gap,
                padding.horizontal_sum(),
            ));
        }

        Ok(outer)
    }

    /// The container's outer rectangle, anchored at the cursor's slot.
    fn outer_rect(&self, cursor: &LayoutCursor, config: &BoxConfig<'_>) -> Rect {
        let caller = cursor.slot();
        match config.direction() {
            Direction::Column => {
                let width = config.explicit_cross().unwrap_or(caller.width);
                let height = if !self.frames.is_empty() {
                    caller.height
                } else {
                    match cursor.flow() {
                        Flow::Normal => cursor.remaining_height(),
                        Flow::Scroll | Flow::Grid => caller.height,
                    }
                };
                Rect::new(caller.x, caller.y, width, height)
            }
            Direction::Row => {
                let height = config.explicit_cross().unwrap_or(caller.height);
                Rect::new(caller.x, caller.y, caller.width, height)
            }
        }
    }

    /// Place the next child of the active container and publish its
    /// rectangle as the cursor's slot.
    ///
    /// Returns [`Rect::ZERO`] when no container is open or every child has
    /// already been placed; the cursor is not touched in that case.
    pub fn next(&mut self, cursor: &mut LayoutCursor) -> Rect {
        let Some(frame) = self.frames.last_mut() else {
            return Rect::ZERO;
        };
        if frame.child_index >= frame.child_count {
            return Rect::ZERO;
        }

        let size = frame.sizes[frame.child_index];
        let direction = frame.direction;
        let (cross_pos, cross_len) = cross_span(
            frame.align,
            size,
            direction.cross_origin(&frame.content),
            direction.cross_extent(&frame.content),
        );
        let rect = direction.rect(frame.next_pos, size, cross_pos, cross_len);

        frame.next_pos += size + frame.gap;
        frame.child_index += 1;
        cursor.set_slot(rect);
        rect
    }

    /// Close the active container: restore the caller's slot and move it
    /// past the space the container took.
    ///
    /// Columns advance by their padding plus the children actually placed.
    /// Rows advance by their own cross extent plus the cursor's spacing.
    /// Without an open container this does nothing.
    pub fn end(&mut self, cursor: &mut LayoutCursor) {
        let Some(frame) = self.frames.pop() else {
            return;
        };

        cursor.set_slot(frame.saved);
        let advance = match frame.direction {
            Direction::Column => frame.padding.top + frame.consumed_main() + frame.padding.bottom,
            Direction::Row => frame.cross + cursor.spacing(),
        };
        cursor.advance(advance);
    }

    /// Snapshot of the active container.
    #[must_use]
    pub fn current(&self) -> Option<FrameInfo> {
        self.frames.last().map(|frame| FrameInfo {
            direction: frame.direction,
            child_index: frame.child_index,
            child_count: frame.child_count,
            content: frame.content,
            cross: frame.cross,
        })
    }

    /// Resolved main-axis sizes of the active container's children.
    #[must_use]
    pub fn resolved(&self) -> &[f32] {
        self.frames
            .last()
            .map(|frame| frame.sizes.as_slice())
            .unwrap_or(&[])
    }

    /// Children of the active container not yet placed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames
            .last()
            .map(|frame| frame.child_count - frame.child_index)
            .unwrap_or(0)
    }

    /// Close every open container, innermost first, as if `end` had been
    /// called for each. Returns how many were closed.
    ///
    /// Call at a frame boundary so a missing `end` cannot leak into the next
    /// frame.
    pub fn reset(&mut self, cursor: &mut LayoutCursor) -> usize {
        let mut unwound = 0;
        while !self.frames.is_empty() {
            imbox_core::warn!(depth = self.depth(), "closing box left open at frame end");
            self.end(cursor);
            unwound += 1;
        }
        unwound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::SizeSpec;
    use crate::MAX_CHILDREN;

    fn window() -> LayoutCursor {
        LayoutCursor::new(Rect::new(0.0, 0.0, 400.0, 600.0))
            .with_row_height(40.0)
            .with_spacing(8.0)
    }

    #[test]
    fn column_children_stack_vertically() {
        let mut cursor = window();
        let mut stack = BoxStack::new();
        let specs = [SizeSpec::fixed(100.0), SizeSpec::fixed(50.0)];
        let outer = stack.begin(&mut cursor, &BoxConfig::column(2).sizes(&specs).gap(8.0));
        assert_eq!(outer, Rect::new(0.0, 0.0, 400.0, 600.0));

        assert_eq!(stack.next(&mut cursor), Rect::new(0.0, 0.0, 400.0, 100.0));
        assert_eq!(cursor.slot(), Rect::new(0.0, 0.0, 400.0, 100.0));
        assert_eq!(stack.next(&mut cursor), Rect::new(0.0, 108.0, 400.0, 50.0));

        stack.end(&mut cursor);
        assert_eq!(stack.depth(), 0);
        // 100 + gap + 50, no trailing gap
        assert_eq!(cursor.slot(), Rect::new(0.0, 158.0, 400.0, 40.0));
    }

    #[test]
    fn row_children_stack_horizontally_inside_padding() {
        let mut cursor = window();
        let mut stack = BoxStack::new();
        let outer = stack.begin(&mut cursor, &BoxConfig::row(2).padding(4.0).gap(8.0));
        assert_eq!(outer, Rect::new(0.0, 0.0, 400.0, 40.0));

        // content: 4..396 wide = 392, minus gap 8 → 192 each
        assert_eq!(stack.next(&mut cursor), Rect::new(4.0, 4.0, 192.0, 32.0));
        assert_eq!(stack.next(&mut cursor), Rect::new(204.0, 4.0, 192.0, 32.0));
        stack.end(&mut cursor);
        assert_eq!(cursor.slot().y, 48.0);
    }

    #[test]
    fn next_past_the_end_is_a_no_op() {
        let mut cursor = window();
        let mut stack = BoxStack::new();
        stack.begin(&mut cursor, &BoxConfig::row(1));
        let only = stack.next(&mut cursor);
        assert!(!only.is_empty());
        assert_eq!(stack.remaining(), 0);
        assert_eq!(stack.next(&mut cursor), Rect::ZERO);
        assert_eq!(cursor.slot(), only);
        assert_eq!(stack.current().map(|f| f.child_index), Some(1));
    }

    #[test]
    fn next_and_end_without_begin_are_safe() {
        let mut cursor = window();
        let before = cursor;
        let mut stack = BoxStack::new();
        assert_eq!(stack.next(&mut cursor), Rect::ZERO);
        stack.end(&mut cursor);
        stack.end(&mut cursor);
        assert_eq!(cursor, before);
        assert_eq!(stack.current(), None);
        assert!(stack.resolved().is_empty());
    }

    #[test]
    fn refused_begin_reports_reason_and_leaves_state() {
        let mut cursor = window();
        let before = cursor;
        let mut stack = BoxStack::new();
        assert_eq!(
            stack.try_begin(&mut cursor, &BoxConfig::row(0)),
            Err(LayoutError::NoChildren)
        );
        assert_eq!(
            stack.try_begin(&mut cursor, &BoxConfig::row(MAX_CHILDREN + 1)),
            Err(LayoutError::TooManyChildren {
                requested: MAX_CHILDREN + 1,
                max: MAX_CHILDREN
            })
        );
        assert_eq!(stack.begin(&mut cursor, &BoxConfig::column(0)), Rect::ZERO);
        assert_eq!(stack.depth(), 0);
        assert_eq!(cursor, before);
    }

    #[test]
    fn depth_limit_is_enforced() {
        let mut cursor = window();
        let mut stack = BoxStack::new();
        for _ in 0..MAX_DEPTH {
            assert!(stack.try_begin(&mut cursor, &BoxConfig::column(1)).is_ok());
            stack.next(&mut cursor);
        }
        assert_eq!(
            stack.try_begin(&mut cursor, &BoxConfig::column(1)),
            Err(LayoutError::DepthExceeded { max: MAX_DEPTH })
        );
        assert_eq!(stack.begin(&mut cursor, &BoxConfig::row(1)), Rect::ZERO);
        assert_eq!(stack.depth(), MAX_DEPTH);
    }

    #[test]
    fn alignment_applies_on_cross_axis() {
        let mut cursor = window().with_row_height(100.0);
        let mut stack = BoxStack::new();
        let specs = [SizeSpec::fixed(40.0), SizeSpec::fixed(40.0), SizeSpec::fixed(40.0)];
        stack.begin(
            &mut cursor,
            &BoxConfig::row(3).sizes(&specs).align(Align::Center),
        );
        let rect = stack.next(&mut cursor);
        assert_eq!(rect, Rect::new(0.0, 30.0, 40.0, 40.0));
        stack.end(&mut cursor);

        stack.begin(&mut cursor, &BoxConfig::row(3).sizes(&specs).align(Align::End));
        let top = cursor.slot().y;
        let rect = stack.next(&mut cursor);
        assert_eq!(rect.y, top + 60.0);
        assert_eq!(rect.height, 40.0);
    }

    #[test]
    fn row_reports_min_content_width() {
        let mut cursor = window();
        let mut stack = BoxStack::new();
        let specs = [
            SizeSpec::fixed(100.0),
            SizeSpec::grow(1.0).min(50.0),
            SizeSpec::percent(0.2).min(30.0),
        ];
        stack.begin(
            &mut cursor,
            &BoxConfig::row(3).sizes(&specs).gap(8.0).padding(4.0),
        );
        assert_eq!(cursor.content_min_width(), 204.0);
    }

    #[test]
    fn column_does_not_report_min_width() {
        let mut cursor = window();
        let mut stack = BoxStack::new();
        let specs = [SizeSpec::fixed(500.0)];
        stack.begin(&mut cursor, &BoxConfig::column(1).sizes(&specs));
        assert_eq!(cursor.content_min_width(), 0.0);
    }

    #[test]
    fn top_level_column_in_scroll_flow_uses_slot_height() {
        let mut cursor = window().with_row_height(120.0).with_flow(Flow::Scroll);
        let mut stack = BoxStack::new();
        let outer = stack.begin(&mut cursor, &BoxConfig::column(2));
        assert_eq!(outer.height, 120.0);
        assert_eq!(stack.resolved(), &[60.0, 60.0]);
    }

    #[test]
    fn explicit_cross_overrides_inherited_extent() {
        let mut cursor = window();
        let mut stack = BoxStack::new();
        let outer = stack.begin(&mut cursor, &BoxConfig::column(1).cross(120.0));
        assert_eq!(outer.width, 120.0);
        stack.end(&mut cursor);

        let outer = stack.begin(&mut cursor, &BoxConfig::row(1).cross(72.0));
        assert_eq!(outer.height, 72.0);
        assert_eq!(stack.current().map(|f| f.cross), Some(72.0));
    }

    #[test]
    fn reset_unwinds_open_frames() {
        let mut cursor = window();
        let mut stack = BoxStack::new();
        stack.begin(&mut cursor, &BoxConfig::column(2));
        stack.next(&mut cursor);
        stack.begin(&mut cursor, &BoxConfig::row(2));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.reset(&mut cursor), 2);
        assert!(stack.is_empty());
        assert_eq!(stack.reset(&mut cursor), 0);
    }
}
