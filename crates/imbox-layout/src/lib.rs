#![forbid(unsafe_code)]

//! Box container layout for immediate-mode UIs.
//!
//! Every frame, calling code opens nested row/column containers and asks for
//! one child rectangle at a time:
//!
//! - [`BoxStack::begin`] resolves the main-axis size of every child once and
//!   pushes a container frame.
//! - [`BoxStack::next`] returns the next child's rectangle and publishes it as
//!   the [`LayoutCursor`] slot, so the widget drawn next can read it.
//! - [`BoxStack::end`] pops the frame and moves the caller's cursor past it.
//!
//! Main-axis sizing is handled by [`resolve_sizes`] ([`SizeSpec`] `Fixed`,
//! `Percent`, `Grow`, each with optional min/max); cross-axis placement by
//! [`cross_span`]. All state lives in fixed-capacity storage: no allocation
//! happens during layout.
//!
//! ```
//! use imbox_core::geometry::Rect;
//! use imbox_layout::{BoxConfig, BoxStack, LayoutCursor, SizeSpec};
//!
//! let mut cursor = LayoutCursor::new(Rect::from_size(320.0, 480.0));
//! let mut stack = BoxStack::new();
//!
//! let rows = [SizeSpec::fixed(48.0), SizeSpec::grow(1.0)];
//! stack.begin(&mut cursor, &BoxConfig::column(2).sizes(&rows));
//! let header = stack.next(&mut cursor);
//!
//! stack.begin(&mut cursor, &BoxConfig::row(2).gap(8.0));
//! let left = stack.next(&mut cursor);
//! let right = stack.next(&mut cursor);
//! stack.end(&mut cursor);
//!
//! let body = stack.next(&mut cursor);
//! stack.end(&mut cursor);
//!
//! assert_eq!(header.height, 48.0);
//! assert_eq!(left.width, 156.0);
//! assert_eq!(right.x, 164.0);
//! assert_eq!(body.y, 48.0);
//! assert_eq!(stack.depth(), 0);
//! ```

pub mod align;
pub mod config;
pub mod cursor;
pub mod error;
pub mod sizing;
pub mod stack;

pub use align::cross_span;
pub use config::{Align, BoxConfig, Direction};
pub use cursor::{Flow, LayoutCursor};
pub use error::LayoutError;
pub use imbox_core::geometry::{Rect, Sides};
pub use sizing::{Bounds, EPSILON, ResolvedSizes, SizeSpec, min_content_extent, resolve_sizes};
pub use stack::{BoxStack, FrameInfo};

/// Most children a single container can hold.
pub const MAX_CHILDREN: usize = 32;

/// Most containers that can be open at once.
pub const MAX_DEPTH: usize = 16;
