#![forbid(unsafe_code)]

//! Reasons a box container can refuse to open.

use thiserror::Error;

/// Why [`BoxStack::try_begin`](crate::BoxStack::try_begin) or
/// [`resolve_sizes`](crate::resolve_sizes) refused a request.
///
/// The immediate-mode entry points never surface these: they degrade to a
/// zero rectangle instead. The typed variants exist for callers that want to
/// assert on layout mistakes during development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A box must hold at least one child.
    #[error("box declared with zero children")]
    NoChildren,
    /// More children than the fixed per-frame capacity.
    #[error("box declared with {requested} children, limit is {max}")]
    TooManyChildren { requested: usize, max: usize },
    /// The box stack is already at its nesting limit.
    #[error("box nesting exceeds depth limit {max}")]
    DepthExceeded { max: usize },
}
