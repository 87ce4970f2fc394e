#![forbid(unsafe_code)]

//! Cross-axis placement of a child inside its container.

use crate::config::Align;

/// Compute a child's cross-axis `(offset, extent)`.
///
/// `main_size` is the child's resolved main-axis size; non-stretched children
/// use it as their cross extent, clamped to `cross_total` so a child never
/// overflows the container or ends up at an offset before `cross_origin`.
///
/// ```
/// use imbox_layout::{Align, cross_span};
///
/// assert_eq!(cross_span(Align::Center, 20.0, 0.0, 100.0), (40.0, 20.0));
/// assert_eq!(cross_span(Align::End, 500.0, 10.0, 100.0), (10.0, 100.0));
/// ```
pub fn cross_span(align: Align, main_size: f32, cross_origin: f32, cross_total: f32) -> (f32, f32) {
    let cross_total = cross_total.max(0.0);
    if align == Align::Stretch {
        return (cross_origin, cross_total);
    }

    let extent = main_size.max(0.0).min(cross_total);
    let slack = cross_total - extent;
    let offset = match align {
        Align::Start | Align::Stretch => cross_origin,
        Align::Center => cross_origin + slack / 2.0,
        Align::End => cross_origin + slack,
    };
    (offset, extent)
}
