#![forbid(unsafe_code)]

//! The 4-unit spacing grid.
//!
//! Gaps and paddings are snapped to multiples of [`GRID_UNIT`] so that
//! spacing stays visually consistent across containers regardless of the
//! values callers pass in.

/// Spacing grid step in pixels.
pub const GRID_UNIT: f32 = 4.0;

/// Snap a spacing value to the nearest multiple of [`GRID_UNIT`].
///
/// Ties round away from zero (`2.0 -> 4.0`, `6.0 -> 8.0`). Negative and
/// non-finite inputs snap to `0.0`: spacing is never negative.
///
/// ```
/// use imbox_core::grid::snap;
///
/// assert_eq!(snap(5.0), 4.0);
/// assert_eq!(snap(6.0), 8.0);
/// assert_eq!(snap(-3.0), 0.0);
/// ```
#[inline]
pub fn snap(value: f32) -> f32 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value / GRID_UNIT).round() * GRID_UNIT
}
