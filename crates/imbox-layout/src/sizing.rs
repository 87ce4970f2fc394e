#![forbid(unsafe_code)]

//! Main-axis sizing: per-child size intents and the constraint resolver.

use crate::MAX_CHILDREN;
use crate::error::LayoutError;

/// Fixed-point tolerance, in pixels, for the clamp-and-redistribute loop.
pub const EPSILON: f32 = 0.01;

/// Resolved main-axis sizes for one container, one entry per child.
pub type ResolvedSizes = heapless::Vec<f32, MAX_CHILDREN>;

/// Optional floor and ceiling for a child's main-axis size.
///
/// A value of `0.0` (or anything non-positive or non-finite) means unset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    /// No floor, no ceiling.
    pub const NONE: Self = Self::new(0.0, 0.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The floor, if set.
    #[inline]
    pub fn min_limit(&self) -> Option<f32> {
        (self.min.is_finite() && self.min > 0.0).then_some(self.min)
    }

    /// The ceiling, if set.
    #[inline]
    pub fn max_limit(&self) -> Option<f32> {
        (self.max.is_finite() && self.max > 0.0).then_some(self.max)
    }

    /// Clamp `value` into the bounds. When `min > max` the floor wins.
    pub fn clamp(&self, value: f32) -> f32 {
        let value = match self.max_limit() {
            Some(max) => value.min(max),
            None => value,
        };
        match self.min_limit() {
            Some(min) => value.max(min),
            None => value,
        }
    }
}

/// One child's sizing intent along the container's main axis.
///
/// Every variant carries [`Bounds`]; `Fixed` is clamped by its bounds like
/// any other child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeSpec {
    /// Exact size in pixels.
    Fixed { px: f32, bounds: Bounds },
    /// Fraction (0..=1) of the container's available space, which is the
    /// main extent minus all gaps.
    Percent { fraction: f32, bounds: Bounds },
    /// Share of the leftover space proportional to `weight` among all Grow
    /// children. Non-positive weights count as 1.
    Grow { weight: f32, bounds: Bounds },
}

impl Default for SizeSpec {
    fn default() -> Self {
        Self::grow(1.0)
    }
}

impl SizeSpec {
    pub const fn fixed(px: f32) -> Self {
        Self::Fixed {
            px,
            bounds: Bounds::NONE,
        }
    }

    pub const fn percent(fraction: f32) -> Self {
        Self::Percent {
            fraction,
            bounds: Bounds::NONE,
        }
    }

    pub const fn grow(weight: f32) -> Self {
        Self::Grow {
            weight,
            bounds: Bounds::NONE,
        }
    }

    /// Set the floor.
    #[must_use]
    pub const fn min(self, min: f32) -> Self {
        let bounds = self.bounds();
        self.with_bounds(Bounds::new(min, bounds.max))
    }

    /// Set the ceiling.
    #[must_use]
    pub const fn max(self, max: f32) -> Self {
        let bounds = self.bounds();
        self.with_bounds(Bounds::new(bounds.min, max))
    }

    /// Replace both bounds.
    #[must_use]
    pub const fn with_bounds(self, bounds: Bounds) -> Self {
        match self {
            Self::Fixed { px, .. } => Self::Fixed { px, bounds },
            Self::Percent { fraction, .. } => Self::Percent { fraction, bounds },
            Self::Grow { weight, .. } => Self::Grow { weight, bounds },
        }
    }

    pub const fn bounds(&self) -> Bounds {
        match *self {
            Self::Fixed { bounds, .. } | Self::Percent { bounds, .. } | Self::Grow { bounds, .. } => {
                bounds
            }
        }
    }

    /// Effective weight for Grow children, `None` for the others.
    #[inline]
    fn grow_weight(&self) -> Option<f32> {
        match *self {
            Self::Grow { weight, .. } => Some(effective_weight(weight)),
            Self::Fixed { .. } | Self::Percent { .. } => None,
        }
    }

    /// The smallest main-axis size this child can end up with regardless of
    /// the container extent.
    ///
    /// `Fixed` guarantees its pixel size (clamped into its bounds); `Percent`
    /// and `Grow` only guarantee their floor.
    pub fn guaranteed_min(&self) -> f32 {
        match *self {
            Self::Fixed { px, bounds } => bounds.clamp(non_negative(px)),
            Self::Percent { bounds, .. } | Self::Grow { bounds, .. } => {
                bounds.min_limit().unwrap_or(0.0)
            }
        }
    }
}

#[inline]
fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[inline]
fn effective_weight(weight: f32) -> f32 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        1.0
    }
}

#[inline]
fn unit_fraction(fraction: f32) -> f32 {
    non_negative(fraction).min(1.0)
}

pub(crate) fn check_child_count(child_count: usize) -> Result<(), LayoutError> {
    if child_count == 0 {
        return Err(LayoutError::NoChildren);
    }
    if child_count > MAX_CHILDREN {
        return Err(LayoutError::TooManyChildren {
            requested: child_count,
            max: MAX_CHILDREN,
        });
    }
    Ok(())
}

/// Copy the caller's specs into a fixed array, padding missing entries with
/// the default Grow spec.
fn expand_specs(sizes: Option<&[SizeSpec]>, child_count: usize) -> [SizeSpec; MAX_CHILDREN] {
    let mut specs = [SizeSpec::default(); MAX_CHILDREN];
    if let Some(given) = sizes {
        for (slot, spec) in specs.iter_mut().zip(given).take(child_count) {
            *slot = *spec;
        }
    }
    specs
}

/// Resolve the main-axis size of every child of a container.
///
/// # Algorithm
///
/// 1. **Classify.** `available = max(0, container_main − gap·(n−1))`. Fixed
///    and Percent children take their size immediately and count toward
///    `used`; Grow children are deferred and their weights summed.
/// 2. **Distribute.** `remaining = max(0, available − used)` is split among
///    Grow children by weight.
/// 3. **Clamp and redistribute**, at most `child_count` rounds. Each round
///    clamps every unfrozen child that violates its bounds and freezes it for
///    good. The net freed space (`surplus − deficit`) goes to the unfrozen
///    Grow children, proportionally to their current size, or to their weight
///    when they are all sitting at zero. Sizes are floored at zero after each
///    round.
///
/// # Convergence
///
/// A round only redistributes when it clamped something, and every clamp
/// freezes a child that was unfrozen. So each non-final round freezes at
/// least one new child and `child_count` rounds always reach a fixed point or
/// run out of recipients.
///
/// # Invariants
///
/// - No size is negative.
/// - `Σ sizes + gap·(n−1) ≈ container_main` when at least one Grow child
///   stays unfrozen and Fixed/Percent sizes fit in the available space.
///   `used` is measured before clamping, so space a clamped Fixed or Percent
///   child gives back is handed to Grow siblings on top of what pass 2
///   already gave them, and the total can overshoot the container.
/// - A frozen child keeps its clamped size.
///
/// # Errors
///
/// [`LayoutError::NoChildren`] for `child_count == 0` and
/// [`LayoutError::TooManyChildren`] above [`MAX_CHILDREN`].
///
/// # Example
///
/// ```
/// use imbox_layout::{SizeSpec, resolve_sizes};
///
/// let specs = [SizeSpec::grow(1.0), SizeSpec::fixed(100.0), SizeSpec::grow(2.0)];
/// let sizes = resolve_sizes(400.0, 0.0, Some(&specs), 3).unwrap();
/// assert_eq!(sizes.as_slice(), &[100.0, 100.0, 200.0]);
/// ```
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn resolve_sizes(
    container_main: f32,
    gap: f32,
    sizes: Option<&[SizeSpec]>,
    child_count: usize,
) -> Result<ResolvedSizes, LayoutError> {
    check_child_count(child_count)?;

    let n = child_count;
    let all_specs = expand_specs(sizes, n);
    let specs = &all_specs[..n];
    let gap = non_negative(gap);
    let available = (non_negative(container_main) - gap * (n - 1) as f32).max(0.0);

    let mut out = [0.0f32; MAX_CHILDREN];

    // 1. Classify
    let mut used = 0.0f32;
    let mut total_grow = 0.0f32;
    for (size, spec) in out.iter_mut().zip(specs) {
        match *spec {
            SizeSpec::Fixed { px, .. } => {
                *size = non_negative(px);
                used += *size;
            }
            SizeSpec::Percent { fraction, .. } => {
                *size = available * unit_fraction(fraction);
                used += *size;
            }
            SizeSpec::Grow { weight, .. } => total_grow += effective_weight(weight),
        }
    }

    // 2. Distribute leftover space by weight
    let remaining = (available - used).max(0.0);
    if total_grow > 0.0 {
        for (size, spec) in out.iter_mut().zip(specs) {
            if let Some(weight) = spec.grow_weight() {
                *size = remaining * weight / total_grow;
            }
        }
    }

    // 3. Clamp and redistribute
    let rounds = clamp_and_redistribute(specs, &mut out[..n]);
    imbox_core::trace!(children = n, available, rounds, "resolved box sizes");

    ResolvedSizes::from_slice(&out[..n]).map_err(|_| LayoutError::TooManyChildren {
        requested: n,
        max: MAX_CHILDREN,
    })
}

/// Pass 3 of [`resolve_sizes`]. Returns the number of rounds run.
fn clamp_and_redistribute(specs: &[SizeSpec], sizes: &mut [f32]) -> usize {
    let mut frozen = [false; MAX_CHILDREN];
    let mut rounds = 0;

    for _ in 0..specs.len() {
        rounds += 1;

        let mut surplus = 0.0f32;
        let mut deficit = 0.0f32;
        for ((size, spec), frozen) in sizes.iter_mut().zip(specs).zip(frozen.iter_mut()) {
            if *frozen {
                continue;
            }
            let target = spec.bounds().clamp(*size);
            if target > *size {
                deficit += target - *size;
            } else if target < *size {
                surplus += *size - target;
            } else {
                continue;
            }
            *size = target;
            *frozen = true;
        }

        let net = surplus - deficit;
        if net.abs() < EPSILON {
            break;
        }

        let mut grow_pool = 0.0f32;
        let mut weight_pool = 0.0f32;
        let mut recipients = 0usize;
        for ((size, spec), frozen) in sizes.iter().zip(specs).zip(frozen.iter()) {
            if let Some(weight) = spec.grow_weight()
                && !*frozen
            {
                grow_pool += *size;
                weight_pool += weight;
                recipients += 1;
            }
        }
        if recipients == 0 {
            break;
        }

        for ((size, spec), frozen) in sizes.iter_mut().zip(specs).zip(frozen.iter()) {
            if let Some(weight) = spec.grow_weight()
                && !*frozen
            {
                let share = if grow_pool > 0.0 {
                    *size / grow_pool
                } else {
                    weight / weight_pool
                };
                *size += net * share;
            }
        }

        for size in sizes.iter_mut() {
            *size = size.max(0.0);
        }
    }

    rounds
}

/// Minimum main extent a container needs to honor every child's guaranteed
/// size: `Σ guaranteed_min + gap·(n−1) + padding_main`.
///
/// Row containers report this to the window's content-min-width accumulator
/// so auto-sizing windows grow to fit.
pub fn min_content_extent(
    sizes: Option<&[SizeSpec]>,
    child_count: usize,
    gap: f32,
    padding_main: f32,
) -> f32 {
    let n = child_count.min(MAX_CHILDREN);
    let specs = expand_specs(sizes, n);
    let children: f32 = specs[..n].iter().map(SizeSpec::guaranteed_min).sum();
    let gaps = n.saturating_sub(1) as f32 * non_negative(gap);
    children + gaps + non_negative(padding_main)
}
