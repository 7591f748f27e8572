//! Linear projections between offsets inside a square and HSV components.
//!
//! Offsets are measured from the square's center. Percent axes clamp at
//! the edges (a square never wraps); the hue axis spans ±180° around the
//! center and clamps too.

use crate::constants::MIN_EXTENT;

/// Floor an extent so mappings never divide by (almost) zero.
pub(crate) fn guard_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent >= MIN_EXTENT {
        extent
    } else {
        log::trace!("extent {extent} floored to {MIN_EXTENT}");
        MIN_EXTENT
    }
}

fn clamp_or_zero(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// X axis: right of center is higher.
pub fn offset_to_percent(offset: f64, half_extent: f64) -> f64 {
    clamp_or_zero(50.0 + offset * 50.0 / guard_extent(half_extent), 100.0)
}

/// Y axis: up (negative offset) is higher.
pub fn offset_to_percent_inverted(offset: f64, half_extent: f64) -> f64 {
    clamp_or_zero(50.0 - offset * 50.0 / guard_extent(half_extent), 100.0)
}

/// Inverse of [`offset_to_percent`], returned in absolute coordinates.
pub fn percent_to_offset(percent: f64, half_extent: f64, center: f64) -> f64 {
    (percent - 50.0) * guard_extent(half_extent) / 50.0 + center
}

/// Inverse of [`offset_to_percent_inverted`], returned in absolute coordinates.
pub fn percent_to_offset_inverted(percent: f64, half_extent: f64, center: f64) -> f64 {
    (50.0 - percent) * guard_extent(half_extent) / 50.0 + center
}

/// Hue across the full width: left edge 0°, center 180°, right edge 360°.
pub fn offset_to_hue(offset: f64, half_extent: f64) -> f64 {
    clamp_or_zero(offset * 180.0 / guard_extent(half_extent) + 180.0, 360.0)
}

/// Inverse of [`offset_to_hue`], returned in absolute coordinates.
pub fn hue_to_offset(hue: f64, half_extent: f64, center: f64) -> f64 {
    (hue - 180.0) * guard_extent(half_extent) / 180.0 + center
}
