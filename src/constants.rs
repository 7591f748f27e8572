//! Sizing constants and fixed color tables shared by the pickers.

use crate::color::{GradientStop, Rgba};

/// Smallest extent (radius, half-width, half-height) a geometry mapping
/// will divide by, in device-independent pixels.
pub const MIN_EXTENT: f64 = 20.0;

/// Ring thickness of the hue wheel
pub const WHEEL_STROKE_WIDTH: f64 = 8.0;

/// Inset between a palette widget's bounds and its square
pub const PALETTE_STROKE_PADDING: f64 = 12.0;

/// Thumb circle radius drawn over squares and rings
pub const THUMB_RADIUS: f64 = 9.0;

/// Side length of the thumbnail a bitmap is reduced to before theme extraction
pub const THUMBNAIL_SIZE: u32 = 8;

/// Returned by theme extraction when no pixel qualifies.
pub const FALLBACK_THEME_COLOR: Rgba = Rgba::new(255, 177, 101, 105);

/// Minimum hue distance above the target hue for a pixel to count in the
/// second extraction pass.
pub const THEME_HUE_MARGIN: f64 = 10.0;

/// Rainbow stops used behind hue-spanning tracks and squares.
pub const HUE_STOPS: [GradientStop; 7] = [
    GradientStop::new(0.0, Rgba::new(255, 255, 0, 0)),
    GradientStop::new(1.0 / 6.0, Rgba::new(255, 255, 255, 0)),
    GradientStop::new(2.0 / 6.0, Rgba::new(255, 0, 255, 0)),
    GradientStop::new(3.0 / 6.0, Rgba::new(255, 0, 255, 255)),
    GradientStop::new(4.0 / 6.0, Rgba::new(255, 0, 0, 255)),
    GradientStop::new(5.0 / 6.0, Rgba::new(255, 255, 0, 255)),
    GradientStop::new(1.0, Rgba::new(255, 255, 0, 0)),
];

/// Number of entries in each swatch row
pub const SWATCH_COUNT: usize = 16;

/// Base color of each swatch row. The first row is the gray ramp.
pub const SWATCH_BASES: [Rgba; 16] = [
    Rgba::new(255, 0, 0, 0),
    Rgba::new(255, 192, 0, 0),
    Rgba::new(255, 255, 0, 0),
    Rgba::new(255, 254, 68, 1),
    Rgba::new(255, 255, 192, 0),
    Rgba::new(255, 255, 255, 0),
    Rgba::new(255, 146, 208, 80),
    Rgba::new(255, 86, 197, 1),
    Rgba::new(255, 0, 176, 80),
    Rgba::new(255, 6, 192, 197),
    Rgba::new(255, 0, 176, 240),
    Rgba::new(255, 0, 112, 192),
    Rgba::new(255, 0, 32, 96),
    Rgba::new(255, 112, 48, 160),
    Rgba::new(255, 255, 64, 196),
    Rgba::new(255, 254, 14, 111),
];
