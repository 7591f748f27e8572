//! Palette pickers: a square driving two HSV components plus a slider
//! driving the third.
//!
//! A variant is named after the component its slider controls:
//!
//! | axis         | slider | square x           | square y |
//! |--------------|--------|--------------------|----------|
//! | `Hue`        | H      | S                  | V        |
//! | `Saturation` | S      | H (0° left → 360°) | V        |
//! | `Value`      | V      | H (0° left → 360°) | S        |
//!
//! The y axis always grows upwards.

use floem::kurbo::{Point, Size, Vec2};

use crate::color::{GradientStop, Hsv};
use crate::constants;
use crate::math;
use crate::slider::LinearTrack;
use crate::square::{self, guard_extent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaletteAxis {
    Hue,
    Saturation,
    Value,
}

impl PaletteAxis {
    pub fn unit(self) -> &'static str {
        match self {
            PaletteAxis::Hue => "º",
            PaletteAxis::Saturation | PaletteAxis::Value => "%",
        }
    }

    pub fn minimum(self) -> f64 {
        0.0
    }

    pub fn maximum(self) -> f64 {
        match self {
            PaletteAxis::Hue => 360.0,
            PaletteAxis::Saturation | PaletteAxis::Value => 100.0,
        }
    }

    /// The component the slider shows.
    pub fn component(self, hsv: Hsv) -> f64 {
        match self {
            PaletteAxis::Hue => hsv.h(),
            PaletteAxis::Saturation => hsv.s(),
            PaletteAxis::Value => hsv.v(),
        }
    }

    /// `hsv` with the slider's component replaced (and clamped).
    pub fn with_component(self, hsv: Hsv, value: f64) -> Hsv {
        match self {
            PaletteAxis::Hue => hsv.with_h(value),
            PaletteAxis::Saturation => hsv.with_s(value),
            PaletteAxis::Value => hsv.with_v(value),
        }
    }

    /// Slider track for a widget `width` pixels wide.
    pub fn slider_track(self, width: f64, thumb_radius: f64) -> LinearTrack {
        LinearTrack::from_width(width, thumb_radius, self.minimum(), self.maximum())
    }

    /// Gradient behind the slider, holding the other components fixed.
    pub fn slider_stops(self, hsv: Hsv) -> Vec<GradientStop> {
        let at = |offset: f64, hsv: Hsv| GradientStop::new(offset, math::hsv_to_rgb(hsv));
        match self {
            PaletteAxis::Hue => (0..=6)
                .map(|i| {
                    let hue = (i % 6) as f64 * 60.0;
                    at(i as f64 / 6.0, hsv.with_h(hue))
                })
                .collect(),
            PaletteAxis::Saturation => vec![at(0.0, hsv.with_s(0.0)), at(1.0, hsv.with_s(100.0))],
            PaletteAxis::Value => vec![at(0.0, hsv.with_v(0.0)), at(1.0, hsv.with_v(100.0))],
        }
    }

    /// New color for a drag to `position` (relative to the square's center).
    pub fn delta(self, hsv: Hsv, position: Vec2, half_width: f64, half_height: f64) -> Hsv {
        let y = square::offset_to_percent_inverted(position.y, half_height);
        match self {
            PaletteAxis::Hue => hsv
                .with_s(square::offset_to_percent(position.x, half_width))
                .with_v(y),
            PaletteAxis::Saturation => hsv
                .with_h(square::offset_to_hue(position.x, half_width))
                .with_v(y),
            PaletteAxis::Value => hsv
                .with_h(square::offset_to_hue(position.x, half_width))
                .with_s(y),
        }
    }

    /// Where the square's thumb sits for `hsv`.
    pub fn thumb(self, hsv: Hsv, center: Point, half_width: f64, half_height: f64) -> Point {
        let (x, y) = match self {
            PaletteAxis::Hue => (
                square::percent_to_offset(hsv.s(), half_width, center.x),
                square::percent_to_offset_inverted(hsv.v(), half_height, center.y),
            ),
            PaletteAxis::Saturation => (
                square::hue_to_offset(hsv.h(), half_width, center.x),
                square::percent_to_offset_inverted(hsv.v(), half_height, center.y),
            ),
            PaletteAxis::Value => (
                square::hue_to_offset(hsv.h(), half_width, center.x),
                square::percent_to_offset_inverted(hsv.s(), half_height, center.y),
            ),
        };
        Point::new(x, y)
    }
}

/// Square area of a palette widget, inset by a stroke padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteSquare {
    center: Point,
    half_width: f64,
    half_height: f64,
    padding: f64,
}

impl PaletteSquare {
    pub fn from_size(size: Size) -> Self {
        Self::with_padding(size, constants::PALETTE_STROKE_PADDING)
    }

    pub fn with_padding(size: Size, padding: f64) -> Self {
        let padding = padding.max(0.0);
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            half_width: guard_extent(size.width / 2.0 - padding),
            half_height: guard_extent(size.height / 2.0 - padding),
            padding,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    /// Whether a press at `v` (relative to the center) starts a drag.
    ///
    /// The padding counts as part of the square; drags starting there clamp
    /// to the nearest edge.
    pub fn contains(&self, v: Vec2) -> bool {
        v.x.abs() < self.half_width + self.padding && v.y.abs() < self.half_height + self.padding
    }

    pub fn delta(&self, axis: PaletteAxis, hsv: Hsv, v: Vec2) -> Hsv {
        axis.delta(hsv, v, self.half_width, self.half_height)
    }

    pub fn thumb(&self, axis: PaletteAxis, hsv: Hsv) -> Point {
        axis.thumb(hsv, self.center, self.half_width, self.half_height)
    }
}
