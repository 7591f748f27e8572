//! Circular hue wheel geometry.
//!
//! The wheel is a hue ring with a saturation/value square inscribed in it.
//! Angle maps to hue: 0° at 3 o'clock, growing clockwise in screen space
//! (y points down). A plain disc variant maps distance from the center to
//! saturation instead.

use std::f64::consts::{PI, SQRT_2, TAU};

use floem::kurbo::{Point, Size, Vec2};

use crate::color::{Hsv, Rgba};
use crate::constants;
use crate::math;
use crate::square::{self, guard_extent};

/// Hue in degrees [0, 360) for a vector relative to the wheel center.
pub fn vector_to_hue(v: Vec2) -> f64 {
    (v.y.atan2(v.x) * 180.0 / PI + 360.0) % 360.0
}

/// Point on a circle of `radius` around `center` at `hue` radians.
pub fn hue_to_vector(hue: f64, radius: f64, center: Point) -> Point {
    center + Vec2::from_angle(hue) * radius
}

/// Saturation in percent for the hue/saturation disc: center 0, rim 100.
pub fn vector_to_saturation(v: Vec2, radius: f64) -> f64 {
    let s = v.length() / guard_extent(radius);
    if s.is_nan() {
        0.0
    } else {
        s.clamp(0.0, 1.0) * 100.0
    }
}

/// Thumb position on the hue/saturation disc.
pub fn hue_saturation_to_vector(hue: f64, saturation: f64, radius: f64, center: Point) -> Point {
    center + Vec2::from_angle(hue.to_radians()) * (guard_extent(radius) * saturation / 100.0)
}

/// Hue and saturation picked on the disc; value and alpha are kept.
pub fn disc_apply(hsv: Hsv, v: Vec2, radius: f64) -> Hsv {
    hsv.with_h(vector_to_hue(v)).with_s(vector_to_saturation(v, radius))
}

/// Part of the wheel a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelRegion {
    Ring,
    Square,
}

/// Geometry of a hue ring with an inscribed square, recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    center: Point,
    radius: f64,
    stroke_width: f64,
    square: f64,
}

impl WheelLayout {
    /// Layout for a widget of `size` using the default ring thickness.
    pub fn from_size(size: Size) -> Self {
        Self::with_stroke(size, constants::WHEEL_STROKE_WIDTH)
    }

    pub fn with_stroke(size: Size, stroke_width: f64) -> Self {
        let stroke_width = stroke_width.max(0.0);
        let radius = guard_extent(size.min_side() / 2.0 - stroke_width);
        let square = guard_extent((radius - stroke_width) / SQRT_2);
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius,
            stroke_width,
            square,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the ring's centerline.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Half the side of the inscribed square.
    pub fn square_half_extent(&self) -> f64 {
        self.square
    }

    /// Which region a center-relative vector falls in, if any.
    pub fn hit(&self, v: Vec2) -> Option<WheelRegion> {
        let len = v.length();
        if len + self.stroke_width > self.radius && len - self.stroke_width < self.radius {
            Some(WheelRegion::Ring)
        } else if v.x.abs() < self.square && v.y.abs() < self.square {
            Some(WheelRegion::Square)
        } else {
            None
        }
    }

    /// New color after dragging to `v` within `region`.
    ///
    /// The ring only moves hue; the square moves saturation (x) and value
    /// (y, up is brighter).
    pub fn apply(&self, region: WheelRegion, hsv: Hsv, v: Vec2) -> Hsv {
        match region {
            WheelRegion::Ring => hsv.with_h(vector_to_hue(v)),
            WheelRegion::Square => hsv
                .with_s(square::offset_to_percent(v.x, self.square))
                .with_v(square::offset_to_percent_inverted(v.y, self.square)),
        }
    }

    /// Thumb position on the ring for the current hue.
    pub fn hue_thumb(&self, hsv: Hsv) -> Point {
        hue_to_vector(hsv.h().to_radians(), self.radius, self.center)
    }

    /// Thumb position inside the square for the current saturation/value.
    pub fn square_thumb(&self, hsv: Hsv) -> Point {
        Point::new(
            square::percent_to_offset(hsv.s(), self.square, self.center.x),
            square::percent_to_offset_inverted(hsv.v(), self.square, self.center.y),
        )
    }

    /// Evenly spaced dots around the ring with their hue colors, one per
    /// stroke width of circumference.
    pub fn ring_samples(&self) -> Vec<(Point, Rgba)> {
        let step = self.stroke_width.max(1.0);
        let count = ((TAU * self.radius / step) as usize).max(1);
        (0..count)
            .map(|i| {
                let angle = TAU * i as f64 / count as f64;
                (
                    hue_to_vector(angle, self.radius, self.center),
                    math::hue_to_rgb(angle.to_degrees()),
                )
            })
            .collect()
    }
}
