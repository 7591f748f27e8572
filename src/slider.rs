//! Linear slider geometry (alpha, single HSV component, RGB channel).
//!
//! A track maps an offset along its length to a value in `[minimum,
//! maximum]`. Both ends short-circuit before any division, so a track of
//! zero length or zero range is still well defined.

use crate::color::{GradientStop, Rgba};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrack {
    length: f64,
    minimum: f64,
    maximum: f64,
    /// Leading edge at `maximum` (e.g. an opaque-to-transparent alpha track).
    inverted: bool,
    /// Offset of the track start within the widget.
    inset: f64,
}

impl LinearTrack {
    pub fn new(length: f64, minimum: f64, maximum: f64) -> Self {
        Self {
            length: if length.is_finite() { length.max(0.0) } else { 0.0 },
            minimum,
            maximum,
            inverted: false,
            inset: 0.0,
        }
    }

    /// Track for a widget `width` wide whose thumb of `thumb_radius` must
    /// stay fully inside it: the usable length excludes a radius at each end.
    pub fn from_width(width: f64, thumb_radius: f64, minimum: f64, maximum: f64) -> Self {
        let inset = thumb_radius.max(0.0);
        Self {
            inset,
            ..Self::new(width - 2.0 * inset, minimum, maximum)
        }
    }

    /// Run the track from `maximum` to `minimum`.
    pub fn inverted(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn offset_to_proportion(&self, offset: f64) -> f64 {
        if offset.is_nan() || offset <= 0.0 {
            return 0.0;
        }
        if offset >= self.length {
            return 1.0;
        }
        offset / self.length
    }

    pub fn proportion_to_offset(&self, proportion: f64) -> f64 {
        if proportion.is_nan() {
            return 0.0;
        }
        proportion.clamp(0.0, 1.0) * self.length
    }

    pub fn proportion_to_value(&self, proportion: f64) -> f64 {
        if proportion.is_nan() || proportion <= 0.0 {
            return self.minimum;
        }
        if proportion >= 1.0 {
            return self.maximum;
        }
        proportion * (self.maximum - self.minimum) + self.minimum
    }

    pub fn value_to_proportion(&self, value: f64) -> f64 {
        if value.is_nan() || value <= self.minimum {
            return 0.0;
        }
        if value >= self.maximum {
            return 1.0;
        }
        (value - self.minimum) / (self.maximum - self.minimum)
    }

    /// Value for an offset measured from the track start.
    pub fn offset_to_value(&self, offset: f64) -> f64 {
        let proportion = self.offset_to_proportion(offset);
        if self.inverted {
            self.proportion_to_value(1.0 - proportion)
        } else {
            self.proportion_to_value(proportion)
        }
    }

    /// Offset from the track start where the thumb for `value` sits.
    pub fn value_to_offset(&self, value: f64) -> f64 {
        let proportion = self.value_to_proportion(value);
        if self.inverted {
            self.proportion_to_offset(1.0 - proportion)
        } else {
            self.proportion_to_offset(proportion)
        }
    }

    /// Value under a pointer at widget coordinate `x`.
    pub fn pointer_to_value(&self, x: f64) -> f64 {
        self.offset_to_value(x - self.inset)
    }

    /// Widget coordinate of the thumb center for `value`.
    pub fn value_to_pointer(&self, value: f64) -> f64 {
        self.value_to_offset(value) + self.inset
    }
}

/// One channel of an RGB slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    pub fn get(self, color: Rgba) -> u8 {
        match self {
            RgbChannel::Red => color.r,
            RgbChannel::Green => color.g,
            RgbChannel::Blue => color.b,
        }
    }

    pub fn with(self, color: Rgba, value: u8) -> Rgba {
        match self {
            RgbChannel::Red => Rgba { r: value, ..color },
            RgbChannel::Green => Rgba { g: value, ..color },
            RgbChannel::Blue => Rgba { b: value, ..color },
        }
    }

    /// Set from a slider value, rounding and clamping into 0–255.
    pub fn with_value(self, color: Rgba, value: f64) -> Rgba {
        let value = if value.is_nan() {
            0
        } else {
            value.round().clamp(0.0, 255.0) as u8
        };
        self.with(color, value)
    }

    pub fn track(self, width: f64, thumb_radius: f64) -> LinearTrack {
        LinearTrack::from_width(width, thumb_radius, 0.0, 255.0)
    }

    /// Channel at 0 on the left to 255 on the right, others held.
    pub fn stops(self, color: Rgba) -> [GradientStop; 2] {
        [
            GradientStop::new(0.0, self.with(color, 0)),
            GradientStop::new(1.0, self.with(color, 255)),
        ]
    }
}

/// Transparent to opaque version of `color`.
pub fn alpha_stops(color: Rgba) -> [GradientStop; 2] {
    [
        GradientStop::new(0.0, color.with_alpha(0)),
        GradientStop::new(1.0, color.with_alpha(255)),
    ]
}

/// Alpha track over the full byte range.
pub fn alpha_track(width: f64, thumb_radius: f64) -> LinearTrack {
    LinearTrack::from_width(width, thumb_radius, 0.0, 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_short_circuit() {
        let track = LinearTrack::new(200.0, 0.0, 100.0);
        assert_eq!(track.offset_to_value(-5.0), 0.0);
        assert_eq!(track.offset_to_value(0.0), 0.0);
        assert_eq!(track.offset_to_value(200.0), 100.0);
        assert_eq!(track.offset_to_value(900.0), 100.0);
        assert_eq!(track.offset_to_value(50.0), 25.0);
    }

    #[test]
    fn test_zero_length_track() {
        let track = LinearTrack::new(0.0, 10.0, 20.0);
        assert_eq!(track.offset_to_value(0.0), 10.0);
        assert_eq!(track.offset_to_value(3.0), 20.0);
        assert_eq!(track.value_to_offset(15.0), 0.0);
        assert!(track.offset_to_value(f64::NAN).is_finite());

        let negative = LinearTrack::new(-40.0, 0.0, 1.0);
        assert_eq!(negative.length(), 0.0);
    }

    #[test]
    fn test_zero_range_track() {
        let track = LinearTrack::new(100.0, 5.0, 5.0);
        assert_eq!(track.value_to_offset(5.0), 0.0);
        assert_eq!(track.value_to_offset(6.0), 100.0);
        assert_eq!(track.offset_to_value(60.0), 5.0);
    }

    #[test]
    fn test_value_to_offset() {
        let track = LinearTrack::new(200.0, -50.0, 50.0);
        assert_eq!(track.value_to_offset(0.0), 100.0);
        assert_eq!(track.value_to_offset(-80.0), 0.0);
        assert_eq!(track.value_to_offset(80.0), 200.0);
    }

    #[test]
    fn test_inverted_track() {
        let track = LinearTrack::new(100.0, 0.0, 1.0).inverted();
        assert_eq!(track.offset_to_value(0.0), 1.0);
        assert_eq!(track.offset_to_value(100.0), 0.0);
        assert_eq!(track.offset_to_value(25.0), 0.75);
        assert_eq!(track.value_to_offset(1.0), 0.0);
        assert_eq!(track.value_to_offset(0.25), 75.0);
        assert_eq!(track.inverted().offset_to_value(0.0), 0.0);
    }

    #[test]
    fn test_pointer_inset() {
        let track = LinearTrack::from_width(114.0, 7.0, 0.0, 100.0);
        assert_eq!(track.length(), 100.0);
        assert_eq!(track.pointer_to_value(7.0), 0.0);
        assert_eq!(track.pointer_to_value(57.0), 50.0);
        assert_eq!(track.value_to_pointer(100.0), 107.0);
    }

    #[test]
    fn test_rgb_channels() {
        let c = Rgba::new(10, 20, 30, 40);
        assert_eq!(RgbChannel::Green.get(c), 30);
        assert_eq!(RgbChannel::Red.with(c, 99), Rgba::new(10, 99, 30, 40));
        assert_eq!(RgbChannel::Blue.with_value(c, 300.0).b, 255);
        assert_eq!(RgbChannel::Blue.with_value(c, -3.0).b, 0);
        assert_eq!(RgbChannel::Blue.with_value(c, 12.6).b, 13);

        let [lo, hi] = RgbChannel::Red.stops(c);
        assert_eq!(lo.color, Rgba::new(10, 0, 30, 40));
        assert_eq!(hi.color, Rgba::new(10, 255, 30, 40));

        let track = RgbChannel::Red.track(269.0, 7.0);
        assert_eq!(track.pointer_to_value(262.0), 255.0);
    }

    #[test]
    fn test_alpha_helpers() {
        let [lo, hi] = alpha_stops(Rgba::new(100, 1, 2, 3));
        assert_eq!(lo.color, Rgba::new(0, 1, 2, 3));
        assert_eq!(hi.color, Rgba::new(255, 1, 2, 3));

        let track = alpha_track(269.0, 7.0).inverted();
        assert_eq!(track.pointer_to_value(7.0), 255.0);
        assert_eq!(track.pointer_to_value(262.0), 0.0);
    }
}
