//! `Rgba` and `Hsv` — the two color representations the pickers exchange.
//!
//! `Rgba` stores 8-bit channels. `Hsv` stores hue in degrees and
//! saturation/value in percent; every way of setting a component clamps it
//! into range instead of rejecting it.

use std::fmt;
use std::str::FromStr;

use floem::peniko;

use crate::error::ColorError;
use crate::math;

/// 8-bit color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl Rgba {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_hsv(self) -> Hsv {
        math::rgb_to_hsv(self)
    }

    /// Parse a hex string (with or without `#`).
    ///
    /// Accepts 3-digit shorthand (`F80`), `RRGGBB`, and `AARRGGBB`. The
    /// shorter forms are fully opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        parse_hex(hex).inspect_err(|err| log::debug!("rejected hex color {hex:?}: {err}"))
    }

    /// Format as uppercase `RRGGBB` (no `#`, alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Format as uppercase `AARRGGBB`.
    pub fn to_hex_argb(&self) -> String {
        format!("{:02X}{}", self.a, self.to_hex())
    }
}

fn parse_hex(hex: &str) -> Result<Rgba, ColorError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(bad));
    }

    let nibbles: Vec<u8> = digits
        .chars()
        .map(|c| c.to_digit(16).unwrap_or(0) as u8)
        .collect();
    let byte = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];

    match nibbles.len() {
        3 => Ok(Rgba::from_rgb(
            nibbles[0] * 17,
            nibbles[1] * 17,
            nibbles[2] * 17,
        )),
        6 => Ok(Rgba::from_rgb(byte(0), byte(2), byte(4))),
        8 => Ok(Rgba::new(byte(0), byte(2), byte(4), byte(6))),
        len => Err(ColorError::InvalidLength(len)),
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{}", self.to_hex())
        } else {
            write!(f, "#{}", self.to_hex_argb())
        }
    }
}

impl From<Rgba> for peniko::Color {
    fn from(c: Rgba) -> Self {
        peniko::Color::rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<peniko::Color> for Rgba {
    fn from(c: peniko::Color) -> Self {
        Rgba::new(c.a, c.r, c.g, c.b)
    }
}

/// A color at a relative position (0.0–1.0) along a track gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Hue in degrees [0, 360], saturation and value in percent [0, 100].
///
/// A hue of 360 is the same color as 0; conversions treat it as such.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawHsv", into = "RawHsv")
)]
pub struct Hsv {
    a: u8,
    h: f64,
    s: f64,
    v: f64,
}

/// Opaque pure red.
impl Default for Hsv {
    fn default() -> Self {
        Self {
            a: 255,
            h: 0.0,
            s: 100.0,
            v: 100.0,
        }
    }
}

fn clamp_component(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

impl Hsv {
    pub fn new(a: u8, h: f64, s: f64, v: f64) -> Self {
        Self {
            a,
            h: clamp_component(h, 360.0),
            s: clamp_component(s, 100.0),
            v: clamp_component(v, 100.0),
        }
    }

    /// Alpha (0–255).
    pub fn a(&self) -> u8 {
        self.a
    }
    /// Hue in degrees (0–360).
    pub fn h(&self) -> f64 {
        self.h
    }
    /// Saturation in percent (0–100).
    pub fn s(&self) -> f64 {
        self.s
    }
    /// Value in percent (0–100).
    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn set_a(&mut self, a: u8) {
        self.a = a;
    }
    pub fn set_h(&mut self, h: f64) {
        self.h = clamp_component(h, 360.0);
    }
    pub fn set_s(&mut self, s: f64) {
        self.s = clamp_component(s, 100.0);
    }
    pub fn set_v(&mut self, v: f64) {
        self.v = clamp_component(v, 100.0);
    }

    pub fn with_a(mut self, a: u8) -> Self {
        self.set_a(a);
        self
    }
    pub fn with_h(mut self, h: f64) -> Self {
        self.set_h(h);
        self
    }
    pub fn with_s(mut self, s: f64) -> Self {
        self.set_s(s);
        self
    }
    pub fn with_v(mut self, v: f64) -> Self {
        self.set_v(v);
        self
    }

    pub fn to_rgba(self) -> Rgba {
        math::hsv_to_rgb(self)
    }
}

impl From<Rgba> for Hsv {
    fn from(c: Rgba) -> Self {
        math::rgb_to_hsv(c)
    }
}

impl From<Hsv> for Rgba {
    fn from(c: Hsv) -> Self {
        math::hsv_to_rgb(c)
    }
}

/// Unchecked wire form; converting back into `Hsv` re-applies the clamps.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawHsv {
    a: u8,
    h: f64,
    s: f64,
    v: f64,
}

#[cfg(feature = "serde")]
impl From<RawHsv> for Hsv {
    fn from(raw: RawHsv) -> Self {
        Hsv::new(raw.a, raw.h, raw.s, raw.v)
    }
}

#[cfg(feature = "serde")]
impl From<Hsv> for RawHsv {
    fn from(hsv: Hsv) -> Self {
        RawHsv {
            a: hsv.a,
            h: hsv.h,
            s: hsv.s,
            v: hsv.v,
        }
    }
}
