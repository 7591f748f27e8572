//! Fixed swatch palette: a gray ramp followed by tonal ramps of fifteen
//! base colors.

use crate::color::{Hsv, Rgba};
use crate::constants::{SWATCH_BASES, SWATCH_COUNT};
use crate::math;

/// One row of the swatch picker.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub base: Rgba,
    pub colors: Vec<Rgba>,
}

/// White down to dark gray in `count` steps of `255 / count`.
pub fn gray_ramp(count: usize) -> Vec<Rgba> {
    let span = 255 / count.max(1);
    (0..count)
        .map(|i| {
            let c = 255usize.saturating_sub(i * span) as u8;
            Rgba::from_rgb(c, c, c)
        })
        .collect()
}

/// Tints and shades sharing the hue of `base`.
///
/// Value falls by `100 / count` per step while saturation cycles through
/// 20, 40, 60 and 80 percent.
pub fn tonal_ramp(base: Rgba, count: usize) -> Vec<Rgba> {
    let hue = math::rgb_to_hsv(base).h();
    let span = (100 / count.max(1)) as f64;
    (0..count)
        .map(|i| {
            let v = 100.0 - i as f64 * span;
            let s = (i % 4) as f64 * 20.0 + 20.0;
            math::hsv_to_rgb(Hsv::new(255, hue, s, v))
        })
        .collect()
}

/// All rows, gray first.
pub fn swatch_rows() -> Vec<Swatch> {
    SWATCH_BASES
        .iter()
        .enumerate()
        .map(|(i, &base)| Swatch {
            base,
            colors: if i == 0 {
                gray_ramp(SWATCH_COUNT)
            } else {
                tonal_ramp(base, SWATCH_COUNT)
            },
        })
        .collect()
}
