//! Theme color extraction: reduce a set of pixels to one accent color.
//!
//! Pixels with hue 0 are skipped. That drops every gray (their hue is
//! reported as 0) but also pure reds sitting exactly on 0°, a long-standing
//! quirk kept for compatibility.

use crate::color::Rgba;
use crate::constants::{FALLBACK_THEME_COLOR, THEME_HUE_MARGIN};
use crate::math;

/// Representative accent color of `pixels`.
///
/// Picks the average RGB of the pixels that are at least as bright and
/// saturated as the population's typical values and whose hue lies
/// [`THEME_HUE_MARGIN`] degrees above its typical hue. Returns
/// [`FALLBACK_THEME_COLOR`] when no pixel qualifies.
pub fn extract_theme_color(pixels: &[Rgba]) -> Rgba {
    let hued: Vec<(Rgba, f64, f64, f64)> = pixels
        .iter()
        .filter_map(|&c| {
            let hsv = math::rgb_to_hsv(c);
            (hsv.h() != 0.0).then(|| (c, hsv.h(), hsv.s(), hsv.v()))
        })
        .collect();

    if hued.is_empty() {
        log::debug!(
            "no hued pixels among {}; using fallback theme color",
            pixels.len()
        );
        return FALLBACK_THEME_COLOR;
    }

    let count = hued.len() as f64;
    let (mut sum_h, mut sum_s, mut sum_v) = (0.0, 0.0, 0.0);
    let (mut max_h, mut max_s, mut max_v) = (0.0f64, 0.0f64, 0.0f64);
    for &(_, h, s, v) in &hued {
        sum_h += h;
        sum_s += s;
        sum_v += v;
        max_h = max_h.max(h);
        max_s = max_s.max(s);
        max_v = max_v.max(v);
    }

    let target_value = (sum_v / count).max(max_v / 2.0);
    let target_saturation = (sum_s / count).min(max_s / 2.0);
    let target_hue = (sum_h / count).min(max_h / 2.0);

    let (mut r, mut g, mut b, mut n) = (0u64, 0u64, 0u64, 0u64);
    for &(c, h, s, v) in &hued {
        if h >= target_hue + THEME_HUE_MARGIN && v >= target_value && s >= target_saturation {
            r += c.r as u64;
            g += c.g as u64;
            b += c.b as u64;
            n += 1;
        }
    }

    if n == 0 {
        log::debug!(
            "no pixel passed the theme thresholds (hue {target_hue:.1}, sat {target_saturation:.1}, value {target_value:.1})"
        );
        return FALLBACK_THEME_COLOR;
    }

    log::trace!("theme color averaged from {n} of {} pixels", pixels.len());
    Rgba::from_rgb((r / n) as u8, (g / n) as u8, (b / n) as u8)
}

/// Theme color of an in-memory bitmap, sampled from an 8×8 thumbnail.
#[cfg(feature = "image")]
pub fn theme_color_from_image(bitmap: &image::RgbaImage) -> Rgba {
    use crate::constants::THUMBNAIL_SIZE;

    if bitmap.width() == 0 || bitmap.height() == 0 {
        return FALLBACK_THEME_COLOR;
    }
    let thumb = image::imageops::thumbnail(bitmap, THUMBNAIL_SIZE, THUMBNAIL_SIZE);
    let pixels: Vec<Rgba> = thumb
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            Rgba::new(a, r, g, b)
        })
        .collect();
    extract_theme_color(&pixels)
}
