//! Color math — direct RGB/HSV conversions without external dependencies.
//! Hue is in degrees, saturation and value in percent, channels in 0–255.

use crate::color::{Hsv, Rgba};

/// RGB → HSV. Alpha is carried over unchanged.
///
/// Grays (all channels equal) have no meaningful hue and report hue 0.
pub fn rgb_to_hsv(rgb: Rgba) -> Hsv {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r && g >= b {
        // A red-dominant color with g == b lands exactly on 0 here.
        60.0 * (g - b) / delta
    } else if max == r {
        60.0 * (g - b) / delta + 360.0
    } else if max == g {
        60.0 * (b - r) / delta + 120.0
    } else {
        60.0 * (r - g) / delta + 240.0
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv::new(rgb.a, h, s * 100.0, max * 100.0)
}

/// HSV → RGB. Alpha is carried over unchanged.
///
/// Hue 360 is treated as 0. With zero saturation the hue is ignored and the
/// result is the gray matching the value.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgba {
    let h = if hsv.h() >= 360.0 { 0.0 } else { hsv.h() };

    if hsv.s() == 0.0 {
        let gray = fold_channel(hsv.v() / 100.0 * 255.0);
        return Rgba::new(hsv.a(), gray, gray, gray);
    }

    let s = hsv.s() / 100.0;
    let v = hsv.v() / 100.0;

    let h6 = h / 60.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgba::new(
        hsv.a(),
        fold_channel(r * 255.0),
        fold_channel(g * 255.0),
        fold_channel(b * 255.0),
    )
}

/// Fully saturated, full-value, opaque color for a hue in degrees.
///
/// Used for gradient stops around the wheel; hues outside [0, 360) wrap.
pub fn hue_to_rgb(hue: f64) -> Rgba {
    let hue = if hue.is_finite() {
        hue.rem_euclid(360.0)
    } else {
        0.0
    };
    let hh = hue / 60.0;
    let x = ((1.0 - (hh % 2.0 - 1.0).abs()) * 255.0).round() as u8;

    match hh as u32 {
        0 => Rgba::from_rgb(255, x, 0),
        1 => Rgba::from_rgb(x, 255, 0),
        2 => Rgba::from_rgb(0, 255, x),
        3 => Rgba::from_rgb(0, x, 255),
        4 => Rgba::from_rgb(x, 0, 255),
        _ => Rgba::from_rgb(255, 0, x),
    }
}

/// Round a scaled channel and fold it back into 0–255 by whole turns.
///
/// Float drift can push a channel a hair outside the range; folding keeps
/// the arithmetic of the original pickers rather than saturating.
pub(crate) fn fold_channel(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    let mut value = value.round();
    while value > 255.0 {
        value -= 255.0;
    }
    while value < 0.0 {
        value += 255.0;
    }
    value as u8
}

/// Normalize a hex string to six uppercase digits (`RRGGBB`).
///
/// Shorthand is expanded and any alpha is dropped. Returns `None` when the
/// text is not a color.
pub fn normalize_hex(hex: &str) -> Option<String> {
    Rgba::from_hex(hex).ok().map(|c| c.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_primaries_to_rgb() {
        assert_eq!(
            hsv_to_rgb(Hsv::new(255, 0.0, 100.0, 100.0)),
            Rgba::new(255, 255, 0, 0)
        );
        assert_eq!(
            hsv_to_rgb(Hsv::new(255, 120.0, 100.0, 100.0)),
            Rgba::new(255, 0, 255, 0)
        );
        assert_eq!(
            hsv_to_rgb(Hsv::new(255, 240.0, 100.0, 100.0)),
            Rgba::new(255, 0, 0, 255)
        );
    }

    #[test]
    fn test_magenta_to_hsv() {
        let hsv = rgb_to_hsv(Rgba::new(255, 255, 0, 255));
        assert_eq!(hsv.a(), 255);
        assert!(approx_eq(hsv.h(), 300.0));
        assert!(approx_eq(hsv.s(), 100.0));
        assert!(approx_eq(hsv.v(), 100.0));
    }

    #[test]
    fn test_each_hue_branch() {
        // max == g
        assert!(approx_eq(rgb_to_hsv(Rgba::from_rgb(0, 255, 255)).h(), 180.0));
        // max == b
        assert!(approx_eq(rgb_to_hsv(Rgba::from_rgb(255, 0, 255)).h(), 300.0));
        assert!(approx_eq(rgb_to_hsv(Rgba::from_rgb(0, 0, 255)).h(), 240.0));
        // max == r, g > b
        assert!(approx_eq(rgb_to_hsv(Rgba::from_rgb(255, 255, 0)).h(), 60.0));
        // max == r, g < b
        assert!(approx_eq(rgb_to_hsv(Rgba::from_rgb(255, 0, 51)).h(), 348.0));
    }

    #[test]
    fn test_red_with_equal_green_blue_is_hue_zero() {
        let hsv = rgb_to_hsv(Rgba::from_rgb(200, 40, 40));
        assert_eq!(hsv.h(), 0.0);
        assert!(hsv.s() > 0.0);
    }

    #[test]
    fn test_grays_are_achromatic() {
        for gray in [0u8, 1, 77, 128, 254, 255] {
            let hsv = rgb_to_hsv(Rgba::new(90, gray, gray, gray));
            assert_eq!(hsv.h(), 0.0);
            assert_eq!(hsv.s(), 0.0);
            assert!(approx_eq(hsv.v(), gray as f64 / 255.0 * 100.0));
            assert_eq!(hsv_to_rgb(hsv), Rgba::new(90, gray, gray, gray));
        }
    }

    #[test]
    fn test_zero_saturation_ignores_hue() {
        let a = hsv_to_rgb(Hsv::new(255, 10.0, 0.0, 50.0));
        let b = hsv_to_rgb(Hsv::new(255, 250.0, 0.0, 50.0));
        assert_eq!(a, b);
        assert_eq!(a, Rgba::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_hue_360_matches_hue_0() {
        for (s, v) in [(100.0, 100.0), (35.0, 80.0), (1.0, 1.0)] {
            assert_eq!(
                hsv_to_rgb(Hsv::new(17, 360.0, s, v)),
                hsv_to_rgb(Hsv::new(17, 0.0, s, v))
            );
        }
    }

    #[test]
    fn test_alpha_passes_through() {
        let c = Rgba::new(42, 10, 200, 30);
        assert_eq!(rgb_to_hsv(c).a(), 42);
        assert_eq!(hsv_to_rgb(rgb_to_hsv(c)).a, 42);
    }

    #[test]
    fn test_hue_to_rgb_sectors() {
        assert_eq!(hue_to_rgb(0.0), Rgba::from_rgb(255, 0, 0));
        assert_eq!(hue_to_rgb(60.0), Rgba::from_rgb(255, 255, 0));
        assert_eq!(hue_to_rgb(120.0), Rgba::from_rgb(0, 255, 0));
        assert_eq!(hue_to_rgb(180.0), Rgba::from_rgb(0, 255, 255));
        assert_eq!(hue_to_rgb(240.0), Rgba::from_rgb(0, 0, 255));
        assert_eq!(hue_to_rgb(300.0), Rgba::from_rgb(255, 0, 255));
        assert_eq!(hue_to_rgb(30.0), Rgba::from_rgb(255, 128, 0));
        assert_eq!(hue_to_rgb(360.0), hue_to_rgb(0.0));
        assert_eq!(hue_to_rgb(-60.0), hue_to_rgb(300.0));
    }

    #[test]
    fn test_hue_to_rgb_agrees_with_hsv_to_rgb() {
        for hue in (0..360).step_by(15) {
            let hue = hue as f64;
            let a = hue_to_rgb(hue);
            let b = hsv_to_rgb(Hsv::new(255, hue, 100.0, 100.0));
            assert!(a.r.abs_diff(b.r) <= 1, "hue {hue}");
            assert!(a.g.abs_diff(b.g) <= 1, "hue {hue}");
            assert!(a.b.abs_diff(b.b) <= 1, "hue {hue}");
        }
    }

    #[test]
    fn test_fold_channel() {
        assert_eq!(fold_channel(255.0), 255);
        assert_eq!(fold_channel(255.4), 255);
        assert_eq!(fold_channel(256.0), 1);
        assert_eq!(fold_channel(-0.4), 0);
        assert_eq!(fold_channel(-1.0), 254);
        assert_eq!(fold_channel(f64::NAN), 0);
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#abc").as_deref(), Some("AABBCC"));
        assert_eq!(normalize_hex("FF3B82F6").as_deref(), Some("3B82F6"));
        assert_eq!(normalize_hex("nope"), None);
    }
}
