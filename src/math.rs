//! Color math: conversions from a sampled RGB pixel to every reported
//! representation, plus the rounding helper they share.
//!
//! Everything here is pure. Percent outputs are rounded to two decimals,
//! CMYK to whole percents.

use crate::color::{Cmyk, ColorSample, Hsl, Hsv, Rgb};
use crate::error::{KolorError, Result};

/// Decimals kept on HSL and HSV components.
const COMPONENT_PRECISION: i32 = 2;

/// Round `value` to `precision` decimals, half away from zero.
///
/// A negative `precision` rounds to tens, hundreds and so on. A precision so
/// large or small that its power of ten leaves the f64 range returns `value`
/// unchanged. Fails with [`KolorError::InvalidArgument`] only when `value`
/// is not a number (NaN or infinite).
pub fn round_to(value: f64, precision: i32) -> Result<f64> {
    if !value.is_finite() {
        return Err(KolorError::InvalidArgument(format!(
            "round_to: value must be a finite number, got {value}"
        )));
    }
    Ok(round_unchecked(value, precision))
}

fn round_unchecked(value: f64, precision: i32) -> f64 {
    if precision < 0 {
        // Round to a multiple of 10^-precision.
        let Some(exponent) = precision.checked_neg() else {
            return value;
        };
        let divisor = 10f64.powi(exponent);
        if !divisor.is_finite() {
            return value;
        }
        return (value / divisor).round() * divisor;
    }
    if value.fract() == 0.0 {
        return value;
    }
    let multiplier = 10f64.powi(precision);
    let scaled = value * multiplier;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / multiplier
}

/// Hue in turns (0.0–1.0) from normalized channels and their max/delta.
fn hue_turns(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h / 6.0
}

/// Hue turns to rounded degrees in `[0, 360)`.
fn hue_degrees(turns: f64) -> f64 {
    let deg = round_unchecked(turns * 360.0, COMPONENT_PRECISION);
    if deg >= 360.0 {
        deg - 360.0
    } else {
        deg
    }
}

fn percent(fraction: f64) -> f64 {
    round_unchecked(fraction * 100.0, COMPONENT_PRECISION)
}

/// RGB to HSL: hue in degrees, saturation and lightness in percent.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: percent(l),
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    Hsl {
        h: hue_degrees(hue_turns(r, g, b, max, d)),
        s: percent(s),
        l: percent(l),
    }
}

/// RGB to HSV: hue in degrees, saturation and value in percent.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if max == min {
        0.0
    } else {
        hue_degrees(hue_turns(r, g, b, max, d))
    };

    Hsv {
        h,
        s: percent(s),
        v: percent(max),
    }
}

/// RGB to CMYK on a 0–100 scale. Pure black is `0, 0, 0, 100`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    if rgb == Rgb::BLACK {
        return Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 100,
        };
    }

    let (r, g, b) = rgb.to_unit();
    let c = 1.0 - r;
    let m = 1.0 - g;
    let y = 1.0 - b;
    let k = c.min(m).min(y);

    // k < 1 here: at least one channel is non-zero.
    let ink = |v: f64| ((v - k) / (1.0 - k) * 100.0).round().clamp(0.0, 100.0) as u8;

    Cmyk {
        c: ink(c),
        m: ink(m),
        y: ink(y),
        k: (k * 100.0).round().clamp(0.0, 100.0) as u8,
    }
}

/// Uppercase `RRGGBB`, no `#` prefix.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Every representation of `rgb`, computed together.
pub fn build_color_sample(rgb: Rgb) -> ColorSample {
    ColorSample {
        rgb,
        hsl: rgb_to_hsl(rgb),
        hsv: rgb_to_hsv(rgb),
        cmyk: rgb_to_cmyk(rgb),
        hex: rgb_to_hex(rgb),
    }
}

/// HSB/HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb::new(r, g, b)
    }

    #[test]
    fn round_to_rejects_non_numbers() {
        assert!(matches!(
            round_to(f64::NAN, 2),
            Err(KolorError::InvalidArgument(_))
        ));
        assert!(matches!(
            round_to(f64::INFINITY, 2),
            Err(KolorError::InvalidArgument(_))
        ));
        assert!(matches!(
            round_to(f64::NEG_INFINITY, 2),
            Err(KolorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn round_to_negative_precision_rounds_to_tens() {
        assert_eq!(round_to(1234.0, -2), Ok(1200.0));
        assert_eq!(round_to(1250.0, -2), Ok(1300.0));
        assert_eq!(round_to(-1250.0, -2), Ok(-1300.0));
        assert_eq!(round_to(1234.5678, -1), Ok(1230.0));
    }

    #[test]
    fn round_to_out_of_range_precision_keeps_the_value() {
        let third = 1.0 / 3.0;
        let wide = round_to(third, 20).unwrap();
        assert!((wide - third).abs() < 1e-15);
        assert_eq!(round_to(third, 400), Ok(third));
        assert_eq!(round_to(42.0, -400), Ok(42.0));
        assert_eq!(round_to(42.5, i32::MIN), Ok(42.5));
        assert_eq!(round_to(42.5, i32::MAX), Ok(42.5));
    }

    #[test]
    fn round_to_standard_behavior() {
        assert_eq!(round_to(1.0 / 3.0, 0), Ok(0.0));
        assert_eq!(round_to(1.0 / 3.0, 3), Ok(0.333));
        assert_eq!(round_to(1.0 / 3.0, 6), Ok(0.333333));
        assert_eq!(round_to(-(1.0 / 3.0), 3), Ok(-0.333));
        assert_eq!(round_to(-(1.0 / 3.0), 6), Ok(-0.333333));
        assert_eq!(round_to(42.0, 6), Ok(42.0));
        assert_eq!(round_to(-42.0, 6), Ok(-42.0));
        assert_eq!(round_to(90071992547409911.0, 6), Ok(90071992547409911.0));
    }

    #[test]
    fn round_to_goes_away_from_zero_on_half() {
        assert_eq!(round_to(2.5, 0), Ok(3.0));
        assert_eq!(round_to(-2.5, 0), Ok(-3.0));
    }

    #[test]
    fn pure_red() {
        let sample = build_color_sample(rgb(255, 0, 0));
        assert_eq!(sample.hsl, Hsl { h: 0.0, s: 100.0, l: 50.0 });
        assert_eq!(sample.hsv, Hsv { h: 0.0, s: 100.0, v: 100.0 });
        assert_eq!(sample.cmyk, Cmyk { c: 0, m: 100, y: 100, k: 0 });
        assert_eq!(sample.hex, "FF0000");
    }

    #[test]
    fn pure_black() {
        let sample = build_color_sample(Rgb::BLACK);
        assert_eq!(sample.hex, "000000");
        assert_eq!(sample.hsl, Hsl { h: 0.0, s: 0.0, l: 0.0 });
        assert_eq!(sample.hsv, Hsv { h: 0.0, s: 0.0, v: 0.0 });
        assert_eq!(sample.cmyk, Cmyk { c: 0, m: 0, y: 0, k: 100 });
    }

    #[test]
    fn secondary_and_tertiary_hues() {
        assert_eq!(rgb_to_hsl(rgb(0, 255, 0)).h, 120.0);
        assert_eq!(rgb_to_hsl(rgb(0, 0, 255)).h, 240.0);
        assert_eq!(rgb_to_hsv(rgb(255, 0, 255)).h, 300.0);
        assert_eq!(rgb_to_hsv(rgb(255, 128, 0)).h, 30.12);
    }

    #[test]
    fn hsl_saturation_branches_on_lightness() {
        // l < 0.5 and l > 0.5 take different saturation formulas.
        let dark = rgb_to_hsl(rgb(64, 0, 0));
        assert_eq!(dark.s, 100.0);
        assert_eq!(dark.l, 12.55);
        let light = rgb_to_hsl(rgb(255, 191, 191));
        assert_eq!(light.s, 100.0);
        assert_eq!(light.l, 87.45);
    }

    #[test]
    fn grey_is_achromatic() {
        let grey = rgb(128, 128, 128);
        let hsl = rgb_to_hsl(grey);
        assert_eq!((hsl.h, hsl.s), (0.0, 0.0));
        assert_eq!(hsl.l, 50.2);
        let hsv = rgb_to_hsv(grey);
        assert_eq!((hsv.h, hsv.s), (0.0, 0.0));
        assert_eq!(rgb_to_cmyk(grey), Cmyk { c: 0, m: 0, y: 0, k: 50 });
    }

    #[test]
    fn hue_never_reaches_360() {
        // Max on red with b slightly above g lands just below 360 degrees.
        let hsl = rgb_to_hsl(rgb(255, 0, 1));
        assert!(hsl.h < 360.0);
        assert!(hsl.h > 359.0);
    }

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        assert_eq!(rgb_to_hex(rgb(10, 171, 5)), "0AAB05");
    }

    #[test]
    fn hsb_to_rgb_primaries() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_eq!(hsb_to_rgb(0.5, 0.0, 0.25), (0.25, 0.25, 0.25));
    }

    quickcheck! {
        fn hex_parses_back_to_same_rgb(r: u8, g: u8, b: u8) -> bool {
            Rgb::from_hex(&rgb_to_hex(rgb(r, g, b))) == Some(rgb(r, g, b))
        }

        fn lightness_extremes_only_for_black_and_white(r: u8, g: u8, b: u8) -> bool {
            let c = rgb(r, g, b);
            let l = rgb_to_hsl(c).l;
            (l == 0.0) == (c == Rgb::BLACK) && (l == 100.0) == (c == Rgb::WHITE)
        }

        fn darkening_never_lowers_key(r: u8, g: u8, b: u8, shift: u8) -> bool {
            let darker = rgb(r.saturating_sub(shift), g.saturating_sub(shift), b.saturating_sub(shift));
            rgb_to_cmyk(darker).k >= rgb_to_cmyk(rgb(r, g, b)).k
        }

        fn components_stay_in_range(r: u8, g: u8, b: u8) -> bool {
            let s = build_color_sample(rgb(r, g, b));
            (0.0..360.0).contains(&s.hsl.h)
                && (0.0..=100.0).contains(&s.hsl.s)
                && (0.0..=100.0).contains(&s.hsl.l)
                && (0.0..360.0).contains(&s.hsv.h)
                && (0.0..=100.0).contains(&s.hsv.s)
                && (0.0..=100.0).contains(&s.hsv.v)
                && s.cmyk.c <= 100 && s.cmyk.m <= 100 && s.cmyk.y <= 100 && s.cmyk.k <= 100
        }
    }
}
