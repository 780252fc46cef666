//! Color representations reported by the picker.
//!
//! [`Rgb`] is the source of truth: it is what gets sampled off a rendered
//! surface. Every other representation is derived from it by [`crate::math`].

use std::fmt;

/// 8-bit sRGB triple, as read from a surface pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees (0–360), saturation and lightness in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue in degrees (0–360), saturation and value in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Integer percentages (0–100) for each ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// Every representation of one sampled pixel.
///
/// Built in one go by [`crate::math::build_color_sample`], so all fields
/// always describe the same `rgb`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSample {
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
    /// Uppercase `RRGGBB`, no `#`.
    pub hex: String,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to 0.0–1.0.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Parse a hex string (with or without `#`, 3 or 6 chars).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match stripped.len() {
            3 => {
                let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
                let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
                let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse either a hex string or one of the named colors the style
    /// defaults use (`white`, `black`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "white" => Some(Self::WHITE),
            "black" => Some(Self::BLACK),
            other => Self::from_hex(other),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.h, self.s, self.v)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.c, self.m, self.y, self.k)
    }
}

impl ColorSample {
    /// Hex with the `#` prefix, for display.
    pub fn hex_display(&self) -> String {
        format!("#{}", self.hex)
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hex: {} | RGB: {} | HSL: {} | HSV: {} | CMYK: {}",
            self.hex_display(),
            self.rgb,
            self.hsl,
            self.hsv,
            self.cmyk
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#3B82F6"), Some(Rgb::new(0x3B, 0x82, 0xF6)));
        assert_eq!(Rgb::from_hex("3b82f6"), Some(Rgb::new(0x3B, 0x82, 0xF6)));
    }

    #[test]
    fn expands_shorthand_hex() {
        assert_eq!(Rgb::from_hex("#F0A"), Some(Rgb::new(255, 0, 170)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("GG0000"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(Rgb::parse("White"), Some(Rgb::WHITE));
        assert_eq!(Rgb::parse("black"), Some(Rgb::BLACK));
        assert_eq!(Rgb::parse("teal"), None);
    }
}
