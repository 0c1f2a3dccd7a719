//! Color model conversions
//!
//! Hex string, RGB and HSV are three views of the same crosshair color.
//! The functions here are pure; keeping the views in sync is the job of
//! [`crate::state::AppearanceState`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,
    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
    #[error("unsupported color length {len} in '{input}' (expected 3, 6 or 8 hex digits)")]
    InvalidLength { input: String, len: usize },
}

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure green, used whenever a color cannot be resolved
    pub const FALLBACK: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#AARRGGBB` (alpha is dropped).
    ///
    /// The leading `#` is optional and surrounding whitespace is ignored.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let byte_at = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let parsed = match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|n| n * 17);
                (nibble(0), nibble(1), nibble(2))
            }
            6 => (byte_at(0), byte_at(2), byte_at(4)),
            8 => (byte_at(2), byte_at(4), byte_at(6)),
            len => {
                return Err(ColorParseError::InvalidLength {
                    input: input.to_string(),
                    len,
                })
            }
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(ColorParseError::InvalidDigit(input.to_string())),
        }
    }

    /// Format as `#RRGGBB` with uppercase digits
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Hue in degrees [0, 360], saturation and value in [0, 1].
///
/// 360 is the same hue as 0; the picker bar ends on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }
}

impl Default for Hsv {
    fn default() -> Self {
        rgb_to_hsv(Rgb::FALLBACK)
    }
}

/// Convert RGB to HSV using the six-sector method
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    if h < 0.0 {
        h += 360.0;
    }
    if h >= 360.0 {
        h -= 360.0;
    }

    Hsv::new(h, s, max)
}

/// Convert HSV to RGB using the chroma/intermediate/match decomposition
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = if hsv.h.is_finite() { hsv.h.rem_euclid(360.0) } else { 0.0 };
    let s = clamp_unit(hsv.s);
    let v = clamp_unit(hsv.v);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_byte(r + m), to_byte(g + m), to_byte(b + m))
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
