//! Canonical 8-bit RGB color and its hex representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Cmyk, Hsl, Hsv};
use crate::error::ColorError;

/// An immutable 8-bit RGB color.
///
/// This is the canonical representation; every other model ([`Hsl`],
/// [`Hsv`], [`Cmyk`], hex) is a view derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from caller-supplied integers, rejecting anything
    /// outside `0..=255`.
    ///
    /// ```
    /// use huescope_engine::Color;
    /// assert!(Color::try_from_ints(255, 0, 0).is_ok());
    /// assert!(Color::try_from_ints(256, 0, 0).is_err());
    /// ```
    pub fn try_from_ints(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        let channel = |v: i64| {
            u8::try_from(v).map_err(|_| {
                ColorError::format(
                    format!("rgb({r}, {g}, {b})"),
                    format!("channel value {v} is outside 0..=255"),
                )
            })
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Build a color from floating-point channels on the 0..=255 scale,
    /// rounding to nearest and clamping.
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Build a color from unit-range channels (0.0..=1.0).
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::from_f64(r * 255.0, g * 255.0, b * 255.0)
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to 0.0..=1.0.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Lowercase `#rrggbb`.
    pub fn hex(self) -> String {
        self.to_string()
    }

    pub fn hsl(self) -> Hsl {
        Hsl::from(self)
    }

    pub fn hsv(self) -> Hsv {
        Hsv::from(self)
    }

    pub fn cmyk(self) -> Cmyk {
        Cmyk::from(self)
    }

    /// Squared Euclidean distance in RGB space.
    #[inline]
    pub fn distance_squared(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    #[inline]
    pub fn distance(self, other: Color) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse a hex color.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed. Shorthand digits are doubled.
    ///
    /// ```
    /// use huescope_engine::Color;
    ///
    /// let red: Color = "#F00".parse().unwrap();
    /// assert_eq!(red, Color::new(255, 0, 0));
    /// assert_eq!(red.hex(), "#ff0000");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // from_str_radix tolerates a leading '+', so validate up front
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::format(s, "contains non-hex characters"));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ColorError::format(s, e.to_string()))
        };

        match digits.len() {
            3 => Ok(Self::new(
                parse(0..1)? * 17,
                parse(1..2)? * 17,
                parse(2..3)? * 17,
            )),
            6 => Ok(Self::new(parse(0..2)?, parse(2..4)?, parse(4..6)?)),
            n => Err(ColorError::format(
                s,
                format!("expected 3 or 6 hex digits, found {n}"),
            )),
        }
    }
}
