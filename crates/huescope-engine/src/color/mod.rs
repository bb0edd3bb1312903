//! Color model converter.
//!
//! [`Color`] is the canonical 8-bit RGB triple. [`Hsl`], [`Hsv`] and
//! [`Cmyk`] are derived views; each converts back to a `Color` by rounding
//! and clamping channels.
//!
//! # Example
//!
//! ```
//! use huescope_engine::{Color, Hsl};
//!
//! let color: Color = "#3b82f6".parse().unwrap();
//! let hsl = color.hsl();
//!
//! // Rotate to the complement and come back to RGB
//! let complement = Color::from(hsl.rotate(180.0));
//! assert_eq!(complement.hsl().rounded().h, 37.2);
//! ```

mod cmyk;
mod hsl;
mod hsv;
mod rgb;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Color;

/// Round to one decimal place.
#[inline]
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places.
#[inline]
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Wrap a hue into `[0, 360)`.
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can land on 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Hue in degrees shared by the HSL and HSV views. Zero for achromatic colors.
pub(crate) fn hue_degrees(color: Color) -> f64 {
    let [r, g, b] = color.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    if d == 0.0 {
        return 0.0;
    }

    let sector = if color.r >= color.g && color.r >= color.b {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if color.g >= color.b {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    normalize_hue(sector * 60.0)
}
