//! HSL (hue, saturation, lightness) view.

use serde::{Deserialize, Serialize};

use super::{hue_degrees, normalize_hue, round1, Color};

/// A color in HSL.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages
/// `[0, 100]`. Values produced by `From<Color>` are exact; use
/// [`Hsl::rounded`] for presentation.
///
/// Converting back to [`Color`] rounds each channel, so
/// `Color -> Hsl -> Color` is lossless with exact values but may drift by
/// one unit per channel when going through the rounded view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL value, wrapping hue and clamping the percentages.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Same color with hue rotated by `degrees` (mod 360).
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Same hue and saturation with a different lightness (clamped).
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// One decimal place per component; a hue that rounds to 360 wraps to 0.
    pub fn rounded(self) -> Self {
        Self {
            h: normalize_hue(round1(self.h)),
            s: round1(self.s),
            l: round1(self.l),
        }
    }

    pub fn to_color(self) -> Color {
        Color::from(self)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        Self {
            h: hue_degrees(color),
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let h = normalize_hue(hsl.h) / 360.0;
        let s = (hsl.s / 100.0).clamp(0.0, 1.0);
        let l = (hsl.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            return Color::from_unit(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Color::from_unit(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
