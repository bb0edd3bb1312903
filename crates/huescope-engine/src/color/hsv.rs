//! HSV (hue, saturation, value) view.

use serde::{Deserialize, Serialize};

use super::{hue_degrees, normalize_hue, round1, Color};

/// A color in HSV. Hue in degrees `[0, 360)`, saturation and value in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            v: v.clamp(0.0, 100.0),
        }
    }

    pub fn rounded(self) -> Self {
        Self {
            h: normalize_hue(round1(self.h)),
            s: round1(self.s),
            v: round1(self.v),
        }
    }

    pub fn to_color(self) -> Color {
        Color::from(self)
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };

        Self {
            h: hue_degrees(color),
            s: s * 100.0,
            v: max * 100.0,
        }
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        let h = normalize_hue(hsv.h) / 60.0;
        let s = (hsv.s / 100.0).clamp(0.0, 1.0);
        let v = (hsv.v / 100.0).clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Color::from_unit(r, g, b)
    }
}
