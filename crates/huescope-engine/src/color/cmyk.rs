//! CMYK view for print-oriented output.

use serde::{Deserialize, Serialize};

use super::{round1, Color};

/// A color in CMYK, each component a percentage `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self {
            c: c.clamp(0.0, 100.0),
            m: m.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
            k: k.clamp(0.0, 100.0),
        }
    }

    pub fn rounded(self) -> Self {
        Self {
            c: round1(self.c),
            m: round1(self.m),
            y: round1(self.y),
            k: round1(self.k),
        }
    }

    pub fn to_color(self) -> Color {
        Color::from(self)
    }
}

impl From<Color> for Cmyk {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_unit();
        let k = 1.0 - r.max(g).max(b);

        // Pure black: ink-only, avoid dividing by zero
        if k >= 1.0 {
            return Self { c: 0.0, m: 0.0, y: 0.0, k: 100.0 };
        }

        Self {
            c: (1.0 - r - k) / (1.0 - k) * 100.0,
            m: (1.0 - g - k) / (1.0 - k) * 100.0,
            y: (1.0 - b - k) / (1.0 - k) * 100.0,
            k: k * 100.0,
        }
    }
}

impl From<Cmyk> for Color {
    fn from(cmyk: Cmyk) -> Self {
        let k = (cmyk.k / 100.0).clamp(0.0, 1.0);
        let channel = |v: f64| 255.0 * (1.0 - (v / 100.0).clamp(0.0, 1.0)) * (1.0 - k);
        Color::from_f64(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red() {
        let cmyk = Cmyk::from(Color::new(255, 0, 0));
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 100.0, 100.0, 0.0));
    }

    #[test]
    fn test_black_is_key_only() {
        let cmyk = Cmyk::from(Color::BLACK);
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn test_white_is_no_ink() {
        let cmyk = Cmyk::from(Color::WHITE);
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_round_trip() {
        for v in (0..=255u8).step_by(5) {
            let color = Color::new(v, 255 - v, v / 3);
            assert_eq!(Color::from(Cmyk::from(color)), color);
        }
    }

    #[test]
    fn test_from_percentages() {
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 50.0).to_color(), Color::new(128, 128, 128));
        assert_eq!(Cmyk::new(100.0, 0.0, 100.0, 0.0).to_color(), Color::new(0, 255, 0));
    }
}
