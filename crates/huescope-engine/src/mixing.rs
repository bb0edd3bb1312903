//! Weighted color mixing in several models.

use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{round2, Cmyk, Color, Hsl};
use crate::error::ColorError;
use crate::naming;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixMethod {
    /// Channel-wise weighted average (light mixing).
    Rgb,
    /// Weighted average of ink percentages.
    #[default]
    Cmyk,
    /// Circular mean of hue, averaged saturation and lightness.
    Hsl,
    /// Paint-like: average of squared reflectance, then square root.
    Subtractive,
}

impl MixMethod {
    pub const ALL: [MixMethod; 4] = [
        MixMethod::Rgb,
        MixMethod::Cmyk,
        MixMethod::Hsl,
        MixMethod::Subtractive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MixMethod::Rgb => "rgb",
            MixMethod::Cmyk => "cmyk",
            MixMethod::Hsl => "hsl",
            MixMethod::Subtractive => "subtractive",
        }
    }
}

impl FromStr for MixMethod {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MixMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::argument("method", format!("unknown mixing method '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixResult {
    pub method: MixMethod,
    pub hex: String,
    pub rgb: Color,
    pub name: &'static str,
    /// Normalized weights, summing to 1.
    pub ratios: Vec<f64>,
}

impl MixResult {
    fn new(method: MixMethod, color: Color, ratios: Vec<f64>) -> Self {
        Self {
            method,
            hex: color.hex(),
            rgb: color,
            name: naming::nearest(color).name,
            ratios,
        }
    }
}

/// Mix `colors` with optional weights (equal when `None`).
///
/// Weights are normalized to sum to 1. Fails on an empty color list, a
/// weight count that does not match, a negative weight, or weights that
/// sum to zero.
pub fn mix(
    colors: &[Color],
    ratios: Option<&[f64]>,
    method: MixMethod,
) -> Result<MixResult, ColorError> {
    let weights = normalize_ratios(colors.len(), ratios)?;
    let color = match method {
        MixMethod::Rgb => mix_rgb(colors, &weights),
        MixMethod::Cmyk => mix_cmyk(colors, &weights),
        MixMethod::Hsl => mix_hsl(colors, &weights),
        MixMethod::Subtractive => mix_subtractive(colors, &weights),
    };
    Ok(MixResult::new(method, color, weights))
}

fn normalize_ratios(count: usize, ratios: Option<&[f64]>) -> Result<Vec<f64>, ColorError> {
    if count == 0 {
        return Err(ColorError::argument("colors", "at least one color is required"));
    }

    let Some(ratios) = ratios else {
        return Ok(vec![1.0 / count as f64; count]);
    };

    if ratios.len() != count {
        return Err(ColorError::argument(
            "ratios",
            format!("expected {count} ratios, got {}", ratios.len()),
        ));
    }
    if ratios.iter().any(|r| !r.is_finite() || *r < 0.0) {
        return Err(ColorError::argument("ratios", "ratios must be non-negative numbers"));
    }
    let total: f64 = ratios.iter().sum();
    if total <= 0.0 {
        return Err(ColorError::argument("ratios", "ratios must not sum to zero"));
    }
    Ok(ratios.iter().map(|r| r / total).collect())
}

fn weighted(colors: &[Color], weights: &[f64], f: impl Fn(Color) -> f64) -> f64 {
    colors.iter().zip(weights).map(|(c, w)| f(*c) * w).sum()
}

fn mix_rgb(colors: &[Color], weights: &[f64]) -> Color {
    Color::from_f64(
        weighted(colors, weights, |c| c.r as f64),
        weighted(colors, weights, |c| c.g as f64),
        weighted(colors, weights, |c| c.b as f64),
    )
}

fn mix_cmyk(colors: &[Color], weights: &[f64]) -> Color {
    Cmyk::new(
        weighted(colors, weights, |c| c.cmyk().c),
        weighted(colors, weights, |c| c.cmyk().m),
        weighted(colors, weights, |c| c.cmyk().y),
        weighted(colors, weights, |c| c.cmyk().k),
    )
    .to_color()
}

fn mix_hsl(colors: &[Color], weights: &[f64]) -> Color {
    let x = weighted(colors, weights, |c| (c.hsl().h * PI / 180.0).cos());
    let y = weighted(colors, weights, |c| (c.hsl().h * PI / 180.0).sin());
    // Opposite hues cancel out; fall back to 0 rather than a noisy angle
    let h = if x.abs() < 1e-9 && y.abs() < 1e-9 {
        0.0
    } else {
        y.atan2(x) * 180.0 / PI
    };
    Hsl::new(
        h,
        weighted(colors, weights, |c| c.hsl().s),
        weighted(colors, weights, |c| c.hsl().l),
    )
    .to_color()
}

fn mix_subtractive(colors: &[Color], weights: &[f64]) -> Color {
    let reflect = |v: u8| (v as f64 / 255.0).powi(2);
    Color::from_unit(
        weighted(colors, weights, |c| reflect(c.r)).sqrt(),
        weighted(colors, weights, |c| reflect(c.g)).sqrt(),
        weighted(colors, weights, |c| reflect(c.b)).sqrt(),
    )
}

/// Two colors mixed at one ratio with every method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoColorMix {
    pub color1: String,
    pub color2: String,
    /// Share of `color2`, clamped to `[0, 1]`.
    pub ratio: f64,
    pub rgb: MixResult,
    pub cmyk: MixResult,
    pub hsl: MixResult,
    pub subtractive: MixResult,
}

/// Mix two colors, `ratio` 0 being all `a` and 1 all `b`.
pub fn mix_two(a: Color, b: Color, ratio: f64) -> Result<TwoColorMix, ColorError> {
    let ratio = if ratio.is_nan() { 0.5 } else { ratio.clamp(0.0, 1.0) };
    let colors = [a, b];
    let weights = [1.0 - ratio, ratio];
    let run = |method| mix(&colors, Some(&weights), method);

    Ok(TwoColorMix {
        color1: a.hex(),
        color2: b.hex(),
        ratio,
        rgb: run(MixMethod::Rgb)?,
        cmyk: run(MixMethod::Cmyk)?,
        hsl: run(MixMethod::Hsl)?,
        subtractive: run(MixMethod::Subtractive)?,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteMix {
    pub hex: String,
    pub rgb: Color,
    pub from: [String; 2],
    pub ratio: f64,
}

/// Subtractive blends of every pair of `bases` across `variations` ratios.
pub fn mix_palette(bases: &[Color], variations: usize) -> Result<Vec<PaletteMix>, ColorError> {
    if bases.len() < 2 {
        return Err(ColorError::argument("colors", "at least two base colors are required"));
    }
    if variations == 0 {
        return Err(ColorError::argument("variations", "must be at least 1"));
    }

    let mut palette = Vec::with_capacity(bases.len() * (bases.len() - 1) / 2 * variations);
    for (i, a) in bases.iter().enumerate() {
        for b in &bases[i + 1..] {
            for k in 0..variations {
                let ratio = if variations > 1 {
                    k as f64 / (variations - 1) as f64
                } else {
                    0.5
                };
                let color = mix_subtractive(&[*a, *b], &[1.0 - ratio, ratio]);
                palette.push(PaletteMix {
                    hex: color.hex(),
                    rgb: color,
                    from: [a.hex(), b.hex()],
                    ratio: round2(ratio),
                });
            }
        }
    }
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);
    const YELLOW: Color = Color::new(255, 255, 0);

    #[test]
    fn test_method_parse() {
        assert_eq!("RGB".parse::<MixMethod>().unwrap(), MixMethod::Rgb);
        assert_eq!(" subtractive ".parse::<MixMethod>().unwrap(), MixMethod::Subtractive);
        assert!("oil".parse::<MixMethod>().is_err());
        assert_eq!(MixMethod::default(), MixMethod::Cmyk);
    }

    #[test]
    fn test_rgb_equal_mix() {
        let result = mix(&[RED, BLUE], None, MixMethod::Rgb).unwrap();
        assert_eq!(result.rgb, Color::new(128, 0, 128));
        assert_eq!(result.ratios, vec![0.5, 0.5]);
    }

    #[test]
    fn test_ratios_are_normalized() {
        let result = mix(&[RED, BLUE], Some(&[3.0, 1.0]), MixMethod::Rgb).unwrap();
        assert_eq!(result.ratios, vec![0.75, 0.25]);
        assert_eq!(result.rgb, Color::new(191, 0, 64));
    }

    #[test]
    fn test_cmyk_mix_of_red_and_yellow() {
        let result = mix(&[RED, YELLOW], None, MixMethod::Cmyk).unwrap();
        assert_eq!(result.rgb, Color::new(255, 128, 0));
    }

    #[test]
    fn test_subtractive_mix() {
        // sqrt(0.5) * 255 = 180.3
        let result = mix(&[RED, BLUE], None, MixMethod::Subtractive).unwrap();
        assert_eq!(result.rgb, Color::new(180, 0, 180));
    }

    #[test]
    fn test_hsl_mix_wraps_hue() {
        // 350 and 10 degrees average to 0, not 180
        let a = Hsl::new(350.0, 100.0, 50.0).to_color();
        let b = Hsl::new(10.0, 100.0, 50.0).to_color();
        let result = mix(&[a, b], None, MixMethod::Hsl).unwrap();
        let hue = result.rgb.hsl().h;
        assert!(!(10.0..=350.0).contains(&hue), "hue {hue} should be near 0");
    }

    #[test]
    fn test_mix_errors() {
        assert!(mix(&[], None, MixMethod::Rgb).is_err());
        assert!(mix(&[RED, BLUE], Some(&[1.0]), MixMethod::Rgb).is_err());
        assert!(mix(&[RED, BLUE], Some(&[1.0, -1.0]), MixMethod::Rgb).is_err());
        assert!(mix(&[RED, BLUE], Some(&[0.0, 0.0]), MixMethod::Rgb).is_err());
    }

    #[test]
    fn test_mix_two_clamps_ratio() {
        let result = mix_two(RED, BLUE, 1.7).unwrap();
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.rgb.rgb, BLUE);
        assert_eq!(result.subtractive.rgb, BLUE);

        let result = mix_two(RED, BLUE, -2.0).unwrap();
        assert_eq!(result.ratio, 0.0);
        assert_eq!(result.cmyk.rgb, RED);
    }

    #[test]
    fn test_mix_palette() {
        let palette = mix_palette(&[RED, BLUE, YELLOW], 3).unwrap();
        // 3 pairs x 3 variations
        assert_eq!(palette.len(), 9);
        assert_eq!(palette[0].rgb, RED);
        assert_eq!(palette[1].ratio, 0.5);
        assert_eq!(palette[2].rgb, BLUE);
        assert_eq!(palette[0].from, ["#ff0000".to_string(), "#0000ff".to_string()]);
    }

    #[test]
    fn test_mix_palette_single_variation_is_midpoint() {
        let palette = mix_palette(&[RED, BLUE], 1).unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].ratio, 0.5);
    }

    #[test]
    fn test_mix_palette_errors() {
        assert!(mix_palette(&[RED], 3).is_err());
        assert!(mix_palette(&[RED, BLUE], 0).is_err());
    }
}
