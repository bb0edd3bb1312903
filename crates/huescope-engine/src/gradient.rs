//! Gradient interpolation and CSS generation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{round1, Color, Hsl, Hsv};
use crate::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Rgb,
    Hsl,
    Hsv,
}

impl FromStr for Interpolation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Interpolation::Rgb),
            "hsl" => Ok(Interpolation::Hsl),
            "hsv" => Ok(Interpolation::Hsv),
            _ => Err(ColorError::argument(
                "method",
                format!("unknown interpolation '{s}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientShape {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl FromStr for GradientShape {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(GradientShape::Linear),
            "radial" => Ok(GradientShape::Radial),
            "conic" => Ok(GradientShape::Conic),
            _ => Err(ColorError::argument(
                "gradient_type",
                format!("unknown gradient type '{s}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    /// Percentage along the gradient, one decimal.
    pub position: f64,
}

impl GradientStop {
    pub fn hex(&self) -> String {
        self.color.hex()
    }
}

impl Serialize for GradientStop {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("GradientStop", 3)?;
        state.serialize_field("hex", &self.color.hex())?;
        state.serialize_field("rgb", &self.color)?;
        state.serialize_field("position", &self.position)?;
        state.end()
    }
}

/// CSS declarations for a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientCss {
    #[serde(rename = "type")]
    pub shape: GradientShape,
    /// The gradient function, usable as a `background` value.
    pub background: String,
    /// A complete `background: ...;` declaration.
    pub full_css: String,
}

/// Layout knobs for [`css`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssOptions {
    pub shape: GradientShape,
    /// Degrees; used by linear and conic.
    pub angle: i32,
    /// Center in percent; used by radial and conic.
    pub center_x: i32,
    pub center_y: i32,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            shape: GradientShape::Linear,
            angle: 90,
            center_x: 50,
            center_y: 50,
        }
    }
}

impl CssOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(mut self, shape: GradientShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn angle(mut self, degrees: i32) -> Self {
        self.angle = degrees;
        self
    }

    pub fn center(mut self, x: i32, y: i32) -> Self {
        self.center_x = x;
        self.center_y = y;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub method: Interpolation,
    pub stops: Vec<GradientStop>,
    pub css: GradientCss,
}

/// `steps` evenly spaced colors from `start` to `end` inclusive.
pub fn interpolate(
    start: Color,
    end: Color,
    steps: usize,
    method: Interpolation,
) -> Result<Vec<GradientStop>, ColorError> {
    if steps == 0 {
        return Err(ColorError::argument("steps", "must be at least 1"));
    }

    let stops = (0..steps)
        .map(|i| {
            let t = if steps > 1 {
                i as f64 / (steps - 1) as f64
            } else {
                0.0
            };
            GradientStop {
                color: lerp(start, end, t, method),
                position: round1(t * 100.0),
            }
        })
        .collect();
    Ok(stops)
}

fn lerp(a: Color, b: Color, t: f64, method: Interpolation) -> Color {
    let mix = |x: f64, y: f64| x + (y - x) * t;
    match method {
        Interpolation::Rgb => Color::from_f64(
            mix(a.r as f64, b.r as f64),
            mix(a.g as f64, b.g as f64),
            mix(a.b as f64, b.b as f64),
        ),
        Interpolation::Hsl => {
            let (ha, hb) = (a.hsl(), b.hsl());
            Hsl::new(mix(ha.h, hb.h), mix(ha.s, hb.s), mix(ha.l, hb.l)).to_color()
        }
        Interpolation::Hsv => {
            let (ha, hb) = (a.hsv(), b.hsv());
            Hsv::new(mix(ha.h, hb.h), mix(ha.s, hb.s), mix(ha.v, hb.v)).to_color()
        }
    }
}

/// A gradient through every color in `colors`.
///
/// Each segment gets `max(2, steps / segments)` stops; the shared stop at
/// each segment boundary appears once. Positions span the whole gradient.
pub fn gradient(
    colors: &[Color],
    steps: usize,
    method: Interpolation,
) -> Result<Gradient, ColorError> {
    if colors.len() < 2 {
        return Err(ColorError::argument("colors", "at least two colors are required"));
    }

    let segments = colors.len() - 1;
    let per_segment = (steps / segments).max(2);

    let mut palette: Vec<Color> = Vec::with_capacity(segments * per_segment);
    for (i, pair) in colors.windows(2).enumerate() {
        let segment = interpolate(pair[0], pair[1], per_segment, method)?;
        let skip = usize::from(i > 0);
        palette.extend(segment.into_iter().skip(skip).map(|stop| stop.color));
    }

    let last = (palette.len() - 1).max(1) as f64;
    let stops: Vec<GradientStop> = palette
        .into_iter()
        .enumerate()
        .map(|(i, color)| GradientStop {
            color,
            position: round1(i as f64 / last * 100.0),
        })
        .collect();

    let css = css(&stops, &CssOptions::default());
    Ok(Gradient { method, stops, css })
}

/// Render stops as a CSS gradient.
pub fn css(stops: &[GradientStop], options: &CssOptions) -> GradientCss {
    let color_stops = stops
        .iter()
        .map(|s| format!("{} {}%", s.color.hex(), s.position))
        .collect::<Vec<_>>()
        .join(", ");

    let background = match options.shape {
        GradientShape::Linear => format!("linear-gradient({}deg, {color_stops})", options.angle),
        GradientShape::Radial => format!(
            "radial-gradient(circle at {}% {}%, {color_stops})",
            options.center_x, options.center_y
        ),
        GradientShape::Conic => format!(
            "conic-gradient(from {}deg at {}% {}%, {color_stops})",
            options.angle, options.center_x, options.center_y
        ),
    };

    GradientCss {
        shape: options.shape,
        full_css: format!("background: {background};"),
        background,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub colors: Vec<String>,
    pub gradient: Gradient,
}

const PRESETS: [(&str, &[&str]); 10] = [
    ("Sunset", &["#ff6b6b", "#ffd93d", "#6bcf7f"]),
    ("Ocean", &["#667eea", "#764ba2", "#f093fb"]),
    ("Forest", &["#134e5e", "#71b280"]),
    ("Fire", &["#ff0000", "#ff7f00", "#ffff00"]),
    ("Purple Dream", &["#c471f5", "#fa71cd"]),
    ("Cool Blues", &["#2196f3", "#00bcd4", "#009688"]),
    ("Warm Sunset", &["#f2994a", "#f2c94c", "#eb5757"]),
    ("Green Grass", &["#56ab2f", "#a8e063"]),
    ("Royal", &["#141e30", "#243b55"]),
    ("Cherry", &["#eb3349", "#f45c43"]),
];

const PRESET_STEPS: usize = 20;

/// The built-in named gradients, RGB-interpolated.
pub fn presets() -> Vec<Preset> {
    PRESETS
        .iter()
        .filter_map(|(name, hexes)| {
            let colors: Vec<Color> = hexes.iter().filter_map(|h| h.parse().ok()).collect();
            gradient(&colors, PRESET_STEPS, Interpolation::Rgb)
                .ok()
                .map(|gradient| Preset {
                    name: *name,
                    colors: colors.iter().map(|c| c.hex()).collect(),
                    gradient,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::BLACK;
    const WHITE: Color = Color::WHITE;

    #[test]
    fn test_interpolate_rgb_endpoints_and_positions() {
        let stops = interpolate(BLACK, WHITE, 5, Interpolation::Rgb).unwrap();
        let positions: Vec<_> = stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(stops[0].color, BLACK);
        assert_eq!(stops[2].color, Color::new(128, 128, 128));
        assert_eq!(stops[4].color, WHITE);
    }

    #[test]
    fn test_interpolate_single_step() {
        let stops = interpolate(BLACK, WHITE, 1, Interpolation::Rgb).unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].color, BLACK);
        assert_eq!(stops[0].position, 0.0);
    }

    #[test]
    fn test_interpolate_zero_steps_rejected() {
        assert!(interpolate(BLACK, WHITE, 0, Interpolation::Rgb).is_err());
    }

    #[test]
    fn test_interpolate_hsl_keeps_saturation() {
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);
        let stops = interpolate(red, blue, 3, Interpolation::Hsl).unwrap();
        // Halfway between hue 0 and 240 is 120: pure green
        assert_eq!(stops[1].color, Color::new(0, 255, 0));
    }

    #[test]
    fn test_multi_stop_gradient_dedups_boundaries() {
        let colors = [Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)];
        let gradient = gradient(&colors, 10, Interpolation::Rgb).unwrap();
        // 2 segments of 5 stops, boundary shared
        assert_eq!(gradient.stops.len(), 9);
        assert_eq!(gradient.stops[4].color, Color::new(0, 255, 0));
        assert_eq!(gradient.stops[0].position, 0.0);
        assert_eq!(gradient.stops[4].position, 50.0);
        assert_eq!(gradient.stops[8].position, 100.0);
    }

    #[test]
    fn test_gradient_needs_two_colors() {
        assert!(gradient(&[BLACK], 10, Interpolation::Rgb).is_err());
    }

    #[test]
    fn test_css_shapes() {
        let stops = interpolate(BLACK, WHITE, 2, Interpolation::Rgb).unwrap();

        let linear = css(&stops, &CssOptions::new());
        assert_eq!(linear.background, "linear-gradient(90deg, #000000 0%, #ffffff 100%)");
        assert_eq!(
            linear.full_css,
            "background: linear-gradient(90deg, #000000 0%, #ffffff 100%);"
        );

        let radial = css(&stops, &CssOptions::new().shape(GradientShape::Radial).center(25, 75));
        assert_eq!(
            radial.background,
            "radial-gradient(circle at 25% 75%, #000000 0%, #ffffff 100%)"
        );

        let conic = css(&stops, &CssOptions::new().shape(GradientShape::Conic).angle(45));
        assert_eq!(
            conic.background,
            "conic-gradient(from 45deg at 50% 50%, #000000 0%, #ffffff 100%)"
        );
    }

    #[test]
    fn test_fractional_positions_render_one_decimal() {
        let stops = interpolate(BLACK, WHITE, 4, Interpolation::Rgb).unwrap();
        let css = css(&stops, &CssOptions::new());
        assert!(css.background.contains("33.3%"));
        assert!(css.background.contains("66.7%"));
    }

    #[test]
    fn test_presets() {
        let presets = presets();
        assert_eq!(presets.len(), 10);
        assert_eq!(presets[0].name, "Sunset");
        assert_eq!(presets[0].colors, vec!["#ff6b6b", "#ffd93d", "#6bcf7f"]);
        // 3 colors: 2 segments of 10 stops with one shared boundary
        assert_eq!(presets[0].gradient.stops.len(), 19);
        // 2 colors: a single segment of 20 stops
        assert_eq!(presets[2].gradient.stops.len(), 20);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("HSV".parse::<Interpolation>().unwrap(), Interpolation::Hsv);
        assert!("lab".parse::<Interpolation>().is_err());
        assert_eq!("conic".parse::<GradientShape>().unwrap(), GradientShape::Conic);
        assert!("diamond".parse::<GradientShape>().is_err());
    }
}
