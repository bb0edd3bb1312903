//! Harmonic color-scheme generation.
//!
//! All variants derive from the base color's exact HSL. Hue offsets wrap
//! mod 360 and lightness changes are clamped to `[0, 100]`. The variant
//! order inside each list is part of the output contract.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::color::{Color, Hsl};
use crate::naming;

/// A generated color together with its catalogue name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub color: Color,
    pub name: &'static str,
}

impl Swatch {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            name: naming::nearest(color).name,
        }
    }

    pub fn hex(&self) -> String {
        self.color.hex()
    }
}

impl Serialize for Swatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Swatch", 2)?;
        state.serialize_field("hex", &self.color.hex())?;
        state.serialize_field("name", self.name)?;
        state.end()
    }
}

/// The eight harmony variants of a base color.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SchemeSet {
    pub monochromatic: Vec<Swatch>,
    pub complementary: Vec<Swatch>,
    pub analogous: Vec<Swatch>,
    pub triadic: Vec<Swatch>,
    pub tetradic: Vec<Swatch>,
    pub split_complementary: Vec<Swatch>,
    pub shades: Vec<Swatch>,
    pub tints: Vec<Swatch>,
}

const MONOCHROME_STEP: f64 = 30.0;
const SHADE_FACTORS: [f64; 3] = [0.8, 0.6, 0.4];
const TINT_FACTORS: [f64; 3] = [0.25, 0.5, 0.75];

impl SchemeSet {
    pub fn generate(base: Color) -> Self {
        let hsl = Hsl::from(base);

        Self {
            monochromatic: lightness_steps(
                hsl,
                [hsl.l - MONOCHROME_STEP, hsl.l, hsl.l + MONOCHROME_STEP],
            ),
            complementary: hue_steps(hsl, [180.0]),
            analogous: hue_steps(hsl, [30.0, -30.0]),
            triadic: hue_steps(hsl, [120.0, 240.0]),
            tetradic: hue_steps(hsl, [90.0, 180.0, 270.0]),
            split_complementary: hue_steps(hsl, [150.0, 210.0]),
            shades: lightness_steps(hsl, SHADE_FACTORS.map(|f| hsl.l * f)),
            tints: lightness_steps(hsl, TINT_FACTORS.map(|f| hsl.l + (100.0 - hsl.l) * f)),
        }
    }

    /// Variants as `(key, swatches)` pairs in contract order.
    pub fn entries(&self) -> [(&'static str, &[Swatch]); 8] {
        [
            ("monochromatic", self.monochromatic.as_slice()),
            ("complementary", self.complementary.as_slice()),
            ("analogous", self.analogous.as_slice()),
            ("triadic", self.triadic.as_slice()),
            ("tetradic", self.tetradic.as_slice()),
            ("split_complementary", self.split_complementary.as_slice()),
            ("shades", self.shades.as_slice()),
            ("tints", self.tints.as_slice()),
        ]
    }
}

fn hue_steps(hsl: Hsl, degrees: impl IntoIterator<Item = f64>) -> Vec<Swatch> {
    degrees
        .into_iter()
        .map(|d| Swatch::new(hsl.rotate(d).to_color()))
        .collect()
}

fn lightness_steps(hsl: Hsl, levels: impl IntoIterator<Item = f64>) -> Vec<Swatch> {
    levels
        .into_iter()
        .map(|l| Swatch::new(hsl.with_lightness(l).to_color()))
        .collect()
}
