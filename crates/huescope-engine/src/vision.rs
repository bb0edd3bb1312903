//! Color-vision-deficiency simulation.
//!
//! Each deficiency is a 3x3 matrix applied to unit-range RGB. Results are
//! clamped and rounded back to 8-bit channels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{round1, round2, Color, Hsv};
use crate::error::ColorError;

/// Two simulated colors further apart than this are distinguishable.
pub const DISTINGUISHABLE_DISTANCE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    Protanopia,
    Protanomaly,
    Deuteranopia,
    Deuteranomaly,
    Tritanopia,
    Tritanomaly,
    Achromatopsia,
    Achromatomaly,
}

/// Descriptive text for a deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeficiencyInfo {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub severity: &'static str,
    pub affected: &'static str,
    pub difficulty: &'static str,
}

type Matrix = [[f64; 3]; 3];

impl Deficiency {
    pub const ALL: [Deficiency; 8] = [
        Deficiency::Protanopia,
        Deficiency::Protanomaly,
        Deficiency::Deuteranopia,
        Deficiency::Deuteranomaly,
        Deficiency::Tritanopia,
        Deficiency::Tritanomaly,
        Deficiency::Achromatopsia,
        Deficiency::Achromatomaly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Protanomaly => "protanomaly",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Deuteranomaly => "deuteranomaly",
            Deficiency::Tritanopia => "tritanopia",
            Deficiency::Tritanomaly => "tritanomaly",
            Deficiency::Achromatopsia => "achromatopsia",
            Deficiency::Achromatomaly => "achromatomaly",
        }
    }

    fn matrix(self) -> Matrix {
        match self {
            Deficiency::Protanopia => [
                [0.56667, 0.43333, 0.0],
                [0.55833, 0.44167, 0.0],
                [0.0, 0.24167, 0.75833],
            ],
            Deficiency::Protanomaly => [
                [0.81667, 0.18333, 0.0],
                [0.33333, 0.66667, 0.0],
                [0.0, 0.125, 0.875],
            ],
            Deficiency::Deuteranopia => [
                [0.625, 0.375, 0.0],
                [0.7, 0.3, 0.0],
                [0.0, 0.3, 0.7],
            ],
            Deficiency::Deuteranomaly => [
                [0.8, 0.2, 0.0],
                [0.25833, 0.74167, 0.0],
                [0.0, 0.14167, 0.85833],
            ],
            Deficiency::Tritanopia => [
                [0.95, 0.05, 0.0],
                [0.0, 0.43333, 0.56667],
                [0.0, 0.475, 0.525],
            ],
            Deficiency::Tritanomaly => [
                [0.96667, 0.03333, 0.0],
                [0.0, 0.73333, 0.26667],
                [0.0, 0.18333, 0.81667],
            ],
            Deficiency::Achromatopsia => [
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
            ],
            Deficiency::Achromatomaly => [
                [0.618, 0.32, 0.062],
                [0.163, 0.775, 0.062],
                [0.163, 0.32, 0.516],
            ],
        }
    }

    pub fn info(self) -> DeficiencyInfo {
        let (name, kind, description, severity, affected, difficulty) = match self {
            Deficiency::Protanopia => (
                "Protanopia",
                "Red-Blind",
                "Complete absence of red cone cells. Cannot perceive red wavelengths.",
                "Total",
                "~1% of males",
                "Reds appear dark, red/green confusion",
            ),
            Deficiency::Protanomaly => (
                "Protanomaly",
                "Red-Weak",
                "Reduced sensitivity to red light due to anomalous red cones.",
                "Partial",
                "~1% of males",
                "Difficulty distinguishing red from green",
            ),
            Deficiency::Deuteranopia => (
                "Deuteranopia",
                "Green-Blind",
                "Complete absence of green cone cells. Cannot perceive green wavelengths.",
                "Total",
                "~1% of males",
                "Green appears beige, red/green confusion",
            ),
            Deficiency::Deuteranomaly => (
                "Deuteranomaly",
                "Green-Weak",
                "Most common form. Reduced sensitivity to green light.",
                "Partial",
                "~5% of males",
                "Mild red/green confusion",
            ),
            Deficiency::Tritanopia => (
                "Tritanopia",
                "Blue-Blind",
                "Rare. Complete absence of blue cone cells.",
                "Total",
                "~0.001% of people",
                "Blue/green and yellow/red confusion",
            ),
            Deficiency::Tritanomaly => (
                "Tritanomaly",
                "Blue-Weak",
                "Rare. Reduced sensitivity to blue light.",
                "Partial",
                "~0.01% of people",
                "Difficulty with blue/yellow distinction",
            ),
            Deficiency::Achromatopsia => (
                "Achromatopsia",
                "Complete Color Blindness",
                "Total absence of color vision. See only in grayscale.",
                "Total",
                "~0.003% of people",
                "No color perception at all",
            ),
            Deficiency::Achromatomaly => (
                "Achromatomaly",
                "Partial Color Blindness",
                "Severe reduction in color vision.",
                "Partial",
                "Very rare",
                "Very limited color perception",
            ),
        };
        DeficiencyInfo {
            name,
            kind,
            description,
            severity,
            affected,
            difficulty,
        }
    }
}

impl FromStr for Deficiency {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Deficiency::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::argument("type", format!("unknown deficiency type '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub deficiency: Deficiency,
    pub original: Color,
    pub simulated: Color,
    pub original_hex: String,
    pub simulated_hex: String,
    pub info: DeficiencyInfo,
}

pub fn simulate(color: Color, deficiency: Deficiency) -> Simulation {
    let m = deficiency.matrix();
    let [r, g, b] = color.to_unit();
    let row = |i: usize| m[i][0] * r + m[i][1] * g + m[i][2] * b;
    let simulated = Color::from_unit(row(0), row(1), row(2));

    Simulation {
        deficiency,
        original: color,
        simulated,
        original_hex: color.hex(),
        simulated_hex: simulated.hex(),
        info: deficiency.info(),
    }
}

/// One simulation per deficiency, in [`Deficiency::ALL`] order.
pub fn simulate_all(color: Color) -> Vec<Simulation> {
    Deficiency::ALL
        .into_iter()
        .map(|d| simulate(color, d))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    pub deficiency: Deficiency,
    pub distinguishable: bool,
    /// Euclidean distance between the simulated colors, two decimals.
    pub difference: f64,
    pub color1_simulated: String,
    pub color2_simulated: String,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairCheck {
    pub color1: String,
    pub color2: String,
    pub results: Vec<PairResult>,
    /// Percentage of deficiencies under which the pair stays distinguishable.
    pub accessibility_score: f64,
    pub passed: usize,
    pub total: usize,
}

/// Check whether two colors remain distinguishable under each deficiency.
pub fn check_pair(a: Color, b: Color) -> PairCheck {
    let results: Vec<PairResult> = Deficiency::ALL
        .into_iter()
        .map(|d| {
            let sa = simulate(a, d).simulated;
            let sb = simulate(b, d).simulated;
            let difference = sa.distance(sb);
            let distinguishable = difference > DISTINGUISHABLE_DISTANCE;
            PairResult {
                deficiency: d,
                distinguishable,
                difference: round2(difference),
                color1_simulated: sa.hex(),
                color2_simulated: sb.hex(),
                recommendation: if distinguishable { "Good" } else { "Poor" },
            }
        })
        .collect();

    let total = results.len();
    let passed = results.iter().filter(|r| r.distinguishable).count();

    PairCheck {
        color1: a.hex(),
        color2: b.hex(),
        accessibility_score: round1(passed as f64 / total as f64 * 100.0),
        passed,
        total,
        results,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlternativeKind {
    Brightness,
    Saturation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub hex: String,
    pub rgb: Color,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: AlternativeKind,
}

impl Alternative {
    fn new(color: Color, description: &'static str, kind: AlternativeKind) -> Self {
        Self {
            hex: color.hex(),
            rgb: color,
            description,
            kind,
        }
    }
}

/// Lighter, darker and more saturated variants that tend to separate
/// better under deficient vision.
pub fn alternatives(color: Color) -> Vec<Alternative> {
    let scale = |factor: f64| {
        Color::from_f64(
            color.r as f64 * factor,
            color.g as f64 * factor,
            color.b as f64 * factor,
        )
    };
    let hsv = Hsv::from(color);
    let saturated = Hsv::new(hsv.h, hsv.s * 1.3, hsv.v).to_color();

    vec![
        Alternative::new(scale(1.3), "Lighter version (30% brighter)", AlternativeKind::Brightness),
        Alternative::new(scale(0.7), "Darker version (30% darker)", AlternativeKind::Brightness),
        Alternative::new(saturated, "More saturated", AlternativeKind::Saturation),
    ]
}
