//! Side-by-side comparison of two colors.

use serde::Serialize;

use crate::accessibility::contrast_ratio;
use crate::color::{round2, Color};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub color1: String,
    pub color2: String,
    /// Sum of absolute channel differences, 0..=765.
    pub difference: u16,
    /// `max(0, 100 - difference / 7.65)`, two decimals.
    pub similarity: f64,
    pub contrast_ratio: f64,
}

pub fn compare(a: Color, b: Color) -> Comparison {
    let difference = a
        .to_array()
        .iter()
        .zip(b.to_array())
        .map(|(x, y)| x.abs_diff(y) as u16)
        .sum::<u16>();

    Comparison {
        color1: a.hex(),
        color2: b.hex(),
        difference,
        similarity: round2((100.0 - difference as f64 / 7.65).max(0.0)),
        contrast_ratio: contrast_ratio(a, b),
    }
}
