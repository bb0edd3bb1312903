//! WCAG 2.x relative luminance and contrast scoring.

use serde::Serialize;

use crate::color::{round2, Color};

pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_NORMAL: f64 = 7.0;
pub const AAA_LARGE: f64 = 4.5;

/// Contrast of one color against one background.
///
/// The pass/fail flags are evaluated on the rounded `ratio`, so a reported
/// 4.50 always passes AA for normal text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccessibilityInfo {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccessibilityReport {
    pub white_background: AccessibilityInfo,
    pub black_background: AccessibilityInfo,
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: Color) -> f64 {
    let linear = |c: f64| {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    let [r, g, b] = color.to_unit();
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Contrast ratio in `[1, 21]`, rounded to two decimals. Symmetric.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    round2((lighter + 0.05) / (darker + 0.05))
}

pub fn score(foreground: Color, background: Color) -> AccessibilityInfo {
    let ratio = contrast_ratio(foreground, background);
    AccessibilityInfo {
        ratio,
        aa_normal: ratio >= AA_NORMAL,
        aa_large: ratio >= AA_LARGE,
        aaa_normal: ratio >= AAA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
    }
}

/// Score against pure white and pure black backgrounds.
pub fn report(color: Color) -> AccessibilityReport {
    AccessibilityReport {
        white_background: score(color, Color::WHITE),
        black_background: score(color, Color::BLACK),
    }
}
