//! Analysis façade: the single entry point the collaborator calls.
//!
//! [`analyze`] composes the converter, classifier, temperature estimator
//! and accessibility scorer. [`analyze_image`] runs sample extraction
//! first. Both either return a complete [`ColorAnalysis`] or an error.

use serde::Serialize;

use crate::accessibility::{self, AccessibilityReport};
use crate::color::{Cmyk, Color, Hsl, Hsv};
use crate::error::ColorError;
use crate::naming;
use crate::sample::{self, Point, Sample, SampleOptions};
use crate::scheme::SchemeSet;
use crate::temperature::{self, TemperatureInfo};

/// Everything derived from a single color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAnalysis {
    pub hex: String,
    pub name: &'static str,
    pub rgb: Color,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
    pub temperature: TemperatureInfo,
    pub accessibility: AccessibilityReport,
}

/// Analyze a color. Pure; HSL/HSV/CMYK are reported to one decimal.
pub fn analyze(color: Color) -> ColorAnalysis {
    ColorAnalysis {
        hex: color.hex(),
        name: naming::nearest(color).name,
        rgb: color,
        hsl: color.hsl().rounded(),
        hsv: color.hsv().rounded(),
        cmyk: color.cmyk().rounded(),
        temperature: temperature::estimate(color),
        accessibility: accessibility::report(color),
    }
}

/// Sample an encoded image with default options and analyze the result.
pub fn analyze_image(bytes: &[u8], point: Option<Point>) -> Result<ColorAnalysis, ColorError> {
    Analyzer::default().analyze_image(bytes, point)
}

/// The eight harmony variants of `color`.
pub fn schemes_for(color: Color) -> SchemeSet {
    SchemeSet::generate(color)
}

/// Configured entry point, for callers that tune sampling.
///
/// # Example
///
/// ```
/// use huescope_engine::{Analyzer, Color, SampleOptions};
///
/// let analyzer = Analyzer::new(SampleOptions::new().window(3));
/// let analysis = analyzer.analyze("#ff0000".parse::<Color>().unwrap());
/// assert_eq!(analysis.name, "Red");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: SampleOptions,
}

impl Analyzer {
    pub fn new(options: SampleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SampleOptions {
        &self.options
    }

    pub fn analyze(&self, color: Color) -> ColorAnalysis {
        analyze(color)
    }

    /// Read a [`Sample`] without analyzing it.
    pub fn sample(&self, bytes: &[u8], point: Option<Point>) -> Result<Sample, ColorError> {
        sample::sample(bytes, point, &self.options)
    }

    pub fn analyze_image(
        &self,
        bytes: &[u8],
        point: Option<Point>,
    ) -> Result<ColorAnalysis, ColorError> {
        let sample = self.sample(bytes, point)?;
        tracing::debug!(
            x = sample.x,
            y = sample.y,
            clamped = sample.clamped,
            color = %sample.color,
            "Sampled image"
        );
        Ok(analyze(sample.color))
    }

    pub fn schemes_for(&self, color: Color) -> SchemeSet {
        schemes_for(color)
    }
}
