//! huescope-engine: color analysis for captured images
//!
//! The engine turns an RGB triple, or an encoded image plus a sample point,
//! into every derived representation the rest of Huescope needs: color
//! model conversions, a catalogue name, temperature, WCAG contrast and a
//! set of harmonic scheme variants. It is pure and synchronous; it knows
//! nothing about sessions, storage or HTTP.
//!
//! # Quick Start
//!
//! ```
//! use huescope_engine::{analyze, schemes_for, Color};
//!
//! let color: Color = "#ff0000".parse().unwrap();
//! let analysis = analyze(color);
//!
//! assert_eq!(analysis.name, "Red");
//! assert_eq!(analysis.hsl.h, 0.0);
//!
//! let schemes = schemes_for(color);
//! assert_eq!(schemes.complementary[0].hex(), "#00ffff");
//! ```
//!
//! # Sampling images
//!
//! [`analyze_image`] decodes PNG, JPEG, GIF, WebP or BMP bytes, reads a
//! small averaged window around the requested point (or the center) and
//! analyzes the result. Use [`Analyzer`] with [`SampleOptions`] to change
//! the window size, disable averaging or cap the payload size.
//!
//! # Components
//!
//! - [`color`]: RGB, HSL, HSV, CMYK and hex conversions
//! - [`naming`]: nearest-name classification and catalogue queries
//! - [`temperature`]: warm/cool/neutral estimation
//! - [`accessibility`]: relative luminance and contrast ratios
//! - [`scheme`]: the eight harmony variants
//! - [`sample`]: image decoding and point sampling
//! - [`mixing`], [`vision`], [`gradient`], [`compare`]: palette tools built
//!   on the same conversions

pub mod accessibility;
pub mod analysis;
pub mod color;
pub mod compare;
pub mod error;
pub mod gradient;
pub mod mixing;
pub mod naming;
pub mod sample;
pub mod scheme;
pub mod temperature;
pub mod vision;


pub use accessibility::{AccessibilityInfo, AccessibilityReport};
pub use analysis::{analyze, analyze_image, schemes_for, Analyzer, ColorAnalysis};
pub use color::{Cmyk, Color, Hsl, Hsv};
pub use error::ColorError;
pub use naming::{ClosestName, NamedColor};
pub use sample::{Point, Sample, SampleOptions};
pub use scheme::{SchemeSet, Swatch};
pub use temperature::{Temperature, TemperatureInfo};
