//! Sample extraction: decode an encoded image and read a color at a point.
//!
//! The point is given in source-pixel coordinates. Each missing axis falls
//! back to the image center on its own; a point outside the image is
//! clamped to the nearest edge pixel and flagged in [`Sample::clamped`]
//! rather than treated as an error.

use image::RgbImage;
use serde::Serialize;

use crate::color::Color;
use crate::error::ColorError;

/// Default upper bound on encoded payload size (16 MiB).
pub const DEFAULT_MAX_BYTES: usize = 16 * 1024 * 1024;

/// Default averaging window edge, in pixels.
pub const DEFAULT_WINDOW: u32 = 5;

/// A requested sample location in source-pixel space. May lie outside the
/// image. An axis left as `None` resolves to the image center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// A point with either axis optional.
    pub fn axes(x: Option<i64>, y: Option<i64>) -> Self {
        Self { x, y }
    }

    /// The image center on both axes.
    pub fn center() -> Self {
        Self::default()
    }

    fn resolve(self, width: u32, height: u32) -> (i64, i64) {
        (
            self.x.unwrap_or((width / 2) as i64),
            self.y.unwrap_or((height / 2) as i64),
        )
    }
}

/// Options controlling how a sample is read.
///
/// # Defaults
///
/// - window: 5 (a 5x5 neighborhood)
/// - average: enabled
/// - max_bytes: 16 MiB
///
/// # Example
///
/// ```
/// use huescope_engine::SampleOptions;
///
/// let options = SampleOptions::new().window(4).average(true);
/// assert_eq!(options.window_size(), 5); // even sizes round up to the next odd size
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOptions {
    /// Edge length of the square averaging window. Always odd; 1 means a
    /// single pixel. Only [`SampleOptions::window`] may set it.
    window: u32,

    /// Average the window (true) or read only the center pixel (false).
    average: bool,

    /// Payloads larger than this are rejected before decoding.
    max_bytes: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            average: true,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl SampleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window edge. Zero becomes 1, even sizes round up.
    pub fn window(mut self, size: u32) -> Self {
        let size = size.max(1);
        self.window = if size % 2 == 0 { size + 1 } else { size };
        self
    }

    pub fn average(mut self, enabled: bool) -> Self {
        self.average = enabled;
        self
    }

    pub fn max_bytes(mut self, limit: usize) -> Self {
        self.max_bytes = limit;
        self
    }

    pub fn window_size(&self) -> u32 {
        self.window
    }

    pub fn averaging(&self) -> bool {
        self.average
    }

    pub fn byte_limit(&self) -> usize {
        self.max_bytes
    }
}

/// A color read from an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub color: Color,
    /// The in-bounds pixel the sample is centered on.
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// True when the requested point lay outside the image.
    pub clamped: bool,
}

/// Decode `bytes` and sample it at `point` (center if `None`, or per
/// missing axis).
pub fn sample(
    bytes: &[u8],
    point: Option<Point>,
    options: &SampleOptions,
) -> Result<Sample, ColorError> {
    let image = decode(bytes, options.max_bytes)?;
    Ok(sample_image(&image, point, options))
}

/// Decode an encoded image (PNG, JPEG, GIF, WebP or BMP) to RGB8.
///
/// Alpha is discarded.
pub fn decode(bytes: &[u8], max_bytes: usize) -> Result<RgbImage, ColorError> {
    if bytes.is_empty() {
        return Err(ColorError::InvalidImageData("payload is empty".to_string()));
    }
    if bytes.len() > max_bytes {
        return Err(ColorError::InvalidImageData(format!(
            "payload is {} bytes (max {max_bytes})",
            bytes.len()
        )));
    }

    let image = image::load_from_memory(bytes).map_err(|e| {
        tracing::debug!(error = %e, len = bytes.len(), "Image decode failed");
        ColorError::InvalidImageData(e.to_string())
    })?;

    let rgb = image.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(ColorError::InvalidImageData("image has no pixels".to_string()));
    }
    Ok(rgb)
}

/// Sample an already decoded image. The image must be non-empty.
pub fn sample_image(image: &RgbImage, point: Option<Point>, options: &SampleOptions) -> Sample {
    let (width, height) = image.dimensions();
    let (requested_x, requested_y) = point.unwrap_or_default().resolve(width, height);

    let x = requested_x.clamp(0, width.saturating_sub(1) as i64) as u32;
    let y = requested_y.clamp(0, height.saturating_sub(1) as i64) as u32;
    let clamped = x as i64 != requested_x || y as i64 != requested_y;
    if clamped {
        tracing::debug!(
            requested_x,
            requested_y,
            x,
            y,
            width,
            height,
            "Sample point out of bounds, clamped"
        );
    }

    let color = if options.average && options.window > 1 {
        window_mean(image, x, y, options.window / 2)
    } else {
        Color::from(image.get_pixel(x, y).0)
    };

    Sample {
        color,
        x,
        y,
        width,
        height,
        clamped,
    }
}

/// Unweighted mean of the `(2 * half + 1)`-square window around `(x, y)`,
/// clipped to the image.
fn window_mean(image: &RgbImage, x: u32, y: u32, half: u32) -> Color {
    let (width, height) = image.dimensions();
    let x0 = x.saturating_sub(half);
    let y0 = y.saturating_sub(half);
    let x1 = x.saturating_add(half).min(width - 1);
    let y1 = y.saturating_add(half).min(height - 1);

    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for py in y0..=y1 {
        for px in x0..=x1 {
            let pixel = image.get_pixel(px, py).0;
            for (sum, channel) in sums.iter_mut().zip(pixel) {
                *sum += channel as u64;
            }
            count += 1;
        }
    }

    let mean = |sum: u64| sum as f64 / count as f64;
    Color::from_f64(mean(sums[0]), mean(sums[1]), mean(sums[2]))
}
