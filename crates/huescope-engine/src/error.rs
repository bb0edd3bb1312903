//! Error types for the analysis engine.

use thiserror::Error;

/// Errors returned by engine operations.
///
/// Every fallible operation either produces a complete result or one of
/// these variants; there are no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A hex string or integer triple could not be turned into a color.
    #[error("invalid color format '{value}': {reason}")]
    InvalidColorFormat { value: String, reason: String },

    /// Image bytes were empty, too large, or could not be decoded.
    #[error("invalid image data: {0}")]
    InvalidImageData(String),

    /// An argument to a mixing, gradient or simulation call was rejected.
    #[error("invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },
}

impl ColorError {
    pub(crate) fn format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ColorError::InvalidColorFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        ColorError::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_format_message() {
        let error = ColorError::format("#zzz", "contains non-hex characters");
        assert_eq!(
            error.to_string(),
            "invalid color format '#zzz': contains non-hex characters"
        );
    }

    #[test]
    fn test_invalid_image_data_message() {
        let error = ColorError::InvalidImageData("payload is empty".to_string());
        assert_eq!(error.to_string(), "invalid image data: payload is empty");
    }

    #[test]
    fn test_invalid_argument_message() {
        let error = ColorError::argument("steps", "must be at least 1");
        assert_eq!(
            error.to_string(),
            "invalid argument 'steps': must be at least 1"
        );
    }
}
