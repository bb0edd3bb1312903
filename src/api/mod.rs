pub mod analyze;
pub mod colorblindness;
pub mod colors;
pub mod detect;
pub mod gradient;
pub mod headers;
pub mod history;
pub mod mixer;
pub mod palettes;
pub mod tools;

use huescope_engine::{Color, ColorError};
use std::str::FromStr;

use crate::error::ApiError;

/// Parse a list of hex colors, failing on the first invalid one.
pub(crate) fn parse_colors(colors: &[String]) -> Result<Vec<Color>, ApiError> {
    colors
        .iter()
        .map(|c| c.parse::<Color>().map_err(ApiError::from))
        .collect()
}

/// Parse an optional method/type name, using the default when absent.
pub(crate) fn parse_named<T>(name: Option<&str>) -> Result<T, ApiError>
where
    T: FromStr<Err = ColorError> + Default,
{
    match name {
        Some(name) => Ok(name.parse()?),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huescope_engine::gradient::Interpolation;
    use huescope_engine::mixing::MixMethod;

    #[test]
    fn test_parse_colors() {
        let colors = parse_colors(&["#fff".to_string(), "000000".to_string()]).unwrap();
        assert_eq!(colors, vec![Color::WHITE, Color::BLACK]);
    }

    #[test]
    fn test_parse_colors_fails_on_invalid() {
        let err = parse_colors(&["#fff".to_string(), "nope".to_string()]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidColor(_)));
    }

    #[test]
    fn test_parse_named_default_and_value() {
        assert_eq!(parse_named::<MixMethod>(None).unwrap(), MixMethod::Cmyk);
        assert_eq!(parse_named::<MixMethod>(Some("RGB")).unwrap(), MixMethod::Rgb);
        assert_eq!(parse_named::<Interpolation>(Some("hsv")).unwrap(), Interpolation::Hsv);
        assert!(matches!(
            parse_named::<Interpolation>(Some("lab")),
            Err(ApiError::InvalidArgument(_))
        ));
    }
}
