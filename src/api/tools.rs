use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query},
    Json,
};
use huescope_engine::compare::{self, Comparison};
use huescope_engine::{Cmyk, Color, Hsl, Hsv};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::colorblindness::{ColorPairRequest, ColorRequest};
use crate::error::ApiError;

const RANDOM_DEFAULT_COUNT: usize = 5;
const RANDOM_MAX_COUNT: usize = 20;

#[derive(Debug, Serialize, ToSchema)]
pub struct CompareResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub comparison: Comparison,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RandomQuery {
    /// Number of colors (default 5, capped at 20)
    pub count: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RandomResponse {
    pub success: bool,
    /// Colors as `#rrggbb`
    pub colors: Vec<String>,
    pub count: usize,
}

/// A color in every supported model
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub success: bool,
    pub hex: String,
    #[schema(value_type = Object)]
    pub rgb: Color,
    #[schema(value_type = Object)]
    pub hsl: Hsl,
    #[schema(value_type = Object)]
    pub hsv: Hsv,
    #[schema(value_type = Object)]
    pub cmyk: Cmyk,
}

/// Compare two colors side by side
#[utoipa::path(
    post,
    path = "/api/tools/compare",
    request_body = ColorPairRequest,
    responses(
        (status = 200, description = "Difference, similarity and contrast", body = CompareResponse),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Tools"
)]
pub async fn handle_compare(
    payload: Result<Json<ColorPairRequest>, JsonRejection>,
) -> Result<Json<CompareResponse>, ApiError> {
    let Json(request) = payload?;
    let a: Color = request.color1.parse()?;
    let b: Color = request.color2.parse()?;

    Ok(Json(CompareResponse {
        success: true,
        comparison: compare::compare(a, b),
    }))
}

/// Random saturated, bright colors
#[utoipa::path(
    get,
    path = "/api/tools/random",
    params(RandomQuery),
    responses(
        (status = 200, description = "Random colors", body = RandomResponse),
    ),
    tag = "Tools"
)]
pub async fn handle_random(
    query: Result<Query<RandomQuery>, QueryRejection>,
) -> Result<Json<RandomResponse>, ApiError> {
    let Query(query) = query?;
    let count = query
        .count
        .unwrap_or(RANDOM_DEFAULT_COUNT)
        .clamp(1, RANDOM_MAX_COUNT);

    let colors: Vec<String> = random_colors(&mut rand::thread_rng(), count)
        .into_iter()
        .map(Color::hex)
        .collect();

    Ok(Json(RandomResponse {
        success: true,
        count: colors.len(),
        colors,
    }))
}

/// Colors with any hue and HSV saturation and value in `[50, 100]`.
pub fn random_colors<R: Rng>(rng: &mut R, count: usize) -> Vec<Color> {
    (0..count)
        .map(|_| {
            Hsv::new(
                rng.gen_range(0.0..360.0),
                rng.gen_range(50.0..=100.0),
                rng.gen_range(50.0..=100.0),
            )
            .to_color()
        })
        .collect()
}

/// Convert a color to every model
#[utoipa::path(
    post,
    path = "/api/tools/convert",
    request_body = ColorRequest,
    responses(
        (status = 200, description = "The color in every model", body = ConvertResponse),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Tools"
)]
pub async fn handle_convert(
    payload: Result<Json<ColorRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Json(request) = payload?;
    let color: Color = request.color.parse()?;

    Ok(Json(ConvertResponse {
        success: true,
        hex: color.hex(),
        rgb: color,
        hsl: color.hsl().rounded(),
        hsv: color.hsv().rounded(),
        cmyk: color.cmyk().rounded(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_colors_are_saturated_and_bright() {
        let mut rng = StdRng::seed_from_u64(7);
        for color in random_colors(&mut rng, 200) {
            let hsv = color.hsv();
            // channel rounding can pull s and v slightly below 50
            assert!(hsv.s >= 49.0, "{color} s={}", hsv.s);
            assert!(hsv.v >= 49.0, "{color} v={}", hsv.v);
        }
    }

    #[test]
    fn test_random_colors_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_colors(&mut rng, 3).len(), 3);
    }
}
