use axum::{extract::rejection::JsonRejection, Json};
use huescope_engine::mixing::{self, MixMethod, MixResult, PaletteMix, TwoColorMix};
use huescope_engine::Color;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{parse_colors, parse_named};
use crate::error::ApiError;

const DEFAULT_VARIATIONS: usize = 5;
const MAX_VARIATIONS: usize = 20;
const MAX_PALETTE_BASES: usize = 16;

/// Request body for a weighted mix
#[derive(Debug, Deserialize, ToSchema)]
pub struct MixRequest {
    /// One or more colors
    pub colors: Vec<String>,
    /// Optional weights, one per color; normalized to sum to 1
    pub ratios: Option<Vec<f64>>,
    /// `rgb`, `cmyk` (default), `hsl` or `subtractive`
    pub method: Option<String>,
}

/// Request body for a two-color mix
#[derive(Debug, Deserialize, ToSchema)]
pub struct TwoColorRequest {
    pub color1: String,
    pub color2: String,
    /// Share of `color2` in `[0, 1]` (default 0.5)
    pub ratio: Option<f64>,
}

/// Request body for a mixed palette
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaletteMixRequest {
    /// Two or more base colors
    pub colors: Vec<String>,
    /// Blends per pair (default 5, at most 20)
    pub variations: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MixResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub result: MixResult,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TwoColorResponse {
    pub success: bool,
    /// The same pair mixed with every method
    #[schema(value_type = Object)]
    pub mix: TwoColorMix,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteMixResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub palette: Vec<PaletteMix>,
    pub count: usize,
}

/// Mix colors with optional weights
#[utoipa::path(
    post,
    path = "/api/mixer/mix",
    request_body = MixRequest,
    responses(
        (status = 200, description = "Mixed color", body = MixResponse),
        (status = 400, description = "No colors, invalid ratios or unknown method"),
    ),
    tag = "Mixer"
)]
pub async fn handle_mix(
    payload: Result<Json<MixRequest>, JsonRejection>,
) -> Result<Json<MixResponse>, ApiError> {
    let Json(request) = payload?;
    let colors = parse_colors(&request.colors)?;
    let method: MixMethod = parse_named(request.method.as_deref())?;

    let result = mixing::mix(&colors, request.ratios.as_deref(), method)?;
    tracing::debug!(method = method.as_str(), result = %result.hex, "Colors mixed");

    Ok(Json(MixResponse {
        success: true,
        result,
    }))
}

/// Mix two colors at a ratio with every method
#[utoipa::path(
    post,
    path = "/api/mixer/two-colors",
    request_body = TwoColorRequest,
    responses(
        (status = 200, description = "Mixes by method", body = TwoColorResponse),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Mixer"
)]
pub async fn handle_two_colors(
    payload: Result<Json<TwoColorRequest>, JsonRejection>,
) -> Result<Json<TwoColorResponse>, ApiError> {
    let Json(request) = payload?;
    let a: Color = request.color1.parse()?;
    let b: Color = request.color2.parse()?;

    let mix = mixing::mix_two(a, b, request.ratio.unwrap_or(0.5))?;
    Ok(Json(TwoColorResponse { success: true, mix }))
}

/// Blend every pair of base colors into a palette
#[utoipa::path(
    post,
    path = "/api/mixer/palette",
    request_body = PaletteMixRequest,
    responses(
        (status = 200, description = "Blended palette", body = PaletteMixResponse),
        (status = 400, description = "Too few or too many colors, or invalid variations"),
    ),
    tag = "Mixer"
)]
pub async fn handle_palette(
    payload: Result<Json<PaletteMixRequest>, JsonRejection>,
) -> Result<Json<PaletteMixResponse>, ApiError> {
    let Json(request) = payload?;
    if request.colors.len() > MAX_PALETTE_BASES {
        return Err(ApiError::InvalidArgument(format!(
            "at most {MAX_PALETTE_BASES} base colors are allowed"
        )));
    }
    let variations = request.variations.unwrap_or(DEFAULT_VARIATIONS);
    if variations > MAX_VARIATIONS {
        return Err(ApiError::InvalidArgument(format!(
            "variations must be at most {MAX_VARIATIONS}"
        )));
    }

    let bases = parse_colors(&request.colors)?;
    let palette = mixing::mix_palette(&bases, variations)?;

    Ok(Json(PaletteMixResponse {
        success: true,
        count: palette.len(),
        palette,
    }))
}
