use axum::{
    extract::rejection::JsonRejection,
    Json,
};
use huescope_engine::gradient::{
    self, CssOptions, Gradient, GradientCss, GradientShape, GradientStop, Interpolation, Preset,
};
use huescope_engine::Color;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{parse_colors, parse_named};
use crate::error::ApiError;

const DEFAULT_STEPS: usize = 10;
const MAX_STEPS: usize = 256;

/// Request body for a multi-color gradient
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateGradientRequest {
    /// Two or more colors, in order
    pub colors: Vec<String>,
    /// Approximate stop count (default 10, at most 256)
    pub steps: Option<usize>,
    /// Interpolation space: `rgb` (default), `hsl` or `hsv`
    pub method: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradientResponse {
    pub success: bool,
    /// Interpolation space used
    #[schema(value_type = String)]
    pub method: Interpolation,
    #[schema(value_type = Vec<Object>)]
    pub stops: Vec<GradientStop>,
    /// Linear CSS at 90deg
    #[schema(value_type = Object)]
    pub css: GradientCss,
}

impl From<Gradient> for GradientResponse {
    fn from(gradient: Gradient) -> Self {
        Self {
            success: true,
            method: gradient.method,
            stops: gradient.stops,
            css: gradient.css,
        }
    }
}

/// Request body for a two-color gradient with CSS layout
#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomGradientRequest {
    pub start: String,
    pub end: String,
    /// Stop count (default 10, at most 256)
    pub steps: Option<usize>,
    /// `linear` (default), `radial` or `conic`
    pub gradient_type: Option<String>,
    /// Degrees for linear and conic gradients (default 90)
    pub angle: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomGradientResponse {
    pub success: bool,
    pub start: String,
    pub end: String,
    #[schema(value_type = Vec<Object>)]
    pub stops: Vec<GradientStop>,
    #[schema(value_type = Object)]
    pub css: GradientCss,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PresetsResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub presets: Vec<Preset>,
    pub count: usize,
}

fn steps(requested: Option<usize>) -> Result<usize, ApiError> {
    let steps = requested.unwrap_or(DEFAULT_STEPS);
    if steps > MAX_STEPS {
        return Err(ApiError::InvalidArgument(format!(
            "steps must be at most {MAX_STEPS}, got {steps}"
        )));
    }
    Ok(steps)
}

/// Generate a gradient through several colors
#[utoipa::path(
    post,
    path = "/api/gradient/generate",
    request_body = GenerateGradientRequest,
    responses(
        (status = 200, description = "Gradient stops and CSS", body = GradientResponse),
        (status = 400, description = "Fewer than two colors, invalid color or method"),
    ),
    tag = "Gradients"
)]
pub async fn handle_generate(
    payload: Result<Json<GenerateGradientRequest>, JsonRejection>,
) -> Result<Json<GradientResponse>, ApiError> {
    let Json(request) = payload?;
    let colors = parse_colors(&request.colors)?;
    let method: Interpolation = parse_named(request.method.as_deref())?;

    let gradient = gradient::gradient(&colors, steps(request.steps)?, method)?;
    tracing::debug!(colors = colors.len(), stops = gradient.stops.len(), "Gradient generated");
    Ok(Json(gradient.into()))
}

/// Generate a two-color gradient with a chosen CSS shape
#[utoipa::path(
    post,
    path = "/api/gradient/custom",
    request_body = CustomGradientRequest,
    responses(
        (status = 200, description = "Gradient stops and CSS", body = CustomGradientResponse),
        (status = 400, description = "Invalid color, steps or gradient type"),
    ),
    tag = "Gradients"
)]
pub async fn handle_custom(
    payload: Result<Json<CustomGradientRequest>, JsonRejection>,
) -> Result<Json<CustomGradientResponse>, ApiError> {
    let Json(request) = payload?;
    let start: Color = request.start.parse()?;
    let end: Color = request.end.parse()?;
    let shape: GradientShape = parse_named(request.gradient_type.as_deref())?;

    let stops = gradient::interpolate(start, end, steps(request.steps)?, Interpolation::Rgb)?;
    let options = CssOptions::new()
        .shape(shape)
        .angle(request.angle.unwrap_or(90));
    let css = gradient::css(&stops, &options);

    Ok(Json(CustomGradientResponse {
        success: true,
        start: start.hex(),
        end: end.hex(),
        stops,
        css,
    }))
}

/// Built-in named gradients
#[utoipa::path(
    get,
    path = "/api/gradient/presets",
    responses(
        (status = 200, description = "Preset gradients", body = PresetsResponse),
    ),
    tag = "Gradients"
)]
pub async fn handle_presets() -> Json<PresetsResponse> {
    let presets = gradient::presets();
    Json(PresetsResponse {
        success: true,
        count: presets.len(),
        presets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_default_and_cap() {
        assert_eq!(steps(None).unwrap(), 10);
        assert_eq!(steps(Some(MAX_STEPS)).unwrap(), MAX_STEPS);
        assert!(matches!(
            steps(Some(MAX_STEPS + 1)),
            Err(ApiError::InvalidArgument(_))
        ));
    }
}
