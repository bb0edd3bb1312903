use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use huescope_engine::{Color, ColorAnalysis, SchemeSet};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;

/// Request body for hex analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Color as `#rrggbb`, `rrggbb` or `#rgb`
    pub hex: String,
}

/// Analysis of a single color
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub color: ColorAnalysis,
    #[schema(value_type = Object)]
    pub schemes: SchemeSet,
}

/// Analyze a color given as hex
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Color analyzed", body = AnalyzeResponse),
        (status = 400, description = "Invalid hex color"),
    ),
    tag = "Detection"
)]
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;
    let color: Color = request.hex.parse()?;

    tracing::debug!(color = %color, "Analyze request");

    Ok(Json(AnalyzeResponse {
        success: true,
        color: state.analyzer.analyze(color),
        schemes: state.analyzer.schemes_for(color),
    }))
}
