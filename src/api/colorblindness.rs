use axum::{extract::rejection::JsonRejection, Json};
use huescope_engine::vision::{self, Alternative, Deficiency, DeficiencyInfo, PairResult, Simulation};
use huescope_engine::Color;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Request body for a single simulation
#[derive(Debug, Deserialize, ToSchema)]
pub struct SimulateRequest {
    pub color: String,
    /// Deficiency name (default `protanopia`)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Request body carrying one color
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorRequest {
    pub color: String,
}

/// Request body carrying two colors
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorPairRequest {
    pub color1: String,
    pub color2: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SimulationResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub simulation: Simulation,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AllSimulationsResponse {
    pub success: bool,
    pub original: String,
    /// One entry per deficiency
    #[schema(value_type = Vec<Object>)]
    pub simulations: Vec<Simulation>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PairCheckResponse {
    pub success: bool,
    pub color1: String,
    pub color2: String,
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<PairResult>,
    /// Percentage of deficiencies under which the pair stays distinguishable
    pub accessibility_score: f64,
    pub passed: usize,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeficiencyInfoResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub deficiencies: Vec<DeficiencyInfo>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlternativesResponse {
    pub success: bool,
    pub original: String,
    #[schema(value_type = Vec<Object>)]
    pub alternatives: Vec<Alternative>,
}

/// Simulate one color vision deficiency
#[utoipa::path(
    post,
    path = "/api/colorblindness/simulate",
    request_body = SimulateRequest,
    responses(
        (status = 200, description = "Simulated color", body = SimulationResponse),
        (status = 400, description = "Invalid color or unknown deficiency"),
    ),
    tag = "Color Vision"
)]
pub async fn handle_simulate(
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let Json(request) = payload?;
    let color: Color = request.color.parse()?;
    let deficiency = match request.kind.as_deref() {
        Some(kind) => kind.parse::<Deficiency>()?,
        None => Deficiency::Protanopia,
    };

    Ok(Json(SimulationResponse {
        success: true,
        simulation: vision::simulate(color, deficiency),
    }))
}

/// Simulate every color vision deficiency
#[utoipa::path(
    post,
    path = "/api/colorblindness/all-types",
    request_body = ColorRequest,
    responses(
        (status = 200, description = "One simulation per deficiency", body = AllSimulationsResponse),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Color Vision"
)]
pub async fn handle_simulate_all(
    payload: Result<Json<ColorRequest>, JsonRejection>,
) -> Result<Json<AllSimulationsResponse>, ApiError> {
    let Json(request) = payload?;
    let color: Color = request.color.parse()?;
    let simulations = vision::simulate_all(color);

    Ok(Json(AllSimulationsResponse {
        success: true,
        original: color.hex(),
        count: simulations.len(),
        simulations,
    }))
}

/// Check whether two colors stay distinguishable
#[utoipa::path(
    post,
    path = "/api/colorblindness/check-pair",
    request_body = ColorPairRequest,
    responses(
        (status = 200, description = "Per-deficiency distinguishability", body = PairCheckResponse),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Color Vision"
)]
pub async fn handle_check_pair(
    payload: Result<Json<ColorPairRequest>, JsonRejection>,
) -> Result<Json<PairCheckResponse>, ApiError> {
    let Json(request) = payload?;
    let a: Color = request.color1.parse()?;
    let b: Color = request.color2.parse()?;
    let check = vision::check_pair(a, b);

    Ok(Json(PairCheckResponse {
        success: true,
        color1: check.color1,
        color2: check.color2,
        results: check.results,
        accessibility_score: check.accessibility_score,
        passed: check.passed,
        total: check.total,
    }))
}

/// Descriptions of every supported deficiency
#[utoipa::path(
    get,
    path = "/api/colorblindness/info",
    responses(
        (status = 200, description = "Deficiency descriptions", body = DeficiencyInfoResponse),
    ),
    tag = "Color Vision"
)]
pub async fn handle_info() -> Json<DeficiencyInfoResponse> {
    let deficiencies: Vec<DeficiencyInfo> =
        Deficiency::ALL.into_iter().map(Deficiency::info).collect();
    Json(DeficiencyInfoResponse {
        success: true,
        count: deficiencies.len(),
        deficiencies,
    })
}

/// Variants of a color that separate better under deficient vision
#[utoipa::path(
    post,
    path = "/api/colorblindness/alternatives",
    request_body = ColorRequest,
    responses(
        (status = 200, description = "Alternative colors", body = AlternativesResponse),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Color Vision"
)]
pub async fn handle_alternatives(
    payload: Result<Json<ColorRequest>, JsonRejection>,
) -> Result<Json<AlternativesResponse>, ApiError> {
    let Json(request) = payload?;
    let color: Color = request.color.parse()?;

    Ok(Json(AlternativesResponse {
        success: true,
        original: color.hex(),
        alternatives: vision::alternatives(color),
    }))
}
