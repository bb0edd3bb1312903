use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};
use huescope_engine::naming::{self, ClosestName, HueMatch, NamedColor, SearchMatch};
use huescope_engine::Color;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

const SEARCH_DEFAULT_LIMIT: usize = 10;
const SEARCH_MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Name fragment, case- and whitespace-insensitive
    #[serde(default)]
    pub q: String,
    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    /// Exact match first, then partial matches in catalogue order
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<SearchMatch>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColorNameResponse {
    pub success: bool,
    /// The queried color, normalized
    pub query: String,
    /// Catalogue name nearest to the query
    pub name: String,
    /// Hex of the catalogue entry
    pub hex: String,
    /// Euclidean RGB distance to the entry
    pub distance: f64,
    pub exact_match: bool,
    /// 0-100, 100 for an exact match
    pub similarity: f64,
}

impl ColorNameResponse {
    fn new(query: Color, closest: ClosestName) -> Self {
        Self {
            success: true,
            query: query.hex(),
            name: closest.name.to_string(),
            hex: closest.hex,
            distance: closest.distance,
            exact_match: closest.exact_match,
            similarity: closest.similarity,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogueResponse {
    pub success: bool,
    /// Every named color, sorted by name
    #[schema(value_type = Vec<Object>)]
    pub colors: Vec<NamedColor>,
    pub count: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct HueQuery {
    /// Lowest HSV hue in degrees (default 0)
    pub min: Option<u16>,
    /// Highest HSV hue in degrees (default 360)
    pub max: Option<u16>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HueResponse {
    pub success: bool,
    pub min: u16,
    pub max: u16,
    /// Matches ordered by hue
    #[schema(value_type = Vec<Object>)]
    pub colors: Vec<HueMatch>,
    pub count: usize,
}

/// Search named colors
#[utoipa::path(
    get,
    path = "/api/colors/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching named colors", body = SearchResponse),
        (status = 400, description = "Empty query"),
    ),
    tag = "Colors"
)]
pub async fn handle_search(
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(query) = query?;
    if query.q.trim().is_empty() {
        return Err(ApiError::BadRequest("Query parameter 'q' is required".to_string()));
    }

    let limit = query
        .limit
        .unwrap_or(SEARCH_DEFAULT_LIMIT)
        .min(SEARCH_MAX_LIMIT);
    let results = naming::search(&query.q, limit);

    Ok(Json(SearchResponse {
        success: true,
        count: results.len(),
        results,
    }))
}

/// Closest catalogue name for a hex color
#[utoipa::path(
    get,
    path = "/api/colors/name/{hex}",
    params(("hex" = String, Path, description = "Color with or without '#'")),
    responses(
        (status = 200, description = "Closest named color", body = ColorNameResponse),
        (status = 400, description = "Invalid hex color"),
    ),
    tag = "Colors"
)]
pub async fn handle_color_name(
    hex: Result<Path<String>, PathRejection>,
) -> Result<Json<ColorNameResponse>, ApiError> {
    let Path(hex) = hex?;
    let color: Color = hex.parse()?;

    Ok(Json(ColorNameResponse::new(color, naming::closest_name(color))))
}

/// Every named color
#[utoipa::path(
    get,
    path = "/api/colors/all",
    responses(
        (status = 200, description = "The full catalogue", body = CatalogueResponse),
    ),
    tag = "Colors"
)]
pub async fn handle_all_colors() -> Json<CatalogueResponse> {
    let colors: Vec<NamedColor> = naming::all().into_iter().copied().collect();
    Json(CatalogueResponse {
        success: true,
        count: colors.len(),
        colors,
    })
}

/// Named colors within a hue range
#[utoipa::path(
    get,
    path = "/api/colors/hue",
    params(HueQuery),
    responses(
        (status = 200, description = "Named colors in the range", body = HueResponse),
        (status = 400, description = "min greater than max"),
    ),
    tag = "Colors"
)]
pub async fn handle_hue_range(
    query: Result<Query<HueQuery>, QueryRejection>,
) -> Result<Json<HueResponse>, ApiError> {
    let Query(query) = query?;
    let min = query.min.unwrap_or(0);
    let max = query.max.unwrap_or(360);
    if min > max {
        return Err(ApiError::InvalidArgument(format!(
            "min ({min}) must not exceed max ({max})"
        )));
    }

    let colors = naming::in_hue_range(min, max);
    Ok(Json(HueResponse {
        success: true,
        min,
        max,
        count: colors.len(),
        colors,
    }))
}
