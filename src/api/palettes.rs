use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    Json,
};
use huescope_engine::Color;
use serde::Serialize;
use utoipa::ToSchema;

use super::headers::HeaderMapExt;
use super::history::MessageResponse;
use crate::error::ApiError;
use crate::models::{NewPalette, Palette, PaletteUpdate};
use crate::server::AppState;

/// Saved palettes of the current session
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteListResponse {
    pub success: bool,
    /// Favorites first, then newest first
    pub palettes: Vec<Palette>,
    pub count: usize,
}

/// A single saved palette
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub success: bool,
    pub palette: Palette,
}

/// List saved palettes
///
/// Without a session header the list is empty.
#[utoipa::path(
    get,
    path = "/api/palettes",
    params(
        ("X-Session-Id" = Option<String>, Header, description = "Session id"),
    ),
    responses(
        (status = 200, description = "Saved palettes", body = PaletteListResponse),
    ),
    tag = "Palettes"
)]
pub async fn handle_list_palettes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PaletteListResponse>, ApiError> {
    let palettes = match headers.session_id() {
        Some(session) => state.palettes.list(&session).await?,
        None => Vec::new(),
    };

    Ok(Json(PaletteListResponse {
        success: true,
        count: palettes.len(),
        palettes,
    }))
}

/// Save a new palette
#[utoipa::path(
    post,
    path = "/api/palettes",
    request_body = NewPalette,
    params(
        ("X-Session-Id" = String, Header, description = "Session id"),
    ),
    responses(
        (status = 201, description = "Palette created", body = PaletteResponse),
        (status = 400, description = "Missing session, blank name or invalid color"),
    ),
    tag = "Palettes"
)]
pub async fn handle_create_palette(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewPalette>, JsonRejection>,
) -> Result<(StatusCode, Json<PaletteResponse>), ApiError> {
    let session = headers.require_session()?;
    let Json(mut new) = payload?;

    new.name = validate_name(&new.name)?;
    new.colors = normalize_colors(&new.colors)?;

    let palette = state.palettes.create(&session, new).await?;
    tracing::info!(id = palette.id, session = %session, colors = palette.colors.len(), "Palette created");

    Ok((
        StatusCode::CREATED,
        Json(PaletteResponse {
            success: true,
            palette,
        }),
    ))
}

/// Update a palette; absent fields are kept
#[utoipa::path(
    put,
    path = "/api/palettes/{id}",
    request_body = PaletteUpdate,
    params(
        ("id" = u64, Path, description = "Palette id"),
        ("X-Session-Id" = String, Header, description = "Session id"),
    ),
    responses(
        (status = 200, description = "Palette updated", body = PaletteResponse),
        (status = 400, description = "Missing session, blank name or invalid color"),
        (status = 404, description = "No such palette in this session"),
    ),
    tag = "Palettes"
)]
pub async fn handle_update_palette(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<PaletteUpdate>, JsonRejection>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let session = headers.require_session()?;
    let Path(id) = id?;
    let Json(mut update) = payload?;

    if let Some(name) = &update.name {
        update.name = Some(validate_name(name)?);
    }
    if let Some(colors) = &update.colors {
        update.colors = Some(normalize_colors(colors)?);
    }

    let palette = state
        .palettes
        .update(&session, id, update)
        .await?
        .ok_or(ApiError::NotFound("Palette"))?;

    tracing::info!(id, session = %session, "Palette updated");
    Ok(Json(PaletteResponse {
        success: true,
        palette,
    }))
}

/// Delete a palette
#[utoipa::path(
    delete,
    path = "/api/palettes/{id}",
    params(
        ("id" = u64, Path, description = "Palette id"),
        ("X-Session-Id" = String, Header, description = "Session id"),
    ),
    responses(
        (status = 200, description = "Palette deleted", body = MessageResponse),
        (status = 400, description = "Missing session header"),
        (status = 404, description = "No such palette in this session"),
    ),
    tag = "Palettes"
)]
pub async fn handle_delete_palette(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let session = headers.require_session()?;
    let Path(id) = id?;

    if !state.palettes.delete(&session, id).await? {
        return Err(ApiError::NotFound("Palette"));
    }

    tracing::info!(id, session = %session, "Palette deleted");
    Ok(Json(MessageResponse::new("Palette deleted")))
}

fn validate_name(name: &str) -> Result<String, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Palette name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

/// Parse every color and store it as lowercase `#rrggbb`.
fn normalize_colors(colors: &[String]) -> Result<Vec<String>, ApiError> {
    colors
        .iter()
        .map(|c| c.parse::<Color>().map(Color::hex).map_err(ApiError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_colors() {
        let colors = vec!["F00".to_string(), "#00FF00".to_string()];
        assert_eq!(
            normalize_colors(&colors).unwrap(),
            vec!["#ff0000".to_string(), "#00ff00".to_string()]
        );
    }

    #[test]
    fn test_normalize_colors_rejects_invalid() {
        let colors = vec!["#ff0000".to_string(), "blue".to_string()];
        assert!(matches!(
            normalize_colors(&colors),
            Err(ApiError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Brand ").unwrap(), "Brand");
        assert!(validate_name("   ").is_err());
    }
}
