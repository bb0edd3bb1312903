use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::headers::HeaderMapExt;
use crate::error::ApiError;
use crate::models::HistoryEntry;
use crate::server::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryQuery {
    /// Maximum entries to return (default 20, capped at 100)
    pub limit: Option<usize>,
}

/// Detection history of the current session
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub success: bool,
    /// Newest first
    pub history: Vec<HistoryEntry>,
    pub count: usize,
}

/// Result of a delete operation
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// List detection history
///
/// Without a session header the list is empty.
#[utoipa::path(
    get,
    path = "/api/history",
    params(
        HistoryQuery,
        ("X-Session-Id" = Option<String>, Header, description = "Session id"),
    ),
    responses(
        (status = 200, description = "History entries, newest first", body = HistoryResponse),
    ),
    tag = "History"
)]
pub async fn handle_list_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let Query(query) = query?;
    let history = match headers.session_id() {
        Some(session) => {
            let limit = state.config.history_limit(query.limit);
            state.history.list(&session, limit).await?
        }
        None => Vec::new(),
    };

    Ok(Json(HistoryResponse {
        success: true,
        count: history.len(),
        history,
    }))
}

/// Delete one history entry
#[utoipa::path(
    delete,
    path = "/api/history/{id}",
    params(
        ("id" = u64, Path, description = "History entry id"),
        ("X-Session-Id" = String, Header, description = "Session id"),
    ),
    responses(
        (status = 200, description = "Entry deleted", body = MessageResponse),
        (status = 400, description = "Missing session header"),
        (status = 404, description = "No such entry in this session"),
    ),
    tag = "History"
)]
pub async fn handle_delete_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let session = headers.require_session()?;
    let Path(id) = id?;

    if !state.history.delete(&session, id).await? {
        return Err(ApiError::NotFound("History item"));
    }

    tracing::info!(id, session = %session, "History entry deleted");
    Ok(Json(MessageResponse::new("History item deleted")))
}

/// Clear the session's history
#[utoipa::path(
    delete,
    path = "/api/history",
    params(
        ("X-Session-Id" = Option<String>, Header, description = "Session id"),
    ),
    responses(
        (status = 200, description = "History cleared", body = MessageResponse),
    ),
    tag = "History"
)]
pub async fn handle_clear_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, ApiError> {
    let Some(session) = headers.session_id() else {
        return Ok(Json(MessageResponse::new("No history to clear")));
    };

    let removed = state.history.clear(&session).await?;
    tracing::info!(removed, session = %session, "History cleared");
    Ok(Json(MessageResponse::new("History cleared")))
}
