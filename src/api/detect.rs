use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use base64::Engine;
use chrono::{DateTime, Utc};
use huescope_engine::{ColorAnalysis, Point, Sample, SchemeSet};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::headers::HeaderMapExt;
use crate::error::ApiError;
use crate::models::NewHistoryEntry;
use crate::server::AppState;

/// Request body for color detection
#[derive(Debug, Deserialize, ToSchema)]
pub struct DetectRequest {
    /// Encoded image as a `data:image/...;base64,` URL or bare base64
    pub image: String,
    /// Sample column in source pixels (center when omitted)
    pub x: Option<i64>,
    /// Sample row in source pixels (center when omitted)
    pub y: Option<i64>,
}

/// Detected color with its analysis and schemes
#[derive(Debug, Serialize, ToSchema)]
pub struct DetectResponse {
    pub success: bool,
    /// Full analysis of the sampled color
    #[schema(value_type = Object)]
    pub color: ColorAnalysis,
    /// The eight harmony variants
    #[schema(value_type = Object)]
    pub schemes: SchemeSet,
    /// Where the color was read and whether the point was clamped
    #[schema(value_type = Object)]
    pub sample: Sample,
    pub timestamp: DateTime<Utc>,
}

/// Detect the color at a point of an uploaded image
///
/// The image is decoded, a small window around the point is averaged (a
/// missing coordinate uses the center on that axis), and the result is analyzed. With a session header the
/// detection is also recorded in history.
#[utoipa::path(
    post,
    path = "/api/detect",
    request_body = DetectRequest,
    responses(
        (status = 200, description = "Color detected", body = DetectResponse),
        (status = 400, description = "Missing or undecodable image"),
        (status = 413, description = "Image larger than the configured limit"),
    ),
    params(
        ("X-Session-Id" = Option<String>, Header, description = "Session to record the detection under"),
    ),
    tag = "Detection"
)]
pub async fn handle_detect(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DetectResponse>, ApiError> {
    let Json(request) = payload?;

    let bytes = decode_image_payload(&request.image)?;
    let max = state.config.max_upload_bytes;
    if bytes.len() > max {
        return Err(ApiError::PayloadTooLarge(format!(
            "image is {} bytes (max {max})",
            bytes.len()
        )));
    }

    // each missing axis resolves to the image center
    let point = Some(Point::axes(request.x, request.y));

    let analyzer = state.analyzer.clone();
    let sample = tokio::task::spawn_blocking(move || analyzer.sample(&bytes, point)).await??;

    let color = state.analyzer.analyze(sample.color);
    let schemes = state.analyzer.schemes_for(sample.color);

    tracing::info!(
        color = %color.hex,
        name = color.name,
        x = sample.x,
        y = sample.y,
        clamped = sample.clamped,
        "Color detected"
    );

    if let Some(session) = headers.session_id() {
        let entry = NewHistoryEntry::new(session, sample.color, color.name);
        if let Err(e) = state.history.record(entry).await {
            tracing::warn!(%e, "Failed to record history");
        }
    }

    Ok(Json(DetectResponse {
        success: true,
        color,
        schemes,
        sample,
        timestamp: Utc::now(),
    }))
}

/// Decode a `data:` URL or bare base64 string to raw image bytes.
pub fn decode_image_payload(image: &str) -> Result<Vec<u8>, ApiError> {
    let image = image.trim();
    if image.is_empty() {
        return Err(ApiError::InvalidImage("image data is empty".to_string()));
    }

    let encoded = match image.strip_prefix("data:") {
        Some(rest) => {
            let (meta, data) = rest.split_once(',').ok_or_else(|| {
                ApiError::InvalidImage("data URL has no payload".to_string())
            })?;
            if !meta.ends_with(";base64") {
                return Err(ApiError::InvalidImage(
                    "data URL must be base64 encoded".to_string(),
                ));
            }
            data
        }
        None => image,
    };

    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ApiError::InvalidImage(format!("invalid base64: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url() {
        let bytes = decode_image_payload("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_bare_base64() {
        assert_eq!(decode_image_payload("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert!(matches!(
            decode_image_payload("  "),
            Err(ApiError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_base64_data_url() {
        assert!(matches!(
            decode_image_payload("data:image/png,hello"),
            Err(ApiError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_image_payload("not base64!!"),
            Err(ApiError::InvalidImage(_))
        ));
    }
}
