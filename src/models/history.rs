use chrono::{DateTime, Utc};
use huescope_engine::Color;
use serde::Serialize;
use utoipa::ToSchema;

use super::SessionId;

/// A color detected by a session.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HistoryEntry {
    /// Unique, increasing identifier
    pub id: u64,
    /// Detected color as `#rrggbb`
    pub hex_code: String,
    /// Nearest catalogue name
    pub color_name: String,
    /// Detected color channels
    #[schema(value_type = Object)]
    pub rgb: Color,
    /// When the color was detected (RFC 3339)
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub session_id: SessionId,
}

/// What a store needs to record a detection.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub session_id: SessionId,
    pub color: Color,
    pub color_name: String,
}

impl NewHistoryEntry {
    pub fn new(session_id: SessionId, color: Color, color_name: impl Into<String>) -> Self {
        Self {
            session_id,
            color,
            color_name: color_name.into(),
        }
    }

    pub(crate) fn into_entry(self, id: u64, created_at: DateTime<Utc>) -> HistoryEntry {
        HistoryEntry {
            id,
            hex_code: self.color.hex(),
            color_name: self.color_name,
            rgb: self.color,
            created_at,
            session_id: self.session_id,
        }
    }
}
