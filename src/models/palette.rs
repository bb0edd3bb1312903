use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::SessionId;

/// A named, saved list of colors.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Palette {
    /// Unique, increasing identifier
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Colors as `#rrggbb`
    pub colors: Vec<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub session_id: SessionId,
}

/// Request body for creating a palette
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPalette {
    /// Display name (must not be blank)
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Colors in any accepted hex form; stored normalized
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Request body for a partial palette update. Absent fields are kept.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PaletteUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub colors: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
}

impl Palette {
    pub(crate) fn create(id: u64, session_id: SessionId, new: NewPalette, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            colors: new.colors,
            is_favorite: new.is_favorite,
            created_at: now,
            updated_at: now,
            session_id,
        }
    }

    pub(crate) fn apply(&mut self, update: PaletteUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(colors) = update.colors {
            self.colors = colors;
        }
        if let Some(is_favorite) = update.is_favorite {
            self.is_favorite = is_favorite;
        }
        self.updated_at = now;
    }
}
