use crate::error::ApiError;
use crate::models::{NewPalette, Palette, PaletteUpdate, SessionId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for per-session saved palettes
#[async_trait]
pub trait PaletteStore: Send + Sync {
    async fn create(&self, session: &SessionId, palette: NewPalette) -> Result<Palette, ApiError>;

    /// Favorites first, then newest first
    async fn list(&self, session: &SessionId) -> Result<Vec<Palette>, ApiError>;

    /// Apply a partial update; `None` when the session has no such palette
    async fn update(
        &self,
        session: &SessionId,
        id: u64,
        update: PaletteUpdate,
    ) -> Result<Option<Palette>, ApiError>;

    async fn delete(&self, session: &SessionId, id: u64) -> Result<bool, ApiError>;
}

/// In-memory palette storage
pub struct InMemoryPalettes {
    palettes: Arc<RwLock<HashMap<u64, Palette>>>,
    next_id: AtomicU64,
}

impl InMemoryPalettes {
    pub fn new() -> Self {
        Self {
            palettes: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryPalettes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaletteStore for InMemoryPalettes {
    async fn create(&self, session: &SessionId, palette: NewPalette) -> Result<Palette, ApiError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let palette = Palette::create(id, session.clone(), palette, Utc::now());

        let mut palettes = self.palettes.write().await;
        palettes.insert(id, palette.clone());
        Ok(palette)
    }

    async fn list(&self, session: &SessionId) -> Result<Vec<Palette>, ApiError> {
        let palettes = self.palettes.read().await;
        let mut list: Vec<Palette> = palettes
            .values()
            .filter(|p| &p.session_id == session)
            .cloned()
            .collect();
        // ids grow with creation time, so they break timestamp ties
        list.sort_by(|a, b| {
            b.is_favorite
                .cmp(&a.is_favorite)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(list)
    }

    async fn update(
        &self,
        session: &SessionId,
        id: u64,
        update: PaletteUpdate,
    ) -> Result<Option<Palette>, ApiError> {
        let mut palettes = self.palettes.write().await;
        let Some(palette) = palettes.get_mut(&id).filter(|p| &p.session_id == session) else {
            return Ok(None);
        };
        palette.apply(update, Utc::now());
        Ok(Some(palette.clone()))
    }

    async fn delete(&self, session: &SessionId, id: u64) -> Result<bool, ApiError> {
        let mut palettes = self.palettes.write().await;
        if palettes.get(&id).is_some_and(|p| &p.session_id == session) {
            palettes.remove(&id);
            return Ok(true);
        }
        Ok(false)
    }
}
