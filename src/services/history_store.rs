use crate::error::ApiError;
use crate::models::{HistoryEntry, NewHistoryEntry, SessionId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for per-session detection history storage
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Record a detection and return the stored entry
    async fn record(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, ApiError>;

    /// Most recent entries for a session, newest first
    async fn list(&self, session: &SessionId, limit: usize) -> Result<Vec<HistoryEntry>, ApiError>;

    /// Delete one entry; returns false when the session has no such entry
    async fn delete(&self, session: &SessionId, id: u64) -> Result<bool, ApiError>;

    /// Delete every entry of a session; returns how many were removed
    async fn clear(&self, session: &SessionId) -> Result<usize, ApiError>;
}

/// In-memory history storage, oldest entries evicted past a per-session cap
pub struct InMemoryHistory {
    entries: Arc<RwLock<HashMap<SessionId, VecDeque<HistoryEntry>>>>,
    next_id: AtomicU64,
    max_per_session: usize,
}

impl InMemoryHistory {
    pub fn new(max_per_session: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
            max_per_session: max_per_session.max(1),
        }
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new(500)
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn record(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, ApiError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = entry.into_entry(id, Utc::now());

        let mut entries = self.entries.write().await;
        let session = entries.entry(entry.session_id.clone()).or_default();
        session.push_back(entry.clone());
        while session.len() > self.max_per_session {
            if let Some(evicted) = session.pop_front() {
                tracing::debug!(id = evicted.id, session = %evicted.session_id, "History entry evicted");
            }
        }

        Ok(entry)
    }

    async fn list(&self, session: &SessionId, limit: usize) -> Result<Vec<HistoryEntry>, ApiError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(session)
            .map(|list| list.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, session: &SessionId, id: u64) -> Result<bool, ApiError> {
        let mut entries = self.entries.write().await;
        let Some(list) = entries.get_mut(session) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|e| e.id != id);
        Ok(list.len() != before)
    }

    async fn clear(&self, session: &SessionId) -> Result<usize, ApiError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(session).map(|list| list.len()).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huescope_engine::Color;

    fn session(name: &str) -> SessionId {
        SessionId::parse(name).unwrap()
    }

    fn detection(name: &str, r: u8) -> NewHistoryEntry {
        NewHistoryEntry::new(session(name), Color::new(r, 0, 0), "Red")
    }

    #[tokio::test]
    async fn test_record_and_list_newest_first() {
        let store = InMemoryHistory::default();
        store.record(detection("a", 1)).await.unwrap();
        store.record(detection("a", 2)).await.unwrap();
        store.record(detection("a", 3)).await.unwrap();

        let list = store.list(&session("a"), 10).await.unwrap();
        let reds: Vec<u8> = list.iter().map(|e| e.rgb.r).collect();
        assert_eq!(reds, vec![3, 2, 1]);
        assert!(list[0].id > list[1].id);
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let store = InMemoryHistory::default();
        for r in 0..5 {
            store.record(detection("a", r)).await.unwrap();
        }

        let list = store.list(&session("a"), 2).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].rgb.r, 4);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemoryHistory::default();
        let entry = store.record(detection("a", 1)).await.unwrap();

        assert!(store.list(&session("b"), 10).await.unwrap().is_empty());
        assert!(!store.delete(&session("b"), entry.id).await.unwrap());
        assert_eq!(store.list(&session("a"), 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let store = InMemoryHistory::default();
        let first = store.record(detection("a", 1)).await.unwrap();
        store.record(detection("a", 2)).await.unwrap();

        assert!(store.delete(&session("a"), first.id).await.unwrap());
        assert!(!store.delete(&session("a"), first.id).await.unwrap());
        assert_eq!(store.clear(&session("a")).await.unwrap(), 1);
        assert_eq!(store.clear(&session("a")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_evicts_oldest_past_cap() {
        let store = InMemoryHistory::new(2);
        for r in 1..=3 {
            store.record(detection("a", r)).await.unwrap();
        }

        let reds: Vec<u8> = store
            .list(&session("a"), 10)
            .await
            .unwrap()
            .iter()
            .map(|e| e.rgb.r)
            .collect();
        assert_eq!(reds, vec![3, 2]);
    }
}
