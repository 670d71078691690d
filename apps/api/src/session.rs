//! Per-session archive state.
//!
//! Each interactive session owns at most one generated archive. A successful
//! generation replaces it wholesale; a failed generation never touches it, so
//! the previous archive stays downloadable unchanged.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::generation::generator::EntrySizes;

/// A packaged site archive held for download as `website.zip`.
#[derive(Debug, Clone)]
pub struct StoredArchive {
    pub bytes: Bytes,
    pub entries: EntrySizes,
    pub generated_at: DateTime<Utc>,
}

/// In-memory map of session id → stored archive. Cloning shares the map;
/// sessions are independent and the lock only guards the map itself.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, StoredArchive>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the session's archive wholesale. Never merges or appends.
    pub async fn put(&self, session_id: Uuid, archive: StoredArchive) {
        self.inner.write().await.insert(session_id, archive);
    }

    pub async fn get(&self, session_id: Uuid) -> Option<StoredArchive> {
        self.inner.read().await.get(&session_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive(content: &str) -> StoredArchive {
        StoredArchive {
            bytes: Bytes::from(content.as_bytes().to_vec()),
            entries: EntrySizes {
                html: content.len(),
                css: 0,
                js: 0,
            },
            generated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_unknown_session_has_no_archive() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_wholesale() {
        let store = SessionStore::new();
        let session = Uuid::new_v4();

        store.put(session, archive("first")).await;
        store.put(session, archive("second")).await;

        let stored = store.get(session).await.unwrap();
        assert_eq!(stored.bytes.as_ref(), b"second");
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.put(a, archive("for a")).await;

        assert!(store.get(b).await.is_none());
        assert_eq!(store.get(a).await.unwrap().bytes.as_ref(), b"for a");
    }
}
