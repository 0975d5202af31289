//! In-memory key-value store - used when Redis is not configured or unreachable.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use agriscan_core::StoreError;
use agriscan_core::ports::KeyValueStore;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at
            .map(|exp| Instant::now() > exp)
            .unwrap_or(false)
    }
}

/// In-memory store using a HashMap behind an async RwLock.
///
/// Note: data is lost on process restart.
pub struct InMemoryStore {
    store: RwLock<HashMap<String, Entry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live (unexpired) keys.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.values().filter(|e| !e.is_expired()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let store = self.store.read().await;
        let Some(entry) = store.get(key) else {
            return Ok(None);
        };

        if entry.is_expired() {
            drop(store);
            let mut store = self.store.write().await;
            // Re-check under the write lock, a writer may have refreshed it.
            if store.get(key).is_some_and(Entry::is_expired) {
                store.remove(key);
            }
            return Ok(store
                .get(key)
                .map(|e| e.value.clone()));
        }

        Ok(Some(entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        let mut store = self.store.write().await;

        store.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|d| Instant::now() + d),
            },
        );

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
