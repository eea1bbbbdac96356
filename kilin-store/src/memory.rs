use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

use kilin_core::storage::{parse_array, KeyValueStore, StorageResult};

/// Process-local key/value store. Used by tests and the default dev config.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    // Read and write happen under one write lock, so concurrent appends in
    // this process never drop each other.
    async fn append(&self, key: &str, item: Value) -> StorageResult<()> {
        let mut entries = self.entries.write().await;
        let mut items = match entries.get(key) {
            Some(raw) => parse_array(key, raw),
            None => Vec::new(),
        };
        items.push(item);
        entries.insert(key.to_string(), serde_json::to_string(&items)?);
        Ok(())
    }
}
