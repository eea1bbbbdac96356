//! JSON-file backend: one file per key under a data directory.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use kilin_core::storage::{parse_array, KeyValueStore, StorageResult};

/// Keeps each key in `<data_dir>/<key>.json`.
///
/// Every write goes to its own temp file and is renamed into place, so a
/// reader never sees a half-written value. Writes and appends to one key are
/// serialized within this store; separate processes sharing a directory are
/// not coordinated.
pub struct JsonFileStore {
    data_dir: PathBuf,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), locks: Mutex::new(HashMap::new()) }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    async fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        self.locks.lock().await.entry(key.to_string()).or_default().clone()
    }

    /// Caller holds the key lock.
    async fn write_file(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.path_for(key);
        debug!(path = %path.display(), "Writing key");

        tokio::fs::create_dir_all(&self.data_dir).await?;
        let temp_path = self
            .data_dir
            .join(format!(".{}.{}.tmp", key, Uuid::new_v4().simple()));
        tokio::fs::write(&temp_path, value).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                warn!(path = %temp_path.display(), error = %cleanup, "Leaving temp file behind");
            }
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        debug!(path = %path.display(), "Reading key");
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let lock = self.key_lock(key).await;
        let _held = lock.lock().await;
        self.write_file(key, value).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let lock = self.key_lock(key).await;
        let _held = lock.lock().await;
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn append(&self, key: &str, item: Value) -> StorageResult<()> {
        let lock = self.key_lock(key).await;
        let _held = lock.lock().await;
        let mut items = match self.get(key).await? {
            Some(raw) => parse_array(key, &raw),
            None => Vec::new(),
        };
        items.push(item);
        self.write_file(key, serde_json::to_string(&items)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_roundtrip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested"));

        assert!(store.get("car_wash_users").await.unwrap().is_none());

        store.set("car_wash_users", "[]".to_string()).await.unwrap();
        assert!(temp_dir.path().join("nested").join("car_wash_users.json").exists());
        assert_eq!(store.get("car_wash_users").await.unwrap().as_deref(), Some("[]"));

        store.remove("car_wash_users").await.unwrap();
        store.remove("car_wash_users").await.unwrap();
        assert!(store.get("car_wash_users").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let store = JsonFileStore::new(temp_dir.path());
            store.append("log", serde_json::json!({"a": 1})).await.unwrap();
            store.append("log", serde_json::json!({"a": 2})).await.unwrap();
        }

        let reopened = JsonFileStore::new(temp_dir.path());
        let raw = reopened.get("log").await.unwrap().unwrap();
        let items: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(file_names(temp_dir.path()), vec!["log.json"]);
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sets_all_succeed() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(temp_dir.path()));

        let writers: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                let value = serde_json::json!({ "n": i }).to_string();
                tokio::spawn(async move { store.set("car_wash_current_user", value).await })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        let raw = store.get("car_wash_current_user").await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["n"].as_u64().unwrap() < 50);
        assert_eq!(file_names(temp_dir.path()), vec!["car_wash_current_user.json"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_keep_every_item() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(temp_dir.path()));

        let writers: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let booking = serde_json::json!({ "reference": format!("KLN{}", i) });
                    store.append("car_wash_bookings", booking).await
                })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        let raw = store.get("car_wash_bookings").await.unwrap().unwrap();
        let items: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(items.len(), 50);
        let mut references: Vec<&str> =
            items.iter().map(|b| b["reference"].as_str().unwrap()).collect();
        references.sort();
        references.dedup();
        assert_eq!(references.len(), 50);
    }
}
