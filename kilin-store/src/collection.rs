//! Typed reads over the storage port.
//!
//! Corrupt JSON is logged and treated as "nothing stored"; it never reaches
//! the caller as an error. Backend failures still do.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use kilin_core::storage::{KeyValueStore, StorageResult};

/// Reads the JSON array under `key`. Missing or unparsable data yields an
/// empty vector.
pub async fn load_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StorageResult<Vec<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!(key, error = %e, "Error parsing collection from storage");
            Ok(Vec::new())
        }
    }
}

/// Reads the single JSON value under `key`, `None` when missing or corrupt.
pub async fn load_value<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StorageResult<Option<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "Error parsing value from storage");
            Ok(None)
        }
    }
}

pub async fn save_value<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    store.set(key, serde_json::to_string(value)?).await
}

/// Appends one record to the collection under `key`.
pub async fn append_item<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    item: &T,
) -> StorageResult<()> {
    store.append(key, serde_json::to_value(item)?).await
}
