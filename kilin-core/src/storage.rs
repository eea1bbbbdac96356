use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

/// Fixed key names of the persisted key/value namespace.
pub mod keys {
    /// JSON array of user accounts.
    pub const USERS: &str = "car_wash_users";
    /// JSON object holding the active session; absent when logged out.
    pub const CURRENT_USER: &str = "car_wash_current_user";
    /// JSON array of booking confirmations, append-only.
    pub const BOOKINGS: &str = "car_wash_bookings";
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage port: a flat namespace of string keys holding JSON text.
///
/// Session and booking stores only talk to this trait, so the backing store
/// can be swapped without touching them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    async fn set(&self, key: &str, value: String) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// Appends `item` to the JSON array stored under `key`.
    ///
    /// The default implementation reads the whole array, pushes, and writes
    /// it back. Two writers interleaving between the read and the write lose
    /// one of the appends. An unparsable array is replaced by `[item]`.
    async fn append(&self, key: &str, item: Value) -> StorageResult<()> {
        let mut items = match self.get(key).await? {
            Some(raw) => parse_array(key, &raw),
            None => Vec::new(),
        };
        items.push(item);
        self.set(key, serde_json::to_string(&items)?).await
    }
}

/// Parses a stored JSON array, treating corrupt data as empty.
pub fn parse_array(key: &str, raw: &str) -> Vec<Value> {
    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "Discarding unparsable collection");
            Vec::new()
        }
    }
}
