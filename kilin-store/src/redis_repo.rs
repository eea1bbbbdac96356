use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;
use tracing::{debug, info};

use kilin_core::storage::{KeyValueStore, StorageError, StorageResult};

/// Redis backend. Each storage key maps to one Redis string key under
/// `prefix`.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
    prefix: String,
}

impl RedisStore {
    /// Opens a client; no connection is made until the first command.
    pub fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        info!("Redis storage configured");
        Ok(Self { client, prefix: "kilin:".to_string() })
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn redis_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    async fn connection(&self) -> StorageResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(backend_error)
    }
}

fn backend_error(e: redis::RedisError) -> StorageError {
    StorageError::Backend(e.to_string())
}

// Runs server-side so the append is atomic. The stored text is spliced, never
// re-encoded: cjson cannot tell `[]` from `{}` and would rewrite empty arrays
// inside items. A stored value that is not a JSON array is replaced, matching
// the other backends.
const APPEND_SCRIPT: &str = r#"
    local item = ARGV[1]
    local raw = redis.call("GET", KEYS[1])
    local inner = nil
    if raw then
        local ok, decoded = pcall(cjson.decode, raw)
        if ok and type(decoded) == "table" then
            inner = string.match(raw, "^%s*%[(.*)%]%s*$")
        end
    end
    local updated
    if inner and string.find(inner, "%S") then
        updated = "[" .. inner .. "," .. item .. "]"
    else
        updated = "[" .. item .. "]"
    end
    redis.call("SET", KEYS[1], updated)
    return string.len(updated)
"#;

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value = conn
            .get::<_, Option<String>>(self.redis_key(key))
            .await
            .map_err(backend_error)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(self.redis_key(key), value)
            .await
            .map_err(backend_error)
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(self.redis_key(key)).await.map_err(backend_error)
    }

    async fn append(&self, key: &str, item: Value) -> StorageResult<()> {
        let mut conn = self.connection().await?;
        let payload = serde_json::to_string(&item)?;
        let bytes: i64 = redis::Script::new(APPEND_SCRIPT)
            .key(self.redis_key(key))
            .arg(payload)
            .invoke_async(&mut conn)
            .await
            .map_err(backend_error)?;
        debug!(key, bytes, "Appended to collection");
        Ok(())
    }
}
