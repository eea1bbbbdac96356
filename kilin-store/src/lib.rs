pub mod app_config;
pub mod collection;
pub mod events;
pub mod file_store;
pub mod memory;
pub mod redis_repo;

pub use app_config::{Config, StorageBackend};
pub use events::EventPublisher;
pub use file_store::JsonFileStore;
pub use memory::InMemoryStore;
pub use redis_repo::RedisStore;

use std::sync::Arc;
use tracing::info;

use kilin_core::storage::{KeyValueStore, StorageError};

/// Builds the storage backend selected in the configuration.
pub fn connect(config: &app_config::StorageConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::File => {
            info!("Using file storage at {}", config.data_dir.display());
            Ok(Arc::new(JsonFileStore::new(config.data_dir.clone())))
        }
        StorageBackend::Redis => {
            let store = RedisStore::new(&config.redis_url)
                .map_err(|e| StorageError::Backend(e.to_string()))?;
            Ok(Arc::new(store))
        }
    }
}
