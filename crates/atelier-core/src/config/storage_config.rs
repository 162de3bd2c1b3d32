use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Record store and local cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file path. `None` opens an in-memory database.
    pub db_path: Option<PathBuf>,
    pub cache_capacity: u64,
    pub cache_ttl_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
