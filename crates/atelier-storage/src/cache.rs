//! Fast local cache on moka. Entries expire after the configured TTL.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;

use atelier_core::config::StorageConfig;
use atelier_core::traits::ILocalCache;

/// Hit/miss counters since construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

pub struct MokaLocalCache {
    cache: Cache<String, String>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MokaLocalCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn with_config(config: &StorageConfig) -> Self {
        Self::new(config.cache_capacity, Duration::from_secs(config.cache_ttl_secs))
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for MokaLocalCache {
    fn default() -> Self {
        Self::with_config(&StorageConfig::default())
    }
}

impl ILocalCache for MokaLocalCache {
    fn get(&self, key: &str) -> Option<String> {
        let value = self.cache.get(key);
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        value
    }

    fn set(&self, key: &str, value: String) {
        self.cache.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.cache.invalidate(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::traits::LocalCacheExt;

    #[test]
    fn set_then_get() {
        let cache = MokaLocalCache::default();
        cache.set("current-mood", "\"elegant\"".to_string());
        assert_eq!(cache.get_json::<String>("current-mood").as_deref(), Some("elegant"));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn remove_and_miss() {
        let cache = MokaLocalCache::default();
        cache.set("k", "1".to_string());
        cache.remove("k");
        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn malformed_entry_reads_as_miss() {
        let cache = MokaLocalCache::default();
        cache.set("style-analysis", "{not json".to_string());
        assert!(cache.get_json::<serde_json::Value>("style-analysis").is_none());
    }
}
