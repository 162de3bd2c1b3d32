/// Fast local key → JSON-string cache. Best-effort: callers treat a miss as
/// "re-derive from the record store".
pub trait ILocalCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// Typed helpers over [`ILocalCache`]. A malformed entry reads as a miss.
pub trait LocalCacheExt: ILocalCache {
    fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// A short label such as the current mood. Accepts a JSON string or raw text.
    fn get_label(&self, key: &str) -> Option<String> {
        let raw = self.get(key)?;
        let label = serde_json::from_str::<String>(&raw).unwrap_or(raw);
        let label = label.trim().to_lowercase();
        (!label.is_empty()).then_some(label)
    }

    fn set_json<T: serde::Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.set(key, raw);
        }
    }
}

impl<C: ILocalCache + ?Sized> LocalCacheExt for C {}
