use serde::{Deserialize, Serialize};

use super::defaults;

/// Live catalog search and image resolution endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub search_base_url: String,
    pub image_base_url: Option<String>,
    pub gender: String,
    pub category: String,
    pub search_limit: usize,
    /// Rows fetched per slot when falling back to the local store.
    pub local_fallback_limit: usize,
    /// Passed to the HTTP client; requests are not retried.
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_base_url: String::new(),
            image_base_url: None,
            gender: defaults::DEFAULT_SEARCH_GENDER.to_string(),
            category: defaults::DEFAULT_SEARCH_CATEGORY.to_string(),
            search_limit: defaults::DEFAULT_SEARCH_LIMIT,
            local_fallback_limit: defaults::DEFAULT_LOCAL_FALLBACK_LIMIT,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
