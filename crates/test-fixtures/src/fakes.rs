//! In-process stand-ins for the external catalog collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use atelier_core::errors::{AtelierResult, CatalogError};
use atelier_core::models::CatalogItem;
use atelier_core::traits::{CatalogQuery, ICatalogSearch, IImageResolver};

/// Catalog search returning a fixed answer and counting calls.
pub struct StaticCatalogSearch {
    answer: Result<Vec<CatalogItem>, String>,
    calls: AtomicUsize,
}

impl StaticCatalogSearch {
    pub fn returning(items: Vec<CatalogItem>) -> Self {
        Self {
            answer: Ok(items),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::returning(Vec::new())
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            answer: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ICatalogSearch for StaticCatalogSearch {
    async fn search(&self, query: &CatalogQuery) -> AtelierResult<Vec<CatalogItem>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.answer {
            Ok(items) => Ok(items.iter().take(query.limit).cloned().collect()),
            Err(reason) => Err(CatalogError::SearchFailed {
                reason: reason.clone(),
            }
            .into()),
        }
    }
}

/// Image resolver backed by an id → url map. Unknown ids resolve to nothing.
#[derive(Default)]
pub struct StaticImageResolver {
    images: HashMap<String, String>,
}

impl StaticImageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, item_id: &str, url: &str) -> Self {
        self.images.insert(item_id.to_string(), url.to_string());
        self
    }
}

#[async_trait]
impl IImageResolver for StaticImageResolver {
    async fn best_image(&self, item_id: &str) -> Option<String> {
        self.images.get(item_id).cloned()
    }
}
