use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AtelierResult;
use crate::models::CatalogItem;

/// One live catalog search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub query: String,
    pub gender: String,
    pub category: String,
    pub limit: usize,
}

/// Live external catalog search.
#[async_trait]
pub trait ICatalogSearch: Send + Sync {
    /// An empty list means "nothing found", not an error.
    async fn search(&self, query: &CatalogQuery) -> AtelierResult<Vec<CatalogItem>>;
}
