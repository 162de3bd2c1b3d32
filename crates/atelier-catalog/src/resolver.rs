//! Best-image resolution. `None` is always an acceptable answer.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use atelier_core::config::CatalogConfig;
use atelier_core::errors::{AtelierResult, CatalogError};
use atelier_core::traits::IImageResolver;

/// Asks `{image_base_url}/best-image/{item_id}` for a single display image.
/// Every failure folds into `None`.
pub struct HttpImageResolver {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct BestImageResponse {
    #[serde(alias = "url", alias = "image", alias = "imageUrl")]
    best_image: Option<String>,
}

impl HttpImageResolver {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AtelierResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ImageResolutionFailed {
                item_id: String::new(),
                reason: format!("client build: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// `None` when no image service is configured.
    pub fn from_config(config: &CatalogConfig) -> AtelierResult<Option<Self>> {
        config
            .image_base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| Self::new(url, Duration::from_secs(config.request_timeout_secs)))
            .transpose()
    }

    async fn fetch(&self, item_id: &str) -> Result<Option<String>, CatalogError> {
        let url = format!("{}/best-image/{item_id}", self.base_url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            CatalogError::ImageResolutionFailed {
                item_id: item_id.to_string(),
                reason: e.to_string(),
            }
        })?;
        if !response.status().is_success() {
            return Err(CatalogError::ImageResolutionFailed {
                item_id: item_id.to_string(),
                reason: format!("status {}", response.status()),
            });
        }
        let body: BestImageResponse =
            response
                .json()
                .await
                .map_err(|e| CatalogError::InvalidResponse {
                    reason: e.to_string(),
                })?;
        Ok(body.best_image.filter(|url| !url.trim().is_empty()))
    }
}

#[async_trait]
impl IImageResolver for HttpImageResolver {
    async fn best_image(&self, item_id: &str) -> Option<String> {
        match self.fetch(item_id).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(item_id, error = %e, "image resolution failed");
                None
            }
        }
    }
}

/// Resolver for deployments without an image service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImageResolver;

#[async_trait]
impl IImageResolver for NoImageResolver {
    async fn best_image(&self, _item_id: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_service_yields_no_resolver() {
        let resolver = HttpImageResolver::from_config(&CatalogConfig::default()).unwrap();
        assert!(resolver.is_none());
    }

    #[tokio::test]
    async fn no_image_resolver_answers_none() {
        assert_eq!(NoImageResolver.best_image("any").await, None);
    }
}
