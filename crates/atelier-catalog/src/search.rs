//! Live external catalog search over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use atelier_core::config::CatalogConfig;
use atelier_core::errors::{AtelierResult, CatalogError};
use atelier_core::models::{CatalogItem, ImageSet};
use atelier_core::traits::{CatalogQuery, ICatalogSearch};

/// One GET per search against `{base_url}/search`. No retries.
pub struct HttpCatalogSearch {
    client: reqwest::Client,
    base_url: String,
}

/// Response body: either a bare list or a list under `products`/`items`/`data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    List(Vec<RemoteProduct>),
    Wrapped {
        #[serde(alias = "items", alias = "data", alias = "results")]
        products: Vec<RemoteProduct>,
    },
}

#[derive(Deserialize)]
struct RemoteProduct {
    #[serde(alias = "product_id", alias = "productId")]
    id: Value,
    #[serde(alias = "name", alias = "title", alias = "product_name", alias = "displayName")]
    display_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    family: Option<String>,
    #[serde(default)]
    subfamily: Option<String>,
    #[serde(default, alias = "colour")]
    color: Option<String>,
    #[serde(default)]
    price: Option<Value>,
    #[serde(default, alias = "image", alias = "image_url", alias = "imageUrl")]
    images: Value,
}

impl RemoteProduct {
    fn into_item(self) -> Option<CatalogItem> {
        let id = match self.id {
            Value::String(s) if !s.is_empty() => s,
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let mut item = CatalogItem::new(id, self.display_name.unwrap_or_default());
        item.description = self.description.unwrap_or_default();
        item.family = self.family;
        item.subfamily = self.subfamily;
        item.color = self.color;
        item.price = self.price.as_ref().and_then(parse_price);
        item.images = ImageSet::from_value(&self.images);
        Some(item)
    }
}

/// Prices arrive as numbers, numeric strings, or `{ "value": .. }` objects.
fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .trim()
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .replace(',', ".")
            .parse()
            .ok(),
        Value::Object(map) => map
            .get("value")
            .or_else(|| map.get("current"))
            .and_then(parse_price),
        _ => None,
    }
}

impl HttpCatalogSearch {
    pub fn new(config: &CatalogConfig) -> AtelierResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CatalogError::SearchFailed {
                reason: format!("client build: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: config.search_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Map a raw response body into catalog items, dropping records without an id.
    pub fn parse_body(body: &str) -> AtelierResult<Vec<CatalogItem>> {
        let parsed: SearchResponse =
            serde_json::from_str(body).map_err(|e| CatalogError::InvalidResponse {
                reason: e.to_string(),
            })?;
        let products = match parsed {
            SearchResponse::List(products) | SearchResponse::Wrapped { products } => products,
        };
        Ok(products
            .into_iter()
            .filter_map(RemoteProduct::into_item)
            .collect())
    }
}

#[async_trait]
impl ICatalogSearch for HttpCatalogSearch {
    async fn search(&self, query: &CatalogQuery) -> AtelierResult<Vec<CatalogItem>> {
        if self.base_url.is_empty() {
            return Err(CatalogError::SearchFailed {
                reason: "no search endpoint configured".to_string(),
            }
            .into());
        }
        let url = format!("{}/search", self.base_url);
        let limit = query.limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.query.as_str()),
                ("gender", query.gender.as_str()),
                ("category", query.category.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CatalogError::SearchFailed {
                reason: format!("HTTP error: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(CatalogError::SearchFailed {
                reason: format!("search returned {status}"),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| CatalogError::InvalidResponse {
            reason: e.to_string(),
        })?;
        let mut items = Self::parse_body(&body)?;
        items.truncate(query.limit);
        tracing::debug!(query = %query.query, found = items.len(), "live catalog search");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_response() {
        let body = r#"{"products": [
            {"id": 101, "name": "Linen shirt", "price": "€29,95",
             "images": "[\"https://cdn.example/6_1_1.jpg\"]", "colour": "white"},
            {"productId": "abc", "title": "Jeans", "price": {"value": 49.9},
             "image": {"url": "https://cdn.example/6_2_1.jpg"}}
        ]}"#;
        let items = HttpCatalogSearch::parse_body(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "101");
        assert_eq!(items[0].price, Some(29.95));
        assert_eq!(items[0].color.as_deref(), Some("white"));
        assert_eq!(items[0].images.first(), Some("https://cdn.example/6_1_1.jpg"));
        assert_eq!(items[1].price, Some(49.9));
        assert_eq!(items[1].images.len(), 1);
    }

    #[test]
    fn parses_bare_list_and_skips_missing_ids() {
        let body = r#"[{"id": "", "name": "ghost"}, {"id": "x", "name": "Skirt"}]"#;
        let items = HttpCatalogSearch::parse_body(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].display_name, "Skirt");
    }

    #[test]
    fn malformed_body_is_invalid_response() {
        let err = HttpCatalogSearch::parse_body("<html>").unwrap_err();
        assert!(err.to_string().contains("invalid catalog response"));
    }

    #[tokio::test]
    async fn unconfigured_endpoint_fails_fast() {
        let search = HttpCatalogSearch::new(&CatalogConfig::default()).unwrap();
        let query = CatalogQuery {
            query: "classic".to_string(),
            gender: "women".to_string(),
            category: "clothing".to_string(),
            limit: 6,
        };
        assert!(search.search(&query).await.is_err());
    }
}
