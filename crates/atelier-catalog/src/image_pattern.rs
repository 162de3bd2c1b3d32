//! Product-only image matching. Catalog photos named like `6_<n>_1.jpg`
//! show the garment alone, without a model.

use regex::{Regex, RegexBuilder};

use atelier_core::errors::{AtelierResult, ConfigError};
use atelier_core::models::{CatalogItem, ImageSet};

#[derive(Debug, Clone)]
pub struct ProductImageMatcher {
    pattern: Regex,
}

impl ProductImageMatcher {
    /// Compile `pattern` case-insensitively.
    pub fn new(pattern: &str) -> AtelierResult<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "styling.product_image_pattern".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { pattern })
    }

    pub fn is_product_image(&self, url: &str) -> bool {
        self.pattern.is_match(url.trim())
    }

    /// True when any image reference is a product-only shot.
    pub fn has_product_image(&self, item: &CatalogItem) -> bool {
        self.best_match(&item.images).is_some()
    }

    /// Any product-only reference in the set.
    pub fn best_match<'a>(&self, images: &'a ImageSet) -> Option<&'a str> {
        images.iter().find(|url| self.is_product_image(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> ProductImageMatcher {
        ProductImageMatcher::new(r"6_\d+_1\.jpg$").unwrap()
    }

    #[test]
    fn matches_product_only_names() {
        let m = matcher();
        assert!(m.is_product_image("https://cdn.example/2231/6_1_1.jpg"));
        assert!(m.is_product_image("https://cdn.example/2231/6_12_1.JPG"));
        assert!(!m.is_product_image("https://cdn.example/2231/2_1_1.jpg"));
        assert!(!m.is_product_image("https://cdn.example/2231/6_1_2.jpg"));
    }

    #[test]
    fn product_shot_in_any_position_counts() {
        let m = matcher();
        let mut item = CatalogItem::new("x", "Shirt");
        item.images = ImageSet::new(vec![
            "https://cdn.example/2_1_1.jpg".to_string(),
            "https://cdn.example/6_1_1.jpg".to_string(),
        ]);
        assert!(m.has_product_image(&item));
        assert_eq!(m.best_match(&item.images), Some("https://cdn.example/6_1_1.jpg"));
    }

    #[test]
    fn model_photos_only_are_rejected() {
        let mut item = CatalogItem::new("m", "Dress");
        item.images = ImageSet::new(vec![
            "https://cdn.example/2_1_1.jpg".to_string(),
            "https://cdn.example/1_1_1.jpg".to_string(),
        ]);
        assert!(!matcher().has_product_image(&item));
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        assert!(ProductImageMatcher::new("6_(").is_err());
    }
}
