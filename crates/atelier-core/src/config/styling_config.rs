use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::PLACEHOLDER_IMAGE;

/// Styling stage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Catalog rows sampled per run. Clamped to 200..=300.
    pub sample_size: usize,
    /// Case-insensitive regex a product-only image reference must match.
    pub product_image_pattern: String,
    pub placeholder_image: String,
    pub score_min: u32,
    /// Exclusive upper bound.
    pub score_max: u32,
    pub max_recommendations: usize,
    /// Styling runs per orchestration pass.
    pub looks_per_request: usize,
}

impl StylingConfig {
    pub fn effective_sample_size(&self) -> usize {
        self.sample_size
            .clamp(defaults::MIN_SAMPLE_SIZE, defaults::MAX_SAMPLE_SIZE)
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            sample_size: defaults::DEFAULT_SAMPLE_SIZE,
            product_image_pattern: defaults::DEFAULT_PRODUCT_IMAGE_PATTERN.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            score_min: defaults::DEFAULT_SCORE_MIN,
            score_max: defaults::DEFAULT_SCORE_MAX,
            max_recommendations: defaults::DEFAULT_MAX_RECOMMENDATIONS,
            looks_per_request: defaults::DEFAULT_LOOKS_PER_REQUEST,
        }
    }
}
