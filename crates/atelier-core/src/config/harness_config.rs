use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::HARNESS_VERSION;

/// Weights of each scoring dimension in `overallQuality`. Must sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionWeights {
    pub body_shape: f64,
    pub style: f64,
    pub occasion: f64,
    pub mood: f64,
    pub color: f64,
    pub budget: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            body_shape: 0.25,
            style: 0.25,
            occasion: 0.15,
            mood: 0.15,
            color: 0.10,
            budget: 0.10,
        }
    }
}

impl DimensionWeights {
    pub fn total(&self) -> f64 {
        self.body_shape + self.style + self.occasion + self.mood + self.color + self.budget
    }
}

/// Scoring harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub weights: DimensionWeights,
    /// `occasionMatch` when the outfit's occasion differs from the scenario's.
    pub occasion_fallback: u32,
    /// `moodAlignment` when no mood keyword is present.
    pub mood_fallback: u32,
    pub success_threshold: u32,
    pub diversity_score: u32,
    pub agent_version: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            occasion_fallback: defaults::DEFAULT_OCCASION_FALLBACK,
            mood_fallback: defaults::DEFAULT_MOOD_FALLBACK,
            success_threshold: defaults::DEFAULT_SUCCESS_THRESHOLD,
            diversity_score: defaults::DEFAULT_DIVERSITY_SCORE,
            agent_version: HARNESS_VERSION.to_string(),
        }
    }
}
