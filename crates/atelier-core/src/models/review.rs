use serde::{Deserialize, Serialize};

use super::look::{Look, Outfit, OutfitSeed};

/// Output of the validation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub is_compatible: bool,
    pub score: u32,
    pub suggestions: Vec<String>,
    pub message: String,
}

/// Upstream outputs handed to the context-aware recommendation entry point.
#[derive(Debug, Clone, Default)]
pub struct RecommendationContext {
    pub personalization: Option<OutfitSeed>,
    pub styling: Option<Outfit>,
    pub validation: Option<CompatibilityReport>,
}

/// Everything the supervisor reviews.
#[derive(Debug, Clone, Default)]
pub struct SupervisorInput {
    pub personalization: Option<OutfitSeed>,
    /// Candidate looks in the order they were produced.
    pub looks: Vec<Look>,
    pub validation: Option<CompatibilityReport>,
    pub recommendations: Vec<String>,
}

/// Supervisor verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorReview {
    pub approved_looks: Vec<Look>,
    pub feedback: Vec<String>,
    pub improvements: Vec<String>,
    pub duplicates_removed: usize,
}
