use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog_item::CatalogItem;
use super::look::Outfit;

/// Scenario parameters for one harness test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub body_shape: String,
    pub style_preference: String,
    pub occasion: String,
    pub mood: String,
    pub budget: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpectedCriteria {
    pub must_include: Vec<String>,
    pub should_avoid: Vec<String>,
    pub color_guidelines: Vec<String>,
    pub style_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub name: String,
    pub input: ScenarioInput,
    pub expected_criteria: ExpectedCriteria,
}

/// One slot of a scored outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitPiece {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<&CatalogItem> for OutfitPiece {
    /// Blank colors and non-positive prices count as missing.
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.display_name.clone(),
            color: item.color.clone().filter(|c| !c.trim().is_empty()),
            price: item.price.filter(|p| *p > 0.0),
        }
    }
}

/// The outfit a harness run actually scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredOutfit {
    pub top: Option<OutfitPiece>,
    pub bottom: Option<OutfitPiece>,
    pub shoes: Option<OutfitPiece>,
    pub occasion: String,
    pub description: String,
}

impl ScoredOutfit {
    pub fn pieces(&self) -> impl Iterator<Item = &OutfitPiece> {
        [&self.top, &self.bottom, &self.shoes].into_iter().flatten()
    }

    /// Lowercase concatenation of every piece name and the description.
    pub fn text(&self) -> String {
        let mut parts: Vec<&str> = self.pieces().map(|p| p.name.as_str()).collect();
        parts.push(&self.description);
        parts.join(" ").to_lowercase()
    }

    pub fn total_price(&self) -> f64 {
        self.pieces().filter_map(|p| p.price).sum()
    }
}

impl From<&Outfit> for ScoredOutfit {
    fn from(outfit: &Outfit) -> Self {
        Self {
            top: Some(OutfitPiece::from(&outfit.top)),
            bottom: Some(OutfitPiece::from(&outfit.bottom)),
            shoes: Some(OutfitPiece::from(&outfit.shoes)),
            occasion: outfit.occasion.clone(),
            description: outfit.description.clone(),
        }
    }
}

/// Per-dimension scores for one (test case, run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMetrics {
    pub body_shape_accuracy: u32,
    pub style_alignment: u32,
    pub occasion_match: u32,
    pub mood_alignment: u32,
    pub color_harmony: u32,
    pub completeness_score: u32,
    pub budget_compliance: u32,
    pub diversity_score: u32,
    pub overall_quality: u32,
    pub passed_criteria: Vec<String>,
    pub failed_criteria: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub agent_version: String,
}

/// Persisted harness row: full input, expected criteria, actual outfit, metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarnessRecord {
    pub id: String,
    pub test_case_name: String,
    pub run_timestamp: DateTime<Utc>,
    pub input: ScenarioInput,
    pub expected: ExpectedCriteria,
    pub actual: ScoredOutfit,
    pub metrics: ValidationMetrics,
    pub success: bool,
}

/// Human review of one harness outfit. All scores are 1 to 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualRating {
    pub id: String,
    pub test_case_name: String,
    pub outfit_index: u32,
    pub run_timestamp: DateTime<Utc>,
    pub overall_rating: u8,
    pub body_shape_fit: u8,
    pub style_alignment: u8,
    pub occasion_fit: u8,
    pub mood_alignment: u8,
    pub color_harmony: u8,
    pub practicality: u8,
    pub liked: Option<bool>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregates over the most recent harness run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarnessStats {
    pub total_tests: usize,
    pub successful_tests: usize,
    pub success_rate: f64,
    pub average_body_shape_accuracy: f64,
    pub average_style_alignment: f64,
    pub average_occasion_match: f64,
    pub average_mood_alignment: f64,
    pub average_color_harmony: f64,
    pub average_completeness: f64,
    pub average_budget_compliance: f64,
    pub average_overall_quality: f64,
    pub run_timestamp: Option<DateTime<Utc>>,
}
