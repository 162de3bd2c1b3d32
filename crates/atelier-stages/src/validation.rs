//! Validation: a lightweight, non-critical compatibility check.

use async_trait::async_trait;

use atelier_catalog::classify;
use atelier_core::constants::MIN_LOOK_ITEMS;
use atelier_core::models::{
    CatalogItem, Category, CompatibilityReport, Look, Outfit, StageResult,
};
use atelier_core::rules::ClassifierRules;
use atelier_core::traits::IValidationStage;
use atelier_observability::tracing_setup::spans;

const SCORE_WITH_SHOES: u32 = 95;
const SCORE_WITHOUT_SHOES: u32 = 75;
const SCORE_TOO_FEW_ITEMS: u32 = 30;
const COMPATIBLE_THRESHOLD: u32 = 70;

#[derive(Debug, Clone, Default)]
pub struct ValidationStage {
    classifier: ClassifierRules,
}

impl ValidationStage {
    pub fn new(classifier: ClassifierRules) -> Self {
        Self { classifier }
    }

    fn is_shoe(&self, item: &CatalogItem) -> bool {
        item.category
            .or_else(|| classify(item, &self.classifier))
            .is_some_and(|c| c == Category::Shoes)
    }

    /// 95 with shoes, 75 without, 30 below two items.
    pub fn score_items<'a>(&self, items: impl IntoIterator<Item = &'a CatalogItem>) -> u32 {
        let items: Vec<&CatalogItem> = items.into_iter().collect();
        if items.len() < MIN_LOOK_ITEMS {
            SCORE_TOO_FEW_ITEMS
        } else if items.iter().any(|item| self.is_shoe(item)) {
            SCORE_WITH_SHOES
        } else {
            SCORE_WITHOUT_SHOES
        }
    }

    fn report(score: u32) -> CompatibilityReport {
        let mut suggestions = Vec::new();
        if score == SCORE_TOO_FEW_ITEMS {
            suggestions.push("Add more pieces: a look needs at least two items".to_string());
        } else if score < SCORE_WITH_SHOES {
            suggestions.push("Add shoes to complete the outfit".to_string());
        }
        let is_compatible = score >= COMPATIBLE_THRESHOLD;
        CompatibilityReport {
            is_compatible,
            score,
            suggestions,
            message: if is_compatible {
                "Outfit is compatible".to_string()
            } else {
                "Outfit needs adjustments".to_string()
            },
        }
    }

    /// Average the per-look scores. Compatible iff the average reaches 70.
    pub fn validate_looks(&self, looks: &[Look]) -> CompatibilityReport {
        if looks.is_empty() {
            return CompatibilityReport {
                is_compatible: false,
                score: 0,
                suggestions: vec![
                    "No looks to validate: generate at least one look first".to_string(),
                ],
                message: "No looks to validate".to_string(),
            };
        }
        let total: u32 = looks.iter().map(|look| self.score_items(&look.items)).sum();
        Self::report(total / looks.len() as u32)
    }
}

#[async_trait]
impl IValidationStage for ValidationStage {
    async fn run(&self, outfit: &Outfit) -> StageResult<CompatibilityReport> {
        let report = Self::report(self.score_items(outfit.items()));
        tracing::debug!(
            stage = spans::stages::VALIDATION,
            score = report.score,
            compatible = report.is_compatible,
            "validation completed"
        );
        let suggestions = report.suggestions.clone();
        StageResult::success(report).with_recommendations(suggestions)
    }
}
