//! Outfit sources for harness runs.

use std::sync::Arc;

use async_trait::async_trait;

use atelier_core::errors::{AtelierResult, HarnessError};
use atelier_core::models::{
    GenerationContext, OutfitPiece, ScoredOutfit, TestCase, UsedItems,
};
use atelier_core::rules::HarnessRules;
use atelier_core::traits::IStylingStage;

/// Produces the outfit a test case is scored against.
#[async_trait]
pub trait IOutfitGenerator: Send + Sync {
    async fn generate(&self, case: &TestCase) -> AtelierResult<ScoredOutfit>;
}

/// Deterministic stand-in outfit built from the scenario parameters alone.
#[derive(Debug, Clone, Default)]
pub struct ScenarioGenerator {
    rules: HarnessRules,
}

impl ScenarioGenerator {
    pub fn new(rules: HarnessRules) -> Self {
        Self { rules }
    }

    pub fn outfit(&self, case: &TestCase) -> ScoredOutfit {
        let input = &case.input;
        let palette = self
            .rules
            .style_palettes
            .get(&input.style_preference)
            .unwrap_or(&self.rules.default_palette);
        let piece = |slot: &str, color: &str, share: f64| OutfitPiece {
            id: Some(format!("{slot}_{}", case.name)),
            name: format!("{} {slot} for {}", input.style_preference, input.body_shape),
            color: Some(color.to_string()),
            price: Some((input.budget * share * 100.0).round() / 100.0),
        };
        ScoredOutfit {
            top: Some(piece("top", &palette[0], 0.3)),
            bottom: Some(piece("bottom", &palette[1], 0.4)),
            shoes: Some(piece("shoes", &palette[2], 0.3)),
            occasion: input.occasion.clone(),
            description: format!(
                "A {} {} outfit for {}",
                input.mood, input.style_preference, input.occasion
            ),
        }
    }
}

#[async_trait]
impl IOutfitGenerator for ScenarioGenerator {
    async fn generate(&self, case: &TestCase) -> AtelierResult<ScoredOutfit> {
        Ok(self.outfit(case))
    }
}

/// Runs the styling stage for each case.
pub struct LiveStylingGenerator {
    styling: Arc<dyn IStylingStage>,
    seed: Option<u64>,
}

impl LiveStylingGenerator {
    pub fn new(styling: Arc<dyn IStylingStage>) -> Self {
        Self { styling, seed: None }
    }

    /// Seed every run for reproducible outfits.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[async_trait]
impl IOutfitGenerator for LiveStylingGenerator {
    async fn generate(&self, case: &TestCase) -> AtelierResult<ScoredOutfit> {
        let mut ctx = GenerationContext::new(format!("harness:{}", case.name));
        ctx.random_seed = self.seed;
        let outfit = self
            .styling
            .run(&ctx, &UsedItems::new())
            .await
            .into_result()
            .map_err(|reason| HarnessError::GenerationFailed {
                test_case: case.name.clone(),
                reason,
            })?;
        Ok(ScoredOutfit::from(&outfit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::test_case;

    #[test]
    fn stand_in_splits_the_budget() {
        let case = test_case("oval", "classic", "work", "elegant");
        let outfit = ScenarioGenerator::default().outfit(&case);
        assert_eq!(outfit.top.as_ref().unwrap().price, Some(90.0));
        assert_eq!(outfit.bottom.as_ref().unwrap().price, Some(120.0));
        assert_eq!(outfit.top.as_ref().unwrap().name, "classic top for oval");
        assert_eq!(outfit.shoes.as_ref().unwrap().color.as_deref(), Some("camel"));
        assert_eq!(outfit.description, "A elegant classic outfit for work");
    }

    #[test]
    fn unknown_style_uses_default_palette() {
        let case = test_case("oval", "punk", "work", "elegant");
        let outfit = ScenarioGenerator::default().outfit(&case);
        assert_eq!(outfit.top.unwrap().color.as_deref(), Some("black"));
    }
}
