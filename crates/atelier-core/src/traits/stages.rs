use async_trait::async_trait;

use crate::models::{
    CompatibilityReport, GenerationContext, Outfit, OutfitSeed, RecommendationContext,
    StageResult, UsedItems,
};

/// Resolves the user's style profile and a seed look.
#[async_trait]
pub trait IPersonalizationStage: Send + Sync {
    async fn run(&self, user_id: &str) -> StageResult<OutfitSeed>;
}

/// Assembles one complete outfit.
#[async_trait]
pub trait IStylingStage: Send + Sync {
    /// `used` holds ids already handed out in this generation pass.
    async fn run(&self, ctx: &GenerationContext, used: &UsedItems) -> StageResult<Outfit>;
}

/// Non-critical compatibility check.
#[async_trait]
pub trait IValidationStage: Send + Sync {
    async fn run(&self, outfit: &Outfit) -> StageResult<CompatibilityReport>;
}

/// Styling-tip generation.
///
/// Stages that can use upstream outputs expose them through [`Self::contextual`];
/// callers try that entry point first.
#[async_trait]
pub trait IRecommendationStage: Send + Sync {
    async fn run(&self, user_id: &str) -> StageResult<Vec<String>>;

    fn contextual(&self) -> Option<&dyn IContextualRecommendation> {
        None
    }
}

/// Extended recommendation entry point fed by upstream stage outputs.
#[async_trait]
pub trait IContextualRecommendation: Send + Sync {
    async fn run_with_context(
        &self,
        user_id: &str,
        ctx: &RecommendationContext,
    ) -> StageResult<Vec<String>>;
}
