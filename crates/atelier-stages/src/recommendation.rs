//! Recommendation: styling tips from the cached mood/event, or from the
//! outputs of the upstream stages.

use std::sync::Arc;

use async_trait::async_trait;

use atelier_core::constants::{cache_keys, DEFAULT_EVENT, DEFAULT_MOOD};
use atelier_core::models::{RecommendationContext, StageResult};
use atelier_core::rules::RecommendationRules;
use atelier_core::traits::{
    IContextualRecommendation, ILocalCache, IRecommendationStage, LocalCacheExt,
};
use atelier_observability::tracing_setup::{events, spans};

const PRAISE_THRESHOLD: u32 = 90;
const MINOR_IMPROVEMENT_THRESHOLD: u32 = 70;

pub struct RecommendationStage {
    cache: Arc<dyn ILocalCache>,
    rules: RecommendationRules,
}

impl RecommendationStage {
    pub fn new(cache: Arc<dyn ILocalCache>, rules: RecommendationRules) -> Self {
        Self { cache, rules }
    }

    fn pool<'a>(&'a self, pools: &'a std::collections::BTreeMap<String, Vec<String>>, key: &str) -> &'a [String] {
        pools
            .get(key)
            .or_else(|| pools.get(&self.rules.fallback_key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn finish(&self, mut tips: Vec<String>) -> Vec<String> {
        tips.extend(self.rules.closing_tips.iter().cloned());
        tips.truncate(self.rules.max_tips);
        tips
    }

    /// Mood tips, then event tips, then the closing tips, capped.
    pub fn tips_for(&self, mood: &str, event: &str) -> Vec<String> {
        let mut tips: Vec<String> = self.pool(&self.rules.mood_tips, mood).to_vec();
        tips.extend(self.pool(&self.rules.event_tips, event).iter().cloned());
        self.finish(tips)
    }

    /// Tips synthesized from whichever upstream outputs are present.
    pub fn tips_from_context(&self, ctx: &RecommendationContext) -> Vec<String> {
        let mut tips = Vec::new();
        if let Some(seed) = &ctx.personalization {
            tips.push(
                self.rules
                    .style_tip
                    .replace("{style}", &seed.profile.style_profile),
            );
        }
        if let Some(outfit) = &ctx.styling {
            tips.push(
                self.rules
                    .outfit_logic_tip
                    .replace("{occasion}", &outfit.occasion),
            );
        }
        if let Some(report) = &ctx.validation {
            if report.score >= PRAISE_THRESHOLD {
                tips.push(self.rules.praise_tip.clone());
            } else if report.score >= MINOR_IMPROVEMENT_THRESHOLD {
                tips.push(self.rules.minor_improvement_tip.clone());
            }
        }
        self.finish(tips)
    }
}

#[async_trait]
impl IRecommendationStage for RecommendationStage {
    async fn run(&self, user_id: &str) -> StageResult<Vec<String>> {
        let mood = self
            .cache
            .get_label(cache_keys::CURRENT_MOOD)
            .unwrap_or_else(|| DEFAULT_MOOD.to_string());
        let event = self
            .cache
            .get_label(cache_keys::CURRENT_EVENT)
            .unwrap_or_else(|| DEFAULT_EVENT.to_string());
        tracing::debug!(user_id, mood = %mood, event = %event, "context-free tips");
        events::stage_completed(spans::stages::RECOMMENDATION, user_id, true);
        StageResult::success(self.tips_for(&mood, &event))
    }

    fn contextual(&self) -> Option<&dyn IContextualRecommendation> {
        Some(self)
    }
}

#[async_trait]
impl IContextualRecommendation for RecommendationStage {
    async fn run_with_context(
        &self,
        user_id: &str,
        ctx: &RecommendationContext,
    ) -> StageResult<Vec<String>> {
        events::stage_completed(spans::stages::RECOMMENDATION, user_id, true);
        StageResult::success(self.tips_from_context(ctx))
    }
}
