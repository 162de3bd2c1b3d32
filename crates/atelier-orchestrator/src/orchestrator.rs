//! The sequential pipeline.

use std::sync::Arc;

use chrono::Utc;
use tracing::Instrument;

use atelier_core::errors::{AtelierResult, StageError};
use atelier_core::models::{
    CompatibilityReport, GenerationContext, Look, Outfit, OutfitSeed, RecommendationContext,
    StageResult, SupervisorInput,
};
use atelier_core::traits::{
    ILocalCache, IPersonalizationStage, IRecommendationStage, IStylingStage, IValidationStage,
};
use atelier_learning::{FeedbackLearningEngine, RuleFilter};
use atelier_observability::tracing_setup::{events, spans::stages};
use atelier_supervisor::SupervisorEngine;

use crate::payload::{AgentFlow, GenerationPayload, SupervisorSummary};
use crate::state::PipelineState;

/// The four stages ahead of the supervisor.
pub struct PipelineStages {
    pub personalization: Arc<dyn IPersonalizationStage>,
    pub styling: Arc<dyn IStylingStage>,
    pub validation: Arc<dyn IValidationStage>,
    pub recommendation: Arc<dyn IRecommendationStage>,
}

pub struct Orchestrator {
    stages: PipelineStages,
    supervisor: SupervisorEngine,
    rule_filter: RuleFilter,
    learning: Arc<FeedbackLearningEngine>,
    cache: Arc<dyn ILocalCache>,
    looks_per_request: usize,
}

fn upstream(stage: &str, message: String) -> StageError {
    StageError::Upstream {
        stage: stage.to_string(),
        message,
    }
}

impl Orchestrator {
    pub fn new(
        stages: PipelineStages,
        supervisor: SupervisorEngine,
        rule_filter: RuleFilter,
        learning: Arc<FeedbackLearningEngine>,
        cache: Arc<dyn ILocalCache>,
        looks_per_request: usize,
    ) -> Self {
        Self {
            stages,
            supervisor,
            rule_filter,
            learning,
            cache,
            looks_per_request: looks_per_request.max(1),
        }
    }

    /// Run one generation pass. Every failure is reported through the result,
    /// never a partial set of looks.
    pub async fn generate(
        &self,
        ctx: &GenerationContext,
        state: &mut PipelineState,
    ) -> StageResult<GenerationPayload> {
        let span = atelier_observability::orchestration_span!(ctx.user_id);
        state.begin_run(ctx.force_refresh);
        let result = self.pipeline(ctx, state).instrument(span).await;
        state.runs += 1;
        match &result {
            Ok(payload) => tracing::info!(
                user_id = %ctx.user_id,
                looks = payload.looks.len(),
                degraded = ?state.degradations.components(),
                "generation completed"
            ),
            Err(e) => tracing::warn!(user_id = %ctx.user_id, error = %e, "generation failed"),
        }
        StageResult::from_result(result)
    }

    async fn personalize(
        &self,
        user_id: &str,
        flow: &mut AgentFlow,
        state: &mut PipelineState,
    ) -> AtelierResult<OutfitSeed> {
        let result = self.stages.personalization.run(user_id).await;
        flow.push(stages::PERSONALIZATION, result.is_success(), result.error().map(String::from));
        let mut seed = result
            .into_result()
            .map_err(|message| upstream(stages::PERSONALIZATION, message))?;
        state.degradations.record_all(std::mem::take(&mut seed.degradations));
        Ok(seed)
    }

    /// Up to `looks_per_request` outfits. Only the first attempt is critical.
    async fn style(
        &self,
        ctx: &GenerationContext,
        flow: &mut AgentFlow,
        state: &mut PipelineState,
    ) -> AtelierResult<Vec<Outfit>> {
        let mut outfits: Vec<Outfit> = Vec::with_capacity(self.looks_per_request);
        let mut first_error = None;
        // Items styled in this pass; `state.used` only learns about approved looks.
        let mut pass_used = state.used.clone();
        for attempt in 0..self.looks_per_request {
            match self.stages.styling.run(ctx, &pass_used).await.into_result() {
                Ok(mut outfit) => {
                    pass_used.mark(outfit.item_ids());
                    state.degradations.record_all(std::mem::take(&mut outfit.degradations));
                    outfits.push(outfit);
                }
                Err(message) if outfits.is_empty() => {
                    first_error = Some(message);
                    break;
                }
                Err(message) => {
                    tracing::debug!(attempt, error = %message, "extra styling attempt failed");
                    state.degrade(
                        stages::STYLING,
                        format!("attempt {} failed: {message}", attempt + 1),
                        format!("{} looks", outfits.len()),
                    );
                    break;
                }
            }
        }
        flow.push(stages::STYLING, first_error.is_none(), first_error.clone());
        match first_error {
            Some(message) => Err(upstream(stages::STYLING, message).into()),
            None => Ok(outfits),
        }
    }

    async fn validate(
        &self,
        outfit: &Outfit,
        flow: &mut AgentFlow,
        state: &mut PipelineState,
    ) -> Option<CompatibilityReport> {
        let result = self.stages.validation.run(outfit).await;
        flow.push(stages::VALIDATION, result.is_success(), result.error().map(String::from));
        match result.into_result() {
            Ok(report) => Some(report),
            Err(message) => {
                state.degrade(stages::VALIDATION, message, "no validation report");
                None
            }
        }
    }

    async fn recommend(
        &self,
        user_id: &str,
        ctx: &RecommendationContext,
        flow: &mut AgentFlow,
        state: &mut PipelineState,
    ) -> Vec<String> {
        let result = match self.stages.recommendation.contextual() {
            Some(contextual) => contextual.run_with_context(user_id, ctx).await,
            None => self.stages.recommendation.run(user_id).await,
        };
        flow.push(stages::RECOMMENDATION, result.is_success(), result.error().map(String::from));
        match result.into_result() {
            Ok(tips) => tips,
            Err(message) => {
                state.degrade(stages::RECOMMENDATION, message, "no recommendations");
                Vec::new()
            }
        }
    }

    async fn filter(
        &self,
        user_id: &str,
        looks: Vec<Look>,
        flow: &mut AgentFlow,
        state: &mut PipelineState,
    ) -> AtelierResult<Vec<Look>> {
        let rules = match self.learning.active_rules(user_id).await {
            Ok(rules) => rules,
            Err(e) => {
                state.degrade("learning.rules", e.to_string(), "outerwear rule only");
                None
            }
        };
        let before = looks.len();
        let outcome = self.rule_filter.apply(looks, rules.as_ref());
        events::looks_filtered(user_id, before, outcome.looks.len());
        for (look_id, reason) in &outcome.dropped {
            tracing::debug!(look_id = %look_id, reason = %reason, "look dropped");
        }
        let survived = !outcome.looks.is_empty();
        let error = (!survived).then(|| {
            outcome
                .dropped
                .first()
                .map(|(_, reason)| reason.clone())
                .unwrap_or_else(|| "no candidate looks".to_string())
        });
        flow.push(stages::RULE_FILTER, survived, error.clone());
        match error {
            Some(reason) => Err(StageError::NoLooksSurvived { reason }.into()),
            None => Ok(outcome.looks),
        }
    }

    async fn pipeline(
        &self,
        ctx: &GenerationContext,
        state: &mut PipelineState,
    ) -> AtelierResult<GenerationPayload> {
        let user_id = ctx.user_id.as_str();
        let mut flow = AgentFlow::default();

        let seed = self.personalize(user_id, &mut flow, state).await?;
        let outfits = self.style(ctx, &mut flow, state).await?;
        let validation = match outfits.first() {
            Some(first) => self.validate(first, &mut flow, state).await,
            None => None,
        };

        let rec_ctx = RecommendationContext {
            personalization: Some(seed.clone()),
            styling: outfits.first().cloned(),
            validation: validation.clone(),
        };
        let recommendations = self.recommend(user_id, &rec_ctx, &mut flow, state).await;

        let style = seed.profile.style_profile.clone();
        let candidates: Vec<Look> = outfits
            .into_iter()
            .map(|outfit| outfit.into_look(style.clone()))
            .chain(seed.looks.iter().cloned())
            .collect();
        let looks = self.filter(user_id, candidates, &mut flow, state).await?;

        let review = self.supervisor.review_with_cache(
            SupervisorInput {
                personalization: Some(seed.clone()),
                looks,
                validation: validation.clone(),
                recommendations: recommendations.clone(),
            },
            self.cache.as_ref(),
        );
        let approved = !review.approved_looks.is_empty();
        flow.push(
            stages::SUPERVISOR,
            approved,
            (!approved).then(|| "no look kept two distinct items".to_string()),
        );
        if !approved {
            return Err(StageError::NoLooksSurvived {
                reason: "no look kept two distinct items".to_string(),
            }
            .into());
        }

        let learning = match self.learning.learning_summary(user_id).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                state.degrade("learning.summary", e.to_string(), "payload without learning data");
                None
            }
        };

        for look in &review.approved_looks {
            state.used.mark(look.item_ids());
        }
        flow.degradations = state.degradations.events().to_vec();
        Ok(GenerationPayload {
            looks: review.approved_looks,
            reasoning: seed.reasoning,
            recommendations,
            validation,
            timestamp: Utc::now(),
            agent_flow: flow,
            generation_context: ctx.clone(),
            supervisor: SupervisorSummary {
                feedback: review.feedback,
                improvements: review.improvements,
                duplicates_removed: review.duplicates_removed,
            },
            learning,
        })
    }
}
