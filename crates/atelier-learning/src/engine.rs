//! FeedbackLearningEngine: analyze → generate insights → apply.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use atelier_core::config::LearningConfig;
use atelier_core::constants::cache_keys;
use atelier_core::errors::{AtelierResult, LearningError};
use atelier_core::models::{
    ActiveRuleSet, ContextData, FeedbackPattern, LearningData, LearningInsights,
    LearningSummary, Look, SuccessfulCombination, UserPreferences,
};
use atelier_core::traits::{ILocalCache, IRecordStore, LocalCacheExt};
use atelier_observability::tracing_setup::events;

use crate::analysis;
use crate::insights::generate_insights;

/// Payload mirrored under `agent-learning-config-{uid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentLearningConfig {
    pub user_id: String,
    pub learning_applied: bool,
    pub personalized_insights: LearningInsights,
    pub active_rules: ActiveRuleSet,
    pub last_updated: DateTime<Utc>,
}

pub struct FeedbackLearningEngine {
    store: Arc<dyn IRecordStore>,
    cache: Arc<dyn ILocalCache>,
    config: LearningConfig,
}

impl FeedbackLearningEngine {
    pub fn new(store: Arc<dyn IRecordStore>, cache: Arc<dyn ILocalCache>, config: LearningConfig) -> Self {
        Self {
            store,
            cache,
            config,
        }
    }

    fn analysis_err(user_id: &str, e: impl ToString) -> LearningError {
        LearningError::AnalysisFailed {
            user_id: user_id.to_string(),
            reason: e.to_string(),
        }
    }

    fn apply_err(user_id: &str, e: impl ToString) -> LearningError {
        LearningError::ApplyFailed {
            user_id: user_id.to_string(),
            reason: e.to_string(),
        }
    }

    /// Read the recent feedback windows and extract the user's pattern.
    pub async fn analyze_feedback_patterns(&self, user_id: &str) -> AtelierResult<FeedbackPattern> {
        let span = atelier_observability::learning_span!("analyze", user_id);
        self.read_pattern(user_id).instrument(span).await
    }

    async fn read_pattern(&self, user_id: &str) -> AtelierResult<FeedbackPattern> {
        let window = self.config.feedback_window;
        let feedback = self
            .store
            .recent_feedback(user_id, window)
            .await
            .map_err(|e| Self::analysis_err(user_id, e))?;
        let logs = self
            .store
            .recent_outfit_logs(user_id, window)
            .await
            .map_err(|e| Self::analysis_err(user_id, e))?;
        let learning_data = self
            .store
            .recent_learning_data(user_id, self.config.learning_log_window)
            .await
            .map_err(|e| Self::analysis_err(user_id, e))?;

        let pattern = analysis::analyze(&feedback, &logs, &learning_data);
        tracing::info!(
            user_id,
            colors = pattern.preferred_colors.len(),
            disliked = pattern.disliked_items.len(),
            liked_combinations = pattern.liked_combinations.len(),
            "feedback patterns analyzed"
        );
        Ok(pattern)
    }

    pub fn generate_learning_insights(&self, user_id: &str, pattern: &FeedbackPattern) -> LearningInsights {
        generate_insights(user_id, pattern)
    }

    /// The rule set a new run of insights produces. Avoided families carry
    /// over from the previous rule set.
    pub fn build_rule_set(
        &self,
        user_id: &str,
        pattern: &FeedbackPattern,
        insights: &LearningInsights,
        previous: Option<&ActiveRuleSet>,
    ) -> ActiveRuleSet {
        let threshold = self.config.color_affinity_threshold;
        ActiveRuleSet {
            user_id: user_id.to_string(),
            disliked_items: pattern.disliked_items.clone(),
            must_avoid_families: previous
                .map(|p| p.must_avoid_families.clone())
                .unwrap_or_default(),
            preferred_colors: pattern
                .preferred_colors
                .iter()
                .filter(|c| insights.color_affinity_score.get(*c).is_some_and(|a| *a > threshold))
                .cloned()
                .collect(),
            occasion_preferences: insights.occasion_suitability.clone(),
            created_at: Utc::now(),
        }
    }

    /// Persist the insights, append a new active rule set, mirror both into the cache.
    pub async fn apply_learning_to_agents(
        &self,
        user_id: &str,
        pattern: &FeedbackPattern,
        insights: &LearningInsights,
    ) -> AtelierResult<ActiveRuleSet> {
        let span = atelier_observability::learning_span!("apply", user_id);
        self.persist(user_id, pattern, insights).instrument(span).await
    }

    async fn persist(
        &self,
        user_id: &str,
        pattern: &FeedbackPattern,
        insights: &LearningInsights,
    ) -> AtelierResult<ActiveRuleSet> {
        self.store
            .insert_insights(insights)
            .await
            .map_err(|e| Self::apply_err(user_id, e))?;
        let previous = self
            .store
            .latest_rule_set(user_id)
            .await
            .map_err(|e| Self::apply_err(user_id, e))?;
        let rules = self.build_rule_set(user_id, pattern, insights, previous.as_ref());
        self.store
            .insert_rule_set(&rules)
            .await
            .map_err(|e| Self::apply_err(user_id, e))?;
        self.mirror(user_id, insights, &rules);

        events::learning_applied(
            user_id,
            insights.personalized_weights.len(),
            rules.disliked_items.len(),
        );
        Ok(rules)
    }

    fn mirror(&self, user_id: &str, insights: &LearningInsights, rules: &ActiveRuleSet) {
        self.cache.set_json(
            &cache_keys::personalized_weights(user_id),
            &insights.personalized_weights,
        );
        self.cache.set_json(
            &cache_keys::color_affinity(user_id),
            &insights.color_affinity_score,
        );
        self.cache.set_json(
            &cache_keys::item_compatibility(user_id),
            &insights.item_compatibility_matrix,
        );
        self.cache.set_json(
            &cache_keys::learning_config(user_id),
            &AgentLearningConfig {
                user_id: user_id.to_string(),
                learning_applied: true,
                personalized_insights: insights.clone(),
                active_rules: rules.clone(),
                last_updated: Utc::now(),
            },
        );
    }

    /// Full loop: analyze, generate, apply.
    pub async fn process_feedback(&self, user_id: &str) -> AtelierResult<LearningInsights> {
        let pattern = self.analyze_feedback_patterns(user_id).await?;
        let insights = self.generate_learning_insights(user_id, &pattern);
        self.apply_learning_to_agents(user_id, &pattern, &insights).await?;
        Ok(insights)
    }

    /// The active rule set: the cache mirror when present, else the newest stored row.
    pub async fn active_rules(&self, user_id: &str) -> AtelierResult<Option<ActiveRuleSet>> {
        if let Some(config) = self
            .cache
            .get_json::<AgentLearningConfig>(&cache_keys::learning_config(user_id))
        {
            return Ok(Some(config.active_rules));
        }
        self.store.latest_rule_set(user_id).await
    }

    /// Append a rule set that also avoids `families`.
    pub async fn avoid_families(&self, user_id: &str, families: &[String]) -> AtelierResult<ActiveRuleSet> {
        let mut rules = self
            .store
            .latest_rule_set(user_id)
            .await?
            .unwrap_or_else(|| ActiveRuleSet::empty(user_id));
        for family in families {
            let family = family.trim().to_lowercase();
            if !family.is_empty() && !rules.must_avoid_families.contains(&family) {
                rules.must_avoid_families.push(family);
            }
        }
        rules.created_at = Utc::now();
        self.store.insert_rule_set(&rules).await?;
        // The mirror would otherwise shadow the new row.
        self.cache.remove(&cache_keys::learning_config(user_id));
        Ok(rules)
    }

    /// Log a look the user engaged with.
    pub async fn record_learning_data(
        &self,
        user_id: &str,
        liked_looks: &[Look],
        preferences: UserPreferences,
        generation_method: &str,
    ) -> AtelierResult<LearningData> {
        let successful_combinations: Vec<SuccessfulCombination> = liked_looks
            .iter()
            .map(|look| SuccessfulCombination {
                look_id: look.id.clone(),
                item_ids: look.item_ids().map(String::from).collect(),
                occasion: look.occasion.clone(),
            })
            .collect();
        let engagement = (successful_combinations.len() as f64 / 10.0).min(1.0);
        let data = LearningData {
            user_id: user_id.to_string(),
            context_data: ContextData {
                generation_method: generation_method.to_string(),
                user_engagement: engagement,
                session_data: serde_json::json!({
                    "likedLooks": successful_combinations.len(),
                }),
            },
            successful_combinations,
            user_preferences: preferences,
            created_at: Utc::now(),
        };
        self.store.insert_learning_data(&data).await?;
        tracing::debug!(user_id, combinations = data.successful_combinations.len(), "learning data recorded");
        Ok(data)
    }

    /// The most frequent occasions among logged successful combinations.
    pub async fn most_liked_occasions(&self, user_id: &str) -> AtelierResult<Vec<String>> {
        let data = self
            .store
            .recent_learning_data(user_id, self.config.learning_log_window)
            .await?;
        Ok(top_occasions(
            &analysis::occasion_preferences(&data),
            self.config.most_liked_occasions,
        ))
    }

    pub async fn learning_summary(&self, user_id: &str) -> AtelierResult<LearningSummary> {
        let data = self
            .store
            .recent_learning_data(user_id, self.config.learning_log_window)
            .await?;
        let feedback = self
            .store
            .recent_feedback(user_id, self.config.feedback_window)
            .await?;
        Ok(LearningSummary {
            has_learning_data: !data.is_empty(),
            total_feedback: feedback.len(),
            most_liked_occasions: top_occasions(
                &analysis::occasion_preferences(&data),
                self.config.most_liked_occasions,
            ),
            recent_preferences: data.first().map(|d| d.user_preferences.clone()),
        })
    }
}

/// Highest counts first; ties alphabetical.
fn top_occasions(counts: &BTreeMap<String, u32>, n: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, &u32)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    ranked.into_iter().take(n).map(|(k, _)| k.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_occasions_orders_by_count() {
        let counts = BTreeMap::from([
            ("work".to_string(), 2),
            ("evening".to_string(), 5),
            ("casual".to_string(), 2),
            ("weekend".to_string(), 1),
        ]);
        assert_eq!(top_occasions(&counts, 3), vec!["evening", "casual", "work"]);
    }
}
