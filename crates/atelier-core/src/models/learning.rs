use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single most-recent persisted filter applied to new outfit generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRuleSet {
    pub user_id: String,
    #[serde(default)]
    pub disliked_items: Vec<String>,
    #[serde(default)]
    pub must_avoid_families: Vec<String>,
    #[serde(default)]
    pub preferred_colors: Vec<String>,
    #[serde(default)]
    pub occasion_preferences: BTreeMap<String, u32>,
    pub created_at: DateTime<Utc>,
}

impl ActiveRuleSet {
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            disliked_items: Vec::new(),
            must_avoid_families: Vec::new(),
            preferred_colors: Vec::new(),
            occasion_preferences: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }
}

/// Derived insights from one feedback-analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningInsights {
    pub user_id: String,
    pub personalized_weights: BTreeMap<String, f64>,
    pub color_affinity_score: BTreeMap<String, f64>,
    pub item_compatibility_matrix: BTreeMap<String, Vec<String>>,
    pub occasion_suitability: BTreeMap<String, u32>,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of the user's style profile at one point in their history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSnapshot {
    pub timestamp: DateTime<Utc>,
    pub style_profile: Option<String>,
    pub confidence: f64,
}

/// Signals extracted from a user's feedback history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPattern {
    pub preferred_colors: Vec<String>,
    pub disliked_items: Vec<String>,
    pub liked_combinations: Vec<String>,
    pub occasion_preferences: BTreeMap<String, u32>,
    pub style_evolution: Vec<StyleSnapshot>,
}

/// Direct like/dislike feedback on a look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFeedback {
    pub user_id: String,
    pub look_id: String,
    /// Item ids in top, bottom, shoes order.
    pub item_ids: Vec<String>,
    pub liked: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Legacy per-outfit log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitLog {
    pub user_id: String,
    pub top_id: Option<String>,
    pub bottom_id: Option<String>,
    pub shoes_id: Option<String>,
    /// `None` when the user never rated the outfit.
    pub user_liked: Option<bool>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl OutfitLog {
    pub fn item_ids(&self) -> Vec<String> {
        [&self.top_id, &self.bottom_id, &self.shoes_id]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

/// One outfit the user responded well to, with the occasion it was for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessfulCombination {
    pub look_id: String,
    pub item_ids: Vec<String>,
    pub occasion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub style_profile: Option<String>,
    pub body_shape: Option<String>,
    pub mood: Option<String>,
    pub color_preferences: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextData {
    pub generation_method: String,
    /// Engagement in [0, 1]; snapshots use ten times this as confidence.
    pub user_engagement: f64,
    pub session_data: serde_json::Value,
}

/// Learning log entry recorded when a user engages with a generated look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningData {
    pub user_id: String,
    pub successful_combinations: Vec<SuccessfulCombination>,
    pub user_preferences: UserPreferences,
    pub context_data: ContextData,
    pub created_at: DateTime<Utc>,
}

/// Learning data summarized for the orchestrator's payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningSummary {
    pub has_learning_data: bool,
    pub total_feedback: usize,
    pub most_liked_occasions: Vec<String>,
    pub recent_preferences: Option<UserPreferences>,
}
