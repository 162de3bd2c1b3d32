//! FeedbackPattern → LearningInsights.

use std::collections::BTreeMap;

use chrono::Utc;

use atelier_core::constants::COMBINATION_SEPARATOR;
use atelier_core::models::{FeedbackPattern, LearningInsights};

pub const COLOR_IMPORTANCE: &str = "colorImportance";
pub const STYLE_CONSISTENCY: &str = "styleConsistency";
pub const OCCASION_FOCUS: &str = "occasionFocus";

/// Volume-thresholded weights.
pub fn personalized_weights(pattern: &FeedbackPattern) -> BTreeMap<String, f64> {
    let color = if pattern.preferred_colors.len() > 3 { 0.8 } else { 0.5 };
    let style = if pattern.style_evolution.len() > 2 { 0.9 } else { 0.6 };
    let occasion = if pattern.occasion_preferences.len() > 1 { 0.7 } else { 0.4 };
    BTreeMap::from([
        (COLOR_IMPORTANCE.to_string(), color),
        (STYLE_CONSISTENCY.to_string(), style),
        (OCCASION_FOCUS.to_string(), occasion),
    ])
}

/// Rank-based linear decay: the i-th of n colors scores (n − i) / n.
pub fn color_affinity(preferred: &[String]) -> BTreeMap<String, f64> {
    let n = preferred.len() as f64;
    preferred
        .iter()
        .enumerate()
        .map(|(i, color)| (color.clone(), (n - i as f64) / n))
        .collect()
}

/// Top id → the bottoms and shoes it was liked with.
pub fn compatibility_matrix(liked: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut matrix: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for combo in liked {
        let mut parts = combo.split(COMBINATION_SEPARATOR);
        let Some(top) = parts.next().filter(|t| !t.is_empty()) else {
            continue;
        };
        let partners = matrix.entry(top.to_string()).or_default();
        for partner in parts.filter(|p| !p.is_empty()) {
            if !partners.iter().any(|p| p == partner) {
                partners.push(partner.to_string());
            }
        }
    }
    matrix
}

pub fn generate_insights(user_id: &str, pattern: &FeedbackPattern) -> LearningInsights {
    LearningInsights {
        user_id: user_id.to_string(),
        personalized_weights: personalized_weights(pattern),
        color_affinity_score: color_affinity(&pattern.preferred_colors),
        item_compatibility_matrix: compatibility_matrix(&pattern.liked_combinations),
        occasion_suitability: pattern.occasion_preferences.clone(),
        created_at: Utc::now(),
    }
}
