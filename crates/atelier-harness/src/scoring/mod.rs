//! Weighted multi-criteria scoring of one outfit against one test case.

pub mod dimensions;

use chrono::Utc;

use atelier_core::config::{DimensionWeights, HarnessConfig};
use atelier_core::models::{ScoredOutfit, TestCase, ValidationMetrics};
use atelier_core::rules::HarnessRules;

use self::dimensions::DimensionScore;

/// Weighted sum of the six weighted dimensions, rounded.
pub fn overall_quality(metrics: &ValidationMetrics, weights: &DimensionWeights) -> u32 {
    let weighted = metrics.body_shape_accuracy as f64 * weights.body_shape
        + metrics.style_alignment as f64 * weights.style
        + metrics.occasion_match as f64 * weights.occasion
        + metrics.mood_alignment as f64 * weights.mood
        + metrics.color_harmony as f64 * weights.color
        + metrics.budget_compliance as f64 * weights.budget;
    weighted.round().clamp(0.0, 100.0) as u32
}

/// Score every dimension. Deterministic for identical inputs apart from the timestamp.
pub fn score_outfit(
    case: &TestCase,
    outfit: &ScoredOutfit,
    config: &HarnessConfig,
    rules: &HarnessRules,
) -> ValidationMetrics {
    let text = outfit.text();
    let criteria = &case.expected_criteria;
    let input = &case.input;

    let body = dimensions::body_shape(&text, criteria);
    let style = dimensions::style(&text, criteria);
    let occasion = dimensions::occasion(outfit, &input.occasion, config.occasion_fallback);
    let mood = dimensions::mood(&text, &input.mood, rules, config.mood_fallback);
    let color = dimensions::color(outfit);
    let budget = dimensions::budget(outfit.total_price(), input.budget);
    let completeness = dimensions::completeness(outfit);

    let mut passed = Vec::new();
    let mut failed = Vec::new();
    let all: [&DimensionScore; 7] = [&body, &style, &occasion, &mood, &color, &budget, &completeness];
    for dim in all {
        passed.extend(dim.passed.iter().cloned());
        failed.extend(dim.failed.iter().cloned());
    }

    let mut metrics = ValidationMetrics {
        body_shape_accuracy: body.score,
        style_alignment: style.score,
        occasion_match: occasion.score,
        mood_alignment: mood.score,
        color_harmony: color.score,
        completeness_score: completeness.score,
        budget_compliance: budget.score,
        diversity_score: config.diversity_score,
        overall_quality: 0,
        passed_criteria: passed,
        failed_criteria: failed,
        timestamp: Utc::now(),
        agent_version: config.agent_version.clone(),
    };
    metrics.overall_quality = overall_quality(&metrics, &config.weights);
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ScenarioGenerator;
    use crate::matrix::test_case;

    #[test]
    fn stand_in_outfits_pass() {
        let case = test_case("hourglass", "classic", "work", "elegant");
        let outfit = ScenarioGenerator::default().outfit(&case);
        let metrics = score_outfit(&case, &outfit, &HarnessConfig::default(), &HarnessRules::default());
        assert_eq!(metrics.occasion_match, 100);
        assert_eq!(metrics.mood_alignment, 90);
        assert_eq!(metrics.budget_compliance, 100);
        assert_eq!(metrics.completeness_score, 100);
        assert_eq!(metrics.diversity_score, 85);
        assert_eq!(metrics.agent_version, "v2.0");
        assert!(metrics.overall_quality >= 70);
    }

    #[test]
    fn overall_uses_weights() {
        let case = test_case("hourglass", "classic", "work", "elegant");
        let outfit = ScenarioGenerator::default().outfit(&case);
        let mut metrics =
            score_outfit(&case, &outfit, &HarnessConfig::default(), &HarnessRules::default());
        metrics.body_shape_accuracy = 100;
        metrics.style_alignment = 100;
        metrics.occasion_match = 100;
        metrics.mood_alignment = 100;
        metrics.color_harmony = 100;
        metrics.budget_compliance = 0;
        assert_eq!(overall_quality(&metrics, &DimensionWeights::default()), 90);
    }
}
