//! Runs the scenario matrix, persists one row per case, aggregates the latest run.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::Instrument;

use atelier_core::config::HarnessConfig;
use atelier_core::errors::{AtelierResult, HarnessError};
use atelier_core::models::{HarnessRecord, HarnessStats, ManualRating, TestCase};
use atelier_core::rules::HarnessRules;
use atelier_core::traits::IRecordStore;
use atelier_core::AtelierConfig;
use atelier_observability::tracing_setup::events;

use crate::generator::IOutfitGenerator;
use crate::matrix::default_test_cases;
use crate::scoring::score_outfit;

/// Outcome of one pass over the test cases.
#[derive(Debug, Clone)]
pub struct HarnessRun {
    pub run_timestamp: DateTime<Utc>,
    pub records: Vec<HarnessRecord>,
    /// `(test case, reason)` for cases whose outfit could not be generated.
    pub failures: Vec<(String, String)>,
}

impl HarnessRun {
    pub fn stats(&self) -> HarnessStats {
        compute_stats(&self.records)
    }
}

pub struct HarnessRunner {
    store: Arc<dyn IRecordStore>,
    generator: Arc<dyn IOutfitGenerator>,
    config: HarnessConfig,
    rules: HarnessRules,
    cases: Vec<TestCase>,
}

impl HarnessRunner {
    pub fn new(
        store: Arc<dyn IRecordStore>,
        generator: Arc<dyn IOutfitGenerator>,
        config: HarnessConfig,
        rules: HarnessRules,
    ) -> Self {
        Self {
            store,
            generator,
            config,
            rules,
            cases: default_test_cases(),
        }
    }

    pub fn from_config(
        store: Arc<dyn IRecordStore>,
        generator: Arc<dyn IOutfitGenerator>,
        config: &AtelierConfig,
    ) -> Self {
        Self::new(store, generator, config.harness.clone(), config.rules.harness.clone())
    }

    /// Replace the default matrix.
    pub fn with_cases(mut self, cases: Vec<TestCase>) -> Self {
        self.cases = cases;
        self
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Score one case. Nothing is persisted.
    pub async fn score_case(&self, case: &TestCase, run_timestamp: DateTime<Utc>) -> AtelierResult<HarnessRecord> {
        let actual = self.generator.generate(case).await?;
        let metrics = score_outfit(case, &actual, &self.config, &self.rules);
        let success = metrics.overall_quality >= self.config.success_threshold;
        events::case_scored(&case.name, metrics.overall_quality, success);
        Ok(HarnessRecord {
            id: uuid::Uuid::new_v4().to_string(),
            test_case_name: case.name.clone(),
            run_timestamp,
            input: case.input.clone(),
            expected: case.expected_criteria.clone(),
            actual,
            metrics,
            success,
        })
    }

    /// Score and persist every case under one run timestamp.
    pub async fn run(&self) -> AtelierResult<HarnessRun> {
        let span = atelier_observability::harness_span!(self.cases.len());
        self.run_cases().instrument(span).await
    }

    async fn run_cases(&self) -> AtelierResult<HarnessRun> {
        let run_timestamp = Utc::now();
        let mut records = Vec::with_capacity(self.cases.len());
        let mut failures = Vec::new();
        for case in &self.cases {
            match self.score_case(case, run_timestamp).await {
                Ok(record) => {
                    self.store.insert_harness_record(&record).await?;
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!(test_case = %case.name, error = %e, "case skipped");
                    failures.push((case.name.clone(), e.to_string()));
                }
            }
        }
        let run = HarnessRun {
            run_timestamp,
            records,
            failures,
        };
        let stats = run.stats();
        tracing::info!(
            total = stats.total_tests,
            successful = stats.successful_tests,
            success_rate = stats.success_rate,
            failures = run.failures.len(),
            "harness run completed"
        );
        Ok(run)
    }

    /// Stats over the most recent persisted run.
    pub async fn stats(&self) -> AtelierResult<HarnessStats> {
        Ok(compute_stats(&self.store.latest_run_records().await?))
    }

    pub async fn latest_results(&self) -> AtelierResult<Vec<HarnessRecord>> {
        self.store.latest_run_records().await
    }

    pub async fn clear_results(&self) -> AtelierResult<usize> {
        let removed = self.store.clear_harness_records().await?;
        tracing::info!(removed, "harness results cleared");
        Ok(removed)
    }

    /// Validate and persist a manual rating. Every rating is kept.
    pub async fn submit_rating(&self, rating: &ManualRating) -> AtelierResult<()> {
        if !self.cases.iter().any(|c| c.name == rating.test_case_name) {
            return Err(HarnessError::UnknownTestCase {
                name: rating.test_case_name.clone(),
            }
            .into());
        }
        validate_rating(rating)?;
        self.store.insert_manual_rating(rating).await
    }

    pub async fn ratings(&self, test_case_name: &str) -> AtelierResult<Vec<ManualRating>> {
        self.store.manual_ratings(test_case_name).await
    }

    /// Mean `overall_rating`, `None` when the case has no ratings.
    pub async fn average_rating(&self, test_case_name: &str) -> AtelierResult<Option<f64>> {
        let ratings = self.ratings(test_case_name).await?;
        if ratings.is_empty() {
            return Ok(None);
        }
        let sum: u32 = ratings.iter().map(|r| r.overall_rating as u32).sum();
        Ok(Some(sum as f64 / ratings.len() as f64))
    }
}

/// Every score must be within 1 to 5.
pub fn validate_rating(rating: &ManualRating) -> Result<(), HarnessError> {
    let fields = [
        ("overall_rating", rating.overall_rating),
        ("body_shape_fit", rating.body_shape_fit),
        ("style_alignment", rating.style_alignment),
        ("occasion_fit", rating.occasion_fit),
        ("mood_alignment", rating.mood_alignment),
        ("color_harmony", rating.color_harmony),
        ("practicality", rating.practicality),
    ];
    match fields.iter().find(|(_, v)| !(1..=5).contains(v)) {
        Some((field, value)) => Err(HarnessError::InvalidRating {
            field: field.to_string(),
            value: *value,
        }),
        None => Ok(()),
    }
}

fn average(records: &[HarnessRecord], metric: impl Fn(&HarnessRecord) -> u32) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| metric(r) as f64).sum::<f64>() / records.len() as f64
}

/// Success rate is a percentage.
pub fn compute_stats(records: &[HarnessRecord]) -> HarnessStats {
    let total = records.len();
    let successful = records.iter().filter(|r| r.success).count();
    HarnessStats {
        total_tests: total,
        successful_tests: successful,
        success_rate: if total == 0 {
            0.0
        } else {
            successful as f64 / total as f64 * 100.0
        },
        average_body_shape_accuracy: average(records, |r| r.metrics.body_shape_accuracy),
        average_style_alignment: average(records, |r| r.metrics.style_alignment),
        average_occasion_match: average(records, |r| r.metrics.occasion_match),
        average_mood_alignment: average(records, |r| r.metrics.mood_alignment),
        average_color_harmony: average(records, |r| r.metrics.color_harmony),
        average_completeness: average(records, |r| r.metrics.completeness_score),
        average_budget_compliance: average(records, |r| r.metrics.budget_compliance),
        average_overall_quality: average(records, |r| r.metrics.overall_quality),
        run_timestamp: records.iter().map(|r| r.run_timestamp).max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_are_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_tests, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert!(stats.run_timestamp.is_none());
    }
}
