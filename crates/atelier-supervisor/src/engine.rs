//! SupervisorEngine: runs dedup, every review, the description rewrite and
//! the quality score over the upstream looks.

use atelier_core::models::{SupervisorInput, SupervisorReview};
use atelier_core::rules::{ClassifierRules, SupervisorRules};
use atelier_core::traits::ILocalCache;
use atelier_core::AtelierConfig;
use atelier_observability::tracing_setup::events;

use crate::dedup::remove_duplicate_items;
use crate::presentation::{describe, quality_score};
use crate::reviews::{body_shape, color, occasion, shoes, ReviewNotes};
use crate::SupervisorContext;

pub struct SupervisorEngine {
    rules: SupervisorRules,
    classifier: ClassifierRules,
    placeholder: String,
}

impl SupervisorEngine {
    pub fn new(rules: SupervisorRules, classifier: ClassifierRules, placeholder: impl Into<String>) -> Self {
        Self {
            rules,
            classifier,
            placeholder: placeholder.into(),
        }
    }

    pub fn from_config(config: &AtelierConfig) -> Self {
        Self::new(
            config.rules.supervisor.clone(),
            config.rules.classifier.clone(),
            config.styling.placeholder_image.clone(),
        )
    }

    pub fn rules(&self) -> &SupervisorRules {
        &self.rules
    }

    /// Review with event, mood and shape read from the fast cache.
    pub fn review_with_cache(&self, input: SupervisorInput, cache: &dyn ILocalCache) -> SupervisorReview {
        self.review_and_train(input, &SupervisorContext::from_cache(cache))
    }

    pub fn review_and_train(&self, input: SupervisorInput, ctx: &SupervisorContext) -> SupervisorReview {
        let span = atelier_observability::supervisor_span!(input.looks.len());
        let _guard = span.enter();

        if let Some(report) = &input.validation {
            tracing::debug!(score = report.score, compatible = report.is_compatible, "upstream validation");
        }
        tracing::debug!(recommendations = input.recommendations.len(), "upstream recommendations");

        let mut notes = ReviewNotes::default();
        let dedup = remove_duplicate_items(input.looks);
        if dedup.removed > 0 {
            notes.warn(
                format!("Removed {} duplicate items", dedup.removed),
                "Vary the items across looks",
            );
        }
        let looks = dedup.looks;

        notes.append(occasion::review(&looks, ctx, &self.rules));
        notes.append(color::review(&looks, &self.rules));
        notes.append(body_shape::review(&looks, ctx.body_shape, &self.rules));
        notes.append(shoes::review(&looks, ctx, &self.rules, &self.classifier));

        let approved_looks: Vec<_> = looks
            .into_iter()
            .enumerate()
            .map(|(index, mut look)| {
                look.description = describe(&look, index, ctx, &self.rules);
                look.quality_score = Some(quality_score(&look, &self.placeholder));
                look.supervisor_approved = Some(true);
                look
            })
            .collect();

        events::review_completed(approved_looks.len(), dedup.removed);

        SupervisorReview {
            approved_looks,
            feedback: notes.feedback,
            improvements: notes.improvements,
            duplicates_removed: dedup.removed,
        }
    }
}
