//! Personalization: resolve the user's style profile and a seed look.
//!
//! Profile resolution order: persisted quiz result, then the locally cached
//! analysis. Candidate items come from one live catalog search, falling back
//! to the local store's occasion bucket for the user's style.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;

use atelier_catalog::{slot_items, SlottedItems};
use atelier_core::config::CatalogConfig;
use atelier_core::constants::{cache_keys, DEFAULT_EVENT, MIN_LOOK_ITEMS};
use atelier_core::errors::{AtelierResult, StageError};
use atelier_core::models::{
    CatalogItem, DegradationEvent, Look, OutfitSeed, SeedSource, StageResult, StyleAnalysis,
    StyleProfile,
};
use atelier_core::rules::ClassifierRules;
use atelier_core::traits::{
    CatalogQuery, ICatalogSearch, ILocalCache, IPersonalizationStage, IRecordStore,
    LocalCacheExt,
};
use atelier_observability::tracing_setup::{events, spans};

/// Style → occasion bucket used for the local-store fallback.
const OCCASION_BUCKETS: &[(&str, &str)] = &[
    ("classic", "work"),
    ("minimalist", "work"),
    ("minimal", "work"),
    ("elegant", "evening"),
    ("romantic", "evening"),
    ("glamorous", "evening"),
    ("trendy", "weekend"),
    ("edgy", "weekend"),
    ("bohemian", "casual"),
    ("sporty", "casual"),
    ("casual", "casual"),
];

/// Occasion bucket for a style label. Unknown styles use the default event.
pub fn occasion_bucket(style: &str) -> &'static str {
    let style = style.trim().to_lowercase();
    OCCASION_BUCKETS
        .iter()
        .find(|(s, _)| *s == style)
        .map(|(_, occasion)| *occasion)
        .unwrap_or(DEFAULT_EVENT)
}

pub struct PersonalizationStage {
    store: Arc<dyn IRecordStore>,
    cache: Arc<dyn ILocalCache>,
    search: Arc<dyn ICatalogSearch>,
    catalog: CatalogConfig,
    classifier: ClassifierRules,
}

impl PersonalizationStage {
    pub fn new(
        store: Arc<dyn IRecordStore>,
        cache: Arc<dyn ILocalCache>,
        search: Arc<dyn ICatalogSearch>,
        catalog: CatalogConfig,
        classifier: ClassifierRules,
    ) -> Self {
        Self {
            store,
            cache,
            search,
            catalog,
            classifier,
        }
    }

    /// Quiz result first, then the cached analysis.
    pub async fn resolve_profile(&self, user_id: &str) -> AtelierResult<StyleProfile> {
        if let Some(quiz) = self.store.latest_quiz_result(user_id).await? {
            tracing::debug!(user_id, "profile resolved from quiz result");
            return Ok(StyleProfile::from_analysis(&quiz.analysis));
        }
        if let Some(analysis) = self
            .cache
            .get_json::<StyleAnalysis>(cache_keys::STYLE_ANALYSIS)
        {
            tracing::debug!(user_id, "profile resolved from cached analysis");
            return Ok(StyleProfile::from_analysis(&analysis));
        }
        Err(StageError::MissingProfile {
            user_id: user_id.to_string(),
        }
        .into())
    }

    async fn live_candidates(&self, profile: &StyleProfile) -> Result<Vec<CatalogItem>, String> {
        let query = CatalogQuery {
            query: profile.style_profile.clone(),
            gender: self.catalog.gender.clone(),
            category: self.catalog.category.clone(),
            limit: self.catalog.search_limit,
        };
        self.search.search(&query).await.map_err(|e| e.to_string())
    }

    fn usable(&self, items: &[CatalogItem]) -> Option<SlottedItems> {
        let slots = slot_items(items, &self.classifier);
        (slots.filled() >= MIN_LOOK_ITEMS).then_some(slots)
    }

    async fn build_seed(&self, user_id: &str) -> AtelierResult<OutfitSeed> {
        let profile = self.resolve_profile(user_id).await?;
        let mut degradations = Vec::new();

        let live = match self.live_candidates(&profile).await {
            Ok(items) if items.is_empty() => {
                degradations.push(DegradationEvent::now(
                    "catalog.search",
                    "live search returned no items",
                    "local store",
                ));
                None
            }
            Ok(items) => {
                let slots = self.usable(&items);
                if slots.is_none() {
                    degradations.push(DegradationEvent::now(
                        "catalog.search",
                        "live search results could not fill two slots",
                        "local store",
                    ));
                }
                slots
            }
            Err(reason) => {
                degradations.push(DegradationEvent::now("catalog.search", reason, "local store"));
                None
            }
        };

        let (slots, source) = match live {
            Some(slots) => (slots, SeedSource::ExternalCatalog),
            None => {
                let bucket = occasion_bucket(&profile.style_profile);
                let local = self
                    .store
                    .catalog_by_occasion(bucket, self.catalog.local_fallback_limit)
                    .await?;
                let slots = self.usable(&local).ok_or_else(|| StageError::EmptySeed {
                    user_id: user_id.to_string(),
                })?;
                (slots, SeedSource::LocalStore)
            }
        };

        let occasion = occasion_bucket(&profile.style_profile);
        let items = slots.into_items();
        let reasoning = match source {
            SeedSource::ExternalCatalog => format!(
                "Selected {} pieces from the external catalog for a {} style with body shape {}",
                items.len(),
                profile.style_profile,
                profile.body_shape
            ),
            SeedSource::LocalStore => format!(
                "Selected {} pieces from the local store ({occasion} bucket) for a {} style with body shape {}",
                items.len(),
                profile.style_profile,
                profile.body_shape
            ),
        };
        let description = format!(
            "A {} look built around your preferred colors: {}",
            profile.style_profile,
            profile.color_preferences.join(", ")
        );
        let look = Look::new(items, profile.style_profile.clone(), occasion, description);

        Ok(OutfitSeed {
            user_id: user_id.to_string(),
            profile,
            looks: vec![look],
            reasoning,
            source,
            degradations,
        })
    }
}

#[async_trait]
impl IPersonalizationStage for PersonalizationStage {
    async fn run(&self, user_id: &str) -> StageResult<OutfitSeed> {
        let span = atelier_observability::stage_span!(spans::stages::PERSONALIZATION, user_id);
        let result = self
            .build_seed(user_id)
            .instrument(span)
            .await
            .map_err(|e| match e {
                // Profile and seed absence keep their own messages.
                e @ atelier_core::AtelierError::Stage(
                    StageError::MissingProfile { .. } | StageError::EmptySeed { .. },
                ) => e,
                other => StageError::PersonalizationFailed {
                    reason: other.to_string(),
                }
                .into(),
            });
        events::stage_completed(spans::stages::PERSONALIZATION, user_id, result.is_ok());
        StageResult::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_map_known_styles() {
        assert_eq!(occasion_bucket("Classic"), "work");
        assert_eq!(occasion_bucket("romantic"), "evening");
        assert_eq!(occasion_bucket("sporty"), "casual");
        assert_eq!(occasion_bucket("unheard-of"), DEFAULT_EVENT);
    }
}
