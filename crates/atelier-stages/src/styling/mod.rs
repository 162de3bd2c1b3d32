//! Styling: assemble one complete top/bottom/shoes outfit from the catalog.

pub mod images;
pub mod pools;
pub mod sleeve;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::Instrument;

use atelier_catalog::{classify, ProductImageMatcher};
use atelier_core::config::StylingConfig;
use atelier_core::errors::{AtelierResult, StageError};
use atelier_core::models::{
    CatalogItem, DegradationEvent, GenerationContext, Outfit, StageResult, UsedItems,
};
use atelier_core::rules::{ClassifierRules, StylingRules};
use atelier_core::traits::{IImageResolver, IRecordStore, IStylingStage};
use atelier_core::AtelierConfig;
use atelier_observability::tracing_setup::{events, spans};

use self::images::{resolve_display_image, ImageSource};
use self::pools::{pick, without_excluded, Pools};
use self::sleeve::{classify_sleeve, shoe_matches};

const OCCASIONS: [&str; 2] = ["work", "casual"];

pub struct StylingStage {
    store: Arc<dyn IRecordStore>,
    resolver: Arc<dyn IImageResolver>,
    config: StylingConfig,
    classifier: ClassifierRules,
    rules: StylingRules,
    matcher: ProductImageMatcher,
}

impl StylingStage {
    pub fn new(
        store: Arc<dyn IRecordStore>,
        resolver: Arc<dyn IImageResolver>,
        config: &AtelierConfig,
    ) -> AtelierResult<Self> {
        Ok(Self {
            store,
            resolver,
            matcher: ProductImageMatcher::new(&config.styling.product_image_pattern)?,
            config: config.styling.clone(),
            classifier: config.rules.classifier.clone(),
            rules: config.rules.styling.clone(),
        })
    }

    /// Clothing with a product-only first image, tagged with its category.
    pub fn valid_items(&self, sample: Vec<CatalogItem>) -> Vec<CatalogItem> {
        sample
            .into_iter()
            .filter_map(|item| {
                let category = classify(&item, &self.classifier)?;
                if !self.matcher.has_product_image(&item) {
                    tracing::debug!(item_id = %item.id, "discarded: no product-only image");
                    return None;
                }
                Some(item.with_category(category))
            })
            .collect()
    }

    fn rng(ctx: &GenerationContext, used: &UsedItems) -> StdRng {
        match ctx.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(used.len() as u64)),
            None => StdRng::from_entropy(),
        }
    }

    async fn assemble(&self, ctx: &GenerationContext, used: &UsedItems) -> AtelierResult<Outfit> {
        let count = self.store.catalog_count().await?;
        if count == 0 {
            return Err(StageError::EmptyCatalog.into());
        }
        let sample = self
            .store
            .sample_catalog(self.config.effective_sample_size())
            .await?;
        let valid = self.valid_items(sample);
        if valid.is_empty() {
            return Err(StageError::NoValidItems.into());
        }

        let mut degradations = Vec::new();
        let pools = Pools::partition(&valid, &self.classifier);
        for category in &pools.seeded {
            degradations.push(DegradationEvent::now(
                "styling.pools",
                format!("no {category} items in sample"),
                "arbitrary slice of valid items",
            ));
        }
        if let Some(category) = pools.empty_slot() {
            return Err(StageError::EmptyCategory {
                category: category.to_string(),
            }
            .into());
        }

        let excluded: HashSet<&str> = ctx.exclude_items.iter().map(String::as_str).collect();
        let preferred: HashSet<&str> = ctx.preferred_items.iter().map(String::as_str).collect();
        let skipped = |id: &str| excluded.contains(id) || used.contains(id);

        let mut rng = Self::rng(ctx, used);
        let tops = without_excluded(pools.tops, skipped);
        let bottoms = without_excluded(pools.bottoms, skipped);

        let top = pick(&tops, &preferred, &mut rng)
            .cloned()
            .ok_or_else(|| StageError::EmptyCategory {
                category: "top".to_string(),
            })?;
        let (sleeve, cue) = classify_sleeve(&top, &self.rules);
        let openness = sleeve.shoe_openness();

        // Openness first, then exclusions, so a matching shoe is never lost
        // to the used-id filter.
        let mut shoes: Vec<CatalogItem> = pools
            .shoes
            .iter()
            .filter(|shoe| shoe_matches(shoe, openness, &self.rules))
            .cloned()
            .collect();
        if shoes.is_empty() {
            degradations.push(DegradationEvent::now(
                "styling.shoes",
                format!("no {openness} shoes for a {sleeve}-sleeve top"),
                "entire shoe pool",
            ));
            shoes = pools.shoes;
        }
        let shoes = without_excluded(shoes, skipped);

        let bottom = pick(&bottoms, &preferred, &mut rng).cloned();
        let shoe = pick(&shoes, &preferred, &mut rng).cloned();
        let (Some(mut bottom), Some(mut shoe)) = (bottom, shoe) else {
            return Err(StageError::EmptyCategory {
                category: "bottom or shoes".to_string(),
            }
            .into());
        };
        let mut top = top;
        tracing::debug!(
            top = %top.id,
            sleeve = %sleeve,
            cue = ?cue,
            openness = %openness,
            "sleeve and shoe openness"
        );

        let placeholder = self.config.placeholder_image.as_str();
        let resolver = self.resolver.as_ref();
        let (top_src, bottom_src, shoe_src) = tokio::join!(
            resolve_display_image(&mut top, resolver, &self.matcher, placeholder),
            resolve_display_image(&mut bottom, resolver, &self.matcher, placeholder),
            resolve_display_image(&mut shoe, resolver, &self.matcher, placeholder),
        );
        let sources = [top_src, bottom_src, shoe_src];
        let unresolved = sources.iter().filter(|s| **s != ImageSource::Resolver).count();
        if unresolved > 0 {
            let fallback = if sources.contains(&ImageSource::Placeholder) {
                "placeholder image"
            } else {
                "product image pattern"
            };
            degradations.push(DegradationEvent::now(
                "styling.images",
                format!("no best image for {unresolved} items"),
                fallback,
            ));
        }

        let score = rng.gen_range(self.config.score_min..self.config.score_max);
        let occasion = OCCASIONS.choose(&mut rng).copied().unwrap_or("casual");
        let description = format!(
            "{} with {} and {}",
            top.display_name, bottom.display_name, shoe.display_name
        );
        let mut recommendations = vec![
            "Using actual items from catalog".to_string(),
            "Images selected to avoid model photos".to_string(),
            format!("{sleeve}-sleeve top paired with {openness} shoes"),
            format!("Chosen from {} valid catalog items", valid.len()),
        ];
        recommendations.truncate(self.config.max_recommendations);

        Ok(Outfit {
            top,
            bottom,
            shoes: shoe,
            score,
            description,
            recommendations,
            occasion: occasion.to_string(),
            degradations,
        })
    }
}

#[async_trait]
impl IStylingStage for StylingStage {
    async fn run(&self, ctx: &GenerationContext, used: &UsedItems) -> StageResult<Outfit> {
        let span = atelier_observability::stage_span!(spans::stages::STYLING, ctx.user_id);
        let result: AtelierResult<Outfit> = self
            .assemble(ctx, used)
            .instrument(span)
            .await
            .map_err(|e| {
                StageError::StylingFailed {
                    reason: e.to_string(),
                }
                .into()
            });
        events::stage_completed(spans::stages::STYLING, &ctx.user_id, result.is_ok());
        let recommendations = result
            .as_ref()
            .map(|outfit: &Outfit| outfit.recommendations.clone())
            .unwrap_or_default();
        StageResult::from_result(result).with_recommendations(recommendations)
    }
}
