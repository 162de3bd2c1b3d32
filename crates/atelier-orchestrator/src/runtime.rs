//! AtelierRuntime: owns the store, the cache and every engine.

use std::path::PathBuf;
use std::sync::Arc;

use atelier_catalog::{HttpCatalogSearch, HttpImageResolver, NoImageResolver};
use atelier_core::errors::AtelierResult;
use atelier_core::models::{GenerationContext, LearningInsights, StageResult, UserFeedback};
use atelier_core::traits::{ICatalogSearch, IImageResolver, ILocalCache, IRecordStore};
use atelier_core::AtelierConfig;
use atelier_harness::{HarnessRunner, IOutfitGenerator, LiveStylingGenerator, ScenarioGenerator};
use atelier_learning::{FeedbackLearningEngine, RuleFilter};
use atelier_stages::{PersonalizationStage, RecommendationStage, StylingStage, ValidationStage};
use atelier_storage::{MokaLocalCache, SqliteRecordStore};
use atelier_supervisor::SupervisorEngine;

use crate::orchestrator::{Orchestrator, PipelineStages};
use crate::payload::GenerationPayload;
use crate::state::PipelineState;

#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// Overrides `storage.db_path` from the config.
    pub db_path: Option<PathBuf>,
    /// TOML configuration. Defaults when `None`.
    pub config_toml: Option<String>,
}

pub struct AtelierRuntime {
    config: AtelierConfig,
    store: Arc<dyn IRecordStore>,
    cache: Arc<dyn ILocalCache>,
    styling: Arc<StylingStage>,
    learning: Arc<FeedbackLearningEngine>,
    orchestrator: Orchestrator,
}

impl AtelierRuntime {
    /// SQLite store, moka cache and HTTP catalog clients, all from config.
    pub fn new(opts: RuntimeOptions) -> AtelierResult<Self> {
        let mut config = match &opts.config_toml {
            Some(source) => AtelierConfig::from_toml(source)?,
            None => AtelierConfig::default(),
        };
        if opts.db_path.is_some() {
            config.storage.db_path = opts.db_path;
        }
        let store = Arc::new(SqliteRecordStore::from_config(&config.storage)?);
        let cache = Arc::new(MokaLocalCache::with_config(&config.storage));
        let search = Arc::new(HttpCatalogSearch::new(&config.catalog)?);
        let resolver: Arc<dyn IImageResolver> = match HttpImageResolver::from_config(&config.catalog)? {
            Some(resolver) => Arc::new(resolver),
            None => Arc::new(NoImageResolver),
        };
        Self::with_collaborators(config, store, cache, search, resolver)
    }

    /// Wire the engines around caller-supplied collaborators.
    pub fn with_collaborators(
        config: AtelierConfig,
        store: Arc<dyn IRecordStore>,
        cache: Arc<dyn ILocalCache>,
        search: Arc<dyn ICatalogSearch>,
        resolver: Arc<dyn IImageResolver>,
    ) -> AtelierResult<Self> {
        config.validate()?;

        let personalization = PersonalizationStage::new(
            store.clone(),
            cache.clone(),
            search,
            config.catalog.clone(),
            config.rules.classifier.clone(),
        );
        let styling = Arc::new(StylingStage::new(store.clone(), resolver, &config)?);
        let validation = ValidationStage::new(config.rules.classifier.clone());
        let recommendation = RecommendationStage::new(cache.clone(), config.rules.recommendation.clone());
        let learning = Arc::new(FeedbackLearningEngine::new(
            store.clone(),
            cache.clone(),
            config.learning.clone(),
        ));

        let orchestrator = Orchestrator::new(
            PipelineStages {
                personalization: Arc::new(personalization),
                styling: styling.clone(),
                validation: Arc::new(validation),
                recommendation: Arc::new(recommendation),
            },
            SupervisorEngine::from_config(&config),
            RuleFilter::new(config.rules.classifier.clone()),
            learning.clone(),
            cache.clone(),
            config.styling.looks_per_request,
        );

        tracing::info!(
            persistent = config.storage.db_path.is_some(),
            looks_per_request = config.styling.looks_per_request,
            "atelier runtime ready"
        );
        Ok(Self {
            config,
            store,
            cache,
            styling,
            learning,
            orchestrator,
        })
    }

    pub fn config(&self) -> &AtelierConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn IRecordStore> {
        &self.store
    }

    pub fn cache(&self) -> &Arc<dyn ILocalCache> {
        &self.cache
    }

    pub fn learning(&self) -> &FeedbackLearningEngine {
        &self.learning
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub async fn generate(
        &self,
        ctx: &GenerationContext,
        state: &mut PipelineState,
    ) -> StageResult<GenerationPayload> {
        self.orchestrator.generate(ctx, state).await
    }

    /// Persist feedback, then rerun the learning loop for that user.
    pub async fn submit_feedback(&self, feedback: &UserFeedback) -> AtelierResult<LearningInsights> {
        self.store.insert_feedback(feedback).await?;
        self.learning.process_feedback(&feedback.user_id).await
    }

    /// A harness runner over the default matrix. `live` scores styling-stage
    /// outfits instead of the scenario stand-ins.
    pub fn harness(&self, live: bool) -> HarnessRunner {
        let generator: Arc<dyn IOutfitGenerator> = if live {
            Arc::new(LiveStylingGenerator::new(self.styling.clone()))
        } else {
            Arc::new(ScenarioGenerator::new(self.config.rules.harness.clone()))
        };
        HarnessRunner::from_config(self.store.clone(), generator, &self.config)
    }
}
