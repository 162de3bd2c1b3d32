//! Personalization stage against the in-memory store and fake catalog search.

use std::sync::Arc;

use chrono::Utc;

use atelier_core::config::CatalogConfig;
use atelier_core::constants::cache_keys;
use atelier_core::models::{BodyShape, QuizResult, SeedSource, StyleAnalysis};
use atelier_core::rules::ClassifierRules;
use atelier_core::traits::{IPersonalizationStage, IRecordStore, LocalCacheExt};
use atelier_stages::PersonalizationStage;
use atelier_storage::{MokaLocalCache, SqliteRecordStore};
use test_fixtures::{sample_catalog, StaticCatalogSearch};

fn pick(ids: &[&str]) -> Vec<atelier_core::CatalogItem> {
    let catalog = sample_catalog();
    ids.iter()
        .map(|id| catalog.iter().find(|i| i.id == *id).cloned().unwrap())
        .collect()
}

async fn store_with_quiz(user_id: &str, style: &str) -> Arc<SqliteRecordStore> {
    let store = Arc::new(SqliteRecordStore::open_in_memory().unwrap());
    store
        .insert_quiz_result(&QuizResult {
            user_id: user_id.to_string(),
            analysis: StyleAnalysis {
                style_profile: Some(style.to_string()),
                body_shape: Some("pear".to_string()),
                color_preferences: vec!["navy".to_string()],
                mood: None,
            },
            created_at: Utc::now(),
        })
        .await
        .unwrap();
    store
}

fn stage(
    store: Arc<SqliteRecordStore>,
    cache: Arc<MokaLocalCache>,
    search: Arc<StaticCatalogSearch>,
) -> PersonalizationStage {
    PersonalizationStage::new(
        store,
        cache,
        search,
        CatalogConfig::default(),
        ClassifierRules::default(),
    )
}

// ─── profile resolution ───

#[tokio::test]
async fn missing_profile_fails_with_quiz_message() {
    let store = Arc::new(SqliteRecordStore::open_in_memory().unwrap());
    let search = Arc::new(StaticCatalogSearch::empty());
    let stage = stage(store, Arc::new(MokaLocalCache::default()), search.clone());

    let result = stage.run("nobody").await;
    assert!(!result.is_success());
    assert!(result.data().is_none());
    assert_eq!(result.error(), Some("User must complete the style quiz first"));
    assert_eq!(search.calls(), 0, "no search without a profile");
}

#[tokio::test]
async fn cached_analysis_is_used_without_quiz() {
    let store = Arc::new(SqliteRecordStore::open_in_memory().unwrap());
    let cache = Arc::new(MokaLocalCache::default());
    cache.set_json(
        cache_keys::STYLE_ANALYSIS,
        &StyleAnalysis {
            style_profile: Some("Romantic".to_string()),
            ..Default::default()
        },
    );
    let search = Arc::new(StaticCatalogSearch::returning(pick(&[
        "top-002", "bottom-003", "shoes-005",
    ])));
    let stage = stage(store, cache, search);

    let profile = stage.resolve_profile("u1").await.unwrap();
    assert_eq!(profile.style_profile, "romantic");
    assert_eq!(profile.body_shape, BodyShape::H);
    assert_eq!(profile.color_preferences.len(), 4);
}

#[tokio::test]
async fn quiz_result_wins_over_cache() {
    let store = store_with_quiz("u1", "edgy").await;
    let cache = Arc::new(MokaLocalCache::default());
    cache.set_json(
        cache_keys::STYLE_ANALYSIS,
        &StyleAnalysis {
            style_profile: Some("romantic".to_string()),
            ..Default::default()
        },
    );
    let stage = stage(store, cache, Arc::new(StaticCatalogSearch::empty()));
    let profile = stage.resolve_profile("u1").await.unwrap();
    assert_eq!(profile.style_profile, "edgy");
    assert_eq!(profile.body_shape, BodyShape::A);
}

// ─── candidate sources ───

#[tokio::test]
async fn live_search_builds_the_seed() {
    let store = store_with_quiz("u1", "classic").await;
    let search = Arc::new(StaticCatalogSearch::returning(pick(&[
        "top-001", "bottom-001", "shoes-002",
    ])));
    let stage = stage(store, Arc::new(MokaLocalCache::default()), search.clone());

    let seed = stage.run("u1").await.into_result().unwrap();
    assert_eq!(search.calls(), 1);
    assert_eq!(seed.source, SeedSource::ExternalCatalog);
    assert!(seed.reasoning.contains("external catalog"));
    assert!(seed.degradations.is_empty());
    assert_eq!(seed.looks.len(), 1);
    let ids: Vec<&str> = seed.looks[0].item_ids().collect();
    assert_eq!(ids, vec!["top-001", "bottom-001", "shoes-002"]);
    assert_eq!(seed.looks[0].occasion, "work");
}

#[tokio::test]
async fn failed_search_falls_back_to_local_store() {
    let store = store_with_quiz("u1", "classic").await;
    store.upsert_catalog_items(&sample_catalog()).await.unwrap();
    let search = Arc::new(StaticCatalogSearch::failing("connection refused"));
    let stage = stage(store, Arc::new(MokaLocalCache::default()), search);

    let seed = stage.run("u1").await.into_result().unwrap();
    assert_eq!(seed.source, SeedSource::LocalStore);
    assert!(seed.reasoning.contains("local store"));
    assert_eq!(seed.degradations.len(), 1);
    assert_eq!(seed.degradations[0].component, "catalog.search");
    assert!(seed.degradations[0].failure.contains("connection refused"));

    let look = &seed.looks[0];
    assert_eq!(look.items.len(), 3);
    assert!(look
        .items
        .iter()
        .all(|i| i.occasion.as_deref() == Some("work")));
}

#[tokio::test]
async fn results_that_fill_one_slot_fall_back() {
    let store = store_with_quiz("u1", "trendy").await;
    store.upsert_catalog_items(&sample_catalog()).await.unwrap();
    let search = Arc::new(StaticCatalogSearch::returning(pick(&["top-001", "top-003"])));
    let stage = stage(store, Arc::new(MokaLocalCache::default()), search);

    let seed = stage.run("u1").await.into_result().unwrap();
    assert_eq!(seed.source, SeedSource::LocalStore);
    assert!(seed.looks[0].items.len() >= 2);
}

#[tokio::test]
async fn empty_sources_fail_with_seed_message() {
    let store = store_with_quiz("u1", "classic").await;
    let stage = stage(
        store,
        Arc::new(MokaLocalCache::default()),
        Arc::new(StaticCatalogSearch::empty()),
    );
    let result = stage.run("u1").await;
    assert_eq!(result.error(), Some("Could not build a personalized outfit"));
}
