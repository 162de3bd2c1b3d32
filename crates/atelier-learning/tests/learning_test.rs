//! Feedback learning loop against an in-memory store and a moka cache.

use std::sync::Arc;

use chrono::{Duration, Utc};

use atelier_core::config::LearningConfig;
use atelier_core::constants::cache_keys;
use atelier_core::models::{
    ContextData, LearningData, OutfitLog, SuccessfulCombination, UserFeedback, UserPreferences,
};
use atelier_core::traits::{ILocalCache, IRecordStore, LocalCacheExt};
use atelier_learning::{AgentLearningConfig, FeedbackLearningEngine};
use atelier_storage::{MokaLocalCache, SqliteRecordStore};
use test_fixtures::look;

const USER: &str = "user-1";

fn setup() -> (Arc<SqliteRecordStore>, Arc<MokaLocalCache>, FeedbackLearningEngine) {
    let store = Arc::new(SqliteRecordStore::open_in_memory().unwrap());
    let cache = Arc::new(MokaLocalCache::default());
    let engine = FeedbackLearningEngine::new(
        store.clone() as Arc<dyn IRecordStore>,
        cache.clone() as Arc<dyn ILocalCache>,
        LearningConfig::default(),
    );
    (store, cache, engine)
}

fn feedback(ids: &[&str], liked: bool, colors: &[&str], minutes_ago: i64) -> UserFeedback {
    UserFeedback {
        user_id: USER.to_string(),
        look_id: format!("look-{}", ids.join("-")),
        item_ids: ids.iter().map(|s| s.to_string()).collect(),
        liked,
        colors: colors.iter().map(|s| s.to_string()).collect(),
        created_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

fn learning_data(occasions: &[&str], style: &str, minutes_ago: i64) -> LearningData {
    LearningData {
        user_id: USER.to_string(),
        successful_combinations: occasions
            .iter()
            .enumerate()
            .map(|(i, occasion)| SuccessfulCombination {
                look_id: format!("look-{i}"),
                item_ids: vec!["top-001".into(), "bottom-001".into()],
                occasion: occasion.to_string(),
            })
            .collect(),
        user_preferences: UserPreferences {
            style_profile: Some(style.to_string()),
            ..Default::default()
        },
        context_data: ContextData {
            generation_method: "pipeline".into(),
            user_engagement: 0.5,
            session_data: serde_json::Value::Null,
        },
        created_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

async fn seed_history(store: &SqliteRecordStore) {
    store
        .insert_feedback(&feedback(&["top-001", "bottom-001", "shoes-002"], true, &["Navy", "white"], 5))
        .await
        .unwrap();
    store
        .insert_feedback(&feedback(&["top-003", "bottom-002", "shoes-003"], true, &["navy", "beige"], 4))
        .await
        .unwrap();
    store
        .insert_feedback(&feedback(&["top-002", "bottom-004", "shoes-001"], false, &["red"], 3))
        .await
        .unwrap();
    store
        .insert_outfit_log(&OutfitLog {
            user_id: USER.into(),
            top_id: Some("top-004".into()),
            bottom_id: Some("bottom-003".into()),
            shoes_id: None,
            user_liked: Some(false),
            colors: vec![],
            created_at: Utc::now(),
        })
        .await
        .unwrap();
}

// ─── Analysis ───

#[tokio::test]
async fn analysis_reads_feedback_and_logs() {
    let (store, _, engine) = setup();
    seed_history(&store).await;

    let pattern = engine.analyze_feedback_patterns(USER).await.unwrap();
    assert_eq!(pattern.preferred_colors[0], "navy");
    assert!(pattern.preferred_colors.contains(&"white".to_string()));
    assert!(!pattern.preferred_colors.contains(&"red".to_string()));
    for id in ["top-002", "bottom-004", "shoes-001", "top-004", "bottom-003"] {
        assert!(pattern.disliked_items.contains(&id.to_string()), "{id} missing");
    }
    assert_eq!(pattern.liked_combinations.len(), 2);
}

#[tokio::test]
async fn analysis_of_unknown_user_is_empty() {
    let (_, _, engine) = setup();
    let pattern = engine.analyze_feedback_patterns("nobody").await.unwrap();
    assert!(pattern.preferred_colors.is_empty());
    assert!(pattern.disliked_items.is_empty());
    assert!(pattern.occasion_preferences.is_empty());
}

// ─── Apply ───

#[tokio::test]
async fn process_feedback_persists_and_mirrors() {
    let (store, cache, engine) = setup();
    seed_history(&store).await;

    let insights = engine.process_feedback(USER).await.unwrap();
    assert_eq!(insights.color_affinity_score["navy"], 1.0);

    let stored = store.latest_insights(USER).await.unwrap().unwrap();
    assert_eq!(stored.personalized_weights, insights.personalized_weights);

    let rules = store.latest_rule_set(USER).await.unwrap().unwrap();
    assert!(rules.disliked_items.contains(&"top-002".to_string()));
    // Only colors above the affinity threshold become preferred.
    assert!(rules.preferred_colors.contains(&"navy".to_string()));
    assert!(rules.preferred_colors.iter().all(|c| insights.color_affinity_score[c] > 0.7));

    assert!(cache.get(&cache_keys::personalized_weights(USER)).is_some());
    assert!(cache.get(&cache_keys::color_affinity(USER)).is_some());
    assert!(cache.get(&cache_keys::item_compatibility(USER)).is_some());
    let mirrored: AgentLearningConfig = cache
        .get_json(&cache_keys::learning_config(USER))
        .unwrap();
    assert!(mirrored.learning_applied);
    assert_eq!(mirrored.active_rules.disliked_items, rules.disliked_items);
}

#[tokio::test]
async fn active_rules_fall_back_to_store() {
    let (store, cache, engine) = setup();
    assert!(engine.active_rules(USER).await.unwrap().is_none());

    seed_history(&store).await;
    engine.process_feedback(USER).await.unwrap();
    cache.invalidate_all();

    let rules = engine.active_rules(USER).await.unwrap().unwrap();
    assert!(rules.disliked_items.contains(&"shoes-001".to_string()));
}

#[tokio::test]
async fn avoided_families_survive_relearning() {
    let (store, _, engine) = setup();
    seed_history(&store).await;

    let rules = engine
        .avoid_families(USER, &["Sandalia".to_string(), " ".to_string()])
        .await
        .unwrap();
    assert_eq!(rules.must_avoid_families, vec!["sandalia"]);

    engine.process_feedback(USER).await.unwrap();
    let active = engine.active_rules(USER).await.unwrap().unwrap();
    assert_eq!(active.must_avoid_families, vec!["sandalia"]);
    assert!(!active.disliked_items.is_empty());
}

#[tokio::test]
async fn avoid_families_drops_stale_mirror() {
    let (store, _, engine) = setup();
    seed_history(&store).await;
    engine.process_feedback(USER).await.unwrap();

    engine.avoid_families(USER, &["bota".to_string()]).await.unwrap();
    let active = engine.active_rules(USER).await.unwrap().unwrap();
    assert_eq!(active.must_avoid_families, vec!["bota"]);
}

// ─── Learning data ───

#[tokio::test]
async fn record_learning_data_logs_liked_looks() {
    let (store, _, engine) = setup();
    let liked = vec![look(&["top-001", "bottom-001", "shoes-002"])];

    let data = engine
        .record_learning_data(USER, &liked, UserPreferences::default(), "pipeline")
        .await
        .unwrap();
    assert_eq!(data.successful_combinations.len(), 1);
    assert_eq!(data.successful_combinations[0].occasion, "work");
    assert_eq!(
        data.successful_combinations[0].item_ids,
        vec!["top-001", "bottom-001", "shoes-002"]
    );

    let stored = store.recent_learning_data(USER, 10).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn most_liked_occasions_ranks_by_count() {
    let (store, _, engine) = setup();
    store
        .insert_learning_data(&learning_data(&["work", "evening", "work"], "classic", 10))
        .await
        .unwrap();
    store
        .insert_learning_data(&learning_data(&["casual", "work", "weekend", "evening"], "classic", 5))
        .await
        .unwrap();

    let top = engine.most_liked_occasions(USER).await.unwrap();
    assert_eq!(top, vec!["work", "evening", "casual"]);
}

#[tokio::test]
async fn summary_reports_latest_preferences() {
    let (store, _, engine) = setup();
    let empty = engine.learning_summary(USER).await.unwrap();
    assert!(!empty.has_learning_data);
    assert!(empty.recent_preferences.is_none());

    store
        .insert_learning_data(&learning_data(&["work"], "classic", 10))
        .await
        .unwrap();
    store
        .insert_learning_data(&learning_data(&["evening"], "romantic", 1))
        .await
        .unwrap();
    seed_history(&store).await;

    let summary = engine.learning_summary(USER).await.unwrap();
    assert!(summary.has_learning_data);
    assert_eq!(summary.total_feedback, 3);
    assert_eq!(
        summary.recent_preferences.unwrap().style_profile.as_deref(),
        Some("romantic")
    );
}
