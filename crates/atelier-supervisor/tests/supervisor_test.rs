//! End-to-end supervisor review over fixture looks.

use atelier_core::constants::cache_keys;
use atelier_core::models::{BodyShape, StyleAnalysis, SupervisorInput};
use atelier_core::traits::{ILocalCache, LocalCacheExt};
use atelier_core::AtelierConfig;
use atelier_storage::MokaLocalCache;
use atelier_supervisor::{SupervisorContext, SupervisorEngine};
use test_fixtures::{item, look};

fn engine() -> SupervisorEngine {
    SupervisorEngine::from_config(&AtelierConfig::default())
}

fn input(looks: Vec<atelier_core::Look>) -> SupervisorInput {
    SupervisorInput {
        looks,
        ..Default::default()
    }
}

// ─── dedup ───

#[test]
fn overlapping_looks_are_deduplicated() {
    let review = engine().review_and_train(
        input(vec![look(&["a", "b"]), look(&["b", "c"])]),
        &SupervisorContext::default(),
    );
    assert_eq!(review.approved_looks.len(), 1);
    let ids: Vec<&str> = review.approved_looks[0].item_ids().collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(review.duplicates_removed, 2);
    assert!(review.feedback[0].contains("Removed 2 duplicate items"));
}

#[test]
fn every_approved_look_has_two_items_and_a_score() {
    let review = engine().review_and_train(
        input(vec![
            look(&["a", "b", "c"]),
            look(&["c", "d"]),
            look(&["e", "f", "g"]),
        ]),
        &SupervisorContext::default(),
    );
    assert_eq!(review.approved_looks.len(), 2);
    for (i, approved) in review.approved_looks.iter().enumerate() {
        assert!(approved.items.len() >= 2);
        assert_eq!(approved.supervisor_approved, Some(true));
        assert!(approved.quality_score.is_some());
        assert!(approved.description.starts_with(&format!("Look #{}:", i + 1)));
    }
    assert_eq!(review.approved_looks[0].quality_score, Some(100));
}

// ─── reviews ───

#[test]
fn reviews_are_advisory() {
    let look = atelier_core::Look::new(
        vec![
            item("t", "Red tee").color("red").price(10.0).product_image().build(),
            item("b", "Green jeans").color("green").price(10.0).product_image().build(),
            item("s", "White sneakers").color("white").price(10.0).product_image().build(),
        ],
        "casual",
        "casual",
        "",
    );
    let before: Vec<String> = look.item_ids().map(String::from).collect();
    let review = engine().review_and_train(
        input(vec![look]),
        &SupervisorContext::new("work", "elegant"),
    );
    let after: Vec<&str> = review.approved_looks[0].item_ids().collect();
    assert_eq!(before, after);
    // occasion, clash and informal shoes each warn
    assert!(review.improvements.len() >= 3);
    assert!(review.feedback.iter().any(|f| f.contains("clashing")));
    assert!(review.feedback.iter().any(|f| f.contains("too informal")));
}

#[test]
fn context_comes_from_cache() {
    let cache = MokaLocalCache::default();
    cache.set(cache_keys::CURRENT_EVENT, "\"evening\"".to_string());
    cache.set(cache_keys::CURRENT_MOOD, "romantic".to_string());
    cache.set_json(
        cache_keys::STYLE_ANALYSIS,
        &StyleAnalysis {
            body_shape: Some("hourglass".to_string()),
            ..Default::default()
        },
    );
    let ctx = SupervisorContext::from_cache(&cache);
    assert_eq!(ctx.event, "evening");
    assert_eq!(ctx.mood, "romantic");
    assert_eq!(ctx.body_shape, Some(BodyShape::X));

    let review = engine().review_with_cache(input(vec![look(&["a", "b", "c"])]), &cache);
    let description = &review.approved_looks[0].description;
    assert!(description.contains("Suited to elegant evening events"));
    assert!(description.contains("creates a romantic, enchanting look"));
    assert!(review.feedback.iter().any(|f| f.contains("body shape X")));
}

#[test]
fn empty_cache_uses_defaults_and_skips_body_shape() {
    let cache = MokaLocalCache::default();
    let ctx = SupervisorContext::from_cache(&cache);
    assert_eq!(ctx, SupervisorContext::default());
    let review = engine().review_and_train(input(vec![look(&["a", "b"])]), &ctx);
    assert!(review.feedback.iter().all(|f| !f.contains("body shape")));
}

#[test]
fn no_looks_no_feedback() {
    let review = engine().review_and_train(SupervisorInput::default(), &SupervisorContext::default());
    assert!(review.approved_looks.is_empty());
    assert!(review.feedback.is_empty());
    assert_eq!(review.duplicates_removed, 0);
}

#[test]
fn review_serializes_camel_case() {
    let review = engine().review_and_train(input(vec![look(&["a", "b"])]), &SupervisorContext::default());
    let json = serde_json::to_value(&review).unwrap();
    assert!(json.get("approvedLooks").is_some());
    assert_eq!(json["duplicatesRemoved"], 0);
    assert_eq!(json["approvedLooks"][0]["supervisorApproved"], true);
}
