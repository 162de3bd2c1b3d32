//! Property tests for dedup and the quality score.

use std::collections::HashSet;

use proptest::prelude::*;

use atelier_core::constants::PLACEHOLDER_IMAGE;
use atelier_core::models::{CatalogItem, Look};
use atelier_supervisor::{quality_score, remove_duplicate_items};

fn look_from(ids: &[u8]) -> Look {
    Look::new(
        ids.iter()
            .map(|i| CatalogItem::new(format!("i{i}"), format!("item {i}")))
            .collect(),
        "classic",
        "work",
        "",
    )
}

fn arb_looks() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..12, 1..4), 0..6)
}

proptest! {
    #[test]
    fn dedup_output_is_disjoint_and_accounted(raw in arb_looks()) {
        let looks: Vec<Look> = raw.iter().map(|ids| look_from(ids)).collect();
        let total: usize = looks.iter().map(|l| l.items.len()).sum();
        let out = remove_duplicate_items(looks);

        let mut seen = HashSet::new();
        for look in &out.looks {
            prop_assert!(look.items.len() >= 2);
            for item in &look.items {
                prop_assert!(seen.insert(item.id.clone()), "duplicate {}", item.id);
            }
        }
        let kept: usize = out.looks.iter().map(|l| l.items.len()).sum();
        prop_assert_eq!(kept + out.removed, total);
    }

    #[test]
    fn dedup_is_idempotent(raw in arb_looks()) {
        let looks: Vec<Look> = raw.iter().map(|ids| look_from(ids)).collect();
        let once = remove_duplicate_items(looks);
        let twice = remove_duplicate_items(once.looks.clone());
        prop_assert_eq!(twice.removed, 0);
        prop_assert_eq!(twice.looks, once.looks);
    }

    #[test]
    fn quality_score_stays_within_bounds(
        n in 0usize..4,
        priced in any::<bool>(),
        imaged in any::<bool>(),
    ) {
        let items = (0..n)
            .map(|i| {
                let mut item = CatalogItem::new(format!("i{i}"), "piece");
                if priced { item.price = Some(10.0); }
                if imaged { item.display_image = Some("https://cdn/x/6_1_1.jpg".into()); }
                item
            })
            .collect();
        let score = quality_score(&Look::new(items, "classic", "work", ""), PLACEHOLDER_IMAGE);
        prop_assert!(score >= 40);
        prop_assert!(score <= 100);
        if n < 2 {
            prop_assert!(score <= 70);
        }
    }
}
