//! Property tests for the rule-set look filter.

use proptest::prelude::*;

use atelier_core::models::{ActiveRuleSet, Category, Look};
use atelier_learning::RuleFilter;
use test_fixtures::item;

const FAMILIES: [&str; 6] = ["CAMISA", "PANTALON", "ZAPATO", "BLAZER", "ABRIGO", "FALDA"];

fn arb_look() -> impl Strategy<Value = Look> {
    prop::collection::vec((0usize..FAMILIES.len(), 0u8..12), 1..4).prop_map(|parts| {
        let items = parts
            .into_iter()
            .enumerate()
            .map(|(slot, (family, n))| {
                let category = match slot {
                    0 => Category::Top,
                    1 => Category::Bottom,
                    _ => Category::Shoes,
                };
                item(&format!("item-{n}"), "piece")
                    .family(FAMILIES[family])
                    .category(category)
                    .build()
            })
            .collect();
        Look::new(items, "classic", "work", "generated")
    })
}

fn arb_rules() -> impl Strategy<Value = ActiveRuleSet> {
    (
        prop::collection::vec(0u8..12, 0..4),
        prop::collection::vec(0usize..FAMILIES.len(), 0..2),
    )
        .prop_map(|(disliked, avoided)| {
            let mut rules = ActiveRuleSet::empty("user-1");
            rules.disliked_items = disliked.iter().map(|n| format!("item-{n}")).collect();
            rules.must_avoid_families = avoided.iter().map(|i| FAMILIES[*i].to_lowercase()).collect();
            rules
        })
}

proptest! {
    #[test]
    fn filtering_is_idempotent(looks in prop::collection::vec(arb_look(), 0..6), rules in arb_rules()) {
        let filter = RuleFilter::default();
        let once = filter.apply(looks, Some(&rules));
        let twice = filter.apply(once.looks.clone(), Some(&rules));
        prop_assert_eq!(&twice.looks, &once.looks);
        prop_assert!(twice.dropped.is_empty());
    }

    #[test]
    fn survivors_respect_the_rules(looks in prop::collection::vec(arb_look(), 0..6), rules in arb_rules()) {
        let filter = RuleFilter::default();
        let total = looks.len();
        let outcome = filter.apply(looks, Some(&rules));
        prop_assert_eq!(outcome.looks.len() + outcome.dropped.len(), total);
        for look in &outcome.looks {
            for item in &look.items {
                prop_assert!(!rules.disliked_items.contains(&item.id));
            }
            let top = look.items.iter().find(|i| i.category == Some(Category::Top));
            if let Some(top) = top {
                let family = top.family.as_deref();
                prop_assert!(family != Some("BLAZER") && family != Some("ABRIGO"));
            }
        }
    }
}
