//! Property tests for pool filtering and picking.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use atelier_core::models::CatalogItem;
use atelier_stages::styling::pools::{pick, without_excluded};

fn pool(n: usize) -> Vec<CatalogItem> {
    (0..n)
        .map(|i| CatalogItem::new(format!("id-{i}"), format!("item {i}")))
        .collect()
}

proptest! {
    #[test]
    fn exclusion_never_empties_a_pool(n in 1usize..20, excluded in prop::collection::hash_set(0usize..25, 0..25)) {
        let excluded: HashSet<String> = excluded.into_iter().map(|i| format!("id-{i}")).collect();
        let kept = without_excluded(pool(n), |id| excluded.contains(id));
        prop_assert!(!kept.is_empty());
        let all_excluded = (0..n).all(|i| excluded.contains(&format!("id-{i}")));
        if !all_excluded {
            prop_assert!(kept.iter().all(|item| !excluded.contains(&item.id)));
        } else {
            prop_assert_eq!(kept.len(), n);
        }
    }

    #[test]
    fn preferred_items_win_when_present(n in 2usize..20, favored in 0usize..20, seed in any::<u64>()) {
        let items = pool(n);
        let id = format!("id-{favored}");
        let preferred: HashSet<&str> = [id.as_str()].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let chosen = pick(&items, &preferred, &mut rng).unwrap();
        if favored < n {
            prop_assert_eq!(&chosen.id, &id);
        } else {
            prop_assert!(chosen.id.starts_with("id-"));
        }
    }
}
