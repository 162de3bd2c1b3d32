//! Cross-look item deduplication.

use std::collections::HashSet;

use atelier_core::constants::MIN_LOOK_ITEMS;
use atelier_core::models::Look;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupOutcome {
    pub looks: Vec<Look>,
    /// Dropped duplicate items plus the leftover items of dropped looks.
    pub removed: usize,
}

/// Walk looks in order; the first look to use an item id keeps it.
///
/// A look left with fewer than two items is dropped and its remaining items
/// count as removed. Ids seen in a dropped look still count as used.
pub fn remove_duplicate_items(looks: Vec<Look>) -> DedupOutcome {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(looks.len());
    let mut removed = 0;

    for mut look in looks {
        let before = look.items.len();
        look.items.retain(|item| seen.insert(item.id.clone()));
        removed += before - look.items.len();

        if look.items.len() >= MIN_LOOK_ITEMS {
            kept.push(look);
        } else {
            tracing::debug!(look_id = %look.id, left = look.items.len(), "look dropped after dedup");
            removed += look.items.len();
        }
    }

    DedupOutcome {
        looks: kept,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use atelier_core::models::CatalogItem;

    use super::*;

    fn look(ids: &[&str]) -> Look {
        Look::new(
            ids.iter().map(|id| CatalogItem::new(*id, *id)).collect(),
            "classic",
            "work",
            "",
        )
    }

    fn ids(look: &Look) -> Vec<&str> {
        look.item_ids().collect()
    }

    #[test]
    fn overlapping_second_look_is_dropped() {
        let out = remove_duplicate_items(vec![look(&["a", "b"]), look(&["b", "c"])]);
        assert_eq!(out.looks.len(), 1);
        assert_eq!(ids(&out.looks[0]), vec!["a", "b"]);
        assert_eq!(out.removed, 2);
    }

    #[test]
    fn partial_overlap_keeps_look_with_two_items() {
        let out = remove_duplicate_items(vec![look(&["a", "b", "c"]), look(&["c", "d", "e"])]);
        assert_eq!(out.looks.len(), 2);
        assert_eq!(ids(&out.looks[1]), vec!["d", "e"]);
        assert_eq!(out.removed, 1);
    }

    #[test]
    fn repeated_id_within_one_look_counts() {
        let out = remove_duplicate_items(vec![look(&["a", "a", "b"])]);
        assert_eq!(ids(&out.looks[0]), vec!["a", "b"]);
        assert_eq!(out.removed, 1);
    }

    #[test]
    fn single_item_look_is_dropped_without_duplicates() {
        let out = remove_duplicate_items(vec![look(&["solo"]), look(&["x", "y"])]);
        assert_eq!(out.looks.len(), 1);
        assert_eq!(out.removed, 1);
    }

    #[test]
    fn empty_input() {
        assert_eq!(remove_duplicate_items(vec![]), DedupOutcome::default());
    }
}
