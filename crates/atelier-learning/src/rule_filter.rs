//! Drops candidate looks the active rule set rules out.

use std::collections::HashSet;

use atelier_catalog::is_outerwear_family;
use atelier_core::models::{ActiveRuleSet, CatalogItem, Category, Look};
use atelier_core::rules::ClassifierRules;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub looks: Vec<Look>,
    /// `(look id, reason)` for every dropped look.
    pub dropped: Vec<(String, String)>,
}

/// A look is dropped when it holds a disliked id, an item whose family or
/// subfamily matches an avoided family, or an outerwear-family item in the
/// top slot. The last rule holds even without a rule set.
#[derive(Debug, Clone, Default)]
pub struct RuleFilter {
    classifier: ClassifierRules,
}

impl RuleFilter {
    pub fn new(classifier: ClassifierRules) -> Self {
        Self { classifier }
    }

    /// The item filling the top slot: the one classified as top, else the first.
    fn top_slot(look: &Look) -> Option<&CatalogItem> {
        look.items
            .iter()
            .find(|item| item.category == Some(Category::Top))
            .or_else(|| {
                look.items
                    .iter()
                    .all(|item| item.category.is_none())
                    .then(|| look.items.first())
                    .flatten()
            })
    }

    pub fn rejection(&self, look: &Look, rules: Option<&ActiveRuleSet>) -> Option<String> {
        if let Some(top) = Self::top_slot(look) {
            if is_outerwear_family(top, &self.classifier) {
                return Some(format!("outerwear item {} in top slot", top.id));
            }
        }
        let rules = rules?;
        let disliked: HashSet<&str> = rules.disliked_items.iter().map(String::as_str).collect();
        if let Some(id) = look.item_ids().find(|id| disliked.contains(id)) {
            return Some(format!("disliked item {id}"));
        }
        let avoided: Vec<String> = rules
            .must_avoid_families
            .iter()
            .map(|f| f.trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect();
        for item in &look.items {
            let families = item.family_text();
            if let Some(family) = avoided.iter().find(|f| families.contains(f.as_str())) {
                return Some(format!("item {} in avoided family {family}", item.id));
            }
        }
        None
    }

    /// Keep order; applying the same rules twice gives the same result.
    pub fn apply(&self, looks: Vec<Look>, rules: Option<&ActiveRuleSet>) -> FilterOutcome {
        let mut kept = Vec::with_capacity(looks.len());
        let mut dropped = Vec::new();
        for look in looks {
            match self.rejection(&look, rules) {
                Some(reason) => {
                    tracing::debug!(look_id = %look.id, %reason, "look dropped by rule set");
                    dropped.push((look.id.clone(), reason));
                }
                None => kept.push(look),
            }
        }
        FilterOutcome {
            looks: kept,
            dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, family: &str, category: Category) -> CatalogItem {
        let mut item = CatalogItem::new(id, id).with_category(category);
        item.family = Some(family.to_string());
        item
    }

    fn look(items: Vec<CatalogItem>) -> Look {
        Look::new(items, "classic", "work", "")
    }

    #[test]
    fn coat_in_top_slot_is_always_dropped() {
        let filter = RuleFilter::default();
        let bad = look(vec![
            item("c", "ABRIGO", Category::Top),
            item("b", "PANTALON", Category::Bottom),
        ]);
        let good = look(vec![
            item("t", "CAMISA", Category::Top),
            item("b2", "PANTALON", Category::Bottom),
        ]);
        let out = filter.apply(vec![bad, good.clone()], None);
        assert_eq!(out.looks, vec![good]);
        assert!(out.dropped[0].1.contains("top slot"));
    }

    #[test]
    fn disliked_and_avoided_families() {
        let filter = RuleFilter::default();
        let mut rules = ActiveRuleSet::empty("u");
        rules.disliked_items = vec!["b".into()];
        rules.must_avoid_families = vec!["Falda".into()];
        let looks = vec![
            look(vec![item("t1", "CAMISA", Category::Top), item("b", "PANTALON", Category::Bottom)]),
            look(vec![item("t2", "CAMISA", Category::Top), item("s", "FALDA", Category::Bottom)]),
            look(vec![item("t3", "CAMISA", Category::Top), item("p", "PANTALON", Category::Bottom)]),
        ];
        let out = filter.apply(looks, Some(&rules));
        assert_eq!(out.looks.len(), 1);
        assert_eq!(out.looks[0].items[0].id, "t3");
        assert_eq!(out.dropped.len(), 2);
    }

    #[test]
    fn uncategorized_look_uses_first_item_as_top() {
        let mut coat = CatalogItem::new("c", "Wool coat");
        coat.family = Some("ABRIGO".into());
        let out = RuleFilter::default().apply(vec![look(vec![coat, CatalogItem::new("x", "x")])], None);
        assert!(out.looks.is_empty());
    }
}
