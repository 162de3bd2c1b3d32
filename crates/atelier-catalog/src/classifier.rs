//! Keyword-rule classifier for raw catalog records.
//!
//! Pure functions over [`ClassifierRules`]; nothing here can fail.

use atelier_core::models::{CatalogItem, Category};
use atelier_core::rules::ClassifierRules;

/// `None` when the record is not clothing. Otherwise the first category whose
/// keyword list matches, in the order top, bottom, shoes, dress, outerwear,
/// defaulting to [`Category::Top`].
pub fn classify(item: &CatalogItem, rules: &ClassifierRules) -> Option<Category> {
    let text = item.search_text();
    if rules.exclusions.matches(&text) {
        return None;
    }
    let ordered = [
        (Category::Top, &rules.top),
        (Category::Bottom, &rules.bottom),
        (Category::Shoes, &rules.shoes),
        (Category::Dress, &rules.dress),
        (Category::Outerwear, &rules.outerwear),
    ];
    let category = ordered
        .into_iter()
        .find(|(_, keywords)| keywords.matches(&text))
        .map(|(category, _)| category)
        .unwrap_or(Category::Top);
    Some(category)
}

pub fn is_clothing(item: &CatalogItem, rules: &ClassifierRules) -> bool {
    !rules.exclusions.matches(&item.search_text())
}

/// True for coat-like family or subfamily tags. Such items never fill the top slot.
pub fn is_outerwear_family(item: &CatalogItem, rules: &ClassifierRules) -> bool {
    let family = item.family_text();
    !family.is_empty() && rules.outerwear_families.matches(&family)
}

/// The first item classified into each outfit slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlottedItems {
    pub top: Option<CatalogItem>,
    pub bottom: Option<CatalogItem>,
    pub shoes: Option<CatalogItem>,
}

impl SlottedItems {
    /// Filled slots in top, bottom, shoes order.
    pub fn into_items(self) -> Vec<CatalogItem> {
        [self.top, self.bottom, self.shoes].into_iter().flatten().collect()
    }

    pub fn filled(&self) -> usize {
        [&self.top, &self.bottom, &self.shoes]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }
}

/// Slot a candidate list into top/bottom/shoes, first match wins. Non-clothing
/// records and outerwear families are skipped for the top slot.
pub fn slot_items<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    rules: &ClassifierRules,
) -> SlottedItems {
    let mut slots = SlottedItems::default();
    for item in items {
        let Some(category) = classify(item, rules) else {
            continue;
        };
        let slot = match category {
            Category::Top if !is_outerwear_family(item, rules) => &mut slots.top,
            Category::Bottom => &mut slots.bottom,
            Category::Shoes => &mut slots.shoes,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(item.clone().with_category(category));
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> CatalogItem {
        CatalogItem::new(name.to_lowercase().replace(' ', "-"), name)
    }

    #[test]
    fn exclusions_reject_accessories() {
        let rules = ClassifierRules::default();
        assert_eq!(classify(&item("Leather crossbody bag"), &rules), None);
        assert!(!is_clothing(&item("Gold necklace"), &rules));
    }

    #[test]
    fn priority_order_is_respected() {
        let rules = ClassifierRules::default();
        assert_eq!(classify(&item("Linen shirt"), &rules), Some(Category::Top));
        assert_eq!(classify(&item("Wide leg trousers"), &rules), Some(Category::Bottom));
        assert_eq!(classify(&item("Strappy sandals"), &rules), Some(Category::Shoes));
        assert_eq!(classify(&item("Midi dress"), &rules), Some(Category::Dress));
        assert_eq!(classify(&item("Wool coat"), &rules), Some(Category::Outerwear));
    }

    #[test]
    fn unmatched_clothing_defaults_to_top() {
        let rules = ClassifierRules::default();
        assert_eq!(classify(&item("Something nice"), &rules), Some(Category::Top));
    }

    #[test]
    fn family_codes_classify() {
        let rules = ClassifierRules::default();
        let mut falda = item("Modelo 2231");
        falda.family = Some("FALDA".to_string());
        assert_eq!(classify(&falda, &rules), Some(Category::Bottom));
    }

    #[test]
    fn outerwear_family_never_takes_top_slot() {
        let rules = ClassifierRules::default();
        let mut blazer_shirt = item("Shirt style overshirt");
        blazer_shirt.family = Some("BLAZER".to_string());
        let shirt = item("Cotton shirt");
        let slots = slot_items([&blazer_shirt, &shirt], &rules);
        assert_eq!(slots.top.map(|t| t.id), Some("cotton-shirt".to_string()));
    }

    #[test]
    fn slotting_takes_first_of_each() {
        let rules = ClassifierRules::default();
        let items = [
            item("Silk blouse"),
            item("Cotton tee"),
            item("Denim jeans"),
            item("Leather loafer"),
        ];
        let slots = slot_items(&items, &rules);
        assert_eq!(slots.filled(), 3);
        let ids: Vec<_> = slots.into_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["silk-blouse", "denim-jeans", "leather-loafer"]);
    }
}
