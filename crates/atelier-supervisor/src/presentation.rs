//! Description rewrite and quality scoring.

use atelier_core::constants::{MAX_LOOK_ITEMS, MIN_LOOK_ITEMS};
use atelier_core::models::Look;
use atelier_core::rules::SupervisorRules;

use crate::SupervisorContext;

const TOO_FEW_ITEMS_PENALTY: u32 = 30;
const INCOMPLETE_PENALTY: u32 = 10;
const MISSING_IMAGE_PENALTY: u32 = 20;
const MISSING_PRICE_PENALTY: u32 = 10;

/// `"Look #n: <items>. <event phrase>, <mood phrase>. Approved by the supervising stylist."`
pub fn describe(look: &Look, index: usize, ctx: &SupervisorContext, rules: &SupervisorRules) -> String {
    let names = look
        .items
        .iter()
        .map(|item| item.display_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let event = rules
        .event_phrases
        .get(&ctx.event)
        .unwrap_or(&rules.default_event_phrase);
    let mood = rules
        .mood_phrases
        .get(&ctx.mood)
        .unwrap_or(&rules.default_mood_phrase);
    format!(
        "Look #{}: {names}. {event}, {mood}. Approved by the supervising stylist.",
        index + 1
    )
}

/// Start at 100: −30 below two items, otherwise −10 when short of three;
/// −20 unless every item has a real image; −10 unless every item has a price.
pub fn quality_score(look: &Look, placeholder: &str) -> u32 {
    let mut penalty = 0;
    let count = look.items.len();
    if count < MIN_LOOK_ITEMS {
        penalty += TOO_FEW_ITEMS_PENALTY;
    } else if count < MAX_LOOK_ITEMS {
        penalty += INCOMPLETE_PENALTY;
    }

    let has_images = look
        .items
        .iter()
        .all(|item| item.image().is_some_and(|url| url != placeholder));
    if !has_images || look.items.is_empty() {
        penalty += MISSING_IMAGE_PENALTY;
    }
    let has_prices = look
        .items
        .iter()
        .all(|item| item.price.is_some_and(|p| p > 0.0));
    if !has_prices || look.items.is_empty() {
        penalty += MISSING_PRICE_PENALTY;
    }
    100u32.saturating_sub(penalty)
}

#[cfg(test)]
mod tests {
    use atelier_core::constants::PLACEHOLDER_IMAGE;
    use atelier_core::models::{CatalogItem, ImageSet};

    use super::*;

    fn complete(id: &str) -> CatalogItem {
        let mut item = CatalogItem::new(id, format!("Piece {id}"));
        item.images = ImageSet::new(vec![format!("https://cdn/{id}/6_1_1.jpg")]);
        item.price = Some(19.9);
        item
    }

    fn look(items: Vec<CatalogItem>) -> Look {
        Look::new(items, "classic", "work", "")
    }

    #[test]
    fn full_look_scores_100() {
        let l = look(vec![complete("a"), complete("b"), complete("c")]);
        assert_eq!(quality_score(&l, PLACEHOLDER_IMAGE), 100);
    }

    #[test]
    fn two_items_lose_ten() {
        let l = look(vec![complete("a"), complete("b")]);
        assert_eq!(quality_score(&l, PLACEHOLDER_IMAGE), 90);
    }

    #[test]
    fn bare_single_item_scores_40() {
        let l = look(vec![CatalogItem::new("a", "A")]);
        assert_eq!(quality_score(&l, PLACEHOLDER_IMAGE), 40);
    }

    #[test]
    fn placeholder_counts_as_missing_image() {
        let mut b = complete("b");
        b.display_image = Some(PLACEHOLDER_IMAGE.to_string());
        let l = look(vec![complete("a"), b, complete("c")]);
        assert_eq!(quality_score(&l, PLACEHOLDER_IMAGE), 80);
    }

    #[test]
    fn description_uses_phrases() {
        let l = look(vec![complete("a"), complete("b")]);
        let rules = SupervisorRules::default();
        let text = describe(&l, 1, &SupervisorContext::new("work", "romantic"), &rules);
        assert_eq!(
            text,
            "Look #2: Piece a, Piece b. Perfect for a professional workday, creates a romantic, enchanting look. Approved by the supervising stylist."
        );
        let text = describe(&l, 0, &SupervisorContext::new("gala", "moody"), &rules);
        assert!(text.contains("Suits a range of occasions, projects self-confidence."));
    }
}
