//! Color review: clashing pairs and too many distinct colors.

use std::collections::BTreeSet;

use atelier_core::constants::MIN_LOOK_ITEMS;
use atelier_core::models::Look;
use atelier_core::rules::SupervisorRules;

use super::ReviewNotes;

/// Lowercased colors of a look's items. Missing colors are ignored.
pub fn look_colors(look: &Look) -> Vec<String> {
    look.items
        .iter()
        .filter_map(|item| item.color.as_deref())
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty() && c != "unknown")
        .collect()
}

pub fn has_clash(colors: &[String], rules: &SupervisorRules) -> bool {
    rules.clash_pairs.iter().any(|(a, b)| {
        colors.iter().any(|c| c.contains(a.as_str())) && colors.iter().any(|c| c.contains(b.as_str()))
    })
}

/// Every color falls in one shade family.
pub fn is_monochrome(colors: &[String], rules: &SupervisorRules) -> bool {
    !colors.is_empty()
        && rules
            .monochrome_families
            .values()
            .any(|family| colors.iter().all(|c| family.matches(c)))
}

pub fn review(looks: &[Look], rules: &SupervisorRules) -> ReviewNotes {
    let mut notes = ReviewNotes::default();

    for (index, look) in looks.iter().enumerate() {
        if look.items.len() < MIN_LOOK_ITEMS {
            continue;
        }
        let n = index + 1;
        let colors = look_colors(look);

        if has_clash(&colors, rules) {
            notes.warn(
                format!("Look {n}: clashing colors"),
                "Use the color wheel for more harmonious pairings",
            );
        }

        let distinct: BTreeSet<&str> = colors.iter().map(String::as_str).collect();
        let monochrome = is_monochrome(&colors, rules);
        if distinct.len() > rules.max_distinct_colors && !monochrome {
            notes.warn(
                format!("Look {n}: too many colors ({})", distinct.len()),
                format!(
                    "Limit each look to {} main colors",
                    rules.max_distinct_colors
                ),
            );
        } else if monochrome {
            notes.pass(format!(
                "Look {n}: successful monochrome look ({} shades)",
                distinct.len()
            ));
        } else {
            notes.pass(format!("Look {n}: balanced colors"));
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use atelier_core::models::CatalogItem;

    use super::*;

    fn look(colors: &[&str]) -> Look {
        Look::new(
            colors
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let mut item = CatalogItem::new(format!("i{i}"), "piece");
                    item.color = Some(c.to_string());
                    item
                })
                .collect(),
            "classic",
            "work",
            "",
        )
    }

    #[test]
    fn clash_pair_warns() {
        let notes = review(&[look(&["Dark Red", "green"])], &SupervisorRules::default());
        assert_eq!(notes.warnings(), 1);
        assert!(notes.feedback[0].contains("clashing"));
    }

    #[test]
    fn four_colors_warn_unless_monochrome() {
        let rules = SupervisorRules::default();
        let loud = review(&[look(&["pink", "teal", "mustard", "lilac"])], &rules);
        assert_eq!(loud.warnings(), 1);
        let tonal = review(&[look(&["beige", "cream", "camel", "tan"])], &rules);
        assert_eq!(tonal.warnings(), 0);
        assert!(tonal.feedback[0].contains("monochrome"));
    }

    #[test]
    fn single_item_looks_are_skipped() {
        let notes = review(&[look(&["red"])], &SupervisorRules::default());
        assert!(notes.feedback.is_empty());
    }
}
