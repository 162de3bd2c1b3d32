//! Shoe review: every look needs shoes, and they must suit the event.

use atelier_catalog::classify;
use atelier_core::models::{CatalogItem, Category, Look};
use atelier_core::rules::{ClassifierRules, SupervisorRules};

use super::ReviewNotes;
use crate::SupervisorContext;

fn find_shoe<'a>(
    look: &'a Look,
    rules: &SupervisorRules,
    classifier: &ClassifierRules,
) -> Option<&'a CatalogItem> {
    look.items
        .iter()
        .find(|item| {
            item.category
                .or_else(|| classify(item, classifier))
                .is_some_and(|c| c == Category::Shoes)
        })
        .or_else(|| {
            look.items
                .iter()
                .find(|item| rules.shoes.markers.matches(&item.display_name.to_lowercase()))
        })
}

pub fn review(
    looks: &[Look],
    ctx: &SupervisorContext,
    rules: &SupervisorRules,
    classifier: &ClassifierRules,
) -> ReviewNotes {
    let mut notes = ReviewNotes::default();
    let shoe_rules = &rules.shoes;

    for (index, look) in looks.iter().enumerate() {
        let n = index + 1;
        let Some(shoe) = find_shoe(look, rules, classifier) else {
            notes.warn(
                format!("Look {n}: missing shoes"),
                "Add suitable shoes to every look",
            );
            continue;
        };
        let name = shoe.display_name.to_lowercase();

        match ctx.event.as_str() {
            "work" | "evening" => {
                if shoe_rules.informal.matches(&name) {
                    notes.warn(
                        format!("Look {n}: shoes are too informal for {}", ctx.event),
                        "Switch to leather shoes, loafers or heels",
                    );
                } else {
                    notes.pass(format!("Look {n}: shoes suit {}", ctx.event));
                }
            }
            "weekend" => {
                if shoe_rules.high_heel.matches(&name)
                    && !shoe_rules.low_heel_qualifier.matches(&name)
                {
                    notes.warn(
                        format!("Look {n}: high heels are impractical for the weekend"),
                        "Switch to comfortable sneakers or flats",
                    );
                } else {
                    notes.pass(format!("Look {n}: comfortable shoes for the weekend"));
                }
            }
            "casual" => notes.pass(format!("Look {n}: shoes suit a casual day")),
            _ => {}
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn look(names: &[&str]) -> Look {
        Look::new(
            names.iter().map(|n| CatalogItem::new(*n, *n)).collect(),
            "classic",
            "work",
            "",
        )
    }

    fn run(looks: &[Look], event: &str) -> ReviewNotes {
        review(
            looks,
            &SupervisorContext::new(event, "elegant"),
            &SupervisorRules::default(),
            &ClassifierRules::default(),
        )
    }

    #[test]
    fn missing_shoes_warns() {
        let notes = run(&[look(&["Linen shirt", "Chinos"])], "casual");
        assert_eq!(notes.warnings(), 1);
        assert!(notes.feedback[0].contains("missing shoes"));
    }

    #[test]
    fn sneakers_at_work_warn() {
        assert_eq!(run(&[look(&["Shirt", "White sneakers"])], "work").warnings(), 1);
        assert_eq!(run(&[look(&["Shirt", "Leather loafers"])], "work").warnings(), 0);
    }

    #[test]
    fn low_heels_are_fine_on_weekends() {
        assert_eq!(run(&[look(&["Tee", "Stiletto heels"])], "weekend").warnings(), 1);
        assert_eq!(run(&[look(&["Tee", "Low block heels"])], "weekend").warnings(), 0);
    }
}
