//! Occasion review: do the item names carry the current event's keywords?

use atelier_core::models::Look;
use atelier_core::rules::SupervisorRules;

use super::ReviewNotes;
use crate::SupervisorContext;

pub fn review(looks: &[Look], ctx: &SupervisorContext, rules: &SupervisorRules) -> ReviewNotes {
    let mut notes = ReviewNotes::default();
    let Some(rule) = rules.occasions.get(&ctx.event) else {
        return notes;
    };
    // Some events only warn under a matching mood.
    let mood_gate = rule
        .only_when_mood
        .as_deref()
        .map_or(true, |mood| mood == ctx.mood);

    for (index, look) in looks.iter().enumerate() {
        let n = index + 1;
        let has_keyword = look
            .items
            .iter()
            .any(|item| rule.keywords.matches(&item.display_name.to_lowercase()));
        if !has_keyword && mood_gate {
            notes.warn(
                format!("Look {n}: missing key pieces for {}", ctx.event),
                rule.improvement.clone(),
            );
        } else {
            notes.pass(format!("Look {n}: suits {}", ctx.event));
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use atelier_core::models::CatalogItem;

    use super::*;

    fn look(names: &[&str]) -> Look {
        Look::new(
            names.iter().map(|n| CatalogItem::new(*n, *n)).collect(),
            "classic",
            "work",
            "",
        )
    }

    #[test]
    fn work_look_without_formal_pieces_warns() {
        let rules = SupervisorRules::default();
        let ctx = SupervisorContext::new("work", "elegant");
        let notes = review(&[look(&["Floral dress", "Sandals"])], &ctx, &rules);
        assert_eq!(notes.warnings(), 1);
        assert_eq!(notes.improvements.len(), 1);

        let notes = review(&[look(&["Poplin Shirt", "Wide trousers"])], &ctx, &rules);
        assert_eq!(notes.warnings(), 0);
        assert_eq!(notes.feedback.len(), 1);
    }

    #[test]
    fn casual_only_warns_in_casual_mood() {
        let rules = SupervisorRules::default();
        let formal = [look(&["Silk blouse", "Pencil skirt"])];
        let elegant = review(&formal, &SupervisorContext::new("casual", "elegant"), &rules);
        assert_eq!(elegant.warnings(), 0);
        let casual = review(&formal, &SupervisorContext::new("casual", "casual"), &rules);
        assert_eq!(casual.warnings(), 1);
    }

    #[test]
    fn unknown_event_is_silent() {
        let rules = SupervisorRules::default();
        let notes = review(&[look(&["a", "b"])], &SupervisorContext::new("gala", "elegant"), &rules);
        assert!(notes.feedback.is_empty());
    }
}
