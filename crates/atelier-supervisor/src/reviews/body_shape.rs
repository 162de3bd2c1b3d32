//! Body-shape review against a small per-shape keyword table.

use atelier_core::models::{BodyShape, Look};
use atelier_core::rules::SupervisorRules;

use super::ReviewNotes;

/// A rule fires when a keyword appears in an item name or the description.
/// With `body_shape_soft_pass` set, a look no rule fires for still counts as aligned.
pub fn is_aligned(look: &Look, shape: BodyShape, rules: &SupervisorRules) -> bool {
    let fired = rules
        .body_shape_keywords
        .get(shape.code())
        .is_some_and(|keywords| keywords.matches(&look.text()));
    fired || rules.body_shape_soft_pass
}

pub fn review(looks: &[Look], shape: Option<BodyShape>, rules: &SupervisorRules) -> ReviewNotes {
    let mut notes = ReviewNotes::default();
    let Some(shape) = shape else {
        return notes;
    };
    for (index, look) in looks.iter().enumerate() {
        let n = index + 1;
        if is_aligned(look, shape, rules) {
            notes.pass(format!("Look {n}: suits body shape {shape}"));
        } else {
            notes.warn(
                format!("Look {n}: not optimal for body shape {shape}"),
                format!("Choose pieces that flatter body shape {shape}"),
            );
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use atelier_core::models::CatalogItem;

    use super::*;

    fn look(name: &str) -> Look {
        Look::new(vec![CatalogItem::new("1", name)], "classic", "work", "")
    }

    #[test]
    fn skipped_without_shape() {
        assert!(review(&[look("x")], None, &SupervisorRules::default()).feedback.is_empty());
    }

    #[test]
    fn soft_pass_accepts_unmatched_looks() {
        let notes = review(&[look("plain tee")], Some(BodyShape::X), &SupervisorRules::default());
        assert_eq!(notes.warnings(), 0);
    }

    #[test]
    fn strict_mode_warns_when_no_rule_fires() {
        let rules = SupervisorRules {
            body_shape_soft_pass: false,
            ..SupervisorRules::default()
        };
        let notes = review(
            &[look("plain tee"), look("belted wrap dress")],
            Some(BodyShape::X),
            &rules,
        );
        assert_eq!(notes.warnings(), 1);
        assert!(notes.feedback[0].contains("not optimal"));
        assert!(notes.feedback[1].starts_with("[pass]"));
    }
}
