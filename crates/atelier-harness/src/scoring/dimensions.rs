//! One function per scoring dimension.

use std::collections::BTreeSet;

use atelier_core::models::{ExpectedCriteria, ScoredOutfit};
use atelier_core::rules::HarnessRules;

/// Score plus the criteria that passed or failed while computing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionScore {
    pub score: u32,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl DimensionScore {
    fn fixed(score: u32) -> Self {
        Self {
            score,
            ..Default::default()
        }
    }
}

const BODY_SHAPE_BASE: i32 = 60;
const MUST_INCLUDE_BONUS: i32 = 20;
const SHOULD_AVOID_PENALTY: i32 = 15;
const STYLE_NOTE_PENALTY: i32 = 25;

fn contains(text: &str, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    !term.is_empty() && text.contains(&term)
}

pub fn body_shape(text: &str, criteria: &ExpectedCriteria) -> DimensionScore {
    let mut dim = DimensionScore::default();
    let mut score = BODY_SHAPE_BASE;
    for term in &criteria.must_include {
        if contains(text, term) {
            score += MUST_INCLUDE_BONUS;
            dim.passed.push(format!("includes {term}"));
        } else {
            dim.failed.push(format!("missing {term}"));
        }
    }
    for term in &criteria.should_avoid {
        if contains(text, term) {
            score -= SHOULD_AVOID_PENALTY;
            dim.failed.push(format!("contains {term}"));
        } else {
            dim.passed.push(format!("avoids {term}"));
        }
    }
    dim.score = score.clamp(0, 100) as u32;
    dim
}

/// Words of a style note that count as its keywords.
fn note_keywords(note: &str) -> Vec<String> {
    let words: Vec<String> = note
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    let long: Vec<String> = words.iter().filter(|w| w.len() >= 4).cloned().collect();
    if long.is_empty() {
        words
    } else {
        long
    }
}

pub fn style(text: &str, criteria: &ExpectedCriteria) -> DimensionScore {
    let mut dim = DimensionScore::default();
    let mut score = 100;
    for note in &criteria.style_notes {
        let keywords = note_keywords(note);
        if keywords.iter().any(|k| text.contains(k.as_str())) {
            dim.passed.push(format!("style note: {note}"));
        } else {
            score -= STYLE_NOTE_PENALTY;
            dim.failed.push(format!("style note: {note}"));
        }
    }
    dim.score = score.max(0) as u32;
    dim
}

pub fn occasion(outfit: &ScoredOutfit, expected: &str, fallback: u32) -> DimensionScore {
    if outfit.occasion.trim().eq_ignore_ascii_case(expected.trim()) {
        DimensionScore {
            score: 100,
            passed: vec![format!("occasion {expected}")],
            failed: Vec::new(),
        }
    } else {
        DimensionScore {
            score: fallback,
            passed: Vec::new(),
            failed: vec![format!("occasion {} instead of {expected}", outfit.occasion)],
        }
    }
}

pub fn mood(text: &str, mood: &str, rules: &HarnessRules, fallback: u32) -> DimensionScore {
    let mood = mood.trim().to_lowercase();
    let hit = match rules.mood_keywords.get(&mood) {
        Some(keywords) => keywords.matches(text),
        None => contains(text, &mood),
    };
    if hit {
        DimensionScore {
            score: 90,
            passed: vec![format!("mood {mood}")],
            failed: Vec::new(),
        }
    } else {
        DimensionScore {
            score: fallback,
            passed: Vec::new(),
            failed: vec![format!("mood {mood}")],
        }
    }
}

const MAX_HARMONIOUS_COLORS: usize = 3;

/// Distinct colors across the slots. A piece may name several colors.
fn distinct_colors(outfit: &ScoredOutfit) -> Option<BTreeSet<String>> {
    let mut colors = BTreeSet::new();
    for color in [&outfit.top, &outfit.bottom, &outfit.shoes]
        .into_iter()
        .map(|piece| piece.as_ref().and_then(|p| p.color.as_deref()))
    {
        let color = color.map(str::trim).filter(|c| !c.is_empty())?;
        for part in color.to_lowercase().replace(" and ", "/").split(['/', ',', '&']) {
            let part = part.trim();
            if !part.is_empty() {
                colors.insert(part.to_string());
            }
        }
    }
    Some(colors)
}

pub fn color(outfit: &ScoredOutfit) -> DimensionScore {
    match distinct_colors(outfit) {
        None => DimensionScore {
            score: 50,
            passed: Vec::new(),
            failed: vec!["colors missing".to_string()],
        },
        Some(colors) if colors.len() <= MAX_HARMONIOUS_COLORS => DimensionScore {
            score: 90,
            passed: vec![format!("{} colors", colors.len())],
            failed: Vec::new(),
        },
        Some(colors) => DimensionScore {
            score: 70,
            passed: Vec::new(),
            failed: vec![format!("{} colors", colors.len())],
        },
    }
}

/// Compared in whole cents to keep tier edges exact.
pub fn budget(total: f64, budget: f64) -> DimensionScore {
    let total = (total * 100.0).round() as i64;
    let budget = (budget * 100.0).round() as i64;
    let (score, within) = if total <= budget {
        (100, true)
    } else if total * 100 <= budget * 110 {
        (85, false)
    } else if total * 100 <= budget * 120 {
        (70, false)
    } else {
        (50, false)
    };
    let mut dim = DimensionScore::fixed(score);
    if within {
        dim.passed.push("within budget".to_string());
    } else {
        dim.failed.push("over budget".to_string());
    }
    dim
}

pub fn completeness(outfit: &ScoredOutfit) -> DimensionScore {
    let mut dim = DimensionScore::default();
    for (present, weight, slot) in [
        (outfit.top.is_some(), 40, "top"),
        (outfit.bottom.is_some(), 40, "bottom"),
        (outfit.shoes.is_some(), 20, "shoes"),
    ] {
        if present {
            dim.score += weight;
            dim.passed.push(format!("has {slot}"));
        } else {
            dim.failed.push(format!("no {slot}"));
        }
    }
    dim
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::models::OutfitPiece;

    fn piece(name: &str, color: Option<&str>, price: f64) -> Option<OutfitPiece> {
        Some(OutfitPiece {
            id: None,
            name: name.to_string(),
            color: color.map(String::from),
            price: Some(price),
        })
    }

    fn criteria(include: &[&str], avoid: &[&str], notes: &[&str]) -> ExpectedCriteria {
        ExpectedCriteria {
            must_include: include.iter().map(|s| s.to_string()).collect(),
            should_avoid: avoid.iter().map(|s| s.to_string()).collect(),
            color_guidelines: Vec::new(),
            style_notes: notes.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn body_shape_adds_and_subtracts() {
        let text = "boxy blazer with wrap skirt";
        assert_eq!(body_shape(text, &criteria(&["wrap", "Blazer"], &[], &[])).score, 100);
        assert_eq!(body_shape(text, &criteria(&["belt"], &["boxy"], &[])).score, 45);
        assert_eq!(
            body_shape(text, &criteria(&[], &["boxy", "blazer", "wrap", "skirt", "with"], &[])).score,
            0
        );
    }

    #[test]
    fn style_penalizes_absent_notes() {
        let text = "a tailored navy suit";
        let dim = style(text, &criteria(&[], &[], &["tailored lines", "bold prints", "floral"]));
        assert_eq!(dim.score, 50);
        assert_eq!(dim.failed.len(), 2);
        let dim = style(text, &criteria(&[], &[], &["bold", "pink", "lace", "gold", "wool"]));
        assert_eq!(dim.score, 0);
    }

    #[test]
    fn occasion_mismatch_is_fixed() {
        let outfit = ScoredOutfit {
            occasion: "casual".into(),
            ..Default::default()
        };
        let first = occasion(&outfit, "work", 60);
        let second = occasion(&outfit, "work", 60);
        assert_eq!(first.score, 60);
        assert_eq!(first, second);
    }

    #[test]
    fn mood_uses_keyword_sets() {
        let rules = HarnessRules::default();
        assert_eq!(mood("a soft lace blouse", "romantic", &rules, 70).score, 90);
        assert_eq!(mood("a grey blouse", "romantic", &rules, 70).score, 70);
        assert_eq!(mood("a zen blouse", "zen", &rules, 70).score, 90);
    }

    #[test]
    fn color_tiers() {
        let mut outfit = ScoredOutfit {
            top: piece("top", Some("navy"), 1.0),
            bottom: piece("bottom", Some("white"), 1.0),
            shoes: piece("shoes", Some("navy"), 1.0),
            ..Default::default()
        };
        assert_eq!(color(&outfit).score, 90);
        outfit.top = piece("top", Some("red and green"), 1.0);
        outfit.shoes = piece("shoes", Some("gold/black"), 1.0);
        assert_eq!(color(&outfit).score, 70);
        outfit.shoes = piece("shoes", None, 1.0);
        assert_eq!(color(&outfit).score, 50);
    }

    #[test]
    fn budget_tiers() {
        assert_eq!(budget(1000.0, 1000.0).score, 100);
        assert_eq!(budget(1100.0, 1000.0).score, 85);
        assert_eq!(budget(1150.0, 1000.0).score, 70);
        assert_eq!(budget(1200.0, 1000.0).score, 70);
        assert_eq!(budget(1200.01, 1000.0).score, 50);
    }

    #[test]
    fn completeness_weights_slots() {
        let outfit = ScoredOutfit {
            top: piece("top", None, 1.0),
            shoes: piece("shoes", None, 1.0),
            ..Default::default()
        };
        assert_eq!(completeness(&outfit).score, 60);
        assert_eq!(completeness(&ScoredOutfit::default()).score, 0);
    }
}
