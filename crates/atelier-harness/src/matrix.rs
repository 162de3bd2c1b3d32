//! The default scenario matrix.

use atelier_core::models::{ExpectedCriteria, ScenarioInput, TestCase};

pub const BODY_SHAPES: [&str; 5] = ["hourglass", "pear", "rectangle", "triangle", "oval"];

pub const STYLES: [&str; 9] = [
    "classic",
    "romantic",
    "trendy",
    "bohemian",
    "minimalist",
    "edgy",
    "sporty",
    "elegant",
    "casual",
];

pub const OCCASIONS: [&str; 5] = ["work", "evening", "casual", "weekend", "special"];

pub const MOODS: [&str; 4] = ["elegant", "energized", "romantic", "casual"];

/// Budget per occasion.
const BUDGETS: [(&str, f64); 5] = [
    ("work", 300.0),
    ("evening", 400.0),
    ("casual", 150.0),
    ("weekend", 200.0),
    ("special", 500.0),
];

/// Silhouettes each body shape should avoid.
const SHAPE_AVOID: [(&str, &[&str]); 5] = [
    ("hourglass", &["boxy", "shapeless"]),
    ("pear", &["skinny", "pleated hip"]),
    ("rectangle", &["straight-cut", "shapeless"]),
    ("triangle", &["puff sleeve", "shoulder pads"]),
    ("oval", &["clingy", "cropped"]),
];

fn budget_for(occasion: &str) -> f64 {
    BUDGETS
        .iter()
        .find(|(o, _)| *o == occasion)
        .map(|(_, b)| *b)
        .unwrap_or(200.0)
}

fn avoid_for(shape: &str) -> Vec<String> {
    SHAPE_AVOID
        .iter()
        .find(|(s, _)| *s == shape)
        .map(|(_, terms)| terms.iter().map(|t| t.to_string()).collect())
        .unwrap_or_default()
}

/// One scenario with criteria derived from its parameters.
pub fn test_case(shape: &str, style: &str, occasion: &str, mood: &str) -> TestCase {
    TestCase {
        name: format!("{shape}-{style}-{occasion}-{mood}"),
        input: ScenarioInput {
            body_shape: shape.to_string(),
            style_preference: style.to_string(),
            occasion: occasion.to_string(),
            mood: mood.to_string(),
            budget: budget_for(occasion),
        },
        expected_criteria: ExpectedCriteria {
            must_include: vec![style.to_string(), "shoes".to_string()],
            should_avoid: avoid_for(shape),
            color_guidelines: Vec::new(),
            style_notes: vec![format!("{style} pieces"), format!("dressed for {occasion}")],
        },
    }
}

/// Every combination of body shape, style, occasion and mood.
pub fn default_test_cases() -> Vec<TestCase> {
    let mut cases = Vec::with_capacity(BODY_SHAPES.len() * STYLES.len() * OCCASIONS.len() * MOODS.len());
    for shape in BODY_SHAPES {
        for style in STYLES {
            for occasion in OCCASIONS {
                for mood in MOODS {
                    cases.push(test_case(shape, style, occasion, mood));
                }
            }
        }
    }
    cases
}
