use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::KeywordSet;

/// Keyword and palette tables used by the scoring harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessRules {
    /// Mood → words whose presence in the outfit text signals that mood.
    pub mood_keywords: BTreeMap<String, KeywordSet>,
    /// Style → top, bottom, shoes colors for the scenario stand-in generator.
    pub style_palettes: BTreeMap<String, [String; 3]>,
    pub default_palette: [String; 3],
}

impl Default for HarnessRules {
    fn default() -> Self {
        let mood_keywords = [
            ("elegant", &["elegant", "refined", "sophisticated", "classic", "polished"][..]),
            ("energized", &["energized", "bright", "vibrant", "bold", "sporty"][..]),
            ("romantic", &["romantic", "soft", "floral", "lace", "delicate"][..]),
            ("casual", &["casual", "relaxed", "comfortable", "easy", "everyday"][..]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), KeywordSet::from(v)))
        .collect();

        let style_palettes = [
            ("classic", ["navy", "white", "camel"]),
            ("romantic", ["pink", "cream", "nude"]),
            ("trendy", ["black", "silver", "white"]),
            ("bohemian", ["terracotta", "cream", "brown"]),
            ("minimalist", ["white", "black", "gray"]),
            ("edgy", ["black", "charcoal", "black"]),
            ("sporty", ["gray", "black", "white"]),
            ("elegant", ["black", "ivory", "gold"]),
            ("casual", ["blue", "white", "white"]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.map(String::from)))
        .collect();

        Self {
            mood_keywords,
            style_palettes,
            default_palette: ["black", "white", "gray"].map(String::from),
        }
    }
}
