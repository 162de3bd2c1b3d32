use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Styling-tip pools and templates for the recommendation stage.
///
/// Templates may contain `{style}` and `{occasion}` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRules {
    pub mood_tips: BTreeMap<String, Vec<String>>,
    pub event_tips: BTreeMap<String, Vec<String>>,
    /// Pool used when the cached mood or event has no entry.
    pub fallback_key: String,
    pub closing_tips: Vec<String>,
    pub style_tip: String,
    pub outfit_logic_tip: String,
    pub praise_tip: String,
    pub minor_improvement_tip: String,
    pub max_tips: usize,
}

fn pool(entries: &[(&str, [&str; 3])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(k, tips)| (k.to_string(), tips.iter().map(|t| t.to_string()).collect()))
        .collect()
}

impl Default for RecommendationRules {
    fn default() -> Self {
        Self {
            mood_tips: pool(&[
                ("elegant", [
                    "Add delicate jewelry such as a pearl necklace or gold earrings",
                    "A classic bag or clutch gives a finished touch",
                    "Choose neutral or dark tones for a refined look",
                ]),
                ("energized", [
                    "Colorful accessories add energy to the look",
                    "A sporty bag or fashionable backpack works well",
                    "Go for prints or vivid colors",
                ]),
                ("romantic", [
                    "Delicate jewelry with pearls or crystals",
                    "A soft bag in pastel or blush tones",
                    "Add a silk scarf or a delicate hair clip",
                ]),
                ("casual", [
                    "A comfortable, practical everyday bag",
                    "Keep accessories simple and light",
                    "Sneakers or flats for comfort",
                ]),
            ]),
            event_tips: pool(&[
                ("work", [
                    "A structured work bag in a neutral color",
                    "A classic watch adds professionalism",
                    "Avoid large or loud jewelry",
                ]),
                ("evening", [
                    "A small bag or elegant clutch",
                    "Sparkling jewelry or luxe accessories",
                    "Heels for a festive finish",
                ]),
                ("casual", [
                    "A shoulder bag or comfortable backpack",
                    "Everyday, practical accessories",
                    "Layer pieces for variety and comfort",
                ]),
                ("weekend", [
                    "A small bag or fashionable wallet",
                    "Minimal accessories",
                    "Comfortable shoes for walking",
                ]),
            ]),
            fallback_key: "casual".to_string(),
            closing_tips: vec![
                "Add matching accessories to complete the look".to_string(),
                "Consider adapting the look to the specific event".to_string(),
            ],
            style_tip: "Lean into your {style} style with one signature piece".to_string(),
            outfit_logic_tip: "This combination is built for a {occasion} setting; keep accessories in the same register".to_string(),
            praise_tip: "Excellent compatibility: this combination works as it is".to_string(),
            minor_improvement_tip: "Good compatibility: a small accessory tweak will sharpen the look".to_string(),
            max_tips: 5,
        }
    }
}
