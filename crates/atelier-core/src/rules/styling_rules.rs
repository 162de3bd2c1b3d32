use serde::{Deserialize, Serialize};

use super::KeywordSet;

/// Sleeve-length and shoe-openness heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingRules {
    pub short_sleeve: KeywordSet,
    pub long_sleeve: KeywordSet,
    /// Seasonal cues that imply short sleeves when no explicit marker is present.
    pub warm_season: KeywordSet,
    pub open_shoe: KeywordSet,
    pub closed_shoe: KeywordSet,
}

impl Default for StylingRules {
    fn default() -> Self {
        Self {
            short_sleeve: KeywordSet::new([
                "short sleeve", "short-sleeve", "sleeveless", "tank", "camisole", "strappy",
                "cap sleeve", "manga corta", "sin mangas", "tirantes",
            ]),
            long_sleeve: KeywordSet::new([
                "long sleeve", "long-sleeve", "sweater", "cardigan", "hoodie", "sweatshirt",
                "turtleneck", "jumper", "manga larga", "jersey",
            ]),
            warm_season: KeywordSet::new([
                "summer", "linen", "beach", "tropical", "resort", "verano", "lino",
            ]),
            open_shoe: KeywordSet::new([
                "sandal", "flip-flop", "slide", "espadrille", "mule", "open toe", "open-toe",
                "sandalia", "chancla",
            ]),
            closed_shoe: KeywordSet::new([
                "boot", "sneaker", "trainer", "loafer", "oxford", "pump", "moccasin", "brogue",
                "closed toe", "bota", "zapatilla", "mocasin",
            ]),
        }
    }
}
