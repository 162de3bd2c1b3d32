use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::KeywordSet;

/// Keywords an event expects among a look's item names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccasionRule {
    pub keywords: KeywordSet,
    /// When set, a missing keyword only warns if the cached mood equals this value.
    #[serde(default)]
    pub only_when_mood: Option<String>,
    pub improvement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoeRules {
    /// Name markers used to find the shoe when no item is classified as shoes.
    pub markers: KeywordSet,
    /// Too informal for work or evening.
    pub informal: KeywordSet,
    pub high_heel: KeywordSet,
    /// Qualifiers that make a heel acceptable for the weekend.
    pub low_heel_qualifier: KeywordSet,
}

impl Default for ShoeRules {
    fn default() -> Self {
        Self {
            markers: KeywordSet::new([
                "shoe", "sandal", "boot", "sneaker", "heel", "loafer", "pump", "trainer",
                "flip-flop", "mule",
            ]),
            informal: KeywordSet::new(["sneaker", "flip-flop", "trainer"]),
            high_heel: KeywordSet::new(["heel", "stiletto"]),
            low_heel_qualifier: KeywordSet::new(["low", "kitten"]),
        }
    }
}

/// Tables for the supervisor's quality reviews and description rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisorRules {
    pub occasions: BTreeMap<String, OccasionRule>,
    pub shoes: ShoeRules,
    /// Pairs of color terms that clash when both appear in one look.
    pub clash_pairs: Vec<(String, String)>,
    pub max_distinct_colors: usize,
    /// Shade families; a look whose colors all sit in one family is monochrome.
    pub monochrome_families: BTreeMap<String, KeywordSet>,
    /// Per-shape keywords, keyed by body-shape code.
    pub body_shape_keywords: BTreeMap<String, KeywordSet>,
    /// When no body-shape keyword fires, treat the look as aligned.
    pub body_shape_soft_pass: bool,
    pub event_phrases: BTreeMap<String, String>,
    pub default_event_phrase: String,
    pub mood_phrases: BTreeMap<String, String>,
    pub default_mood_phrase: String,
}

fn phrases(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn occasion(keywords: &[&str], only_when_mood: Option<&str>, improvement: &str) -> OccasionRule {
    OccasionRule {
        keywords: KeywordSet::from(keywords),
        only_when_mood: only_when_mood.map(String::from),
        improvement: improvement.to_string(),
    }
}

impl Default for SupervisorRules {
    fn default() -> Self {
        let mut occasions = BTreeMap::new();
        occasions.insert(
            "work".to_string(),
            occasion(
                &["suit", "shirt", "pants", "trousers", "blazer"],
                None,
                "Add formal shirts, blazers and tailored trousers for work",
            ),
        );
        occasions.insert(
            "casual".to_string(),
            occasion(
                &["jeans", "t-shirt", "tshirt", "sweatshirt", "sneaker"],
                Some("casual"),
                "Add casual pieces such as jeans, t-shirts and sweatshirts",
            ),
        );
        occasions.insert(
            "weekend".to_string(),
            occasion(
                &["jeans", "t-shirt", "tshirt", "hoodie", "sweatshirt", "sneaker", "sport shoe", "trainer"],
                None,
                "Add relaxed pieces such as jeans, hoodies and sneakers for the weekend",
            ),
        );
        occasions.insert(
            "evening".to_string(),
            occasion(
                &["dress", "suit", "blazer", "heel"],
                None,
                "Add elegant dresses, blazers or suits for evening events",
            ),
        );

        let monochrome_families = [
            ("beige", &["beige", "cream", "tan", "camel", "nude"][..]),
            ("gray", &["gray", "grey", "charcoal", "silver"][..]),
            ("blue", &["blue", "navy", "cobalt", "denim"][..]),
            ("black", &["black", "charcoal"][..]),
            ("white", &["white", "off-white", "ivory"][..]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), KeywordSet::from(v)))
        .collect();

        let body_shape_keywords = [
            ("X", &["fitted", "tight-fitting", "waist-defining", "wrap", "belted"][..]),
            ("A", &["shoulder-emphasizing", "top-completing", "a-line", "wide-leg"][..]),
            ("V", &["shoulder-balancing", "lower-emphasizing", "v-neck", "flowing"][..]),
            ("H", &["line-creating", "depth-adding", "peplum", "ruffle", "textured"][..]),
            ("O", &["elongating", "straight-line", "empire", "straight leg"][..]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), KeywordSet::from(v)))
        .collect();

        Self {
            occasions,
            shoes: ShoeRules::default(),
            clash_pairs: vec![
                ("red".into(), "green".into()),
                ("blue".into(), "orange".into()),
                ("purple".into(), "yellow".into()),
            ],
            max_distinct_colors: 3,
            monochrome_families,
            body_shape_keywords,
            body_shape_soft_pass: true,
            event_phrases: phrases(&[
                ("work", "Perfect for a professional workday"),
                ("casual", "Ideal for relaxed everyday activities"),
                ("evening", "Suited to elegant evening events"),
                ("weekend", "Great for an easy, laid-back weekend"),
            ]),
            default_event_phrase: "Suits a range of occasions".to_string(),
            mood_phrases: phrases(&[
                ("elegant", "conveys elegance and refinement"),
                ("energized", "brings energy and vitality"),
                ("romantic", "creates a romantic, enchanting look"),
                ("casual", "feels relaxed and natural"),
            ]),
            default_mood_phrase: "projects self-confidence".to_string(),
        }
    }
}
