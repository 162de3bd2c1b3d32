//! Keyword rule tables. All heuristics read their vocabularies from here,
//! so tables can be swapped from config without touching pipeline logic.

mod classifier_rules;
mod harness_rules;
mod keywords;
mod recommendation_rules;
mod styling_rules;
mod supervisor_rules;

pub use classifier_rules::ClassifierRules;
pub use harness_rules::HarnessRules;
pub use keywords::KeywordSet;
pub use recommendation_rules::RecommendationRules;
pub use styling_rules::StylingRules;
pub use supervisor_rules::{OccasionRule, ShoeRules, SupervisorRules};

use serde::{Deserialize, Serialize};

/// Every rule table, grouped by the component that reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    pub classifier: ClassifierRules,
    pub styling: StylingRules,
    pub supervisor: SupervisorRules,
    pub recommendation: RecommendationRules,
    pub harness: HarnessRules,
}
