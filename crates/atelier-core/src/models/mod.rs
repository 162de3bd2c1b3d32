mod catalog_item;
mod degradation_event;
mod generation_context;
mod harness;
mod learning;
mod look;
mod profile;
mod review;
mod stage_result;

pub use catalog_item::{CatalogItem, Category, ImageSet};
pub use degradation_event::DegradationEvent;
pub use generation_context::{GenerationContext, UsedItems};
pub use harness::{
    ExpectedCriteria, HarnessRecord, HarnessStats, ManualRating, OutfitPiece, ScenarioInput,
    ScoredOutfit, TestCase, ValidationMetrics,
};
pub use learning::{
    ActiveRuleSet, ContextData, FeedbackPattern, LearningData, LearningInsights, LearningSummary,
    OutfitLog, StyleSnapshot, SuccessfulCombination, UserFeedback, UserPreferences,
};
pub use look::{Look, Outfit, OutfitSeed, SeedSource};
pub use profile::{BodyShape, QuizResult, StyleAnalysis, StyleProfile};
pub use review::{CompatibilityReport, RecommendationContext, SupervisorInput, SupervisorReview};
pub use stage_result::StageResult;
