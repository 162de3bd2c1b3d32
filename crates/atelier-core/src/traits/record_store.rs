use async_trait::async_trait;

use crate::errors::AtelierResult;
use crate::models::{
    ActiveRuleSet, CatalogItem, HarnessRecord, LearningData, LearningInsights, ManualRating,
    OutfitLog, QuizResult, UserFeedback,
};

/// Structured record store: read/insert/upsert over named logical tables.
#[async_trait]
pub trait IRecordStore: Send + Sync {
    // --- Catalog ---
    async fn catalog_count(&self) -> AtelierResult<u64>;
    async fn sample_catalog(&self, limit: usize) -> AtelierResult<Vec<CatalogItem>>;
    /// Catalog rows filed under an occasion bucket, or untagged rows when none are.
    async fn catalog_by_occasion(&self, occasion: &str, limit: usize)
        -> AtelierResult<Vec<CatalogItem>>;
    async fn upsert_catalog_items(&self, items: &[CatalogItem]) -> AtelierResult<usize>;

    // --- Profiles ---
    async fn latest_quiz_result(&self, user_id: &str) -> AtelierResult<Option<QuizResult>>;
    async fn insert_quiz_result(&self, result: &QuizResult) -> AtelierResult<()>;

    // --- Feedback history (newest first) ---
    async fn recent_feedback(&self, user_id: &str, limit: usize)
        -> AtelierResult<Vec<UserFeedback>>;
    async fn insert_feedback(&self, feedback: &UserFeedback) -> AtelierResult<()>;
    async fn recent_outfit_logs(&self, user_id: &str, limit: usize)
        -> AtelierResult<Vec<OutfitLog>>;
    async fn insert_outfit_log(&self, log: &OutfitLog) -> AtelierResult<()>;
    async fn recent_learning_data(&self, user_id: &str, limit: usize)
        -> AtelierResult<Vec<LearningData>>;
    async fn insert_learning_data(&self, data: &LearningData) -> AtelierResult<()>;

    // --- Learning output ---
    async fn insert_insights(&self, insights: &LearningInsights) -> AtelierResult<()>;
    async fn latest_insights(&self, user_id: &str) -> AtelierResult<Option<LearningInsights>>;
    /// Append a rule set. The newest row per user is the active one.
    async fn insert_rule_set(&self, rules: &ActiveRuleSet) -> AtelierResult<()>;
    async fn latest_rule_set(&self, user_id: &str) -> AtelierResult<Option<ActiveRuleSet>>;

    // --- Harness ---
    async fn insert_harness_record(&self, record: &HarnessRecord) -> AtelierResult<()>;
    /// Rows sharing the newest run timestamp.
    async fn latest_run_records(&self) -> AtelierResult<Vec<HarnessRecord>>;
    async fn clear_harness_records(&self) -> AtelierResult<usize>;
    async fn insert_manual_rating(&self, rating: &ManualRating) -> AtelierResult<()>;
    async fn manual_ratings(&self, test_case_name: &str) -> AtelierResult<Vec<ManualRating>>;
}
