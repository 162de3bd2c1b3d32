//! SqliteRecordStore: owns the write connection and implements IRecordStore.

use std::path::Path;

use async_trait::async_trait;

use atelier_core::config::StorageConfig;
use atelier_core::errors::AtelierResult;
use atelier_core::models::{
    ActiveRuleSet, CatalogItem, HarnessRecord, LearningData, LearningInsights, ManualRating,
    OutfitLog, QuizResult, UserFeedback,
};
use atelier_core::traits::IRecordStore;

use crate::pool::WriteConnection;
use crate::queries;

/// The structured record store. All queries run on one serialized connection.
pub struct SqliteRecordStore {
    writer: WriteConnection,
}

impl SqliteRecordStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> AtelierResult<Self> {
        tracing::info!(path = %path.display(), "opening record store");
        Ok(Self {
            writer: WriteConnection::open(path)?,
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> AtelierResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
        })
    }

    /// File-backed when `db_path` is set, in-memory otherwise.
    pub fn from_config(config: &StorageConfig) -> AtelierResult<Self> {
        match &config.db_path {
            Some(path) => Self::open(path),
            None => Self::open_in_memory(),
        }
    }
}

#[async_trait]
impl IRecordStore for SqliteRecordStore {
    async fn catalog_count(&self) -> AtelierResult<u64> {
        self.writer.with_conn(queries::catalog::count).await
    }

    async fn sample_catalog(&self, limit: usize) -> AtelierResult<Vec<CatalogItem>> {
        self.writer
            .with_conn(|conn| queries::catalog::sample(conn, limit))
            .await
    }

    async fn catalog_by_occasion(
        &self,
        occasion: &str,
        limit: usize,
    ) -> AtelierResult<Vec<CatalogItem>> {
        self.writer
            .with_conn(|conn| queries::catalog::by_occasion(conn, occasion, limit))
            .await
    }

    async fn upsert_catalog_items(&self, items: &[CatalogItem]) -> AtelierResult<usize> {
        self.writer
            .with_conn(|conn| queries::catalog::upsert(conn, items))
            .await
    }

    async fn latest_quiz_result(&self, user_id: &str) -> AtelierResult<Option<QuizResult>> {
        self.writer
            .with_conn(|conn| queries::profiles::latest(conn, user_id))
            .await
    }

    async fn insert_quiz_result(&self, result: &QuizResult) -> AtelierResult<()> {
        self.writer
            .with_conn(|conn| queries::profiles::insert(conn, result))
            .await
    }

    async fn recent_feedback(&self, user_id: &str, limit: usize) -> AtelierResult<Vec<UserFeedback>> {
        self.writer
            .with_conn(|conn| queries::feedback::recent_feedback(conn, user_id, limit))
            .await
    }

    async fn insert_feedback(&self, feedback: &UserFeedback) -> AtelierResult<()> {
        self.writer
            .with_conn(|conn| queries::feedback::insert_feedback(conn, feedback))
            .await
    }

    async fn recent_outfit_logs(&self, user_id: &str, limit: usize) -> AtelierResult<Vec<OutfitLog>> {
        self.writer
            .with_conn(|conn| queries::feedback::recent_outfit_logs(conn, user_id, limit))
            .await
    }

    async fn insert_outfit_log(&self, log: &OutfitLog) -> AtelierResult<()> {
        self.writer
            .with_conn(|conn| queries::feedback::insert_outfit_log(conn, log))
            .await
    }

    async fn recent_learning_data(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AtelierResult<Vec<LearningData>> {
        self.writer
            .with_conn(|conn| queries::feedback::recent_learning_data(conn, user_id, limit))
            .await
    }

    async fn insert_learning_data(&self, data: &LearningData) -> AtelierResult<()> {
        self.writer
            .with_conn(|conn| queries::feedback::insert_learning_data(conn, data))
            .await
    }

    async fn insert_insights(&self, insights: &LearningInsights) -> AtelierResult<()> {
        self.writer
            .with_conn(|conn| queries::learning::insert_insights(conn, insights))
            .await
    }

    async fn latest_insights(&self, user_id: &str) -> AtelierResult<Option<LearningInsights>> {
        self.writer
            .with_conn(|conn| queries::learning::latest_insights(conn, user_id))
            .await
    }

    async fn insert_rule_set(&self, rules: &ActiveRuleSet) -> AtelierResult<()> {
        self.writer
            .with_conn(|conn| queries::learning::insert_rule_set(conn, rules))
            .await
    }

    async fn latest_rule_set(&self, user_id: &str) -> AtelierResult<Option<ActiveRuleSet>> {
        self.writer
            .with_conn(|conn| queries::learning::latest_rule_set(conn, user_id))
            .await
    }

    async fn insert_harness_record(&self, record: &HarnessRecord) -> AtelierResult<()> {
        self.writer
            .with_conn(|conn| queries::harness::insert_record(conn, record))
            .await
    }

    async fn latest_run_records(&self) -> AtelierResult<Vec<HarnessRecord>> {
        self.writer.with_conn(queries::harness::latest_run).await
    }

    async fn clear_harness_records(&self) -> AtelierResult<usize> {
        let removed = self.writer.with_conn(queries::harness::clear).await?;
        tracing::info!(removed, "harness records cleared");
        Ok(removed)
    }

    async fn insert_manual_rating(&self, rating: &ManualRating) -> AtelierResult<()> {
        self.writer
            .with_conn(|conn| queries::harness::insert_rating(conn, rating))
            .await
    }

    async fn manual_ratings(&self, test_case_name: &str) -> AtelierResult<Vec<ManualRating>> {
        self.writer
            .with_conn(|conn| queries::harness::ratings_for(conn, test_case_name))
            .await
    }
}
