/// Learning feedback loop errors.
#[derive(Debug, thiserror::Error)]
pub enum LearningError {
    #[error("feedback analysis failed for {user_id}: {reason}")]
    AnalysisFailed { user_id: String, reason: String },

    #[error("failed to apply insights for {user_id}: {reason}")]
    ApplyFailed { user_id: String, reason: String },
}
