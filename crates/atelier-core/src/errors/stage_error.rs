/// Pipeline stage failures. Messages are surfaced to callers verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("User must complete the style quiz first")]
    MissingProfile { user_id: String },

    #[error("Could not build a personalized outfit")]
    EmptySeed { user_id: String },

    #[error("catalog table is empty")]
    EmptyCatalog,

    #[error("no valid clothing items with product-only images")]
    NoValidItems,

    #[error("no {category} items available")]
    EmptyCategory { category: String },

    #[error("Personalization failed: {reason}")]
    PersonalizationFailed { reason: String },

    #[error("Styling failed: {reason}")]
    StylingFailed { reason: String },

    /// A stage's own failure message, passed through unchanged.
    #[error("{message}")]
    Upstream { stage: String, message: String },

    #[error("all looks were filtered out: {reason}")]
    NoLooksSurvived { reason: String },
}
