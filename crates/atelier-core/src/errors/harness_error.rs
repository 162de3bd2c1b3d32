/// Validation/scoring harness errors.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("rating {field} must be between 1 and 5, got {value}")]
    InvalidRating { field: String, value: u8 },

    #[error("unknown test case: {name}")]
    UnknownTestCase { name: String },

    #[error("outfit generation failed for {test_case}: {reason}")]
    GenerationFailed { test_case: String, reason: String },
}
