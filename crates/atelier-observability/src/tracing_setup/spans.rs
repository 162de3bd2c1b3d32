//! Span definitions per operation: stage runs, supervisor review, learning, harness runs.

/// Create a span around one pipeline stage.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr, $user_id:expr) => {
        tracing::info_span!("atelier.stage", stage = %$stage, user_id = %$user_id)
    };
}

/// Create a supervisor review span.
#[macro_export]
macro_rules! supervisor_span {
    ($look_count:expr) => {
        tracing::info_span!("atelier.supervisor", look_count = $look_count)
    };
}

/// Create a learning span.
#[macro_export]
macro_rules! learning_span {
    ($operation:expr, $user_id:expr) => {
        tracing::info_span!("atelier.learning", operation = %$operation, user_id = %$user_id)
    };
}

/// Create a harness run span.
#[macro_export]
macro_rules! harness_span {
    ($test_cases:expr) => {
        tracing::info_span!("atelier.harness", test_cases = $test_cases)
    };
}

/// Create an orchestration span.
#[macro_export]
macro_rules! orchestration_span {
    ($user_id:expr) => {
        tracing::info_span!("atelier.orchestration", user_id = %$user_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const STAGE: &str = "atelier.stage";
    pub const SUPERVISOR: &str = "atelier.supervisor";
    pub const LEARNING: &str = "atelier.learning";
    pub const HARNESS: &str = "atelier.harness";
    pub const ORCHESTRATION: &str = "atelier.orchestration";
}

/// Stage names used in span fields and in the payload's agent flow.
pub mod stages {
    pub const PERSONALIZATION: &str = "personalization";
    pub const STYLING: &str = "styling";
    pub const VALIDATION: &str = "validation";
    pub const RECOMMENDATION: &str = "recommendation";
    pub const SUPERVISOR: &str = "supervisor";
    pub const RULE_FILTER: &str = "rule_filter";
}
