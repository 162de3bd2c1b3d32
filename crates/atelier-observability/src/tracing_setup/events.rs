//! Structured log events for key pipeline operations.

/// Log a stage completion.
pub fn stage_completed(stage: &str, user_id: &str, success: bool) {
    tracing::info!(
        event = "stage_completed",
        stage = %stage,
        user_id = %user_id,
        success,
        "stage completed"
    );
}

/// Log a supervisor review summary.
pub fn review_completed(approved: usize, duplicates_removed: usize) {
    tracing::info!(
        event = "review_completed",
        approved,
        duplicates_removed,
        "supervisor review completed"
    );
}

/// Log looks dropped by the active rule set.
pub fn looks_filtered(user_id: &str, before: usize, after: usize) {
    tracing::info!(
        event = "looks_filtered",
        user_id = %user_id,
        before,
        after,
        "active rule set applied"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log persisted learning output.
pub fn learning_applied(user_id: &str, weights: usize, disliked: usize) {
    tracing::info!(
        event = "learning_applied",
        user_id = %user_id,
        weights,
        disliked,
        "learning applied"
    );
}

/// Log one scored harness test case.
pub fn case_scored(test_case: &str, overall_quality: u32, success: bool) {
    tracing::info!(
        event = "case_scored",
        test_case = %test_case,
        overall_quality,
        success,
        "harness case scored"
    );
}
