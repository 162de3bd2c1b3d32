//! State carried across generation calls.

use atelier_core::models::{DegradationEvent, UsedItems};
use atelier_observability::DegradationTracker;

/// Owned by the caller and lent to each [`Orchestrator::generate`] call.
///
/// `used` holds the items of looks returned by earlier passes, so later passes
/// avoid repeating them. The degradation tracker is reset at the start of
/// every pass.
///
/// [`Orchestrator::generate`]: crate::Orchestrator::generate
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    pub used: UsedItems,
    pub degradations: DegradationTracker,
    /// Completed passes.
    pub runs: u64,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every item handed out so far.
    pub fn reset_used(&mut self) {
        self.used.clear();
    }

    pub(crate) fn begin_run(&mut self, force_refresh: bool) {
        self.degradations.clear();
        if force_refresh {
            self.used.clear();
        }
    }

    pub(crate) fn degrade(
        &mut self,
        component: &str,
        failure: impl Into<String>,
        fallback: impl Into<String>,
    ) {
        self.degradations
            .record(DegradationEvent::now(component, failure, fallback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_run_keeps_used_items_unless_refreshing() {
        let mut state = PipelineState::new();
        state.used.mark(["a", "b"]);
        state.degrade("validation", "failed", "no validation");

        state.begin_run(false);
        assert_eq!(state.used.len(), 2);
        assert!(state.degradations.is_empty());

        state.begin_run(true);
        assert!(state.used.is_empty());
    }
}
