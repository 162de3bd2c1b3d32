//! Fallback paths taken during one pipeline run, in the order they happened.

use atelier_core::models::DegradationEvent;

#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<DegradationEvent>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the event and keep it for the run's payload.
    pub fn record(&mut self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        self.events.push(event);
    }

    pub fn record_all(&mut self, events: impl IntoIterator<Item = DegradationEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn events(&self) -> &[DegradationEvent] {
        &self.events
    }

    /// Components that degraded, first occurrence order, no repeats.
    pub fn components(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for event in &self.events {
            if !seen.contains(&event.component.as_str()) {
                seen.push(event.component.as_str());
            }
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_dedupes_components() {
        let mut tracker = DegradationTracker::new();
        tracker.record(DegradationEvent::now("styling.images", "no best image", "placeholder"));
        tracker.record(DegradationEvent::now("validation", "timeout", "no validation report"));
        tracker.record(DegradationEvent::now("styling.images", "no best image", "placeholder"));
        assert_eq!(tracker.events().len(), 3);
        assert_eq!(tracker.components(), vec!["styling.images", "validation"]);

        tracker.clear();
        assert!(tracker.is_empty());
    }

    #[test]
    fn serializes_camel_case() {
        let mut tracker = DegradationTracker::new();
        tracker.record(DegradationEvent::now("catalog.search", "empty", "local store"));
        let json = serde_json::to_value(&tracker.events()[0]).unwrap();
        assert_eq!(json["component"], "catalog.search");
        assert_eq!(json["fallbackUsed"], "local store");
    }
}
