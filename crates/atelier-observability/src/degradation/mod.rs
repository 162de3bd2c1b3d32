//! Degradation tracking: every fallback path taken during a run.

mod tracker;

pub use tracker::DegradationTracker;
