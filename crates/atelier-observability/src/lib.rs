//! # atelier-observability
//!
//! Tracing setup, span macros, structured log events, and the degradation
//! tracker carried through each pipeline run.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::DegradationTracker;
pub use tracing_setup::{init_tracing, init_tracing_with, LogFormat};
