//! # atelier-harness
//!
//! Offline validation of outfit generation: a parameterized scenario matrix,
//! seven scoring dimensions aggregated into `overallQuality`, persisted run
//! rows, run statistics, and manual ratings.

pub mod generator;
pub mod matrix;
pub mod runner;
pub mod scoring;

pub use generator::{IOutfitGenerator, LiveStylingGenerator, ScenarioGenerator};
pub use matrix::default_test_cases;
pub use runner::{HarnessRun, HarnessRunner};
pub use scoring::score_outfit;
