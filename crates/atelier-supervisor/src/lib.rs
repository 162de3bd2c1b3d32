//! # atelier-supervisor
//!
//! Final quality-control pass over the candidate looks: removes items repeated
//! across looks, runs advisory occasion, shoe, color and body-shape reviews,
//! rewrites descriptions, and scores each surviving look.

pub mod context;
pub mod dedup;
pub mod engine;
pub mod presentation;
pub mod reviews;

pub use context::SupervisorContext;
pub use dedup::{remove_duplicate_items, DedupOutcome};
pub use engine::SupervisorEngine;
pub use presentation::{describe, quality_score};
pub use reviews::ReviewNotes;
