//! # atelier-core
//!
//! Foundation crate for the atelier outfit-recommendation pipeline.
//! Defines all types, traits, errors, config, rule tables, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod rules;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AtelierConfig;
pub use errors::{AtelierError, AtelierResult};
pub use models::{
    CatalogItem, Category, GenerationContext, ImageSet, Look, Outfit, OutfitSeed, StageResult,
};
pub use rules::{KeywordSet, RuleTables};
