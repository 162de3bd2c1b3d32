//! # atelier-stages
//!
//! The four sequential pipeline stages ahead of the supervisor. Each stage
//! returns a [`StageResult`](atelier_core::StageResult); errors never escape
//! a stage boundary.

pub mod personalization;
pub mod recommendation;
pub mod styling;
pub mod validation;

pub use personalization::PersonalizationStage;
pub use recommendation::RecommendationStage;
pub use styling::StylingStage;
pub use validation::ValidationStage;
