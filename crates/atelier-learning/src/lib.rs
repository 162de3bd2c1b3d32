//! # atelier-learning
//!
//! The learning feedback loop: analyze a user's feedback history into a
//! [`FeedbackPattern`](atelier_core::models::FeedbackPattern), derive
//! [`LearningInsights`](atelier_core::models::LearningInsights), persist them
//! with a new active rule set, and mirror both into the fast cache.
//! [`RuleFilter`] applies the active rule set to candidate looks.

pub mod analysis;
pub mod engine;
pub mod insights;
pub mod rule_filter;

pub use engine::{AgentLearningConfig, FeedbackLearningEngine};
pub use insights::generate_insights;
pub use rule_filter::{FilterOutcome, RuleFilter};
