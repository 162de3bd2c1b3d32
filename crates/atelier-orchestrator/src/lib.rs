//! # atelier-orchestrator
//!
//! Runs personalization, styling, validation, recommendation, the active
//! rule-set filter and the supervisor in sequence, and assembles the
//! generation payload. [`AtelierRuntime`] wires every engine from config.

pub mod cli;
pub mod orchestrator;
pub mod payload;
pub mod runtime;
pub mod state;

pub use orchestrator::{Orchestrator, PipelineStages};
pub use payload::{AgentFlow, GenerationPayload, StageStatus, SupervisorSummary};
pub use runtime::{AtelierRuntime, RuntimeOptions};
pub use state::PipelineState;
