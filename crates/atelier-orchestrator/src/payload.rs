//! The aggregated generation payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::models::{
    CompatibilityReport, DegradationEvent, GenerationContext, LearningSummary, Look,
};

/// One stage's outcome within a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageStatus {
    pub stage: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFlow {
    pub stages: Vec<StageStatus>,
    pub degradations: Vec<DegradationEvent>,
}

impl AgentFlow {
    pub(crate) fn push(&mut self, stage: &str, success: bool, error: Option<String>) {
        self.stages.push(StageStatus {
            stage: stage.to_string(),
            success,
            error,
        });
    }

    pub fn stage(&self, name: &str) -> Option<&StageStatus> {
        self.stages.iter().find(|s| s.stage == name)
    }
}

/// Supervisor verdict without the looks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorSummary {
    pub feedback: Vec<String>,
    pub improvements: Vec<String>,
    pub duplicates_removed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPayload {
    pub looks: Vec<Look>,
    pub reasoning: String,
    pub recommendations: Vec<String>,
    pub validation: Option<CompatibilityReport>,
    pub timestamp: DateTime<Utc>,
    pub agent_flow: AgentFlow,
    pub generation_context: GenerationContext,
    pub supervisor: SupervisorSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning: Option<LearningSummary>,
}
