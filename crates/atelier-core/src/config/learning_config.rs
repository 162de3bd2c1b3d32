use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning feedback loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Most recent feedback rows read per analysis.
    pub feedback_window: usize,
    /// Most recent learning-log rows read per analysis.
    pub learning_log_window: usize,
    /// Colors with affinity strictly above this become preferred colors.
    pub color_affinity_threshold: f64,
    pub most_liked_occasions: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            feedback_window: defaults::DEFAULT_FEEDBACK_WINDOW,
            learning_log_window: defaults::DEFAULT_LEARNING_LOG_WINDOW,
            color_affinity_threshold: defaults::DEFAULT_COLOR_AFFINITY_THRESHOLD,
            most_liked_occasions: defaults::DEFAULT_MOST_LIKED_OCCASIONS,
        }
    }
}
