use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::learning::LearningInsights;

/// Per-request generation parameters. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    pub user_id: String,
    #[serde(default)]
    pub force_refresh: bool,
    /// Seeds every random choice in the pass when set.
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default)]
    pub exclude_items: Vec<String>,
    #[serde(default)]
    pub preferred_items: Vec<String>,
    #[serde(default)]
    pub learning_insights: Option<LearningInsights>,
    #[serde(default)]
    pub attempt: Option<u32>,
}

impl GenerationContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_excluded(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude_items.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_preferred(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.preferred_items.extend(ids.into_iter().map(Into::into));
        self
    }
}

/// Item ids already handed out during the current generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedItems {
    ids: HashSet<String>,
}

impl UsedItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn mark<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.ids.extend(ids.into_iter().map(String::from));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
