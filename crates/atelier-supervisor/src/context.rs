use atelier_core::constants::{cache_keys, DEFAULT_EVENT, DEFAULT_MOOD};
use atelier_core::models::{BodyShape, StyleAnalysis};
use atelier_core::traits::{ILocalCache, LocalCacheExt};

/// Ambient request state the reviews read: the current event and mood, and
/// the cached body-shape analysis when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorContext {
    pub event: String,
    pub mood: String,
    /// `None` skips the body-shape review.
    pub body_shape: Option<BodyShape>,
}

impl Default for SupervisorContext {
    fn default() -> Self {
        Self {
            event: DEFAULT_EVENT.to_string(),
            mood: DEFAULT_MOOD.to_string(),
            body_shape: None,
        }
    }
}

impl SupervisorContext {
    pub fn new(event: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            event: event.into().to_lowercase(),
            mood: mood.into().to_lowercase(),
            body_shape: None,
        }
    }

    pub fn with_body_shape(mut self, shape: BodyShape) -> Self {
        self.body_shape = Some(shape);
        self
    }

    /// Read event, mood and shape analysis from the fast cache.
    /// An analysis without a recognizable shape falls back to `H`.
    pub fn from_cache(cache: &dyn ILocalCache) -> Self {
        let event = cache
            .get_label(cache_keys::CURRENT_EVENT)
            .unwrap_or_else(|| DEFAULT_EVENT.to_string());
        let mood = cache
            .get_label(cache_keys::CURRENT_MOOD)
            .unwrap_or_else(|| DEFAULT_MOOD.to_string());
        let body_shape = cache
            .get_json::<StyleAnalysis>(cache_keys::STYLE_ANALYSIS)
            .map(|analysis| {
                analysis
                    .body_shape
                    .as_deref()
                    .and_then(BodyShape::parse)
                    .unwrap_or_default()
            });
        Self {
            event,
            mood,
            body_shape,
        }
    }
}
