/// Atelier system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version tag stamped on every harness metrics record.
pub const HARNESS_VERSION: &str = "v2.0";

/// Image reference used when no display image can be resolved.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Minimum number of items a look must keep to be returned.
pub const MIN_LOOK_ITEMS: usize = 2;

/// Maximum number of items in one look (top, bottom, shoes).
pub const MAX_LOOK_ITEMS: usize = 3;

/// Separator between item ids in a liked-combination key.
pub const COMBINATION_SEPARATOR: char = '|';

/// Fallback event when none is cached.
pub const DEFAULT_EVENT: &str = "casual";

/// Fallback mood when none is cached.
pub const DEFAULT_MOOD: &str = "elegant";

/// Fast-cache keys.
pub mod cache_keys {
    pub const CURRENT_MOOD: &str = "current-mood";
    pub const CURRENT_EVENT: &str = "current-event";
    pub const STYLE_ANALYSIS: &str = "style-analysis";

    pub fn personalized_weights(user_id: &str) -> String {
        format!("personalized-weights-{user_id}")
    }

    pub fn color_affinity(user_id: &str) -> String {
        format!("color-affinity-{user_id}")
    }

    pub fn item_compatibility(user_id: &str) -> String {
        format!("item-compatibility-{user_id}")
    }

    pub fn learning_config(user_id: &str) -> String {
        format!("agent-learning-config-{user_id}")
    }
}
