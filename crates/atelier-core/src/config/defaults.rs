//! Default values for every config section.

// Storage
pub const DEFAULT_DB_FILENAME: &str = "atelier.db";
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

// Catalog
pub const DEFAULT_SEARCH_GENDER: &str = "women";
pub const DEFAULT_SEARCH_CATEGORY: &str = "clothing";
pub const DEFAULT_SEARCH_LIMIT: usize = 6;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOCAL_FALLBACK_LIMIT: usize = 30;

// Styling
pub const DEFAULT_SAMPLE_SIZE: usize = 250;
pub const MIN_SAMPLE_SIZE: usize = 200;
pub const MAX_SAMPLE_SIZE: usize = 300;
pub const DEFAULT_PRODUCT_IMAGE_PATTERN: &str = r"6_\d+_1\.jpg$";
pub const DEFAULT_SCORE_MIN: u32 = 70;
pub const DEFAULT_SCORE_MAX: u32 = 100;
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;
pub const DEFAULT_LOOKS_PER_REQUEST: usize = 3;

// Learning
pub const DEFAULT_FEEDBACK_WINDOW: usize = 50;
pub const DEFAULT_LEARNING_LOG_WINDOW: usize = 10;
pub const DEFAULT_COLOR_AFFINITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MOST_LIKED_OCCASIONS: usize = 3;

// Harness
pub const DEFAULT_SUCCESS_THRESHOLD: u32 = 70;
pub const DEFAULT_DIVERSITY_SCORE: u32 = 85;
pub const DEFAULT_OCCASION_FALLBACK: u32 = 60;
pub const DEFAULT_MOOD_FALLBACK: u32 = 70;
