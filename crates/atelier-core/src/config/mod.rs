pub mod catalog_config;
pub mod defaults;
pub mod harness_config;
pub mod learning_config;
pub mod storage_config;
pub mod styling_config;

pub use catalog_config::CatalogConfig;
pub use harness_config::{DimensionWeights, HarnessConfig};
pub use learning_config::LearningConfig;
pub use storage_config::StorageConfig;
pub use styling_config::StylingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AtelierResult, ConfigError};
use crate::rules::RuleTables;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtelierConfig {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub styling: StylingConfig,
    pub learning: LearningConfig,
    pub harness: HarnessConfig,
    pub rules: RuleTables,
}

impl AtelierConfig {
    /// Parse a TOML document, then validate it.
    pub fn from_toml(source: &str) -> AtelierResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.styling.score_min >= self.styling.score_max {
            return Err(ConfigError::InvalidValue {
                field: "styling.score_min".into(),
                reason: format!(
                    "must be below score_max ({} >= {})",
                    self.styling.score_min, self.styling.score_max
                ),
            });
        }
        if self.styling.product_image_pattern.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "styling.product_image_pattern".into(),
                reason: "must not be empty".into(),
            });
        }
        let total = self.harness.weights.total();
        if (total - 1.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidValue {
                field: "harness.weights".into(),
                reason: format!("weights must sum to 1.0, got {total}"),
            });
        }
        if !(0.0..=1.0).contains(&self.learning.color_affinity_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "learning.color_affinity_threshold".into(),
                reason: "must be within 0.0..=1.0".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AtelierConfig::from_toml("").unwrap();
        assert_eq!(config.styling.sample_size, 250);
        assert_eq!(config.harness.success_threshold, 70);
        assert_eq!(config.catalog.gender, "women");
    }

    #[test]
    fn rule_tables_can_be_overridden() {
        let config = AtelierConfig::from_toml(
            r#"
            [rules.classifier]
            exclusions = ["Belt"]
            "#,
        )
        .unwrap();
        assert!(config.rules.classifier.exclusions.matches("leather belt"));
        assert!(!config.rules.classifier.exclusions.matches("leather bag"));
        // untouched tables keep their defaults
        assert!(!config.rules.classifier.top.is_empty());
    }

    #[test]
    fn rejects_weights_that_do_not_sum_to_one() {
        let err = AtelierConfig::from_toml(
            r#"
            [harness.weights]
            body_shape = 0.9
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("harness.weights"));
    }

    #[test]
    fn sample_size_is_clamped() {
        let mut config = StylingConfig::default();
        config.sample_size = 5_000;
        assert_eq!(config.effective_sample_size(), 300);
        config.sample_size = 10;
        assert_eq!(config.effective_sample_size(), 200);
    }
}
