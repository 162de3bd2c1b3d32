use super::{CatalogError, ConfigError, HarnessError, LearningError, StageError, StoreError};

/// Top-level error for every atelier crate.
#[derive(Debug, thiserror::Error)]
pub enum AtelierError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Stage(#[from] StageError),

    #[error("learning error: {0}")]
    Learning(#[from] LearningError),

    #[error("harness error: {0}")]
    Harness(#[from] HarnessError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AtelierResult<T> = Result<T, AtelierError>;
