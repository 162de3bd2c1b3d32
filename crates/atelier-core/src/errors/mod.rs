mod atelier_error;
mod catalog_error;
mod config_error;
mod harness_error;
mod learning_error;
mod stage_error;
mod store_error;

pub use atelier_error::{AtelierError, AtelierResult};
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use harness_error::HarnessError;
pub use learning_error::LearningError;
pub use stage_error::StageError;
pub use store_error::StoreError;
