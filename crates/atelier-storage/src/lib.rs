//! # atelier-storage
//!
//! SQLite-backed structured record store and the moka-backed fast local cache.

pub mod cache;
pub mod engine;
pub mod pool;
pub mod queries;
pub mod schema;

pub use cache::{CacheStats, MokaLocalCache};
pub use engine::SqliteRecordStore;

use atelier_core::errors::{AtelierError, StoreError};

/// Helper to convert a message into an `AtelierError::Store`.
pub fn to_store_err(message: String) -> AtelierError {
    StoreError::SqliteError { message }.into()
}

/// Timestamp format used in every `*_at` column: fixed-width, lexically sortable.
pub(crate) fn ts(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
